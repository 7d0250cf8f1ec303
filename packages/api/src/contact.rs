//! Public contact-form submission.

use crate::client::Client;
use crate::error::ApiError;
use crate::models::ContactRequest;

impl Client {
    /// `POST /contact`
    pub async fn send_contact_message(&self, request: &ContactRequest) -> Result<(), ApiError> {
        self.post_json::<serde_json::Value, _>("/contact", request)
            .await?;
        Ok(())
    }
}
