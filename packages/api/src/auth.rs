//! Authentication endpoints.
//!
//! These return the server's payload; establishing or replacing the stored
//! session is the caller's responsibility (the session store owns that
//! lifecycle).

use session::Identity;

use crate::client::Client;
use crate::error::ApiError;
use crate::models::{AuthResponse, LoginRequest, ProfileUpdate, SignupRequest, UserEnvelope};

impl Client {
    /// `POST /auth/login`
    pub async fn login(&self, email: String, password: String) -> Result<AuthResponse, ApiError> {
        self.post_json("/auth/login", &LoginRequest { email, password })
            .await
    }

    /// `POST /auth/signup`
    pub async fn signup(&self, request: &SignupRequest) -> Result<AuthResponse, ApiError> {
        self.post_json("/auth/signup", request).await
    }

    /// `PUT /auth/profile` — returns the server's updated identity record,
    /// which replaces the stored one verbatim.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<Identity, ApiError> {
        let envelope: UserEnvelope = self.put_json("/auth/profile", update).await?;
        Ok(envelope.user)
    }
}
