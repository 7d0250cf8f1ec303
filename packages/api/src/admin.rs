//! Administrator endpoints: dashboard stats, the moderation queues, user
//! management, and the contact-message inbox. The backend enforces the
//! admin role on every one of these; the client additionally guards the
//! admin routes so they are never reached without it.

use serde::Serialize;
use session::{AccountStatus, Identity};

use crate::client::Client;
use crate::error::ApiError;
use crate::models::{
    AccountStatusEnvelope, AdminStats, AdminUserUpdate, ContactMessage, MessageEnvelope,
    MessageList, MessageStatus, Resource, ResourceList, StatsEnvelope, UserEnvelope, UserList,
};

#[derive(Serialize)]
struct RejectRequest {
    reason: String,
}

#[derive(Serialize)]
struct StatusUpdate {
    status: MessageStatus,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ResetPasswordRequest {
    new_password: String,
}

impl Client {
    /// `GET /admin/stats`
    pub async fn admin_stats(&self) -> Result<AdminStats, ApiError> {
        let envelope: StatsEnvelope = self.get_json("/admin/stats").await?;
        Ok(envelope.stats)
    }

    /// `GET /admin/resources/pending`
    pub async fn pending_resources(&self) -> Result<Vec<Resource>, ApiError> {
        let list: ResourceList = self.get_json("/admin/resources/pending").await?;
        Ok(list.resources)
    }

    /// `GET /admin/resources/approved`
    pub async fn approved_resources(&self) -> Result<Vec<Resource>, ApiError> {
        let list: ResourceList = self.get_json("/admin/resources/approved").await?;
        Ok(list.resources)
    }

    /// `GET /admin/resources/rejected`
    pub async fn rejected_resources(&self) -> Result<Vec<Resource>, ApiError> {
        let list: ResourceList = self.get_json("/admin/resources/rejected").await?;
        Ok(list.resources)
    }

    /// `PUT /admin/resources/{id}/approve`
    pub async fn approve_resource(&self, resource_id: &str) -> Result<(), ApiError> {
        self.put_empty_ack(&format!("/admin/resources/{resource_id}/approve"))
            .await
    }

    /// `PUT /admin/resources/{id}/reject` — a reason is required.
    pub async fn reject_resource(&self, resource_id: &str, reason: String) -> Result<(), ApiError> {
        self.put_json_ack(
            &format!("/admin/resources/{resource_id}/reject"),
            &RejectRequest { reason },
        )
        .await
    }

    /// `DELETE /admin/resources/{id}`
    pub async fn delete_resource(&self, resource_id: &str) -> Result<(), ApiError> {
        self.delete_ack(&format!("/admin/resources/{resource_id}"))
            .await
    }

    /// `GET /admin/users`
    pub async fn users(&self) -> Result<Vec<Identity>, ApiError> {
        let list: UserList = self.get_json("/admin/users").await?;
        Ok(list.users)
    }

    /// `GET /admin/users/{id}`
    pub async fn user(&self, user_id: &str) -> Result<Identity, ApiError> {
        let envelope: UserEnvelope = self.get_json(&format!("/admin/users/{user_id}")).await?;
        Ok(envelope.user)
    }

    /// `PUT /admin/users/{id}` — returns the updated record.
    pub async fn update_user(
        &self,
        user_id: &str,
        update: &AdminUserUpdate,
    ) -> Result<Identity, ApiError> {
        let envelope: UserEnvelope = self
            .put_json(&format!("/admin/users/{user_id}"), update)
            .await?;
        Ok(envelope.user)
    }

    /// `DELETE /admin/users/{id}` — also removes the user's uploads.
    pub async fn delete_user(&self, user_id: &str) -> Result<(), ApiError> {
        self.delete_ack(&format!("/admin/users/{user_id}")).await
    }

    /// `PUT /admin/users/{id}/reset-password`
    pub async fn reset_user_password(
        &self,
        user_id: &str,
        new_password: String,
    ) -> Result<(), ApiError> {
        self.put_json_ack(
            &format!("/admin/users/{user_id}/reset-password"),
            &ResetPasswordRequest { new_password },
        )
        .await
    }

    /// `PUT /admin/users/{id}/toggle-status` — flips active/suspended and
    /// returns the resulting status.
    pub async fn toggle_user_status(&self, user_id: &str) -> Result<AccountStatus, ApiError> {
        let envelope: AccountStatusEnvelope = self
            .put_empty(&format!("/admin/users/{user_id}/toggle-status"))
            .await?;
        Ok(envelope.account_status)
    }

    /// `GET /admin/contact-messages`
    pub async fn contact_messages(&self) -> Result<Vec<ContactMessage>, ApiError> {
        let list: MessageList = self.get_json("/admin/contact-messages").await?;
        Ok(list.messages)
    }

    /// `GET /admin/contact-messages/{id}`
    pub async fn contact_message(&self, message_id: &str) -> Result<ContactMessage, ApiError> {
        let envelope: MessageEnvelope = self
            .get_json(&format!("/admin/contact-messages/{message_id}"))
            .await?;
        Ok(envelope.message)
    }

    /// `PUT /admin/contact-messages/{id}/status`
    pub async fn set_message_status(
        &self,
        message_id: &str,
        status: MessageStatus,
    ) -> Result<(), ApiError> {
        self.put_json_ack(
            &format!("/admin/contact-messages/{message_id}/status"),
            &StatusUpdate { status },
        )
        .await
    }

    /// `DELETE /admin/contact-messages/{id}`
    pub async fn delete_message(&self, message_id: &str) -> Result<(), ApiError> {
        self.delete_ack(&format!("/admin/contact-messages/{message_id}"))
            .await
    }
}
