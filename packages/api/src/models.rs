//! Wire models for the CampusShare backend.
//!
//! The backend speaks camelCase JSON with MongoDB-style `_id` fields; list
//! responses arrive wrapped in single-key envelopes which the endpoint
//! modules unwrap before returning.

use serde::{Deserialize, Serialize};
use session::{AccountStatus, Branch, Identity, ProfileVisibility, Role, SocialLinks};

/// Kind of academic document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResourceType {
    Notes,
    Assignment,
    #[serde(rename = "PYQ")]
    Pyq,
    Lab,
}

impl ResourceType {
    pub const ALL: [Self; 4] = [Self::Notes, Self::Assignment, Self::Pyq, Self::Lab];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Notes => "Notes",
            Self::Assignment => "Assignment",
            Self::Pyq => "PYQ",
            Self::Lab => "Lab",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == code)
    }
}

impl std::fmt::Display for ResourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Review lifecycle of an uploaded resource. Set exclusively by
/// administrator action; the client only ever displays it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModerationStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl ModerationStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

/// Uploader reference embedded in a resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Uploader {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
}

/// View-level projection of an uploaded resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub branch: Branch,
    pub semester: u8,
    pub subject: String,
    #[serde(rename = "type")]
    pub kind: ResourceType,
    #[serde(default)]
    pub status: ModerationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
    #[serde(default)]
    pub likes_count: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uploaded_by: Option<Uploader>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Browse filters for `GET /resources`. Unset (or blank) filters are
/// omitted from the query string entirely.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResourceQuery {
    pub branch: Option<Branch>,
    pub semester: Option<u8>,
    pub subject: Option<String>,
    pub kind: Option<ResourceType>,
    pub search: Option<String>,
}

impl ResourceQuery {
    pub fn is_empty(&self) -> bool {
        self.to_query_pairs().is_empty()
    }

    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(branch) = self.branch {
            pairs.push(("branch", branch.as_str().to_string()));
        }
        if let Some(semester) = self.semester {
            pairs.push(("semester", semester.to_string()));
        }
        if let Some(subject) = trimmed(&self.subject) {
            pairs.push(("subject", subject));
        }
        if let Some(kind) = self.kind {
            pairs.push(("type", kind.as_str().to_string()));
        }
        if let Some(search) = trimmed(&self.search) {
            pairs.push(("search", search));
        }
        pairs
    }
}

fn trimmed(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Successful login/signup payload.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: Identity,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub branch: Branch,
    pub semester: u8,
}

/// Self-service profile update (`PUT /auth/profile`). Email and role are
/// not editable through this path.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub name: String,
    pub branch: Branch,
    pub semester: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enrollment_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graduation_year: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub college: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    pub social_links: SocialLinks,
    pub profile_visibility: ProfileVisibility,
}

/// Administrator-side user update (`PUT /admin/users/{id}`): the profile
/// field set plus role and account status.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUserUpdate {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<Branch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub semester: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enrollment_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graduation_year: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub college: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    pub role: Role,
    pub account_status: AccountStatus,
}

/// Metadata and file bytes for a resource upload. Sent as a multipart
/// form, never as JSON.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    pub title: String,
    pub description: String,
    pub branch: Branch,
    pub semester: u8,
    pub subject: String,
    pub kind: ResourceType,
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Server truth after a like toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeResponse {
    pub liked: bool,
    pub likes_count: u64,
}

/// Server truth after a bookmark toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct BookmarkResponse {
    pub bookmarked: bool,
}

/// Dashboard counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminStats {
    #[serde(default)]
    pub total_users: u64,
    #[serde(default)]
    pub total_uploads: u64,
    #[serde(default)]
    pub pending_approvals: u64,
    #[serde(default)]
    pub approved_resources: u64,
    #[serde(default)]
    pub rejected_resources: u64,
}

/// Triage state of a contact-form submission.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageStatus {
    #[default]
    Unread,
    Read,
    Replied,
    Archived,
}

impl MessageStatus {
    pub const ALL: [Self; 4] = [Self::Unread, Self::Read, Self::Replied, Self::Archived];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unread => "unread",
            Self::Read => "read",
            Self::Replied => "replied",
            Self::Archived => "archived",
        }
    }
}

/// A contact-form submission as the admin inbox sees it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub status: MessageStatus,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Outgoing contact-form submission.
#[derive(Debug, Clone, Serialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub category: String,
}

// --- response envelopes, unwrapped by the endpoint modules ---

#[derive(Deserialize)]
pub(crate) struct ResourceList {
    pub resources: Vec<Resource>,
}

#[derive(Deserialize)]
pub(crate) struct BookmarkList {
    pub bookmarks: Vec<Resource>,
}

#[derive(Deserialize)]
pub(crate) struct UserList {
    pub users: Vec<Identity>,
}

#[derive(Deserialize)]
pub(crate) struct UserEnvelope {
    pub user: Identity,
}

#[derive(Deserialize)]
pub(crate) struct StatsEnvelope {
    pub stats: AdminStats,
}

#[derive(Deserialize)]
pub(crate) struct MessageList {
    pub messages: Vec<ContactMessage>,
}

#[derive(Deserialize)]
pub(crate) struct MessageEnvelope {
    pub message: ContactMessage,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AccountStatusEnvelope {
    pub account_status: AccountStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_deserializes_backend_shape() {
        let resource: Resource = serde_json::from_value(serde_json::json!({
            "_id": "r-1",
            "title": "Data Structures Complete Notes",
            "description": "Trees, heaps, graphs",
            "branch": "CSE",
            "semester": 3,
            "subject": "Data Structures",
            "type": "PYQ",
            "status": "approved",
            "likesCount": 4,
            "uploadedBy": { "_id": "u-9", "name": "Ravi" },
            "fileId": "f-17",
            "fileName": "ds-notes.pdf",
            "createdAt": "2025-11-02T10:15:00Z"
        }))
        .unwrap();

        assert_eq!(resource.kind, ResourceType::Pyq);
        assert_eq!(resource.status, ModerationStatus::Approved);
        assert_eq!(resource.likes_count, 4);
        assert_eq!(resource.uploaded_by.unwrap().name, "Ravi");
        assert_eq!(resource.file_id.as_deref(), Some("f-17"));
    }

    #[test]
    fn test_resource_tolerates_missing_optionals() {
        let resource: Resource = serde_json::from_value(serde_json::json!({
            "_id": "r-2",
            "title": "Lab manual",
            "branch": "ECE",
            "semester": 5,
            "subject": "Circuits",
            "type": "Lab"
        }))
        .unwrap();

        assert_eq!(resource.status, ModerationStatus::Pending);
        assert_eq!(resource.likes_count, 0);
        assert!(resource.uploaded_by.is_none());
        assert!(resource.rejection_reason.is_none());
    }

    #[test]
    fn test_query_pairs_skip_unset_and_blank_filters() {
        let query = ResourceQuery::default();
        assert!(query.is_empty());

        let query = ResourceQuery {
            branch: Some(session::Branch::Cse),
            semester: Some(3),
            subject: Some("   ".to_string()),
            kind: Some(ResourceType::Notes),
            search: Some("graphs".to_string()),
        };
        assert_eq!(
            query.to_query_pairs(),
            vec![
                ("branch", "CSE".to_string()),
                ("semester", "3".to_string()),
                ("type", "Notes".to_string()),
                ("search", "graphs".to_string()),
            ]
        );
    }

    #[test]
    fn test_profile_update_omits_unset_fields() {
        let update = ProfileUpdate {
            name: "Asha".to_string(),
            branch: session::Branch::It,
            semester: 6,
            phone: None,
            enrollment_id: None,
            graduation_year: Some(2027),
            college: None,
            bio: None,
            social_links: SocialLinks::default(),
            profile_visibility: ProfileVisibility::Public,
        };
        let value = serde_json::to_value(&update).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object["branch"], "IT");
        assert_eq!(object["graduationYear"], 2027);
        assert!(!object.contains_key("phone"));
        assert!(!object.contains_key("enrollmentId"));
        assert_eq!(object["profileVisibility"], "public");
    }

    #[test]
    fn test_message_status_round_trip() {
        for status in MessageStatus::ALL {
            let encoded = serde_json::to_string(&status).unwrap();
            assert_eq!(encoded, format!("\"{}\"", status.as_str()));
            let decoded: MessageStatus = serde_json::from_str(&encoded).unwrap();
            assert_eq!(decoded, status);
        }
    }
}
