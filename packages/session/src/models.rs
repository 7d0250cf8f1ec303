//! Identity and session models.
//!
//! These mirror the backend's user record exactly as it arrives over the
//! wire (camelCase JSON, MongoDB-style `_id`). The client never computes
//! derived identity fields itself; every mutation comes back as a full
//! record in a login/signup/profile-update response.

use serde::{Deserialize, Serialize};

/// Authorization role of an account.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Student,
    Admin,
}

impl Role {
    pub fn is_admin(self) -> bool {
        self == Self::Admin
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Admin => "admin",
        }
    }
}

/// Moderation state of an account, set by administrators.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    #[default]
    Active,
    Suspended,
    Deactivated,
}

impl AccountStatus {
    pub const ALL: [Self; 3] = [Self::Active, Self::Suspended, Self::Deactivated];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Suspended => "suspended",
            Self::Deactivated => "deactivated",
        }
    }
}

/// Who may see a user's profile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileVisibility {
    #[default]
    Public,
    Private,
    Contacts,
}

impl ProfileVisibility {
    pub const ALL: [Self; 3] = [Self::Public, Self::Private, Self::Contacts];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Private => "private",
            Self::Contacts => "contacts",
        }
    }
}

/// Academic branch. The backend stores the short uppercase code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Branch {
    #[serde(rename = "CSE")]
    Cse,
    #[serde(rename = "ECE")]
    Ece,
    #[serde(rename = "EEE")]
    Eee,
    #[serde(rename = "MECH")]
    Mech,
    #[serde(rename = "CIVIL")]
    Civil,
    #[serde(rename = "IT")]
    It,
    #[serde(rename = "OTHER")]
    Other,
}

impl Branch {
    pub const ALL: [Self; 7] = [
        Self::Cse,
        Self::Ece,
        Self::Eee,
        Self::Mech,
        Self::Civil,
        Self::It,
        Self::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cse => "CSE",
            Self::Ece => "ECE",
            Self::Eee => "EEE",
            Self::Mech => "MECH",
            Self::Civil => "CIVIL",
            Self::It => "IT",
            Self::Other => "OTHER",
        }
    }

    /// Parse the wire/form code back into a branch.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.as_str() == code)
    }
}

impl std::fmt::Display for Branch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Optional links shown on a profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
}

/// The authenticated user's profile record as known to the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch: Option<Branch>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub semester: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enrollment_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graduation_year: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub college: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default)]
    pub social_links: SocialLinks,
    #[serde(default)]
    pub profile_visibility: ProfileVisibility,
    /// Ids of resources this user has liked.
    #[serde(default)]
    pub liked_resources: Vec<String>,
    /// Ids of resources this user has bookmarked.
    #[serde(default)]
    pub bookmarks: Vec<String>,
    #[serde(default)]
    pub account_status: AccountStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_active: Option<String>,
}

impl Identity {
    pub fn has_liked(&self, resource_id: &str) -> bool {
        self.liked_resources.iter().any(|id| id == resource_id)
    }

    pub fn has_bookmarked(&self, resource_id: &str) -> bool {
        self.bookmarks.iter().any(|id| id == resource_id)
    }
}

/// The complete persisted session: bearer credential plus last-known identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredSession {
    pub credential: String,
    pub identity: Identity,
}
