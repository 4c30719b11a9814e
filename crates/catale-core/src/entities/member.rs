//! Member entity - an account of the app

use chrono::{DateTime, Utc};

/// Member entity
///
/// The password hash lives in the member store only and is never carried here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub id: i64,
    pub email: String,
    pub nickname: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a member
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMember {
    pub email: String,
    pub nickname: String,
}

impl NewMember {
    /// Create a new NewMember, normalizing the email to lowercase
    pub fn new(email: impl Into<String>, nickname: impl Into<String>) -> Self {
        Self {
            email: email.into().trim().to_lowercase(),
            nickname: nickname.into().trim().to_string(),
        }
    }
}
