//! Member database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the members table
#[derive(Debug, Clone, FromRow)]
pub struct MemberModel {
    pub id: i64,
    pub email: String,
    pub nickname: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
