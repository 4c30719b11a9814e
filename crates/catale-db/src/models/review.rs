//! Review database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct ReviewModel {
    pub id: i64,
    pub cocktail_id: i64,
    pub member_id: i64,
    pub rating: i32,
    pub content: String,
    pub created_at: DateTime<Utc>,
}
