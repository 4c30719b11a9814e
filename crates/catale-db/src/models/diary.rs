//! Diary database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the diaries table
#[derive(Debug, Clone, FromRow)]
pub struct DiaryModel {
    pub id: i64,
    pub member_id: i64,
    pub cocktail_id: i64,
    pub mood: i32,
    pub comment: String,
    pub reason: String,
    pub diary_year: i32,
    pub diary_month: i32,
    pub emotion1: i32,
    pub emotion2: i32,
    pub emotion3: i32,
    pub created_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}
