//! Cocktail database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Row of the `cocktails` table joined with its like count
#[derive(Debug, Clone, FromRow)]
pub struct CocktailModel {
    pub id: i64,
    pub name: String,
    pub image_url: Option<String>,
    pub content: String,
    pub ingredients: String,
    pub alcohol_level: i32,
    pub sweetness: i32,
    pub emotion1: i32,
    pub emotion2: i32,
    pub emotion3: i32,
    /// Aggregated from `likes`, not stored on the row
    pub like_count: i64,
    pub created_at: DateTime<Utc>,
}
