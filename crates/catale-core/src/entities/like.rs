//! Like entity - a member marking a cocktail as liked

use chrono::{DateTime, Utc};

/// Like relation between one member and one cocktail
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Like {
    pub member_id: i64,
    pub cocktail_id: i64,
    pub created_at: DateTime<Utc>,
}

impl Like {
    /// Create a new Like
    pub fn new(member_id: i64, cocktail_id: i64) -> Self {
        Self {
            member_id,
            cocktail_id,
            created_at: Utc::now(),
        }
    }

    /// Check if this like links the given pair
    #[inline]
    pub fn links(&self, member_id: i64, cocktail_id: i64) -> bool {
        self.member_id == member_id && self.cocktail_id == cocktail_id
    }
}
