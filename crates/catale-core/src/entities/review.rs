//! Review entity - a member's rating and comment on a cocktail

use chrono::{DateTime, Utc};

use crate::error::DomainError;

/// Review entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    pub id: i64,
    pub cocktail_id: i64,
    pub member_id: i64,
    pub rating: i32,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Data required to create a review
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReview {
    pub cocktail_id: i64,
    pub member_id: i64,
    pub rating: i32,
    pub content: String,
}

impl NewReview {
    pub const MIN_RATING: i32 = 1;
    pub const MAX_RATING: i32 = 5;
    pub const MAX_CONTENT_LENGTH: usize = 1000;

    /// Create a validated NewReview
    pub fn new(
        cocktail_id: i64,
        member_id: i64,
        rating: i32,
        content: impl Into<String>,
    ) -> Result<Self, DomainError> {
        if !(Self::MIN_RATING..=Self::MAX_RATING).contains(&rating) {
            return Err(DomainError::RatingOutOfRange {
                min: Self::MIN_RATING,
                max: Self::MAX_RATING,
            });
        }

        let content = content.into();
        if content.chars().count() > Self::MAX_CONTENT_LENGTH {
            return Err(DomainError::ContentTooLong {
                max: Self::MAX_CONTENT_LENGTH,
            });
        }

        Ok(Self {
            cocktail_id,
            member_id,
            rating,
            content,
        })
    }
}
