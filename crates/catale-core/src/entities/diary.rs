//! Diary entity - a member's monthly journal entry tied to a cocktail

use chrono::{DateTime, Utc};

use crate::error::DomainError;
use crate::value_objects::EmotionVector;

/// Diary entity
///
/// Diaries are soft deleted: `deleted_at` is set and the row stays in storage,
/// but every read path filters it out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diary {
    pub id: i64,
    pub member_id: i64,
    pub cocktail_id: i64,
    pub mood: i32,
    pub comment: String,
    pub reason: String,
    pub year: i32,
    pub month: i32,
    pub emotion: EmotionVector,
    pub created_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Diary {
    /// Check if the diary is soft deleted
    #[inline]
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Check if the diary belongs to the given member
    #[inline]
    pub fn is_owned_by(&self, member_id: i64) -> bool {
        self.member_id == member_id
    }
}

/// Data required to create a diary entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDiary {
    pub member_id: i64,
    pub cocktail_id: i64,
    pub mood: i32,
    pub comment: String,
    pub reason: String,
    pub year: i32,
    pub month: i32,
    pub emotion: EmotionVector,
}

impl NewDiary {
    pub const MAX_TEXT_LENGTH: usize = 2000;

    /// Check the month range and text lengths
    pub fn validate(&self) -> Result<(), DomainError> {
        if !(1..=12).contains(&self.month) {
            return Err(DomainError::InvalidMonth(self.month));
        }

        if self.comment.chars().count() > Self::MAX_TEXT_LENGTH
            || self.reason.chars().count() > Self::MAX_TEXT_LENGTH
        {
            return Err(DomainError::ContentTooLong {
                max: Self::MAX_TEXT_LENGTH,
            });
        }

        Ok(())
    }
}
