//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Cocktail not found: {0}")]
    CocktailNotFound(i64),

    #[error("Member not found: {0}")]
    MemberNotFound(i64),

    #[error("Diary not found: {0}")]
    DiaryNotFound(i64),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("No candidate cocktails to match against")]
    EmptyCandidates,

    #[error("Rating must be between {min} and {max}")]
    RatingOutOfRange { min: i32, max: i32 },

    #[error("Invalid month: {0}")]
    InvalidMonth(i32),

    #[error("Content too long: max {max} characters")]
    ContentTooLong { max: usize },

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Email already in use")]
    EmailAlreadyExists,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::CocktailNotFound(_) => "UNKNOWN_COCKTAIL",
            Self::MemberNotFound(_) => "UNKNOWN_MEMBER",
            Self::DiaryNotFound(_) => "UNKNOWN_DIARY",

            // Validation
            Self::EmptyCandidates => "INVALID_ARGUMENT",
            Self::RatingOutOfRange { .. } => "RATING_OUT_OF_RANGE",
            Self::InvalidMonth(_) => "INVALID_MONTH",
            Self::ContentTooLong { .. } => "CONTENT_TOO_LONG",

            // Conflict
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::CocktailNotFound(_) | Self::MemberNotFound(_) | Self::DiaryNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::EmptyCandidates
                | Self::RatingOutOfRange { .. }
                | Self::InvalidMonth(_)
                | Self::ContentTooLong { .. }
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::EmailAlreadyExists)
    }
}
