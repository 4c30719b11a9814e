//! Request DTOs for API endpoints
//!
//! Bodies implement `Deserialize` and `Validate`; the API layer rejects
//! invalid input before a service is called.

use catale_core::value_objects::EmotionVector;
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

// ============================================================================
// Auth Requests
// ============================================================================

/// Member registration request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, max = 20, message = "Nickname must be 1-20 characters"))]
    pub nickname: String,

    #[validate(length(min = 8, max = 72, message = "Password must be 8-72 characters"))]
    pub password: String,
}

/// Member login request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Token refresh request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct RefreshTokenRequest {
    #[validate(length(min = 1, message = "Refresh token is required"))]
    pub refresh_token: String,
}

// ============================================================================
// Cocktail Requests
// ============================================================================

/// Target emotions for the cocktail of the day
///
/// Coordinates are plain integers with no fixed range.
#[derive(Debug, Clone, Copy, Deserialize, Validate, ToSchema)]
pub struct TodayCocktailRequest {
    pub emotion1: i32,
    pub emotion2: i32,
    pub emotion3: i32,
}

impl TodayCocktailRequest {
    pub fn target(&self) -> EmotionVector {
        EmotionVector::new(self.emotion1, self.emotion2, self.emotion3)
    }
}

// ============================================================================
// Review Requests
// ============================================================================

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateReviewRequest {
    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating: i32,

    #[validate(length(min = 1, max = 1000, message = "Review must be 1-1000 characters"))]
    pub content: String,
}

// ============================================================================
// Diary Requests
// ============================================================================

/// Diary entry for one cocktail in a given month
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateDiaryRequest {
    pub cocktail_id: i64,

    #[validate(range(min = 1, max = 5, message = "Mood must be between 1 and 5"))]
    pub mood: i32,

    #[validate(length(max = 2000, message = "Comment must be at most 2000 characters"))]
    pub comment: String,

    #[validate(length(max = 2000, message = "Reason must be at most 2000 characters"))]
    pub reason: String,

    #[validate(range(min = 1970, max = 9999, message = "Year is out of range"))]
    pub year: i32,

    #[validate(range(min = 1, max = 12, message = "Month must be between 1 and 12"))]
    pub month: i32,

    pub emotion1: i32,
    pub emotion2: i32,
    pub emotion3: i32,
}

impl CreateDiaryRequest {
    pub fn emotion(&self) -> EmotionVector {
        EmotionVector::new(self.emotion1, self.emotion2, self.emotion3)
    }
}

/// `?year=&month=` filter for the diary listing
#[derive(Debug, Clone, Copy, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DiaryMonthQuery {
    pub year: i32,
    /// 1-12
    pub month: i32,
}
