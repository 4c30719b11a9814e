//! Data transfer objects for API requests and responses
//!
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{
    CreateDiaryRequest, CreateReviewRequest, DiaryMonthQuery, LoginRequest, RefreshTokenRequest,
    RegisterRequest, TodayCocktailRequest,
};

pub use responses::{
    AuthResponse, CocktailDetailResponse, CocktailResponse, DiaryResponse, HealthChecks,
    HealthResponse, LikeToggleResponse, MemberResponse, ReadinessResponse, ReviewResponse,
};
