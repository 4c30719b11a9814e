//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

// ============================================================================
// Auth Responses
// ============================================================================

/// Authentication response with tokens
#[derive(Debug, Serialize, ToSchema)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub member: MemberResponse,
}

// ============================================================================
// Member Responses
// ============================================================================

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MemberResponse {
    pub id: i64,
    pub email: String,
    pub nickname: String,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Cocktail Responses
// ============================================================================

/// A cocktail as seen by the requesting member
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CocktailResponse {
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
    pub like_count: i64,
    /// Whether the requesting member likes this cocktail
    pub is_liked: bool,
}

/// Cocktail with its reviews
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CocktailDetailResponse {
    pub cocktail: CocktailResponse,
    /// Newest first; empty when nobody has reviewed it yet
    pub reviews: Vec<ReviewResponse>,
}

/// Result of flipping a like
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct LikeToggleResponse {
    pub cocktail_id: i64,
    pub liked: bool,
}

// ============================================================================
// Review Responses
// ============================================================================

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ReviewResponse {
    pub id: i64,
    pub cocktail_id: i64,
    pub member_id: i64,
    pub rating: i32,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Diary Responses
// ============================================================================

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DiaryResponse {
    pub id: i64,
    pub cocktail_id: i64,
    pub mood: i32,
    pub comment: String,
    pub reason: String,
    pub year: i32,
    pub month: i32,
    pub emotion1: i32,
    pub emotion2: i32,
    pub emotion3: i32,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Per-dependency health
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
