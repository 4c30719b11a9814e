//! Route definitions
//!
//! API routes are mounted under /api/v1; health and docs sit at the root.

use axum::{
    routing::{get, post},
    Json, Router,
};
use utoipa::OpenApi;

use crate::handlers::{auth, cocktails, diaries, health, members, reviews};
use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Create the API router (rate limited by the caller)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health and documentation routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/api-docs/openapi.json", get(|| async { Json(ApiDoc::openapi()) }))
}

fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(member_routes())
        .merge(cocktail_routes())
        .merge(diary_routes())
}

fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/refresh", post(auth::refresh_token))
}

fn member_routes() -> Router<AppState> {
    Router::new().route("/members/@me", get(members::get_current_member))
}

fn cocktail_routes() -> Router<AppState> {
    Router::new()
        .route("/cocktails", get(cocktails::list_cocktails))
        .route("/cocktails/liked", get(cocktails::list_liked_cocktails))
        .route("/cocktails/today", post(cocktails::today_cocktail))
        .route("/cocktails/:id", get(cocktails::get_cocktail))
        .route("/cocktails/:id/like", post(cocktails::toggle_like))
        // Reviews
        .route(
            "/cocktails/:id/reviews",
            get(reviews::list_reviews).post(reviews::create_review),
        )
}

fn diary_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/diaries",
            post(diaries::create_diary).get(diaries::list_diaries),
        )
        .route(
            "/diaries/:id",
            get(diaries::get_diary).delete(diaries::delete_diary),
        )
}
