//! Review handlers

use axum::{extract::State, Json};
use catale_service::dto::{CreateReviewRequest, ReviewResponse};
use catale_service::ReviewService;

use crate::extractors::{AuthMember, IdPath, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Reviews of a cocktail, newest first
#[utoipa::path(
    get,
    path = "/api/v1/cocktails/{id}/reviews",
    tag = "reviews",
    params(("id" = i64, Path, description = "Cocktail id")),
    responses(
        (status = 200, description = "Reviews", body = [ReviewResponse]),
        (status = 404, description = "Unknown cocktail")
    )
)]
pub async fn list_reviews(
    State(state): State<AppState>,
    IdPath(cocktail_id): IdPath<i64>,
) -> ApiResult<Json<Vec<ReviewResponse>>> {
    let service = ReviewService::new(state.service_context());
    let reviews = service.list_reviews(cocktail_id).await?;
    Ok(Json(reviews))
}

/// Review a cocktail
#[utoipa::path(
    post,
    path = "/api/v1/cocktails/{id}/reviews",
    tag = "reviews",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Cocktail id")),
    request_body = CreateReviewRequest,
    responses(
        (status = 201, description = "Review created", body = ReviewResponse),
        (status = 400, description = "Rating or content out of range"),
        (status = 404, description = "Unknown cocktail")
    )
)]
pub async fn create_review(
    State(state): State<AppState>,
    auth: AuthMember,
    IdPath(cocktail_id): IdPath<i64>,
    ValidatedJson(request): ValidatedJson<CreateReviewRequest>,
) -> ApiResult<Created<Json<ReviewResponse>>> {
    let service = ReviewService::new(state.service_context());
    let review = service
        .create_review(auth.member_id, cocktail_id, request)
        .await?;
    Ok(Created(Json(review)))
}
