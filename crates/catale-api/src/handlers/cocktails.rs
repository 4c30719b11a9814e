//! Cocktail handlers
//!
//! Catalog listing, liked list, detail, like toggle and cocktail of the day.
//! Every route is viewed as the authenticated member, whose likes drive the
//! `is_liked` flags.

use axum::{extract::State, Json};
use catale_service::dto::{
    CocktailDetailResponse, CocktailResponse, LikeToggleResponse, TodayCocktailRequest,
};
use catale_service::CocktailService;

use crate::extractors::{AuthMember, IdPath, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// All cocktails, most liked first
#[utoipa::path(
    get,
    path = "/api/v1/cocktails",
    tag = "cocktails",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Catalog ordered by like count", body = [CocktailResponse]),
        (status = 401, description = "Missing or invalid token")
    )
)]
pub async fn list_cocktails(
    State(state): State<AppState>,
    auth: AuthMember,
) -> ApiResult<Json<Vec<CocktailResponse>>> {
    let service = CocktailService::new(state.service_context());
    let cocktails = service.get_all_cocktails(auth.member_id).await?;
    Ok(Json(cocktails))
}

/// Cocktails the member has liked
#[utoipa::path(
    get,
    path = "/api/v1/cocktails/liked",
    tag = "cocktails",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Liked cocktails, most recent first", body = [CocktailResponse]),
        (status = 401, description = "Missing or invalid token")
    )
)]
pub async fn list_liked_cocktails(
    State(state): State<AppState>,
    auth: AuthMember,
) -> ApiResult<Json<Vec<CocktailResponse>>> {
    let service = CocktailService::new(state.service_context());
    let cocktails = service.get_liked_cocktails(auth.member_id).await?;
    Ok(Json(cocktails))
}

/// Cocktail with its reviews
#[utoipa::path(
    get,
    path = "/api/v1/cocktails/{id}",
    tag = "cocktails",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Cocktail id")),
    responses(
        (status = 200, description = "Cocktail detail", body = CocktailDetailResponse),
        (status = 404, description = "Unknown cocktail")
    )
)]
pub async fn get_cocktail(
    State(state): State<AppState>,
    auth: AuthMember,
    IdPath(cocktail_id): IdPath<i64>,
) -> ApiResult<Json<CocktailDetailResponse>> {
    let service = CocktailService::new(state.service_context());
    let detail = service
        .get_cocktail_detail(auth.member_id, cocktail_id)
        .await?;
    Ok(Json(detail))
}

/// Like the cocktail, or remove an existing like
#[utoipa::path(
    post,
    path = "/api/v1/cocktails/{id}/like",
    tag = "cocktails",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Cocktail id")),
    responses(
        (status = 200, description = "New like state", body = LikeToggleResponse),
        (status = 404, description = "Unknown member or cocktail")
    )
)]
pub async fn toggle_like(
    State(state): State<AppState>,
    auth: AuthMember,
    IdPath(cocktail_id): IdPath<i64>,
) -> ApiResult<Json<LikeToggleResponse>> {
    let service = CocktailService::new(state.service_context());
    let toggled = service.toggle_like(auth.member_id, cocktail_id).await?;
    Ok(Json(toggled))
}

/// Cocktail closest to the given emotions
#[utoipa::path(
    post,
    path = "/api/v1/cocktails/today",
    tag = "cocktails",
    security(("bearer_auth" = [])),
    request_body = TodayCocktailRequest,
    responses(
        (status = 200, description = "Picked cocktail", body = CocktailResponse),
        (status = 400, description = "Catalog is empty")
    )
)]
pub async fn today_cocktail(
    State(state): State<AppState>,
    auth: AuthMember,
    ValidatedJson(request): ValidatedJson<TodayCocktailRequest>,
) -> ApiResult<Json<CocktailResponse>> {
    let service = CocktailService::new(state.service_context());
    let cocktail = service.get_today_cocktail(auth.member_id, request).await?;
    Ok(Json(cocktail))
}
