//! Member handlers

use axum::{extract::State, Json};
use catale_service::dto::MemberResponse;
use catale_service::MemberService;

use crate::extractors::AuthMember;
use crate::response::ApiResult;
use crate::state::AppState;

/// Current member profile
#[utoipa::path(
    get,
    path = "/api/v1/members/@me",
    tag = "members",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Authenticated member", body = MemberResponse),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Member no longer exists")
    )
)]
pub async fn get_current_member(
    State(state): State<AppState>,
    auth: AuthMember,
) -> ApiResult<Json<MemberResponse>> {
    let service = MemberService::new(state.service_context());
    let member = service.get_current_member(auth.member_id).await?;
    Ok(Json(member))
}
