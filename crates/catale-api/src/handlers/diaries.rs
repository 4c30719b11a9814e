//! Diary handlers
//!
//! A member only ever sees their own entries. Someone else's diary id
//! answers 404, the same as an id that never existed.

use axum::{extract::State, Json};
use catale_service::dto::{CreateDiaryRequest, DiaryMonthQuery, DiaryResponse};
use catale_service::DiaryService;

use crate::extractors::{AuthMember, IdPath, QueryParams, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Write a diary entry
#[utoipa::path(
    post,
    path = "/api/v1/diaries",
    tag = "diaries",
    security(("bearer_auth" = [])),
    request_body = CreateDiaryRequest,
    responses(
        (status = 201, description = "Diary created", body = DiaryResponse),
        (status = 400, description = "Invalid input"),
        (status = 404, description = "Unknown cocktail")
    )
)]
pub async fn create_diary(
    State(state): State<AppState>,
    auth: AuthMember,
    ValidatedJson(request): ValidatedJson<CreateDiaryRequest>,
) -> ApiResult<Created<Json<DiaryResponse>>> {
    let service = DiaryService::new(state.service_context());
    let diary = service.create_diary(auth.member_id, request).await?;
    Ok(Created(Json(diary)))
}

/// The member's diaries for one month
#[utoipa::path(
    get,
    path = "/api/v1/diaries",
    tag = "diaries",
    security(("bearer_auth" = [])),
    params(DiaryMonthQuery),
    responses(
        (status = 200, description = "Diaries, oldest first", body = [DiaryResponse]),
        (status = 400, description = "Month outside 1-12")
    )
)]
pub async fn list_diaries(
    State(state): State<AppState>,
    auth: AuthMember,
    QueryParams(query): QueryParams<DiaryMonthQuery>,
) -> ApiResult<Json<Vec<DiaryResponse>>> {
    let service = DiaryService::new(state.service_context());
    let diaries = service
        .list_diaries(auth.member_id, query.year, query.month)
        .await?;
    Ok(Json(diaries))
}

#[utoipa::path(
    get,
    path = "/api/v1/diaries/{id}",
    tag = "diaries",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Diary id")),
    responses(
        (status = 200, description = "Diary", body = DiaryResponse),
        (status = 404, description = "Unknown, deleted or not yours")
    )
)]
pub async fn get_diary(
    State(state): State<AppState>,
    auth: AuthMember,
    IdPath(diary_id): IdPath<i64>,
) -> ApiResult<Json<DiaryResponse>> {
    let service = DiaryService::new(state.service_context());
    let diary = service.get_diary(auth.member_id, diary_id).await?;
    Ok(Json(diary))
}

#[utoipa::path(
    delete,
    path = "/api/v1/diaries/{id}",
    tag = "diaries",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Diary id")),
    responses(
        (status = 204, description = "Diary deleted"),
        (status = 404, description = "Unknown, deleted or not yours")
    )
)]
pub async fn delete_diary(
    State(state): State<AppState>,
    auth: AuthMember,
    IdPath(diary_id): IdPath<i64>,
) -> ApiResult<NoContent> {
    let service = DiaryService::new(state.service_context());
    service.delete_diary(auth.member_id, diary_id).await?;
    Ok(NoContent)
}
