//! API Integration Tests
//!
//! These tests require a running PostgreSQL instance named by `DATABASE_URL`.
//! The server applies migrations itself on start.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{assert_json, assert_status, check_test_env, fixtures::*, TestServer};
use reqwest::StatusCode;

async fn register(server: &TestServer) -> AuthResponse {
    let response = server
        .post("/api/v1/auth/register", &RegisterRequest::unique())
        .await
        .unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.get("/health/ready").await.unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["checks"]["database"], "healthy");
}

#[tokio::test]
async fn test_openapi_document() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api-docs/openapi.json").await.unwrap();
    let doc: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(doc["paths"]["/api/v1/cocktails/today"].is_object());
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.unwrap();
    assert!(response.headers().contains_key("x-request-id"));
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_register_and_login() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    let response = server.post("/api/v1/auth/register", &request).await.unwrap();
    let registered: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(registered.member.email, request.email);
    assert_eq!(registered.member.nickname, request.nickname);
    assert_eq!(registered.token_type, "Bearer");

    let response = server
        .post("/api/v1/auth/login", &LoginRequest::from_register(&request))
        .await
        .unwrap();
    let logged_in: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(logged_in.member.id, registered.member.id);
}

#[tokio::test]
async fn test_register_duplicate_email() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    server.post("/api/v1/auth/register", &request).await.unwrap();
    let response = server.post("/api/v1/auth/register", &request).await.unwrap();

    let body: ErrorBody = assert_json(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(body.error.code, "EMAIL_ALREADY_EXISTS");
}

#[tokio::test]
async fn test_register_invalid_body() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest {
        email: "not-an-email".to_string(),
        nickname: String::new(),
        password: "Shaker2024".to_string(),
    };

    let response = server.post("/api/v1/auth/register", &request).await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.code, "VALIDATION_ERROR");
    assert!(body.error.details.is_some());
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let login = LoginRequest {
        email: format!("nobody_{}@catale.test", unique_suffix()),
        password: "Whatever99".to_string(),
    };

    let response = server.post("/api/v1/auth/login", &login).await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(body.error.code, "INVALID_CREDENTIALS");
}

#[tokio::test]
async fn test_refresh_token() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server).await;

    let response = server
        .post(
            "/api/v1/auth/refresh",
            &RefreshTokenRequest {
                refresh_token: auth.refresh_token,
            },
        )
        .await
        .unwrap();
    let refreshed: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(refreshed.member.id, auth.member.id);

    // Access tokens are not refresh tokens
    let response = server
        .post(
            "/api/v1/auth/refresh",
            &RefreshTokenRequest {
                refresh_token: auth.access_token,
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// Member Tests
// ============================================================================

#[tokio::test]
async fn test_current_member() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server).await;

    let response = server
        .get_auth("/api/v1/members/@me", &auth.access_token)
        .await
        .unwrap();
    let me: MemberResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(me.id, auth.member.id);
}

#[tokio::test]
async fn test_missing_and_bad_tokens() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/v1/members/@me").await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(body.error.code, "MISSING_AUTHORIZATION");

    let response = server
        .get_auth("/api/v1/cocktails", "not.a.token")
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(body.error.code, "INVALID_TOKEN");
}

// ============================================================================
// Cocktail Tests
// ============================================================================

#[tokio::test]
async fn test_like_toggle_round_trip() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server).await;
    let cocktail_id = server.seed_cocktail(unique_emotion()).await.unwrap();
    let like_path = format!("/api/v1/cocktails/{cocktail_id}/like");

    let response = server
        .post_empty_auth(&like_path, &auth.access_token)
        .await
        .unwrap();
    let toggled: LikeToggleResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(toggled.cocktail_id, cocktail_id);
    assert!(toggled.liked);

    let response = server
        .get_auth(&format!("/api/v1/cocktails/{cocktail_id}"), &auth.access_token)
        .await
        .unwrap();
    let detail: CocktailDetailResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(detail.cocktail.is_liked);
    assert_eq!(detail.cocktail.like_count, 1);
    assert!(detail.reviews.is_empty());

    let response = server
        .get_auth("/api/v1/cocktails/liked", &auth.access_token)
        .await
        .unwrap();
    let liked: Vec<CocktailResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(liked.len(), 1);
    assert_eq!(liked[0].id, cocktail_id);

    let response = server
        .post_empty_auth(&like_path, &auth.access_token)
        .await
        .unwrap();
    let toggled: LikeToggleResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!toggled.liked);

    let response = server
        .get_auth("/api/v1/cocktails/liked", &auth.access_token)
        .await
        .unwrap();
    let liked: Vec<CocktailResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(liked.is_empty());
}

#[tokio::test]
async fn test_catalog_is_ordered_by_likes() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server).await;
    let cocktail_id = server.seed_cocktail(unique_emotion()).await.unwrap();
    server
        .post_empty_auth(
            &format!("/api/v1/cocktails/{cocktail_id}/like"),
            &auth.access_token,
        )
        .await
        .unwrap();

    let response = server
        .get_auth("/api/v1/cocktails", &auth.access_token)
        .await
        .unwrap();
    let cocktails: Vec<CocktailResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(cocktails
        .windows(2)
        .all(|pair| pair[0].like_count >= pair[1].like_count));

    let ours = cocktails.iter().find(|c| c.id == cocktail_id).unwrap();
    assert!(ours.is_liked);
    assert!(cocktails
        .iter()
        .filter(|c| c.id != cocktail_id)
        .all(|c| !c.is_liked));
}

#[tokio::test]
async fn test_unknown_cocktail() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server).await;

    let response = server
        .get_auth("/api/v1/cocktails/9223372036854775807", &auth.access_token)
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(body.error.code, "UNKNOWN_COCKTAIL");

    let response = server
        .post_empty_auth("/api/v1/cocktails/9223372036854775807/like", &auth.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server
        .get_auth("/api/v1/cocktails/mojito", &auth.access_token)
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.code, "INVALID_PATH_PARAMETER");
}

#[tokio::test]
async fn test_today_cocktail_exact_match() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server).await;
    let emotion = unique_emotion();
    server.seed_cocktail(emotion).await.unwrap();

    let response = server
        .post_auth(
            "/api/v1/cocktails/today",
            &auth.access_token,
            &TodayCocktailRequest::from(emotion),
        )
        .await
        .unwrap();
    let picked: CocktailResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!((picked.emotion1, picked.emotion2, picked.emotion3), emotion);
}

// ============================================================================
// Review Tests
// ============================================================================

#[tokio::test]
async fn test_reviews() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server).await;
    let cocktail_id = server.seed_cocktail(unique_emotion()).await.unwrap();
    let path = format!("/api/v1/cocktails/{cocktail_id}/reviews");

    let response = server.get(&path).await.unwrap();
    let reviews: Vec<ReviewResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(reviews.is_empty());

    let review = CreateReviewRequest {
        rating: 5,
        content: "Perfectly balanced".to_string(),
    };
    let response = server
        .post_auth(&path, &auth.access_token, &review)
        .await
        .unwrap();
    let created: ReviewResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(created.member_id, auth.member.id);
    assert_eq!(created.rating, 5);

    let response = server.get(&path).await.unwrap();
    let reviews: Vec<ReviewResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0].content, "Perfectly balanced");

    let bad = CreateReviewRequest {
        rating: 6,
        content: "Too good".to_string(),
    };
    let response = server
        .post_auth(&path, &auth.access_token, &bad)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Diary Tests
// ============================================================================

#[tokio::test]
async fn test_diary_lifecycle() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server).await;
    let cocktail_id = server.seed_cocktail(unique_emotion()).await.unwrap();

    let response = server
        .post_auth(
            "/api/v1/diaries",
            &auth.access_token,
            &CreateDiaryRequest::for_month(cocktail_id, 2024, 5),
        )
        .await
        .unwrap();
    let diary: DiaryResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(diary.cocktail_id, cocktail_id);
    assert_eq!((diary.year, diary.month), (2024, 5));

    let response = server
        .get_auth("/api/v1/diaries?year=2024&month=5", &auth.access_token)
        .await
        .unwrap();
    let month: Vec<DiaryResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(month.len(), 1);
    assert_eq!(month[0].id, diary.id);

    let diary_path = format!("/api/v1/diaries/{}", diary.id);
    let response = server
        .delete_auth(&diary_path, &auth.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.get_auth(&diary_path, &auth.access_token).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server
        .get_auth("/api/v1/diaries?year=2024&month=5", &auth.access_token)
        .await
        .unwrap();
    let month: Vec<DiaryResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(month.is_empty());

    // Still in the table, only marked
    let deleted_at: Option<chrono::DateTime<chrono::Utc>> =
        sqlx::query_scalar("SELECT deleted_at FROM diaries WHERE id = $1")
            .bind(diary.id)
            .fetch_one(&server.pool)
            .await
            .unwrap();
    assert!(deleted_at.is_some());
}

#[tokio::test]
async fn test_diary_is_private() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let owner = register(&server).await;
    let stranger = register(&server).await;
    let cocktail_id = server.seed_cocktail(unique_emotion()).await.unwrap();

    let response = server
        .post_auth(
            "/api/v1/diaries",
            &owner.access_token,
            &CreateDiaryRequest::for_month(cocktail_id, 2024, 8),
        )
        .await
        .unwrap();
    let diary: DiaryResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    let diary_path = format!("/api/v1/diaries/{}", diary.id);

    let response = server
        .get_auth(&diary_path, &stranger.access_token)
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(body.error.code, "UNKNOWN_DIARY");

    let response = server
        .delete_auth(&diary_path, &stranger.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server.get_auth(&diary_path, &owner.access_token).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_diary_month_validation() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server).await;

    let response = server
        .get_auth("/api/v1/diaries?year=2024&month=13", &auth.access_token)
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.code, "INVALID_MONTH");

    let response = server
        .get_auth("/api/v1/diaries?year=2024", &auth.access_token)
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.code, "INVALID_QUERY_PARAMETER");
}
