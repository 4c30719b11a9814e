//! OpenAPI document served at `/api-docs/openapi.json`

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::handlers::{auth, cocktails, diaries, health, members, reviews};

#[derive(OpenApi)]
#[openapi(
    info(title = "Catale API", description = "Cocktail catalog, likes, reviews and diaries"),
    paths(
        health::health_check,
        health::readiness_check,
        auth::register,
        auth::login,
        auth::refresh_token,
        members::get_current_member,
        cocktails::list_cocktails,
        cocktails::list_liked_cocktails,
        cocktails::get_cocktail,
        cocktails::toggle_like,
        cocktails::today_cocktail,
        reviews::list_reviews,
        reviews::create_review,
        diaries::create_diary,
        diaries::list_diaries,
        diaries::get_diary,
        diaries::delete_diary,
    ),
    modifiers(&BearerAuth),
    tags(
        (name = "health"),
        (name = "auth"),
        (name = "members"),
        (name = "cocktails"),
        (name = "reviews"),
        (name = "diaries"),
    )
)]
pub struct ApiDoc;

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}
