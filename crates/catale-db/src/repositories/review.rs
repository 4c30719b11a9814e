//! PostgreSQL implementation of ReviewRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use catale_core::entities::{NewReview, Review};
use catale_core::traits::{RepoResult, ReviewRepository};

use crate::models::ReviewModel;

use super::error::{map_db_error, map_foreign_key_violation};

/// PostgreSQL implementation of ReviewRepository
#[derive(Clone)]
pub struct PgReviewRepository {
    pool: PgPool,
}

impl PgReviewRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReviewRepository for PgReviewRepository {
    #[instrument(skip(self))]
    async fn find_by_cocktail(&self, cocktail_id: i64) -> RepoResult<Vec<Review>> {
        let results = sqlx::query_as::<_, ReviewModel>(
            r"
            SELECT id, cocktail_id, member_id, rating, content, created_at
            FROM reviews
            WHERE cocktail_id = $1
            ORDER BY created_at DESC, id DESC
            ",
        )
        .bind(cocktail_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Review::from).collect())
    }

    #[instrument(skip(self, review), fields(cocktail_id = review.cocktail_id))]
    async fn create(&self, review: &NewReview) -> RepoResult<Review> {
        let result = sqlx::query_as::<_, ReviewModel>(
            r"
            INSERT INTO reviews (cocktail_id, member_id, rating, content)
            VALUES ($1, $2, $3, $4)
            RETURNING id, cocktail_id, member_id, rating, content, created_at
            ",
        )
        .bind(review.cocktail_id)
        .bind(review.member_id)
        .bind(review.rating)
        .bind(&review.content)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_foreign_key_violation(e, review.member_id, review.cocktail_id))?;

        Ok(Review::from(result))
    }
}
