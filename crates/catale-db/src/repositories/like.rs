//! PostgreSQL implementation of LikeRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};

use catale_core::entities::{Cocktail, Like};
use catale_core::traits::{LikeRepository, RepoResult};

use crate::models::CocktailModel;

use super::error::map_db_error;

/// PostgreSQL implementation of LikeRepository
#[derive(Clone)]
pub struct PgLikeRepository {
    pool: PgPool,
}

impl PgLikeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LikeRepository for PgLikeRepository {
    #[instrument(skip(self))]
    async fn exists(&self, member_id: i64, cocktail_id: i64) -> RepoResult<bool> {
        sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(SELECT 1 FROM likes WHERE member_id = $1 AND cocktail_id = $2)
            ",
        )
        .bind(member_id)
        .bind(cocktail_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn create(&self, like: &Like) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO likes (member_id, cocktail_id, created_at)
            VALUES ($1, $2, $3)
            ON CONFLICT (member_id, cocktail_id) DO NOTHING
            ",
        )
        .bind(like.member_id)
        .bind(like.cocktail_id)
        .bind(like.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, member_id: i64, cocktail_id: i64) -> RepoResult<()> {
        sqlx::query("DELETE FROM likes WHERE member_id = $1 AND cocktail_id = $2")
            .bind(member_id)
            .bind(cocktail_id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_liked_cocktails(&self, member_id: i64) -> RepoResult<Vec<Cocktail>> {
        let results = sqlx::query_as::<_, CocktailModel>(
            r"
            SELECT c.id, c.name, c.image_url, c.content, c.ingredients, c.alcohol_level,
                   c.sweetness, c.emotion1, c.emotion2, c.emotion3, c.created_at,
                   (SELECT COUNT(*) FROM likes l WHERE l.cocktail_id = c.id) AS like_count
            FROM likes ml
            INNER JOIN cocktails c ON c.id = ml.cocktail_id
            WHERE ml.member_id = $1
            ORDER BY ml.created_at DESC, c.id
            ",
        )
        .bind(member_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Cocktail::from).collect())
    }

    /// Delete-or-insert inside one transaction
    ///
    /// The unique `(member_id, cocktail_id)` constraint makes a racing insert a
    /// no-op, so the pair never ends up with two likes.
    #[instrument(skip(self))]
    async fn toggle(&self, member_id: i64, cocktail_id: i64) -> RepoResult<bool> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let removed = sqlx::query("DELETE FROM likes WHERE member_id = $1 AND cocktail_id = $2")
            .bind(member_id)
            .bind(cocktail_id)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?
            .rows_affected();

        let liked = if removed > 0 {
            false
        } else {
            sqlx::query(
                r"
                INSERT INTO likes (member_id, cocktail_id, created_at)
                VALUES ($1, $2, NOW())
                ON CONFLICT (member_id, cocktail_id) DO NOTHING
                ",
            )
            .bind(member_id)
            .bind(cocktail_id)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;
            true
        };

        tx.commit().await.map_err(map_db_error)?;

        debug!(liked, "Like toggled");
        Ok(liked)
    }
}
