//! PostgreSQL implementation of CocktailRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use catale_core::entities::Cocktail;
use catale_core::traits::{CocktailRepository, RepoResult};

use crate::models::CocktailModel;

use super::error::map_db_error;

/// Cocktail columns plus the aggregated like count; callers append ORDER BY
const SELECT_COCKTAILS: &str = r"
    SELECT c.id, c.name, c.image_url, c.content, c.ingredients, c.alcohol_level, c.sweetness,
           c.emotion1, c.emotion2, c.emotion3, c.created_at,
           COUNT(l.member_id) AS like_count
    FROM cocktails c
    LEFT JOIN likes l ON l.cocktail_id = c.id
";

/// PostgreSQL implementation of CocktailRepository
#[derive(Clone)]
pub struct PgCocktailRepository {
    pool: PgPool,
}

impl PgCocktailRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_all_ordered(&self, order_by: &str) -> RepoResult<Vec<Cocktail>> {
        let sql = format!("{SELECT_COCKTAILS} GROUP BY c.id ORDER BY {order_by}");
        let results = sqlx::query_as::<_, CocktailModel>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(results.into_iter().map(Cocktail::from).collect())
    }
}

#[async_trait]
impl CocktailRepository for PgCocktailRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Cocktail>> {
        let sql = format!("{SELECT_COCKTAILS} WHERE c.id = $1 GROUP BY c.id");
        let result = sqlx::query_as::<_, CocktailModel>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.map(Cocktail::from))
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<Cocktail>> {
        self.fetch_all_ordered("c.id").await
    }

    #[instrument(skip(self))]
    async fn find_all_by_likes(&self) -> RepoResult<Vec<Cocktail>> {
        self.fetch_all_ordered("like_count DESC, c.id").await
    }
}
