//! PostgreSQL implementation of DiaryRepository
//!
//! Every read filters on `deleted_at IS NULL`.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use catale_core::entities::{Diary, NewDiary};
use catale_core::error::DomainError;
use catale_core::traits::{DiaryRepository, RepoResult};

use crate::models::DiaryModel;

use super::error::{map_db_error, map_foreign_key_violation};

/// PostgreSQL implementation of DiaryRepository
#[derive(Clone)]
pub struct PgDiaryRepository {
    pool: PgPool,
}

impl PgDiaryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DiaryRepository for PgDiaryRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Diary>> {
        let result = sqlx::query_as::<_, DiaryModel>(
            r"
            SELECT id, member_id, cocktail_id, mood, comment, reason, diary_year, diary_month,
                   emotion1, emotion2, emotion3, created_at, deleted_at
            FROM diaries
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Diary::from))
    }

    #[instrument(skip(self))]
    async fn find_by_member_and_month(
        &self,
        member_id: i64,
        year: i32,
        month: i32,
    ) -> RepoResult<Vec<Diary>> {
        let results = sqlx::query_as::<_, DiaryModel>(
            r"
            SELECT id, member_id, cocktail_id, mood, comment, reason, diary_year, diary_month,
                   emotion1, emotion2, emotion3, created_at, deleted_at
            FROM diaries
            WHERE member_id = $1 AND diary_year = $2 AND diary_month = $3
              AND deleted_at IS NULL
            ORDER BY created_at, id
            ",
        )
        .bind(member_id)
        .bind(year)
        .bind(month)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Diary::from).collect())
    }

    #[instrument(skip(self, diary), fields(member_id = diary.member_id))]
    async fn create(&self, diary: &NewDiary) -> RepoResult<Diary> {
        let result = sqlx::query_as::<_, DiaryModel>(
            r"
            INSERT INTO diaries (member_id, cocktail_id, mood, comment, reason, diary_year,
                                 diary_month, emotion1, emotion2, emotion3)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING id, member_id, cocktail_id, mood, comment, reason, diary_year, diary_month,
                      emotion1, emotion2, emotion3, created_at, deleted_at
            ",
        )
        .bind(diary.member_id)
        .bind(diary.cocktail_id)
        .bind(diary.mood)
        .bind(&diary.comment)
        .bind(&diary.reason)
        .bind(diary.year)
        .bind(diary.month)
        .bind(diary.emotion.emotion1)
        .bind(diary.emotion.emotion2)
        .bind(diary.emotion.emotion3)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_foreign_key_violation(e, diary.member_id, diary.cocktail_id))?;

        Ok(Diary::from(result))
    }

    #[instrument(skip(self))]
    async fn soft_delete(&self, id: i64) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE diaries
            SET deleted_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::DiaryNotFound(id));
        }

        Ok(())
    }
}
