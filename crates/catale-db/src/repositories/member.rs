//! PostgreSQL implementation of MemberRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use catale_core::entities::{Member, NewMember};
use catale_core::error::DomainError;
use catale_core::traits::{MemberRepository, RepoResult};

use crate::models::MemberModel;

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of MemberRepository
#[derive(Clone)]
pub struct PgMemberRepository {
    pool: PgPool,
}

impl PgMemberRepository {
    /// Create a new PgMemberRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MemberRepository for PgMemberRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Member>> {
        let result = sqlx::query_as::<_, MemberModel>(
            r"
            SELECT id, email, nickname, password_hash, created_at, updated_at
            FROM members
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Member::from))
    }

    #[instrument(skip(self))]
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<Member>> {
        let result = sqlx::query_as::<_, MemberModel>(
            r"
            SELECT id, email, nickname, password_hash, created_at, updated_at
            FROM members
            WHERE email = $1
            ",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Member::from))
    }

    #[instrument(skip(self))]
    async fn email_exists(&self, email: &str) -> RepoResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM members WHERE email = $1)")
            .bind(email)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self, password_hash))]
    async fn create(&self, member: &NewMember, password_hash: &str) -> RepoResult<Member> {
        let result = sqlx::query_as::<_, MemberModel>(
            r"
            INSERT INTO members (email, nickname, password_hash)
            VALUES ($1, $2, $3)
            RETURNING id, email, nickname, password_hash, created_at, updated_at
            ",
        )
        .bind(&member.email)
        .bind(&member.nickname)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::EmailAlreadyExists))?;

        Ok(Member::from(result))
    }

    #[instrument(skip(self))]
    async fn get_password_hash(&self, id: i64) -> RepoResult<Option<String>> {
        sqlx::query_scalar::<_, String>("SELECT password_hash FROM members WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)
    }
}
