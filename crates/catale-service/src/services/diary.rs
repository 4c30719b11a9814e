//! Diary service
//!
//! Diaries are private: a diary owned by someone else is reported as not
//! found, never as forbidden.

use catale_core::entities::{Diary, NewDiary};
use catale_core::error::DomainError;
use tracing::{info, instrument};

use crate::dto::{CreateDiaryRequest, DiaryResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Diary service
pub struct DiaryService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> DiaryService<'a> {
    /// Create a new DiaryService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Write a diary entry about a cocktail
    #[instrument(skip(self, request), fields(cocktail_id = request.cocktail_id))]
    pub async fn create_diary(
        &self,
        member_id: i64,
        request: CreateDiaryRequest,
    ) -> ServiceResult<DiaryResponse> {
        self.ctx
            .cocktail_repo()
            .find_by_id(request.cocktail_id)
            .await?
            .ok_or(DomainError::CocktailNotFound(request.cocktail_id))?;

        let new_diary = NewDiary {
            member_id,
            cocktail_id: request.cocktail_id,
            mood: request.mood,
            emotion: request.emotion(),
            comment: request.comment,
            reason: request.reason,
            year: request.year,
            month: request.month,
        };
        new_diary.validate()?;

        let diary = self.ctx.diary_repo().create(&new_diary).await?;

        info!(diary_id = diary.id, member_id, "Diary written");

        Ok(DiaryResponse::from(diary))
    }

    /// The member's live diaries for one month, oldest first
    #[instrument(skip(self))]
    pub async fn list_diaries(
        &self,
        member_id: i64,
        year: i32,
        month: i32,
    ) -> ServiceResult<Vec<DiaryResponse>> {
        if !(1..=12).contains(&month) {
            return Err(DomainError::InvalidMonth(month).into());
        }

        let diaries = self
            .ctx
            .diary_repo()
            .find_by_member_and_month(member_id, year, month)
            .await?;

        Ok(diaries.into_iter().map(DiaryResponse::from).collect())
    }

    #[instrument(skip(self))]
    pub async fn get_diary(&self, member_id: i64, diary_id: i64) -> ServiceResult<DiaryResponse> {
        let diary = self.find_owned(member_id, diary_id).await?;
        Ok(DiaryResponse::from(diary))
    }

    /// Soft delete; the diary disappears from every read afterwards
    #[instrument(skip(self))]
    pub async fn delete_diary(&self, member_id: i64, diary_id: i64) -> ServiceResult<()> {
        self.find_owned(member_id, diary_id).await?;
        self.ctx.diary_repo().soft_delete(diary_id).await?;

        info!(diary_id, member_id, "Diary deleted");

        Ok(())
    }

    async fn find_owned(&self, member_id: i64, diary_id: i64) -> ServiceResult<Diary> {
        Ok(self
            .ctx
            .diary_repo()
            .find_by_id(diary_id)
            .await?
            .filter(|diary| diary.is_owned_by(member_id))
            .ok_or(DomainError::DiaryNotFound(diary_id))?)
    }
}
