//! Cocktail service
//!
//! Listing, detail, like toggling and the cocktail-of-the-day pick.

use catale_core::entities::Cocktail;
use catale_core::error::DomainError;
use catale_core::matching::pick_daily_cocktail;
use tracing::{info, instrument};

use crate::dto::{
    CocktailDetailResponse, CocktailResponse, LikeToggleResponse, ReviewResponse,
    TodayCocktailRequest,
};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Cocktail service
pub struct CocktailService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CocktailService<'a> {
    /// Create a new CocktailService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Every cocktail, most liked first, with the viewer's like flag
    ///
    /// An unknown viewer simply sees every flag as false.
    #[instrument(skip(self))]
    pub async fn get_all_cocktails(&self, viewer_id: i64) -> ServiceResult<Vec<CocktailResponse>> {
        let cocktails = self.ctx.cocktail_repo().find_all_by_likes().await?;

        let mut responses = Vec::with_capacity(cocktails.len());
        for cocktail in cocktails {
            responses.push(self.annotate(viewer_id, cocktail).await?);
        }

        Ok(responses)
    }

    /// Cocktails the viewer has liked, most recently liked first
    #[instrument(skip(self))]
    pub async fn get_liked_cocktails(&self, viewer_id: i64) -> ServiceResult<Vec<CocktailResponse>> {
        let cocktails = self.ctx.like_repo().find_liked_cocktails(viewer_id).await?;

        Ok(cocktails
            .into_iter()
            .map(|cocktail| CocktailResponse::with_like(cocktail, true))
            .collect())
    }

    /// One cocktail with its reviews and the viewer's like flag
    #[instrument(skip(self))]
    pub async fn get_cocktail_detail(
        &self,
        viewer_id: i64,
        cocktail_id: i64,
    ) -> ServiceResult<CocktailDetailResponse> {
        let cocktail = self.find_cocktail(cocktail_id).await?;

        let reviews = self
            .ctx
            .review_repo()
            .find_by_cocktail(cocktail_id)
            .await?
            .into_iter()
            .map(ReviewResponse::from)
            .collect();

        Ok(CocktailDetailResponse {
            cocktail: self.annotate(viewer_id, cocktail).await?,
            reviews,
        })
    }

    /// Like the cocktail if the viewer does not yet, otherwise remove the like
    ///
    /// Member and cocktail are both resolved before anything is written.
    #[instrument(skip(self))]
    pub async fn toggle_like(
        &self,
        viewer_id: i64,
        cocktail_id: i64,
    ) -> ServiceResult<LikeToggleResponse> {
        self.ctx
            .member_repo()
            .find_by_id(viewer_id)
            .await?
            .ok_or(DomainError::MemberNotFound(viewer_id))?;
        self.find_cocktail(cocktail_id).await?;

        let liked = self.ctx.like_repo().toggle(viewer_id, cocktail_id).await?;

        info!(member_id = viewer_id, cocktail_id, liked, "Like toggled");

        Ok(LikeToggleResponse::new(cocktail_id, liked))
    }

    /// Pick the catalog cocktail closest to the requested emotions
    ///
    /// Fails with `INVALID_ARGUMENT` when the catalog is empty.
    #[instrument(skip(self))]
    pub async fn get_today_cocktail(
        &self,
        viewer_id: i64,
        request: TodayCocktailRequest,
    ) -> ServiceResult<CocktailResponse> {
        let target = request.target();
        let candidates = self.ctx.cocktail_repo().find_all().await?;

        let picked = pick_daily_cocktail(&target, &candidates)?.clone();

        info!(
            cocktail_id = picked.id,
            target = %target,
            distance = picked.distance_to(&target),
            "Cocktail of the day picked"
        );

        self.annotate(viewer_id, picked).await
    }

    async fn find_cocktail(&self, cocktail_id: i64) -> ServiceResult<Cocktail> {
        Ok(self
            .ctx
            .cocktail_repo()
            .find_by_id(cocktail_id)
            .await?
            .ok_or(DomainError::CocktailNotFound(cocktail_id))?)
    }

    async fn annotate(&self, viewer_id: i64, cocktail: Cocktail) -> ServiceResult<CocktailResponse> {
        let is_liked = self.ctx.like_repo().exists(viewer_id, cocktail.id).await?;
        Ok(CocktailResponse::with_like(cocktail, is_liked))
    }
}
