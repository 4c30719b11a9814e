//! Review service

use catale_core::entities::NewReview;
use catale_core::error::DomainError;
use tracing::{info, instrument};

use crate::dto::{CreateReviewRequest, ReviewResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Review service
pub struct ReviewService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReviewService<'a> {
    /// Create a new ReviewService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Reviews for a cocktail, newest first
    #[instrument(skip(self))]
    pub async fn list_reviews(&self, cocktail_id: i64) -> ServiceResult<Vec<ReviewResponse>> {
        self.ensure_cocktail(cocktail_id).await?;

        let reviews = self.ctx.review_repo().find_by_cocktail(cocktail_id).await?;
        Ok(reviews.into_iter().map(ReviewResponse::from).collect())
    }

    /// Post a review as the given member
    #[instrument(skip(self, request), fields(rating = request.rating))]
    pub async fn create_review(
        &self,
        member_id: i64,
        cocktail_id: i64,
        request: CreateReviewRequest,
    ) -> ServiceResult<ReviewResponse> {
        self.ensure_cocktail(cocktail_id).await?;

        let review = NewReview::new(cocktail_id, member_id, request.rating, request.content)?;
        let created = self.ctx.review_repo().create(&review).await?;

        info!(review_id = created.id, member_id, cocktail_id, "Review created");

        Ok(ReviewResponse::from(created))
    }

    async fn ensure_cocktail(&self, cocktail_id: i64) -> ServiceResult<()> {
        self.ctx
            .cocktail_repo()
            .find_by_id(cocktail_id)
            .await?
            .ok_or(DomainError::CocktailNotFound(cocktail_id))?;
        Ok(())
    }
}
