//! Review model -> entity mapper

use catale_core::entities::Review;

use crate::models::ReviewModel;

impl From<ReviewModel> for Review {
    fn from(model: ReviewModel) -> Self {
        Review {
            id: model.id,
            cocktail_id: model.cocktail_id,
            member_id: model.member_id,
            rating: model.rating,
            content: model.content,
            created_at: model.created_at,
        }
    }
}
