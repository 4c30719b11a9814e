//! Cocktail model -> entity mapper

use catale_core::entities::Cocktail;
use catale_core::value_objects::EmotionVector;

use crate::models::CocktailModel;

impl From<CocktailModel> for Cocktail {
    fn from(model: CocktailModel) -> Self {
        Cocktail {
            id: model.id,
            name: model.name,
            image_url: model.image_url,
            content: model.content,
            ingredients: model.ingredients,
            alcohol_level: model.alcohol_level,
            sweetness: model.sweetness,
            emotion: EmotionVector::new(model.emotion1, model.emotion2, model.emotion3),
            like_count: model.like_count,
            created_at: model.created_at,
        }
    }
}
