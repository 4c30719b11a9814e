//! Diary model -> entity mapper

use catale_core::entities::Diary;
use catale_core::value_objects::EmotionVector;

use crate::models::DiaryModel;

impl From<DiaryModel> for Diary {
    fn from(model: DiaryModel) -> Self {
        Diary {
            id: model.id,
            member_id: model.member_id,
            cocktail_id: model.cocktail_id,
            mood: model.mood,
            comment: model.comment,
            reason: model.reason,
            year: model.diary_year,
            month: model.diary_month,
            emotion: EmotionVector::new(model.emotion1, model.emotion2, model.emotion3),
            created_at: model.created_at,
            deleted_at: model.deleted_at,
        }
    }
}
