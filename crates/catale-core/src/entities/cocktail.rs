//! Cocktail entity - a catalog entry with its emotion coordinates

use chrono::{DateTime, Utc};

use crate::value_objects::EmotionVector;

/// Cocktail entity
///
/// Emotion coordinates are fixed once the cocktail is created; this layer
/// only reads cocktails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cocktail {
    pub id: i64,
    pub name: String,
    pub image_url: Option<String>,
    pub content: String,
    pub ingredients: String,
    pub alcohol_level: i32,
    pub sweetness: i32,
    pub emotion: EmotionVector,
    pub like_count: i64,
    pub created_at: DateTime<Utc>,
}

impl Cocktail {
    /// Distance between this cocktail's emotions and a target
    #[inline]
    pub fn distance_to(&self, target: &EmotionVector) -> i64 {
        self.emotion.distance(target)
    }

    /// Check if the cocktail contains no alcohol
    #[inline]
    pub fn is_non_alcoholic(&self) -> bool {
        self.alcohol_level == 0
    }
}
