//! # catale-core
//!
//! Domain layer containing entities, value objects, the emotion-matching
//! routine, and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod matching;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{Cocktail, Diary, Like, Member, NewDiary, NewMember, NewReview, Review};
pub use error::DomainError;
pub use matching::{closest_candidates, pick_daily_cocktail, pick_daily_cocktail_with};
pub use traits::{
    CocktailRepository, DiaryRepository, LikeRepository, MemberRepository, RepoResult,
    ReviewRepository,
};
pub use value_objects::EmotionVector;
