//! Value objects - immutable types that represent domain concepts

mod emotion;

pub use emotion::EmotionVector;
