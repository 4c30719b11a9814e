//! Emotion matching - picks the "cocktail of the day" for a set of target emotions
//!
//! Selection runs in two phases:
//! 1. A full scan scores every candidate by Manhattan distance to the target
//!    and keeps every candidate tied at the minimal score.
//! 2. One uniform random draw picks the winner from that tie set.

use std::cmp::Ordering;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::entities::Cocktail;
use crate::error::DomainError;
use crate::value_objects::EmotionVector;

/// All candidates whose distance to `target` is minimal, in input order
///
/// Returns an empty vector only when `candidates` is empty.
pub fn closest_candidates<'a>(target: &EmotionVector, candidates: &'a [Cocktail]) -> Vec<&'a Cocktail> {
    let mut best_score = i64::MAX;
    let mut best = Vec::new();

    for cocktail in candidates {
        let score = cocktail.distance_to(target);
        match score.cmp(&best_score) {
            Ordering::Less => {
                best.clear();
                best.push(cocktail);
                best_score = score;
            }
            Ordering::Equal => best.push(cocktail),
            Ordering::Greater => {}
        }
    }

    best
}

/// Pick the cocktail closest to `target`, breaking ties uniformly at random
///
/// # Errors
/// Returns `DomainError::EmptyCandidates` if `candidates` is empty
pub fn pick_daily_cocktail<'a>(
    target: &EmotionVector,
    candidates: &'a [Cocktail],
) -> Result<&'a Cocktail, DomainError> {
    pick_daily_cocktail_with(target, candidates, &mut rand::thread_rng())
}

/// Same as [`pick_daily_cocktail`] with a caller-supplied random source
///
/// # Errors
/// Returns `DomainError::EmptyCandidates` if `candidates` is empty
pub fn pick_daily_cocktail_with<'a, R>(
    target: &EmotionVector,
    candidates: &'a [Cocktail],
    rng: &mut R,
) -> Result<&'a Cocktail, DomainError>
where
    R: Rng + ?Sized,
{
    closest_candidates(target, candidates)
        .choose(rng)
        .copied()
        .ok_or(DomainError::EmptyCandidates)
}
