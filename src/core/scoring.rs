use crate::models::{ScoringWeights, Venue};

/// Highest composite score
pub const MAX_SCORE: f64 = 5.0;

/// Calculate the composite quality score (0.0-5.0, one decimal) for a venue
///
/// This is an internally computed ranking figure, not an official rating.
///
/// Scoring formula with the default weights:
/// score = (
///     rating / 5 * 0.6 * 5 +               # Star rating
///     min(reviews / 1000, 1) * 0.2 * 5 +   # Review volume, saturating
///     hygiene / 5 * 0.2 * 5                # Food hygiene inspection
/// )
///
/// Missing signals are never counted as zero. When the hygiene signal is
/// absent, the rating and review terms are rescaled to fill the non-hygiene
/// share of the weight and the hygiene share is handed to the rating, so a
/// venue with only a rating scores exactly its rating.
pub fn composite_score(venue: &Venue, weights: &ScoringWeights) -> f64 {
    let mut score = 0.0;
    let mut present_weight = 0.0;

    if let Some(rating) = venue.rating {
        score += rating_component(rating, weights.rating);
        present_weight += weights.rating;
    }

    if let Some(review_count) = venue.review_count {
        score += review_component(review_count, weights.review_saturation, weights.reviews);
        present_weight += weights.reviews;
    }

    match hygiene_signal(venue, weights) {
        Some(hygiene) => {
            score += rating_component(hygiene as f64, weights.hygiene);
        }
        None => {
            if present_weight > 0.0 {
                score = score / present_weight * (1.0 - weights.hygiene);
            }
            if let Some(rating) = venue.rating {
                score += rating_component(rating, weights.hygiene);
            }
        }
    }

    round_score(score.clamp(0.0, MAX_SCORE))
}

/// Hygiene score to use, if any
///
/// A score of exactly 0 counts as "no inspection" unless
/// `zero_hygiene_is_signal` is set.
#[inline]
fn hygiene_signal(venue: &Venue, weights: &ScoringWeights) -> Option<u8> {
    venue
        .hygiene_score
        .filter(|&score| score > 0 || weights.zero_hygiene_is_signal)
}

/// Contribution of a 0-5 value under `weight`
#[inline]
fn rating_component(value: f64, weight: f64) -> f64 {
    (value / 5.0) * weight * 5.0
}

/// Review volume contribution, saturating at `saturation` reviews
#[inline]
fn review_component(review_count: u32, saturation: u32, weight: f64) -> f64 {
    let normalized = if saturation == 0 {
        1.0
    } else {
        (review_count as f64 / saturation as f64).min(1.0)
    };
    normalized * weight * 5.0
}

#[inline]
fn round_score(score: f64) -> f64 {
    (score * 10.0).round() / 10.0
}
