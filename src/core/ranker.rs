use std::cmp::Ordering;

use crate::core::{
    classify::{classify, DietaryProfile},
    distance::round_km,
    filters::venues_within_radius,
    scoring::composite_score,
};
use crate::models::{
    ClassifyMode, GeoPoint, NearbyQuery, RankResult, RankedVenue, ScoringWeights, Station,
    StationListing, TopRatedListing, TopRatedQuery, Venue,
};

/// Ranking orchestrator - combines proximity, classification and scoring
///
/// # Pipeline Stages
/// 1. Bounding box pre-filter and exact radius check
/// 2. Dietary classification (optional)
/// 3. Composite scoring
/// 4. Multi-key sort and truncation
#[derive(Debug, Clone)]
pub struct Ranker {
    profile: DietaryProfile,
    weights: ScoringWeights,
}

impl Ranker {
    pub fn new(profile: DietaryProfile, weights: ScoringWeights) -> Self {
        Self { profile, weights }
    }

    pub fn with_defaults() -> Self {
        Self {
            profile: DietaryProfile::halal(),
            weights: ScoringWeights::default(),
        }
    }

    pub fn profile(&self) -> &DietaryProfile {
        &self.profile
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Venues near `reference`, optionally restricted to the dietary category
    ///
    /// # Arguments
    /// * `reference` - Centre of the search
    /// * `venues` - The whole venue collection
    /// * `radius_km` - Search radius, inclusive
    /// * `mode` - Classification mode, `None` to skip classification
    /// * `limit` - Maximum number of venues to return
    ///
    /// # Returns
    /// RankResult sorted by distance, then score, rating and review count
    pub fn find_nearby(
        &self,
        reference: GeoPoint,
        venues: &[Venue],
        radius_km: f64,
        mode: Option<ClassifyMode>,
        limit: usize,
    ) -> RankResult {
        let total_candidates = venues.len();

        let mut ranked: Vec<RankedVenue> = venues_within_radius(reference, venues, radius_km)
            .into_iter()
            .filter_map(|nearby| {
                let mut entry = self.rank_venue(nearby.venue, mode)?;
                entry.distance_km = Some(round_km(nearby.distance_km));
                Some(entry)
            })
            .collect();

        // Distance ascending, then score, rating, review count descending.
        // Compares the rounded distance shown in listings, so venues that display
        // the same distance fall through to the score tie-breaks.
        ranked.sort_by(|a, b| {
            cmp_option_asc(a.distance_km, b.distance_km)
                .then_with(|| b.score.total_cmp(&a.score))
                .then_with(|| cmp_option_desc(a.venue.rating, b.venue.rating))
                .then_with(|| b.venue.review_count.cmp(&a.venue.review_count))
        });

        finish(ranked, total_candidates, limit)
    }

    /// Run a validated proximity query
    pub fn find_nearby_query(&self, query: &NearbyQuery, venues: &[Venue]) -> RankResult {
        self.find_nearby(query.reference(), venues, query.radius_km, query.mode, query.limit)
    }

    /// City-wide "best of" ranking, no distance involved
    pub fn top_rated(
        &self,
        venues: &[Venue],
        mode: Option<ClassifyMode>,
        limit: usize,
    ) -> RankResult {
        let total_candidates = venues.len();

        let mut ranked: Vec<RankedVenue> = venues
            .iter()
            .filter_map(|venue| self.rank_venue(venue, mode))
            .collect();

        ranked.sort_by(|a, b| {
            b.score
                .total_cmp(&a.score)
                .then_with(|| cmp_option_desc(a.venue.rating, b.venue.rating))
                .then_with(|| b.venue.review_count.cmp(&a.venue.review_count))
        });

        finish(ranked, total_candidates, limit)
    }

    pub fn top_rated_listing(&self, query: &TopRatedQuery, venues: &[Venue]) -> TopRatedListing {
        TopRatedListing {
            mode: query.mode,
            result: self.top_rated(venues, query.mode, query.limit),
            generated_at: chrono::Utc::now(),
        }
    }

    /// Listing for one station page
    pub fn station_listing(
        &self,
        station: &Station,
        venues: &[Venue],
        radius_km: f64,
        mode: Option<ClassifyMode>,
        limit: usize,
    ) -> StationListing {
        StationListing {
            station: station.clone(),
            radius_km,
            mode,
            result: self.find_nearby(station.point(), venues, radius_km, mode, limit),
            generated_at: chrono::Utc::now(),
        }
    }

    /// Classify and score one venue; `None` when it fails the classification
    fn rank_venue(&self, venue: &Venue, mode: Option<ClassifyMode>) -> Option<RankedVenue> {
        let confidence = match mode {
            Some(mode) => {
                let classification = classify(venue, &self.profile, mode);
                if !classification.matches {
                    return None;
                }
                classification.confidence
            }
            None => None,
        };

        Some(RankedVenue {
            venue: venue.clone(),
            distance_km: None,
            score: composite_score(venue, &self.weights),
            confidence,
        })
    }
}

impl Default for Ranker {
    fn default() -> Self {
        Self::with_defaults()
    }
}

fn finish(mut ranked: Vec<RankedVenue>, total_candidates: usize, limit: usize) -> RankResult {
    let total_matches = ranked.len();
    ranked.truncate(limit);

    RankResult {
        venues: ranked,
        total_candidates,
        total_matches,
    }
}

/// Ascending, missing values last
fn cmp_option_asc(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Descending, missing values last
fn cmp_option_desc(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.total_cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
