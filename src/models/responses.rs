use serde::{Deserialize, Serialize};
use crate::models::domain::{ClassifyMode, RankedVenue, Station};

/// Ranked venues plus the counts behind them
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankResult {
    pub venues: Vec<RankedVenue>,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
    /// Venues that passed the geo and dietary filters, before truncation
    #[serde(rename = "totalMatches")]
    pub total_matches: usize,
}

/// Document handed to the presentation layer for one station page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StationListing {
    pub station: Station,
    #[serde(rename = "radiusKm")]
    pub radius_km: f64,
    pub mode: Option<ClassifyMode>,
    #[serde(flatten)]
    pub result: RankResult,
    #[serde(rename = "generatedAt")]
    pub generated_at: chrono::DateTime<chrono::Utc>,
}

/// Document for the city-wide "best of" page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopRatedListing {
    pub mode: Option<ClassifyMode>,
    #[serde(flatten)]
    pub result: RankResult,
    #[serde(rename = "generatedAt")]
    pub generated_at: chrono::DateTime<chrono::Utc>,
}
