//! Venue Rank - proximity ranking and dietary classification for a city venue directory
//!
//! This library provides the ranking core behind the directory's "near this
//! station" and "best of" listings. It normalizes the static venue dataset,
//! finds venues around a reference point, tags them under a dietary category
//! and orders them by an internally computed composite score.

pub mod config;
pub mod core;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use crate::core::{
    classify, composite_score, distance_km, venues_within_radius, DietaryProfile, Ranker,
};
pub use crate::models::{
    Classification, ClassifyMode, Confidence, GeoPoint, RankResult, RankedVenue, ScoringWeights,
    Station, Venue,
};
