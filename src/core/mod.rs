// Core algorithm exports
pub mod classify;
pub mod distance;
pub mod filters;
pub mod ranker;
pub mod scoring;

pub use classify::{classify, DietaryProfile};
pub use distance::{calculate_bounding_box, distance_km, is_within_bounding_box, round_km};
pub use filters::{distance_to, venues_within_radius};
pub use ranker::Ranker;
pub use scoring::{composite_score, MAX_SCORE};
