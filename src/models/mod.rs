// Model exports
pub mod domain;
pub mod raw;
pub mod requests;
pub mod responses;

pub use domain::{
    BoundingBox, Classification, ClassifyMode, Confidence, DietaryCategory, GeoPoint, NearbyVenue,
    RankedVenue, ScoringWeights, Station, Venue,
};
pub use raw::{RawDietaryTags, RawNumber, RawVenue};
pub use requests::{NearbyQuery, TopRatedQuery};
pub use responses::{RankResult, StationListing, TopRatedListing};
