use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// A position on the Earth's surface in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

impl From<GeoPoint> for geo::Point<f64> {
    fn from(point: GeoPoint) -> Self {
        geo::Point::new(point.longitude, point.latitude)
    }
}

impl From<geo::Point<f64>> for GeoPoint {
    fn from(point: geo::Point<f64>) -> Self {
        Self {
            latitude: point.y(),
            longitude: point.x(),
        }
    }
}

/// Dietary categories a venue can be flagged with
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DietaryCategory {
    Halal,
    Kosher,
    Vegan,
    Vegetarian,
    GlutenFree,
}

impl DietaryCategory {
    /// Lowercase name used for keyword matching
    pub fn as_str(&self) -> &'static str {
        match self {
            DietaryCategory::Halal => "halal",
            DietaryCategory::Kosher => "kosher",
            DietaryCategory::Vegan => "vegan",
            DietaryCategory::Vegetarian => "vegetarian",
            DietaryCategory::GlutenFree => "gluten free",
        }
    }

    /// Parse a free-form dataset tag such as `"Halal"`, `"gluten_free"` or `"gluten-free"`
    pub fn from_tag(tag: &str) -> Option<Self> {
        let normalized = tag.trim().to_lowercase().replace(['_', '-'], " ");
        match normalized.as_str() {
            "halal" => Some(DietaryCategory::Halal),
            "kosher" => Some(DietaryCategory::Kosher),
            "vegan" => Some(DietaryCategory::Vegan),
            "vegetarian" => Some(DietaryCategory::Vegetarian),
            "gluten free" | "glutenfree" => Some(DietaryCategory::GlutenFree),
            _ => None,
        }
    }
}

impl fmt::Display for DietaryCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical venue record, normalized at ingestion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Venue {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub location: Option<GeoPoint>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(rename = "reviewCount", default)]
    pub review_count: Option<u32>,
    #[serde(rename = "hygieneScore", default)]
    pub hygiene_score: Option<u8>,
    #[serde(default)]
    pub cuisines: Vec<String>,
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub dietary: BTreeSet<DietaryCategory>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub area: Option<String>,
    #[serde(rename = "priceLevel", default)]
    pub price_level: Option<u8>,
}

impl Venue {
    /// Create a venue with only an id and a name; every signal absent
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            location: None,
            rating: None,
            review_count: None,
            hygiene_score: None,
            cuisines: Vec::new(),
            types: Vec::new(),
            description: None,
            dietary: BTreeSet::new(),
            address: None,
            area: None,
            price_level: None,
        }
    }

    /// Helper to check for an explicit dietary flag
    pub fn has_dietary_flag(&self, category: DietaryCategory) -> bool {
        self.dietary.contains(&category)
    }
}

/// A fixed point of interest used as the centre of proximity queries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub name: String,
    pub slug: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Station {
    pub fn point(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }
}

/// Classification certainty tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    /// Explicit flag or strong textual signal
    Verified,
    /// Inferred from cuisine heuristics
    Community,
}

/// Outcome of classifying one venue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub matches: bool,
    pub confidence: Option<Confidence>,
}

impl Classification {
    pub fn verified() -> Self {
        Self {
            matches: true,
            confidence: Some(Confidence::Verified),
        }
    }

    pub fn community() -> Self {
        Self {
            matches: true,
            confidence: Some(Confidence::Community),
        }
    }

    pub fn none() -> Self {
        Self {
            matches: false,
            confidence: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassifyMode {
    /// Explicit flags and keyword signals only
    Strict,
    /// Strict signals plus cuisine-based inference
    #[default]
    All,
}

/// Venue found by a proximity query, with its raw distance
#[derive(Debug, Clone)]
pub struct NearbyVenue<'a> {
    pub venue: &'a Venue,
    pub distance_km: f64,
}

/// Ranked result entry; derived fields are recomputed on every query
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedVenue {
    #[serde(flatten)]
    pub venue: Venue,
    #[serde(rename = "distanceKm", skip_serializing_if = "Option::is_none", default)]
    pub distance_km: Option<f64>,
    /// Internally computed composite, not an official rating
    #[serde(rename = "compositeScore")]
    pub score: f64,
    #[serde(default)]
    pub confidence: Option<Confidence>,
}

/// Geospatial bounding box
#[derive(Debug, Clone, Copy)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

/// Composite score weights
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub rating: f64,
    pub reviews: f64,
    pub hygiene: f64,
    /// Review count at which the volume signal saturates
    pub review_saturation: u32,
    /// Count a hygiene score of 0 as a real inspection result instead of "absent"
    pub zero_hygiene_is_signal: bool,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            rating: 0.6,
            reviews: 0.2,
            hygiene: 0.2,
            review_saturation: 1000,
            zero_hygiene_is_signal: false,
        }
    }
}
