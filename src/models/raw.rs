//! Raw dataset shapes.
//!
//! The venue dataset is hand-maintained JSON and its shapes drift between
//! entries: `dietary_tags` is sometimes an object of booleans and sometimes an
//! array of strings, hygiene ratings can be numbers or inspection statuses, and
//! coordinate keys vary. Everything is normalized here so the ranking code only
//! ever sees a [`Venue`].

use crate::models::domain::{DietaryCategory, GeoPoint, Venue};
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};

/// Venue entry as it appears in the dataset file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawVenue {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(alias = "latitude", default)]
    pub lat: Option<RawNumber>,
    #[serde(alias = "lon", alias = "longitude", default)]
    pub lng: Option<RawNumber>,
    #[serde(default)]
    pub rating: Option<RawNumber>,
    #[serde(alias = "user_ratings_total", alias = "reviews", default)]
    pub review_count: Option<RawNumber>,
    #[serde(alias = "fsa_rating", alias = "hygiene_score", default)]
    pub hygiene_rating: Option<RawNumber>,
    #[serde(alias = "cuisine", default)]
    pub cuisines: Option<RawStringList>,
    #[serde(default)]
    pub types: Option<RawStringList>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub dietary_tags: Option<RawDietaryTags>,
    #[serde(default)]
    pub halal: Option<serde_json::Value>,
    #[serde(alias = "vicinity", default)]
    pub address: Option<String>,
    #[serde(alias = "neighbourhood", alias = "neighborhood", default)]
    pub area: Option<String>,
    #[serde(default)]
    pub price_level: Option<RawNumber>,
}

/// Dietary tags are either `{"halal": true}` or `["halal"]`
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawDietaryTags {
    List(Vec<String>),
    Flags(BTreeMap<String, serde_json::Value>),
}

/// Numbers appear both bare and quoted; hygiene ratings can also be an
/// inspection status string
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawNumber {
    Number(f64),
    Text(String),
}

/// A single string or a list of strings
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawStringList {
    One(String),
    Many(Vec<String>),
}

impl RawStringList {
    fn into_vec(list: Option<RawStringList>) -> Vec<String> {
        match list {
            Some(RawStringList::One(s)) => vec![s],
            Some(RawStringList::Many(list)) => list,
            None => Vec::new(),
        }
    }
}

impl RawDietaryTags {
    fn categories(&self) -> BTreeSet<DietaryCategory> {
        match self {
            RawDietaryTags::List(tags) => tags
                .iter()
                .filter_map(|tag| DietaryCategory::from_tag(tag))
                .collect(),
            RawDietaryTags::Flags(flags) => flags
                .iter()
                .filter(|(_, value)| is_truthy(value))
                .filter_map(|(tag, _)| DietaryCategory::from_tag(tag))
                .collect(),
        }
    }
}

fn is_truthy(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Bool(b) => *b,
        serde_json::Value::String(s) => {
            matches!(s.trim().to_lowercase().as_str(), "yes" | "true" | "y")
        }
        serde_json::Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        _ => false,
    }
}

impl RawNumber {
    /// Finite numeric value, or `None` for text like "AwaitingInspection"
    fn value(&self) -> Option<f64> {
        let value = match self {
            RawNumber::Number(n) => *n,
            RawNumber::Text(s) => s.trim().parse::<f64>().ok()?,
        };
        value.is_finite().then_some(value)
    }

    /// Whole number in `0..=max`
    fn whole(&self, max: f64) -> Option<f64> {
        self.value()
            .filter(|value| (0.0..=max).contains(value) && value.fract() == 0.0)
    }

    /// Hygiene score in 0..=5
    fn hygiene_score(&self) -> Option<u8> {
        self.whole(5.0).map(|value| value as u8)
    }
}

fn number(field: &Option<RawNumber>) -> Option<f64> {
    field.as_ref().and_then(RawNumber::value)
}

impl RawVenue {
    /// Normalize into the canonical venue shape
    pub fn into_venue(self, id: String) -> Venue {
        let location = match (number(&self.lat), number(&self.lng)) {
            (Some(lat), Some(lng)) => Some(GeoPoint::new(lat, lng)),
            _ => None,
        };

        let rating = match number(&self.rating) {
            Some(r) if (0.0..=5.0).contains(&r) => Some(r),
            Some(r) => {
                tracing::warn!("Dropping out-of-range rating {} for venue {}", r, id);
                None
            }
            None => None,
        };

        let review_count = self
            .review_count
            .as_ref()
            .and_then(|count| count.whole(u32::MAX as f64))
            .map(|count| count as u32);
        let hygiene_score = self.hygiene_rating.as_ref().and_then(RawNumber::hygiene_score);
        let price_level = self
            .price_level
            .as_ref()
            .and_then(|level| level.whole(u8::MAX as f64))
            .map(|level| level as u8);

        let mut dietary = self
            .dietary_tags
            .as_ref()
            .map(RawDietaryTags::categories)
            .unwrap_or_default();
        if self.halal.as_ref().is_some_and(is_truthy) {
            dietary.insert(DietaryCategory::Halal);
        }

        let name = self.name.unwrap_or_else(|| id.clone());

        Venue {
            id,
            name,
            location,
            rating,
            review_count,
            hygiene_score,
            cuisines: RawStringList::into_vec(self.cuisines),
            types: RawStringList::into_vec(self.types),
            description: self.description,
            dietary,
            address: self.address,
            area: self.area,
            price_level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Venue {
        let raw: RawVenue = serde_json::from_str(json).unwrap();
        raw.into_venue("v1".to_string())
    }

    #[test]
    fn test_dietary_tags_as_object() {
        let venue = parse(r#"{"name": "A", "dietary_tags": {"halal": true, "vegan": false}}"#);
        assert!(venue.has_dietary_flag(DietaryCategory::Halal));
        assert!(!venue.has_dietary_flag(DietaryCategory::Vegan));
    }

    #[test]
    fn test_dietary_tags_as_array() {
        let venue = parse(r#"{"name": "A", "dietary_tags": ["Halal", "gluten-free", "spicy"]}"#);
        assert_eq!(venue.dietary.len(), 2);
        assert!(venue.has_dietary_flag(DietaryCategory::GlutenFree));
    }

    #[test]
    fn test_top_level_halal_marker() {
        let venue = parse(r#"{"name": "A", "halal": true}"#);
        assert!(venue.has_dietary_flag(DietaryCategory::Halal));
    }

    #[test]
    fn test_missing_coordinate_is_not_defaulted() {
        let venue = parse(r#"{"name": "A", "lat": 51.5}"#);
        assert!(venue.location.is_none());

        let venue = parse(r#"{"name": "A", "latitude": 51.5, "lon": -0.12}"#);
        assert_eq!(venue.location, Some(GeoPoint::new(51.5, -0.12)));
    }

    #[test]
    fn test_hygiene_shapes() {
        assert_eq!(parse(r#"{"fsa_rating": 4}"#).hygiene_score, Some(4));
        assert_eq!(parse(r#"{"fsa_rating": "5"}"#).hygiene_score, Some(5));
        assert_eq!(parse(r#"{"fsa_rating": "AwaitingInspection"}"#).hygiene_score, None);
        assert_eq!(parse(r#"{"hygiene_rating": 9}"#).hygiene_score, None);
    }

    #[test]
    fn test_out_of_range_rating_dropped() {
        assert_eq!(parse(r#"{"rating": 7.5}"#).rating, None);
        assert_eq!(parse(r#"{"rating": 4.5, "user_ratings_total": 120}"#).review_count, Some(120));
    }

    #[test]
    fn test_single_cuisine_string() {
        let venue = parse(r#"{"cuisine": "Turkish"}"#);
        assert_eq!(venue.cuisines, vec!["Turkish"]);
        assert_eq!(venue.name, "v1");
    }

    #[test]
    fn test_lenient_number_shapes() {
        let venue = parse(
            r#"{"lat": "51.53", "lng": -0.12, "rating": "4.5",
                "user_ratings_total": 120.0, "price_level": "2"}"#,
        );

        assert_eq!(venue.location, Some(GeoPoint::new(51.53, -0.12)));
        assert_eq!(venue.rating, Some(4.5));
        assert_eq!(venue.review_count, Some(120));
        assert_eq!(venue.price_level, Some(2));

        assert_eq!(parse(r#"{"reviews": -3}"#).review_count, None);
        assert_eq!(parse(r#"{"rating": "n/a"}"#).rating, None);
    }

    #[test]
    fn test_null_and_single_types() {
        assert!(parse(r#"{"types": null}"#).types.is_empty());
        assert_eq!(parse(r#"{"types": "restaurant"}"#).types, vec!["restaurant"]);
    }

    #[test]
    fn test_halal_marker_as_text() {
        assert!(parse(r#"{"halal": "yes"}"#).has_dietary_flag(DietaryCategory::Halal));
        assert!(!parse(r#"{"halal": false}"#).has_dietary_flag(DietaryCategory::Halal));
    }
}
