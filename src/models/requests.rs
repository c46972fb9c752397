use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::{ClassifyMode, GeoPoint};

/// Proximity query around a reference point
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NearbyQuery {
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
    #[validate(range(exclusive_min = 0.0, max = 50.0))]
    #[serde(rename = "radiusKm", default = "default_radius_km")]
    pub radius_km: f64,
    #[validate(range(min = 1, max = 500))]
    #[serde(default = "default_limit")]
    pub limit: usize,
    /// `None` disables the dietary filter
    #[serde(default)]
    pub mode: Option<ClassifyMode>,
}

impl NearbyQuery {
    pub fn new(reference: GeoPoint, radius_km: f64) -> Self {
        Self {
            latitude: reference.latitude,
            longitude: reference.longitude,
            radius_km,
            limit: default_limit(),
            mode: Some(ClassifyMode::All),
        }
    }

    pub fn reference(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }
}

/// "Best of" listing query
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TopRatedQuery {
    #[validate(range(min = 1, max = 500))]
    #[serde(default = "default_limit")]
    pub limit: usize,
    #[serde(default)]
    pub mode: Option<ClassifyMode>,
}

fn default_radius_km() -> f64 {
    1.0
}

fn default_limit() -> usize {
    50
}
