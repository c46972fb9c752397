use crate::models::{BoundingBox, GeoPoint};

/// Earth's radius in kilometers
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Calculate the Haversine distance between two points in kilometers
///
/// Treats the Earth as a sphere, which is accurate to well under 1% at city
/// scale. Inputs are not validated: a NaN coordinate yields a NaN distance.
///
/// # Arguments
/// * `a` - First point in degrees
/// * `b` - Second point in degrees
///
/// # Returns
/// Distance in kilometers
#[inline]
pub fn distance_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat1_rad = a.latitude.to_radians();
    let lat2_rad = b.latitude.to_radians();
    let delta_lat = (b.latitude - a.latitude).to_radians();
    let delta_lon = (b.longitude - a.longitude).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

/// Round a distance to two decimals for display
#[inline]
pub fn round_km(distance_km: f64) -> f64 {
    (distance_km * 100.0).round() / 100.0
}

/// Calculate a bounding box around a center point
///
/// Much cheaper than Haversine, used to pre-filter before the exact check.
/// 1° latitude ≈ 111km, which is slightly shorter than a degree on a 6371km
/// sphere, so the latitude band always contains the radius circle. The
/// longitude half-width is the larger of `radius / (111km * cos(latitude))`
/// and the exact spherical extent, which grows faster for large radii away
/// from the equator.
///
/// A circle that reaches a pole spans every longitude, so the box then has
/// infinite longitude bounds. A box that crosses ±180° keeps bounds outside
/// that range and [`is_within_bounding_box`] wraps the point to match.
pub fn calculate_bounding_box(center: GeoPoint, radius_km: f64) -> BoundingBox {
    let lat_delta = radius_km / 111.0;
    let min_lat = center.latitude - lat_delta;
    let max_lat = center.latitude + lat_delta;

    let cos_lat = center.latitude.to_radians().cos().abs();
    let angular = radius_km / EARTH_RADIUS_KM;
    let reach = angular.sin() / cos_lat;

    let reaches_pole = min_lat <= -90.0 || max_lat >= 90.0;
    let lon_delta = if reaches_pole || reach >= 1.0 {
        f64::INFINITY
    } else {
        (radius_km / (111.0 * cos_lat)).max(reach.asin().to_degrees())
    };

    if lon_delta >= 180.0 {
        return BoundingBox {
            min_lat,
            max_lat,
            min_lon: f64::NEG_INFINITY,
            max_lon: f64::INFINITY,
        };
    }

    BoundingBox {
        min_lat,
        max_lat,
        min_lon: center.longitude - lon_delta,
        max_lon: center.longitude + lon_delta,
    }
}

/// Check if a point is within a bounding box
///
/// Longitudes are also tried one turn east and west, so boxes that cross
/// the antimeridian still match points on the far side.
#[inline]
pub fn is_within_bounding_box(point: GeoPoint, bbox: &BoundingBox) -> bool {
    if !(point.latitude >= bbox.min_lat && point.latitude <= bbox.max_lat) {
        return false;
    }

    [point.longitude, point.longitude - 360.0, point.longitude + 360.0]
        .into_iter()
        .any(|lon| lon >= bbox.min_lon && lon <= bbox.max_lon)
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::HaversineDistance;

    const KINGS_CROSS: GeoPoint = GeoPoint { latitude: 51.5308, longitude: -0.1238 };

    #[test]
    fn test_distance_london_to_paris() {
        let london = GeoPoint::new(51.5074, -0.1278);
        let paris = GeoPoint::new(48.8566, 2.3522);

        let distance = distance_km(london, paris);
        assert!((distance - 344.0).abs() < 10.0, "Distance should be ~344km, got {}", distance);
    }

    #[test]
    fn test_distance_zero_and_symmetric() {
        let other = GeoPoint::new(51.5155, -0.0922);

        assert_eq!(distance_km(KINGS_CROSS, KINGS_CROSS), 0.0);
        assert_eq!(distance_km(KINGS_CROSS, other), distance_km(other, KINGS_CROSS));
    }

    #[test]
    fn test_nan_propagates() {
        let broken = GeoPoint::new(f64::NAN, -0.1238);
        assert!(distance_km(KINGS_CROSS, broken).is_nan());
    }

    #[test]
    fn test_agrees_with_geo_crate() {
        // geo uses the mean radius 6371.0088km, so allow a small relative gap
        let other = GeoPoint::new(51.5033, -0.1195);
        let ours = distance_km(KINGS_CROSS, other);
        let theirs =
            geo::Point::from(KINGS_CROSS).haversine_distance(&geo::Point::from(other)) / 1000.0;

        assert!((ours - theirs).abs() / theirs < 0.001);
    }

    #[test]
    fn test_round_km() {
        assert_eq!(round_km(0.0867), 0.09);
        assert_eq!(round_km(1.234), 1.23);
    }

    #[test]
    fn test_bounding_box() {
        let bbox = calculate_bounding_box(GeoPoint::new(40.7128, -74.0060), 10.0);

        assert!(bbox.min_lat < 40.7128);
        assert!(bbox.max_lat > 40.7128);
        assert!(bbox.min_lon < -74.0060);
        assert!(bbox.max_lon > -74.0060);

        // Check approximate size (20km / 111km per degree = ~0.18 degrees)
        let lat_span = bbox.max_lat - bbox.min_lat;
        assert!((lat_span - 0.18).abs() < 0.02, "Lat span should be ~0.18 degrees");
    }

    #[test]
    fn test_bounding_box_contains_radius_edge() {
        let radius = 0.6;
        let bbox = calculate_bounding_box(KINGS_CROSS, radius);

        // Points just inside the radius due north and due east
        let north = GeoPoint::new(KINGS_CROSS.latitude + 0.0053, KINGS_CROSS.longitude);
        let east = GeoPoint::new(KINGS_CROSS.latitude, KINGS_CROSS.longitude + 0.0086);
        assert!(distance_km(KINGS_CROSS, north) <= radius);
        assert!(distance_km(KINGS_CROSS, east) <= radius);
        assert!(is_within_bounding_box(north, &bbox));
        assert!(is_within_bounding_box(east, &bbox));
    }

    #[test]
    fn test_point_within_bbox() {
        let bbox = calculate_bounding_box(GeoPoint::new(40.7128, -74.0060), 10.0);

        assert!(is_within_bounding_box(GeoPoint::new(40.7128, -74.0060), &bbox));
        assert!(is_within_bounding_box(GeoPoint::new(40.71, -74.0), &bbox));
        assert!(!is_within_bounding_box(GeoPoint::new(50.0, -80.0), &bbox));
    }

    #[test]
    fn test_bounding_box_wraps_antimeridian() {
        let bbox = calculate_bounding_box(GeoPoint::new(0.0, 179.999), 1.0);

        assert!(bbox.max_lon > 180.0);
        assert!(is_within_bounding_box(GeoPoint::new(0.0, -179.999), &bbox));
        assert!(!is_within_bounding_box(GeoPoint::new(0.0, -179.0), &bbox));
    }

    #[test]
    fn test_bounding_box_reaching_pole_spans_all_longitudes() {
        let bbox = calculate_bounding_box(GeoPoint::new(80.0, 0.0), 3000.0);

        assert!(is_within_bounding_box(GeoPoint::new(85.0, 180.0), &bbox));
        assert!(is_within_bounding_box(GeoPoint::new(85.0, -90.0), &bbox));
    }

    #[test]
    fn test_bounding_box_covers_wide_circle_at_high_latitude() {
        // Within 3000km of (60, 0), further east than 3000 / (111 * cos 60) degrees
        let center = GeoPoint::new(60.0, 0.0);
        let edge = GeoPoint::new(76.0, 60.0);
        let bbox = calculate_bounding_box(center, 3000.0);

        assert!(distance_km(center, edge) <= 3000.0);
        assert!(is_within_bounding_box(edge, &bbox));
    }

    #[test]
    fn test_bounding_box_nan_radius_matches_nothing() {
        let bbox = calculate_bounding_box(KINGS_CROSS, f64::NAN);
        assert!(!is_within_bounding_box(KINGS_CROSS, &bbox));
    }
}
