use crate::core::distance::{calculate_bounding_box, distance_km, is_within_bounding_box};
use crate::models::{GeoPoint, NearbyVenue, Venue};

/// Distance from the reference point, or `None` when the venue has no coordinates
#[inline]
pub fn distance_to(reference: GeoPoint, venue: &Venue) -> Option<f64> {
    venue.location.map(|location| distance_km(reference, location))
}

/// Find venues within `radius_km` of `reference`, nearest first
///
/// Venues without coordinates are skipped, never placed at (0,0). The radius
/// is not validated here: a non-positive or NaN radius simply matches nothing.
/// Equal distances keep their input order.
pub fn venues_within_radius<'a>(
    reference: GeoPoint,
    venues: &'a [Venue],
    radius_km: f64,
) -> Vec<NearbyVenue<'a>> {
    let bbox = calculate_bounding_box(reference, radius_km);

    let mut nearby: Vec<NearbyVenue<'a>> = venues
        .iter()
        // Stage 1: coordinates present and inside the bounding box
        .filter(|venue| {
            venue
                .location
                .is_some_and(|location| is_within_bounding_box(location, &bbox))
        })
        // Stage 2: exact great-circle distance
        .filter_map(|venue| {
            let distance_km = distance_to(reference, venue)?;
            (distance_km <= radius_km).then_some(NearbyVenue { venue, distance_km })
        })
        .collect();

    nearby.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));

    nearby
}

#[cfg(test)]
mod tests {
    use super::*;

    const KINGS_CROSS: GeoPoint = GeoPoint { latitude: 51.5308, longitude: -0.1238 };

    fn venue_at(id: &str, lat: f64, lon: f64) -> Venue {
        let mut venue = Venue::new(id, format!("Venue {}", id));
        venue.location = Some(GeoPoint::new(lat, lon));
        venue
    }

    #[test]
    fn test_sorted_nearest_first() {
        let venues = vec![
            venue_at("far", 51.5340, -0.1280),
            venue_at("near", 51.5315, -0.1245),
            venue_at("mid", 51.5330, -0.1250),
        ];

        let nearby = venues_within_radius(KINGS_CROSS, &venues, 1.0);
        let ids: Vec<&str> = nearby.iter().map(|n| n.venue.id.as_str()).collect();

        assert_eq!(ids, vec!["near", "mid", "far"]);
    }

    #[test]
    fn test_excludes_out_of_radius() {
        let venues = vec![
            venue_at("in", 51.5315, -0.1245),
            venue_at("out", 51.5074, -0.1278),
        ];

        let nearby = venues_within_radius(KINGS_CROSS, &venues, 0.6);

        assert_eq!(nearby.len(), 1);
        assert_eq!(nearby[0].venue.id, "in");
    }

    #[test]
    fn test_missing_coordinates_excluded() {
        let venues = vec![Venue::new("nowhere", "No Coordinates Cafe")];
        assert!(venues_within_radius(KINGS_CROSS, &venues, 10_000.0).is_empty());
    }

    #[test]
    fn test_invalid_radius_matches_nothing() {
        let venues = vec![venue_at("in", 51.5315, -0.1245)];

        assert!(venues_within_radius(KINGS_CROSS, &venues, -1.0).is_empty());
        assert!(venues_within_radius(KINGS_CROSS, &venues, f64::NAN).is_empty());
    }

    #[test]
    fn test_finds_venue_across_antimeridian() {
        let reference = GeoPoint::new(0.0, 179.999);
        let venues = vec![venue_at("fiji", 0.0, -179.999), venue_at("far", 0.0, -179.5)];

        let nearby = venues_within_radius(reference, &venues, 1.0);

        assert_eq!(nearby.len(), 1);
        assert_eq!(nearby[0].venue.id, "fiji");
        assert!((nearby[0].distance_km - 0.2224).abs() < 0.001);
    }

    #[test]
    fn test_finds_venue_over_the_pole() {
        let reference = GeoPoint::new(80.0, 0.0);
        let venues = vec![venue_at("over_pole", 85.0, 180.0)];

        let nearby = venues_within_radius(reference, &venues, 3000.0);

        assert_eq!(nearby.len(), 1);
        assert!((nearby[0].distance_km - 1667.9).abs() < 1.0);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let venues = vec![
            venue_at("first", 51.5315, -0.1245),
            venue_at("second", 51.5315, -0.1245),
        ];

        let nearby = venues_within_radius(KINGS_CROSS, &venues, 1.0);
        assert_eq!(nearby[0].venue.id, "first");
        assert_eq!(nearby[1].venue.id, "second");
    }
}
