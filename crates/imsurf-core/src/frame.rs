//! Runway-aligned local coordinate frame.
//!
//! Conversion uses feet-per-degree-latitude and feet-per-degree-longitude
//! scaled by cos(midpoint latitude): a locally accurate equirectangular
//! approximation, not full geodesy. The engine never operates beyond
//! ~6 NM of the runway, where this is plenty.

use crate::catalog::SurfaceCatalog;
use crate::geodesy::{self, EARTH_RADIUS_M, M_TO_FT};
use crate::models::{LatLon, RunwayEnd, RunwayGeometry, RunwayRelation, RunwaySide};

/// A point in the runway frame: origin at the midpoint, X along the
/// runway toward end2, Y perpendicular (positive to the right).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalXY {
    pub along_ft: f64,
    pub cross_ft: f64,
}

/// Project a geographic point into the runway frame.
pub fn to_local(point: LatLon, rwy: &RunwayGeometry) -> LocalXY {
    let ft_per_deg_lat = EARTH_RADIUS_M * std::f64::consts::PI / 180.0 * M_TO_FT;
    let ft_per_deg_lon = ft_per_deg_lat * rwy.midpoint.lat.to_radians().cos();

    let dn = (point.lat - rwy.midpoint.lat) * ft_per_deg_lat;
    let de = (point.lon - rwy.midpoint.lon) * ft_per_deg_lon;

    let brng = rwy.bearing_deg.to_radians();
    LocalXY {
        along_ft: dn * brng.cos() + de * brng.sin(),
        cross_ft: -dn * brng.sin() + de * brng.cos(),
    }
}

/// Compute the spatial relationship between a point and a runway.
///
/// Total function: returns a value for any input point, however far away.
pub fn project(point: LatLon, rwy: &RunwayGeometry) -> RunwayRelation {
    let local = to_local(point, rwy);
    relation_from_local(local, rwy)
}

pub(crate) fn relation_from_local(local: LocalXY, rwy: &RunwayGeometry) -> RunwayRelation {
    let catalog = SurfaceCatalog::for_class(rwy.class);
    let half_length = rwy.length_ft / 2.0;
    let extension = catalog.primary.extension_ft;
    let primary_half_width = catalog.primary.half_width_ft;

    let distance_from_centerline = local.cross_ft.abs();
    let side = if local.cross_ft < 0.0 {
        RunwaySide::Left
    } else {
        RunwaySide::Right
    };

    let nearer_end = if local.along_ft <= 0.0 {
        RunwayEnd::End1
    } else {
        RunwayEnd::End2
    };

    // Along-track overshoot past each threshold; 0 when abeam the runway.
    let beyond_end1 = (-(local.along_ft + half_length)).max(0.0);
    let beyond_end2 = (local.along_ft - half_length).max(0.0);
    let distance_from_nearest_threshold = match nearer_end {
        RunwayEnd::End1 => beyond_end1,
        RunwayEnd::End2 => beyond_end2,
    };

    // Same measurement from the primary surface ends.
    let beyond_primary1 = (-(local.along_ft + half_length + extension)).max(0.0);
    let beyond_primary2 = (local.along_ft - half_length - extension).max(0.0);
    let distance_from_nearest_primary_end = match nearer_end {
        RunwayEnd::End1 => beyond_primary1,
        RunwayEnd::End2 => beyond_primary2,
    };

    let within_primary = local.along_ft.abs() <= half_length + extension
        && distance_from_centerline <= primary_half_width;

    RunwayRelation {
        distance_from_centerline_ft: distance_from_centerline,
        along_track_from_midpoint_ft: local.along_ft,
        distance_from_nearest_threshold_ft: distance_from_nearest_threshold,
        distance_from_nearest_primary_end_ft: distance_from_nearest_primary_end,
        side,
        within_primary,
        nearer_end,
    }
}

/// Distance from a point to the centerline segment joining the two
/// primary-surface-end centers. All points within radius r of that segment
/// form the stadium shape shared by the inner horizontal, conical, and
/// outer horizontal surface bounds.
pub fn stadium_distance_ft(local: LocalXY, rwy: &RunwayGeometry) -> f64 {
    let catalog = SurfaceCatalog::for_class(rwy.class);
    let cap = rwy.length_ft / 2.0 + catalog.primary.extension_ft;
    geodesy::point_to_segment_distance(local.along_ft, local.cross_ft, -cap, 0.0, cap, 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RunwayClass;

    fn test_runway() -> RunwayGeometry {
        let end1 = LatLon { lat: 42.6140, lon: -82.8356 };
        let end2 = LatLon { lat: 42.6065, lon: -82.8203 };
        RunwayGeometry {
            end1,
            end2,
            midpoint: LatLon {
                lat: (end1.lat + end2.lat) / 2.0,
                lon: (end1.lon + end2.lon) / 2.0,
            },
            bearing_deg: geodesy::bearing_deg(end1, end2),
            length_ft: 9_002.0,
            width_ft: 150.0,
            class: RunwayClass::B,
        }
    }

    #[test]
    fn midpoint_projects_to_origin() {
        let rwy = test_runway();
        let relation = project(rwy.midpoint, &rwy);
        assert!(relation.distance_from_centerline_ft < 1e-9);
        assert!(relation.along_track_from_midpoint_ft.abs() < 1e-9);
        assert_eq!(relation.distance_from_nearest_threshold_ft, 0.0);
        assert_eq!(relation.distance_from_nearest_primary_end_ft, 0.0);
        assert!(relation.within_primary);
    }

    #[test]
    fn centerline_reflection_flips_side_keeps_distance() {
        let rwy = test_runway();
        let left = geodesy::offset(
            rwy.midpoint,
            geodesy::normalize_bearing(rwy.bearing_deg - 90.0),
            400.0,
        );
        let right = geodesy::offset(
            rwy.midpoint,
            geodesy::normalize_bearing(rwy.bearing_deg + 90.0),
            400.0,
        );
        let rl = project(left, &rwy);
        let rr = project(right, &rwy);
        assert_eq!(rl.side, RunwaySide::Left);
        assert_eq!(rr.side, RunwaySide::Right);
        assert!(
            (rl.distance_from_centerline_ft - rr.distance_from_centerline_ft).abs() < 1.0,
            "left {} right {}",
            rl.distance_from_centerline_ft,
            rr.distance_from_centerline_ft
        );
        assert!((rl.distance_from_centerline_ft - 400.0).abs() < 1.0);
    }

    #[test]
    fn point_beyond_threshold_measures_overshoot() {
        let rwy = test_runway();
        // 1,000 ft past end2 along the extended centerline.
        let p = geodesy::offset(rwy.midpoint, rwy.bearing_deg, rwy.length_ft / 2.0 + 1_000.0);
        let relation = project(p, &rwy);
        assert_eq!(relation.nearer_end, RunwayEnd::End2);
        assert!(
            (relation.distance_from_nearest_threshold_ft - 1_000.0).abs() < 5.0,
            "got {}",
            relation.distance_from_nearest_threshold_ft
        );
        assert!(
            (relation.distance_from_nearest_primary_end_ft - 800.0).abs() < 5.0,
            "got {}",
            relation.distance_from_nearest_primary_end_ft
        );
        assert!(!relation.within_primary);
    }

    #[test]
    fn abeam_point_has_zero_threshold_distance() {
        let rwy = test_runway();
        let p = geodesy::offset(
            rwy.midpoint,
            geodesy::normalize_bearing(rwy.bearing_deg + 90.0),
            2_000.0,
        );
        let relation = project(p, &rwy);
        assert_eq!(relation.distance_from_nearest_threshold_ft, 0.0);
        assert_eq!(relation.distance_from_nearest_primary_end_ft, 0.0);
        // 2,000 ft out is beyond the class B primary half-width.
        assert!(!relation.within_primary);
    }

    #[test]
    fn primary_rectangle_uses_class_half_width() {
        let rwy = test_runway();
        let inside = LocalXY { along_ft: 4_000.0, cross_ft: 700.0 };
        let outside = LocalXY { along_ft: 4_000.0, cross_ft: 800.0 };
        assert!(relation_from_local(inside, &rwy).within_primary);
        assert!(!relation_from_local(outside, &rwy).within_primary);
    }

    #[test]
    fn stadium_distance_matches_corridor_and_caps() {
        let rwy = test_runway();
        let cap = rwy.length_ft / 2.0 + 200.0;
        // Abeam the corridor: stadium distance is the cross-track distance.
        let abeam = LocalXY { along_ft: 0.0, cross_ft: 1_234.0 };
        assert!((stadium_distance_ft(abeam, &rwy) - 1_234.0).abs() < 1e-9);
        // Past the cap on centerline: distance past the primary end.
        let past = LocalXY { along_ft: cap + 500.0, cross_ft: 0.0 };
        assert!((stadium_distance_ft(past, &rwy) - 500.0).abs() < 1e-9);
        // Diagonal past the cap: euclidean to the cap center.
        let diag = LocalXY { along_ft: cap + 300.0, cross_ft: 400.0 };
        assert!((stadium_distance_ft(diag, &rwy) - 500.0).abs() < 1e-9);
    }
}
