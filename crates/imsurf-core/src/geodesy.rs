//! Spherical-earth point math for obstruction evaluation.
//!
//! All routines are pure functions over a sphere of radius
//! [`EARTH_RADIUS_M`]. Accuracy is local-area only (no antimeridian or
//! pole handling), which is acceptable at airfield scale where nothing
//! lies more than ~30,000 ft from the runway.

use crate::models::LatLon;

pub const EARTH_RADIUS_M: f64 = 6_371_000.0;
pub const FT_TO_M: f64 = 0.3048;
pub const M_TO_FT: f64 = 3.28084;

/// Offset a point by a true bearing (degrees) and distance (feet).
///
/// Direct geodesic solution on the sphere. The bearing is normalized
/// mod 360 before use; a zero distance returns the origin unchanged.
pub fn offset(origin: LatLon, bearing_deg: f64, distance_ft: f64) -> LatLon {
    if distance_ft.abs() <= f64::EPSILON {
        return origin;
    }

    let d = distance_ft * FT_TO_M / EARTH_RADIUS_M; // angular distance
    let brng = normalize_bearing(bearing_deg).to_radians();
    let lat1 = origin.lat.to_radians();
    let lon1 = origin.lon.to_radians();

    let sin_lat2 = lat1.sin() * d.cos() + lat1.cos() * d.sin() * brng.cos();
    let lat2 = sin_lat2.clamp(-1.0, 1.0).asin();

    let y = brng.sin() * d.sin() * lat1.cos();
    let x = d.cos() - lat1.sin() * lat2.sin();
    let lon2 = lon1 + y.atan2(x);

    LatLon {
        lat: lat2.to_degrees(),
        lon: lon2.to_degrees(),
    }
}

/// Haversine great-circle distance between two points, in feet.
///
/// Symmetric: `distance_ft(a, b) == distance_ft(b, a)`.
pub fn distance_ft(a: LatLon, b: LatLon) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let dlat = (b.lat - a.lat).to_radians();
    let dlon = (b.lon - a.lon).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    c * EARTH_RADIUS_M * M_TO_FT
}

/// Initial true bearing from `a` to `b`, degrees in [0, 360).
///
/// Returns 0.0 when `a == b` (the bearing is undefined there; atan2(0, 0)
/// is 0 and we keep that rather than returning NaN).
pub fn bearing_deg(a: LatLon, b: LatLon) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let dlon = (b.lon - a.lon).to_radians();

    let y = dlon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * dlon.cos();
    normalize_bearing(y.atan2(x).to_degrees())
}

/// Normalize a bearing to [0, 360).
pub fn normalize_bearing(deg: f64) -> f64 {
    deg.rem_euclid(360.0)
}

/// Minimum distance from a point to a line segment in planar coordinates.
///
/// Projection onto the segment line is clamped to [0, 1], so the result is
/// the distance to the nearest point of the segment itself. Tracing all
/// points within a fixed radius of a segment with this primitive yields the
/// stadium shape used by the horizontal and conical surface bounds.
pub fn point_to_segment_distance(
    px: f64,
    py: f64,
    ax: f64,
    ay: f64,
    bx: f64,
    by: f64,
) -> f64 {
    let dx = bx - ax;
    let dy = by - ay;
    let len_sq = dx * dx + dy * dy;

    if len_sq < 1e-9 {
        // Segment is essentially a point
        return ((px - ax).powi(2) + (py - ay).powi(2)).sqrt();
    }

    let t = (((px - ax) * dx + (py - ay) * dy) / len_sq).clamp(0.0, 1.0);
    let cx = ax + t * dx;
    let cy = ay + t * dy;
    ((px - cx).powi(2) + (py - cy).powi(2)).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORIGIN: LatLon = LatLon {
        lat: 42.608,
        lon: -82.832,
    };

    #[test]
    fn offset_zero_distance_returns_origin() {
        let p = offset(ORIGIN, 123.0, 0.0);
        assert_eq!(p.lat, ORIGIN.lat);
        assert_eq!(p.lon, ORIGIN.lon);
    }

    #[test]
    fn offset_distance_round_trip() {
        // distance(origin, offset(origin, b, d)) should recover d within
        // 0.5 ft for airfield-scale distances.
        for bearing in [0.0, 45.0, 90.0, 137.5, 180.0, 266.0, 359.0] {
            for d in [1.0, 150.0, 7_500.0, 30_000.0] {
                let p = offset(ORIGIN, bearing, d);
                let back = distance_ft(ORIGIN, p);
                assert!(
                    (back - d).abs() < 0.5,
                    "bearing {bearing} d {d}: got {back}"
                );
            }
        }
    }

    #[test]
    fn distance_is_symmetric() {
        let a = LatLon { lat: 42.6140, lon: -82.8356 };
        let b = LatLon { lat: 42.6065, lon: -82.8203 };
        assert!((distance_ft(a, b) - distance_ft(b, a)).abs() < 1e-9);
    }

    #[test]
    fn distance_one_degree_latitude() {
        // 1 degree of latitude is ~364,000 ft on this sphere.
        let a = LatLon { lat: 0.0, lon: 0.0 };
        let b = LatLon { lat: 1.0, lon: 0.0 };
        let d = distance_ft(a, b);
        assert!((d - 364_812.0).abs() < 500.0, "got {d}");
    }

    #[test]
    fn bearing_cardinal_directions() {
        let a = LatLon { lat: 42.0, lon: -82.0 };
        let north = LatLon { lat: 42.1, lon: -82.0 };
        let east = LatLon { lat: 42.0, lon: -81.9 };
        assert!(bearing_deg(a, north).abs() < 0.01);
        assert!((bearing_deg(a, east) - 90.0).abs() < 0.1);
    }

    #[test]
    fn bearing_identical_points_is_zero() {
        assert_eq!(bearing_deg(ORIGIN, ORIGIN), 0.0);
    }

    #[test]
    fn bearing_offset_round_trip() {
        let p = offset(ORIGIN, 217.0, 12_000.0);
        let brg = bearing_deg(ORIGIN, p);
        assert!((brg - 217.0).abs() < 0.05, "got {brg}");
    }

    #[test]
    fn normalize_bearing_wraps() {
        assert_eq!(normalize_bearing(0.0), 0.0);
        assert_eq!(normalize_bearing(360.0), 0.0);
        assert!((normalize_bearing(-90.0) - 270.0).abs() < 1e-12);
        assert!((normalize_bearing(725.0) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn segment_distance_beside_segment() {
        // Point abeam the middle of a horizontal segment.
        let d = point_to_segment_distance(5.0, 3.0, 0.0, 0.0, 10.0, 0.0);
        assert!((d - 3.0).abs() < 1e-12);
    }

    #[test]
    fn segment_distance_past_endpoint() {
        // Projection clamps to the endpoint, giving the hypotenuse.
        let d = point_to_segment_distance(14.0, 3.0, 0.0, 0.0, 10.0, 0.0);
        assert!((d - 5.0).abs() < 1e-12);
    }

    #[test]
    fn segment_distance_degenerate_segment() {
        let d = point_to_segment_distance(3.0, 4.0, 0.0, 0.0, 0.0, 0.0);
        assert!((d - 5.0).abs() < 1e-12);
    }
}
