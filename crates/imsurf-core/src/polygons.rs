//! Surface boundary sampling for map display.
//!
//! Each generator returns a closed ring of vertices (first == last)
//! traced with [`geodesy::offset`]. This is a thin derivative of the
//! evaluation primitives; nothing here feeds back into the evaluation
//! itself.

use crate::catalog::SurfaceCatalog;
use crate::geodesy::{self, normalize_bearing};
use crate::models::{LatLon, RunwayGeometry};

const DEFAULT_POINTS_PER_ARC: usize = 48;

/// Left/right pair of rings flanking the runway.
#[derive(Debug, Clone)]
pub struct SideRings {
    pub left: Vec<LatLon>,
    pub right: Vec<LatLon>,
}

/// Rings off each runway end.
#[derive(Debug, Clone)]
pub struct EndRings {
    pub end1: Vec<LatLon>,
    pub end2: Vec<LatLon>,
}

/// The runway pavement rectangle.
pub fn runway_ring(rwy: &RunwayGeometry) -> Vec<LatLon> {
    rectangle_ring(rwy, rwy.end1, rwy.end2, rwy.width_ft / 2.0)
}

/// The primary surface rectangle: class half-width, extended 200 ft past
/// each threshold.
pub fn primary_surface_ring(rwy: &RunwayGeometry) -> Vec<LatLon> {
    let catalog = SurfaceCatalog::for_class(rwy.class);
    let (ext1, ext2) = primary_end_centers(rwy, catalog);
    rectangle_ring(rwy, ext1, ext2, catalog.primary.half_width_ft)
}

/// Both approach-departure trapezoids, one off each runway end.
pub fn approach_departure_rings(rwy: &RunwayGeometry) -> EndRings {
    let reverse = normalize_bearing(rwy.bearing_deg + 180.0);
    EndRings {
        end1: approach_trapezoid(rwy, rwy.end1, reverse),
        end2: approach_trapezoid(rwy, rwy.end2, rwy.bearing_deg),
    }
}

fn approach_trapezoid(rwy: &RunwayGeometry, end: LatLon, outward: f64) -> Vec<LatLon> {
    let catalog = SurfaceCatalog::for_class(rwy.class);
    let criteria = &catalog.approach_departure;
    let extension = catalog.primary.extension_ft;
    let perp_l = normalize_bearing(outward - 90.0);
    let perp_r = normalize_bearing(outward + 90.0);

    let near = geodesy::offset(end, outward, extension);
    let far = geodesy::offset(end, outward, extension + criteria.length_ft);

    let p1 = geodesy::offset(near, perp_l, criteria.inner_half_width_ft);
    let p2 = geodesy::offset(near, perp_r, criteria.inner_half_width_ft);
    let p3 = geodesy::offset(far, perp_r, criteria.outer_half_width_ft);
    let p4 = geodesy::offset(far, perp_l, criteria.outer_half_width_ft);
    vec![p1, p2, p3, p4, p1]
}

/// The two transitional side strips flanking the primary surface.
pub fn transitional_rings(rwy: &RunwayGeometry) -> SideRings {
    let catalog = SurfaceCatalog::for_class(rwy.class);
    let inner_half = catalog.primary.half_width_ft;
    let outer_half = inner_half + catalog.transitional_extent_ft();
    let perp_l = normalize_bearing(rwy.bearing_deg - 90.0);
    let perp_r = normalize_bearing(rwy.bearing_deg + 90.0);
    let (ext1, ext2) = primary_end_centers(rwy, catalog);

    let strip = |perp: f64| {
        let inner1 = geodesy::offset(ext1, perp, inner_half);
        let inner2 = geodesy::offset(ext2, perp, inner_half);
        let outer2 = geodesy::offset(ext2, perp, outer_half);
        let outer1 = geodesy::offset(ext1, perp, outer_half);
        vec![inner1, inner2, outer2, outer1, inner1]
    };

    SideRings {
        left: strip(perp_l),
        right: strip(perp_r),
    }
}

/// Inner horizontal boundary: stadium at the inner radius.
pub fn inner_horizontal_ring(rwy: &RunwayGeometry) -> Vec<LatLon> {
    let catalog = SurfaceCatalog::for_class(rwy.class);
    stadium_ring(rwy, catalog.inner_horizontal.radius_ft, DEFAULT_POINTS_PER_ARC)
}

/// Conical outer boundary: stadium at inner radius + conical extent.
pub fn conical_outer_ring(rwy: &RunwayGeometry) -> Vec<LatLon> {
    let catalog = SurfaceCatalog::for_class(rwy.class);
    stadium_ring(rwy, catalog.conical_outer_radius_ft(), DEFAULT_POINTS_PER_ARC)
}

/// Outer horizontal boundary: stadium at the outer radius.
pub fn outer_horizontal_ring(rwy: &RunwayGeometry) -> Vec<LatLon> {
    let catalog = SurfaceCatalog::for_class(rwy.class);
    stadium_ring(rwy, catalog.outer_horizontal.radius_ft, DEFAULT_POINTS_PER_ARC)
}

/// Stadium ring: two semicircular arcs centered on the primary surface
/// ends, joined by the tangent lines.
pub fn stadium_ring(rwy: &RunwayGeometry, radius_ft: f64, points_per_arc: usize) -> Vec<LatLon> {
    let catalog = SurfaceCatalog::for_class(rwy.class);
    let (center1, center2) = primary_end_centers(rwy, catalog);
    let points_per_arc = points_per_arc.max(1);

    let mut ring = Vec::with_capacity(2 * points_per_arc + 3);

    // Arc around end2, sweeping clockwise from the right perpendicular.
    let start2 = rwy.bearing_deg + 90.0;
    for i in 0..=points_per_arc {
        let angle = normalize_bearing(start2 - 180.0 * i as f64 / points_per_arc as f64);
        ring.push(geodesy::offset(center2, angle, radius_ft));
    }

    // Arc around end1, sweeping clockwise from the left perpendicular.
    let start1 = rwy.bearing_deg - 90.0;
    for i in 0..=points_per_arc {
        let angle = normalize_bearing(start1 - 180.0 * i as f64 / points_per_arc as f64);
        ring.push(geodesy::offset(center1, angle, radius_ft));
    }

    ring.push(ring[0]);
    ring
}

fn rectangle_ring(
    rwy: &RunwayGeometry,
    end1: LatLon,
    end2: LatLon,
    half_width_ft: f64,
) -> Vec<LatLon> {
    let perp_l = normalize_bearing(rwy.bearing_deg - 90.0);
    let perp_r = normalize_bearing(rwy.bearing_deg + 90.0);

    let p1 = geodesy::offset(end1, perp_l, half_width_ft);
    let p2 = geodesy::offset(end1, perp_r, half_width_ft);
    let p3 = geodesy::offset(end2, perp_r, half_width_ft);
    let p4 = geodesy::offset(end2, perp_l, half_width_ft);
    vec![p1, p2, p3, p4, p1]
}

/// Centers of the two primary-surface ends (200 ft past each threshold).
fn primary_end_centers(rwy: &RunwayGeometry, catalog: &SurfaceCatalog) -> (LatLon, LatLon) {
    let reverse = normalize_bearing(rwy.bearing_deg + 180.0);
    let extension = catalog.primary.extension_ft;
    (
        geodesy::offset(rwy.end1, reverse, extension),
        geodesy::offset(rwy.end2, rwy.bearing_deg, extension),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame;
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

    fn assert_closed(ring: &[LatLon]) {
        let first = ring.first().unwrap();
        let last = ring.last().unwrap();
        assert_eq!(first.lat, last.lat);
        assert_eq!(first.lon, last.lon);
    }

    #[test]
    fn rectangles_are_closed_quads() {
        let rwy = test_runway();
        for ring in [runway_ring(&rwy), primary_surface_ring(&rwy)] {
            assert_eq!(ring.len(), 5);
            assert_closed(&ring);
        }
    }

    #[test]
    fn runway_ring_spans_the_width() {
        let rwy = test_runway();
        let ring = runway_ring(&rwy);
        let across = geodesy::distance_ft(ring[0], ring[1]);
        assert!((across - rwy.width_ft).abs() < 1.0, "got {across}");
    }

    #[test]
    fn approach_rings_flank_both_ends() {
        let rwy = test_runway();
        let rings = approach_departure_rings(&rwy);
        for ring in [&rings.end1, &rings.end2] {
            assert_eq!(ring.len(), 5);
            assert_closed(ring);
        }
        // Far edge of the trapezoid is the full outer width across.
        let far = geodesy::distance_ft(rings.end2[2], rings.end2[3]);
        assert!((far - 2.0 * 6_625.0).abs() < 20.0, "got {far}");
    }

    #[test]
    fn transitional_rings_sit_beyond_primary_edge() {
        let rwy = test_runway();
        let rings = transitional_rings(&rwy);
        for ring in [&rings.left, &rings.right] {
            assert_closed(ring);
            for vertex in &ring[..ring.len() - 1] {
                let relation = frame::project(*vertex, &rwy);
                assert!(relation.distance_from_centerline_ft > 740.0);
                assert!(relation.distance_from_centerline_ft < 1_810.0);
            }
        }
    }

    #[test]
    fn stadium_ring_vertices_lie_at_radius() {
        let rwy = test_runway();
        for (ring, radius) in [
            (inner_horizontal_ring(&rwy), 7_500.0),
            (conical_outer_ring(&rwy), 14_500.0),
            (outer_horizontal_ring(&rwy), 30_000.0),
        ] {
            assert_closed(&ring);
            for vertex in &ring[..ring.len() - 1] {
                let local = frame::to_local(*vertex, &rwy);
                let d = frame::stadium_distance_ft(local, &rwy);
                // Equirectangular projection error grows with radius; allow
                // a small relative tolerance.
                assert!(
                    (d - radius).abs() < radius * 0.005 + 5.0,
                    "radius {radius}: got {d}"
                );
            }
        }
    }
}
