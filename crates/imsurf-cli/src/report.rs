//! Plain-text rendering of an obstruction analysis.

use imsurf_core::{ObstructionAnalysis, RunwaySide};
use std::fmt::Write;

/// Render a full evaluation report.
///
/// The waiver guidance lines are reproduced verbatim, in order.
pub fn render(analysis: &ObstructionAnalysis, icao: &str, runway_id: &str) -> String {
    let mut out = String::new();

    let verdict = if analysis.has_violation {
        "VIOLATION DETECTED"
    } else {
        "NO VIOLATION"
    };
    let _ = writeln!(out, "Obstruction Evaluation: {icao} runway {runway_id}");
    let _ = writeln!(
        out,
        "Point: {:.6}, {:.6}   Height: {:.1} ft AGL",
        analysis.point.lat, analysis.point.lon, analysis.obstruction_height_agl_ft
    );
    let _ = writeln!(
        out,
        "Ground: {:.1} ft MSL   Obstruction top: {:.1} ft MSL",
        analysis.ground_elevation_msl_ft, analysis.obstruction_top_msl_ft
    );
    let side = match analysis.relation.side {
        RunwaySide::Left => "left",
        RunwaySide::Right => "right",
    };
    let _ = writeln!(
        out,
        "Centerline distance: {:.0} ft ({side} side)",
        analysis.relation.distance_from_centerline_ft
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "Result: {verdict}");
    match analysis.controlling_evaluation() {
        Some(controlling) => {
            let _ = writeln!(
                out,
                "Controlling surface: {} (max {:.1} ft MSL)",
                controlling.surface_name, controlling.max_allowable_height_msl_ft
            );
        }
        None => {
            let _ = writeln!(out, "Controlling surface: none (outside all surfaces)");
        }
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "Surface analysis:");
    for surface in analysis.surfaces.iter().filter(|s| s.is_within_bounds) {
        let status = if surface.violated {
            format!("VIOLATION ({:.1} ft)", surface.penetration_ft)
        } else {
            "CLEAR".to_string()
        };
        let _ = writeln!(
            out,
            "  {:<40} max {:>8.1} ft MSL ({:>6.1} ft AGL)  {status}",
            surface.surface_name,
            surface.max_allowable_height_msl_ft,
            surface.max_allowable_height_agl_ft
        );
        let _ = writeln!(out, "    {}", surface.citation);
    }

    let not_applicable: Vec<&str> = analysis
        .surfaces
        .iter()
        .filter(|s| !s.is_within_bounds)
        .map(|s| s.surface_name)
        .collect();
    if !not_applicable.is_empty() {
        let _ = writeln!(out, "Not applicable at this location: {}", not_applicable.join(", "));
    }

    if !analysis.waiver_guidance.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Required actions:");
        for line in &analysis.waiver_guidance {
            let _ = writeln!(out, "  {line}");
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use imsurf_core::geodesy;
    use imsurf_core::{evaluate, LatLon, RunwayClass, RunwayGeometry};

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
    fn violation_report_includes_guidance_verbatim() {
        let rwy = test_runway();
        let analysis = evaluate(rwy.midpoint, 150.0, None, &rwy, 580.0);
        let report = render(&analysis, "KMTC", "01/19");

        assert!(report.contains("VIOLATION DETECTED"));
        assert!(report.contains("Controlling surface: Primary Surface"));
        assert!(report.contains("Required actions:"));
        for line in &analysis.waiver_guidance {
            assert!(report.contains(line.as_str()), "missing: {line}");
        }
        // The report goes to terminals and plain-text logs; keep it ASCII.
        assert!(report.is_ascii());
    }

    #[test]
    fn clear_report_omits_guidance() {
        let rwy = test_runway();
        let point = geodesy::offset(rwy.midpoint, rwy.bearing_deg + 90.0, 20_000.0);
        let analysis = evaluate(point, 50.0, None, &rwy, 580.0);
        let report = render(&analysis, "KMTC", "01/19");

        assert!(report.contains("NO VIOLATION"));
        assert!(!report.contains("Required actions:"));
        assert!(report.contains("Not applicable at this location:"));
    }
}
