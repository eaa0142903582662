//! Obstruction evaluation pipeline.
//!
//! A single pure-function entry point: project the point into the runway
//! frame once, evaluate all six imaginary surfaces, aggregate violations,
//! select the controlling surface, and emit remediation guidance. No
//! internal state, no I/O, no partial results.

use crate::catalog::SurfaceCatalog;
use crate::frame;
use crate::models::{LatLon, ObstructionAnalysis, RunwayGeometry, SurfaceEvaluation, SurfaceKey};
use crate::surfaces::{evaluate_surface, EvalContext};

/// Evaluate an obstruction against all six imaginary surfaces.
///
/// `ground_elevation_msl_ft` is the resolved elevation at the point; pass
/// `None` to fall back to the reference field elevation (the lookup itself,
/// with its timeout/retry policy, belongs to the caller). The result is a
/// freshly allocated value owned by the caller; the engine retains nothing.
pub fn evaluate(
    point: LatLon,
    obstruction_height_agl_ft: f64,
    ground_elevation_msl_ft: Option<f64>,
    rwy: &RunwayGeometry,
    field_elevation_msl_ft: f64,
) -> ObstructionAnalysis {
    let ground_elevation_msl_ft = ground_elevation_msl_ft.unwrap_or(field_elevation_msl_ft);
    let obstruction_top_msl_ft = ground_elevation_msl_ft + obstruction_height_agl_ft;

    // Project once; both the relation and the stadium distance are shared
    // by all six evaluators.
    let local = frame::to_local(point, rwy);
    let relation = frame::relation_from_local(local, rwy);
    let stadium_distance_ft = frame::stadium_distance_ft(local, rwy);

    let ctx = EvalContext {
        catalog: SurfaceCatalog::for_class(rwy.class),
        relation: &relation,
        stadium_distance_ft,
        field_elevation_msl_ft,
        ground_elevation_msl_ft,
        obstruction_top_msl_ft,
    };

    let surfaces = SurfaceKey::ALL.map(|key| evaluate_surface(key, &ctx));

    let violated_surfaces: Vec<SurfaceKey> = surfaces
        .iter()
        .filter(|s| s.violated)
        .map(|s| s.surface)
        .collect();
    let has_violation = !violated_surfaces.is_empty();

    // Most restrictive applicable surface; catalog order breaks ties
    // (strict less-than keeps the earlier surface on equal ceilings).
    let mut controlling: Option<&SurfaceEvaluation> = None;
    for surface in surfaces.iter().filter(|s| s.is_within_bounds) {
        let better = match controlling {
            None => true,
            Some(best) => {
                surface.max_allowable_height_msl_ft < best.max_allowable_height_msl_ft
            }
        };
        if better {
            controlling = Some(surface);
        }
    }
    let controlling_surface = controlling.map(|s| s.surface);

    let waiver_guidance = if has_violation {
        waiver_guidance(&surfaces)
    } else {
        Vec::new()
    };

    ObstructionAnalysis {
        point,
        ground_elevation_msl_ft,
        obstruction_height_agl_ft,
        obstruction_top_msl_ft,
        relation,
        surfaces,
        has_violation,
        controlling_surface,
        violated_surfaces,
        waiver_guidance,
    }
}

/// Name the surface zone a ground-level point falls in.
///
/// Convenience wrapper: evaluates at height 0 and reports the controlling
/// surface's name, or `"Outside all surfaces"`.
pub fn identify_surface(point: LatLon, rwy: &RunwayGeometry, field_elevation_msl_ft: f64) -> String {
    let analysis = evaluate(point, 0.0, None, rwy, field_elevation_msl_ft);
    match analysis.controlling_surface {
        Some(key) => key.display_name().to_string(),
        None => "Outside all surfaces".to_string(),
    }
}

/// Ordered remediation guidance for a violating evaluation: a header, the
/// fixed procedural steps, then one line per violated surface.
fn waiver_guidance(surfaces: &[SurfaceEvaluation; 6]) -> Vec<String> {
    let violated: Vec<&SurfaceEvaluation> = surfaces.iter().filter(|s| s.violated).collect();

    let mut lines = Vec::with_capacity(4 + violated.len());
    lines.push(format!(
        "OBSTRUCTION PENETRATES {} IMAGINARY SURFACE{} - ACTION REQUIRED",
        violated.len(),
        if violated.len() == 1 { "" } else { "S" },
    ));
    lines.push("1. Submit a work order to CES to remove or lower the obstruction.".to_string());
    lines.push(
        "2. Coordinate with ATC and the FAA for interim operating restrictions.".to_string(),
    );
    lines.push(
        "3. If the obstruction cannot be removed, prepare a waiver request per UFC 3-260-01."
            .to_string(),
    );
    for surface in violated {
        lines.push(format!(
            "{}: {:.1} ft penetration. Ref: {}",
            surface.surface_name, surface.penetration_ft, surface.citation,
        ));
    }
    lines
}
