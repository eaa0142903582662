//! Bounds tests and max-allowable-height formulas for the six imaginary
//! surfaces.
//!
//! All heights are feet MSL unless named AGL. Every surface is always
//! computed; a point outside a surface's horizontal bounds simply reports
//! `is_within_bounds = false`. No formula can fail.

use crate::catalog::{self, SurfaceCatalog};
use crate::models::{RunwayRelation, SurfaceEvaluation, SurfaceKey};

/// Shared inputs for one evaluation pass, computed once by the analyzer
/// and reused across all six surfaces.
#[derive(Debug, Clone, Copy)]
pub(crate) struct EvalContext<'a> {
    pub catalog: &'static SurfaceCatalog,
    pub relation: &'a RunwayRelation,
    /// Distance to the segment joining the two primary-surface-end centers.
    pub stadium_distance_ft: f64,
    /// Established airfield reference elevation.
    pub field_elevation_msl_ft: f64,
    /// Ground elevation at the evaluated point (may differ from the field).
    pub ground_elevation_msl_ft: f64,
    pub obstruction_top_msl_ft: f64,
}

/// Evaluate one surface: bounds test, height formula, violation.
pub(crate) fn evaluate_surface(key: SurfaceKey, ctx: &EvalContext<'_>) -> SurfaceEvaluation {
    let (is_within_bounds, max_allowable_height_msl_ft) = match key {
        SurfaceKey::Primary => primary(ctx),
        SurfaceKey::ApproachDeparture => approach_departure(ctx),
        SurfaceKey::Transitional => transitional(ctx),
        SurfaceKey::InnerHorizontal => inner_horizontal(ctx),
        SurfaceKey::Conical => conical(ctx),
        SurfaceKey::OuterHorizontal => outer_horizontal(ctx),
    };

    let violated = is_within_bounds && ctx.obstruction_top_msl_ft > max_allowable_height_msl_ft;
    let penetration_ft = if violated {
        ctx.obstruction_top_msl_ft - max_allowable_height_msl_ft
    } else {
        0.0
    };

    SurfaceEvaluation {
        surface: key,
        surface_name: key.display_name(),
        is_within_bounds,
        max_allowable_height_agl_ft: max_allowable_height_msl_ft - ctx.ground_elevation_msl_ft,
        max_allowable_height_msl_ft,
        obstruction_top_msl_ft: ctx.obstruction_top_msl_ft,
        violated,
        penetration_ft,
        citation: catalog::citation(key),
        criteria: ctx.catalog.criteria_text(key),
    }
}

/// Nothing may rise above runway elevation inside the primary rectangle.
fn primary(ctx: &EvalContext<'_>) -> (bool, f64) {
    (ctx.relation.within_primary, ctx.field_elevation_msl_ft)
}

/// 50:1 slope rising along the extended centerline from the primary
/// surface end, inside a linearly widening trapezoid.
fn approach_departure(ctx: &EvalContext<'_>) -> (bool, f64) {
    let criteria = &ctx.catalog.approach_departure;
    let along = ctx.relation.distance_from_nearest_primary_end_ft;

    let half_width_here = criteria.inner_half_width_ft
        + (criteria.outer_half_width_ft - criteria.inner_half_width_ft)
            * (along / criteria.length_ft).clamp(0.0, 1.0);
    let in_bounds = along > 0.0
        && along <= criteria.length_ft
        && ctx.relation.distance_from_centerline_ft <= half_width_here;

    (in_bounds, ctx.field_elevation_msl_ft + along / criteria.slope)
}

/// 7:1 slope climbing sideways from the primary edge to the inner
/// horizontal height. Flanks the primary surface span only.
fn transitional(ctx: &EvalContext<'_>) -> (bool, f64) {
    let lateral_beyond_edge =
        ctx.relation.distance_from_centerline_ft - ctx.catalog.primary.half_width_ft;
    // distance_from_nearest_primary_end is clamped at zero, so zero means
    // the point projects within the primary surface span.
    let abeam_primary = ctx.relation.distance_from_nearest_primary_end_ft == 0.0;

    let in_bounds = abeam_primary
        && lateral_beyond_edge > 0.0
        && lateral_beyond_edge <= ctx.catalog.transitional_extent_ft();

    let max = ctx.field_elevation_msl_ft
        + lateral_beyond_edge.max(0.0) / ctx.catalog.transitional.slope;
    (in_bounds, max)
}

/// Fixed ceiling within the inner stadium radius.
fn inner_horizontal(ctx: &EvalContext<'_>) -> (bool, f64) {
    let criteria = &ctx.catalog.inner_horizontal;
    (
        ctx.stadium_distance_ft <= criteria.radius_ft,
        ctx.field_elevation_msl_ft + criteria.height_ft,
    )
}

/// 20:1 slope joining the inner and outer horizontal ceilings.
fn conical(ctx: &EvalContext<'_>) -> (bool, f64) {
    let criteria = &ctx.catalog.conical;
    let beyond_inner = ctx.stadium_distance_ft - ctx.catalog.inner_horizontal.radius_ft;

    let in_bounds = beyond_inner > 0.0 && beyond_inner <= criteria.horizontal_extent_ft;
    let max = ctx.field_elevation_msl_ft
        + criteria.base_height_ft
        + beyond_inner.max(0.0) / criteria.slope;
    (in_bounds, max)
}

/// Fixed ceiling in the outer stadium annulus.
fn outer_horizontal(ctx: &EvalContext<'_>) -> (bool, f64) {
    let criteria = &ctx.catalog.outer_horizontal;
    let in_bounds = ctx.stadium_distance_ft > ctx.catalog.conical_outer_radius_ft()
        && ctx.stadium_distance_ft <= criteria.radius_ft;
    (in_bounds, ctx.field_elevation_msl_ft + criteria.height_ft)
}
