//! Core data models for imaginary surface evaluation.

use serde::{Deserialize, Serialize};

use crate::config::RunwayConfig;
use crate::geodesy;

/// A geographic point in decimal degrees. Pure value type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

/// Runway classification selecting the criteria table for all six surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunwayClass {
    /// Class A: light aircraft runways
    A,
    /// Class B: high-performance aircraft runways
    B,
}

/// Which side of the centerline a point lies on, looking from end1 to end2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunwaySide {
    Left,
    Right,
}

/// One of the two runway thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunwayEnd {
    End1,
    End2,
}

/// Runway geometry derived once from installation configuration.
///
/// Immutable for the lifetime of an evaluation. The midpoint is the
/// arithmetic mean of the two thresholds; the bearing is the published
/// true heading when configured, otherwise the computed initial bearing
/// from end1 to end2.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunwayGeometry {
    pub end1: LatLon,
    pub end2: LatLon,
    pub midpoint: LatLon,
    /// True bearing end1 -> end2, degrees [0, 360)
    pub bearing_deg: f64,
    pub length_ft: f64,
    pub width_ft: f64,
    pub class: RunwayClass,
}

impl RunwayGeometry {
    /// Build runway geometry from a validated configuration record.
    pub fn from_config(config: &RunwayConfig) -> Self {
        let end1 = LatLon {
            lat: config.end1.latitude,
            lon: config.end1.longitude,
        };
        let end2 = LatLon {
            lat: config.end2.latitude,
            lon: config.end2.longitude,
        };
        let bearing_deg = match config.true_heading_deg {
            Some(heading) => geodesy::normalize_bearing(heading),
            None => geodesy::bearing_deg(end1, end2),
        };

        Self {
            end1,
            end2,
            midpoint: LatLon {
                lat: (end1.lat + end2.lat) / 2.0,
                lon: (end1.lon + end2.lon) / 2.0,
            },
            bearing_deg,
            length_ft: config.length_ft,
            width_ft: config.width_ft,
            class: config.class,
        }
    }
}

/// Spatial relationship between a point and a runway.
///
/// Derived purely from a point and [`RunwayGeometry`], recomputed per
/// evaluation and never cached.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunwayRelation {
    /// Perpendicular distance from the centerline (feet), always >= 0
    pub distance_from_centerline_ft: f64,
    /// Signed along-track distance from the runway midpoint (feet).
    /// Positive toward end2, negative toward end1.
    pub along_track_from_midpoint_ft: f64,
    /// Along-track overshoot past the nearer threshold (feet); 0 when the
    /// point projects between the thresholds.
    pub distance_from_nearest_threshold_ft: f64,
    /// Same, measured from the primary surface end (200 ft past threshold).
    pub distance_from_nearest_primary_end_ft: f64,
    pub side: RunwaySide,
    /// Inside the primary surface rectangle?
    pub within_primary: bool,
    /// Whichever threshold is along-track closer.
    pub nearer_end: RunwayEnd,
}

/// The six imaginary surfaces, in catalog order.
///
/// Catalog order is also the deterministic tiebreak when two surfaces
/// allow the same maximum height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurfaceKey {
    Primary,
    ApproachDeparture,
    Transitional,
    InnerHorizontal,
    Conical,
    OuterHorizontal,
}

impl SurfaceKey {
    /// All six surfaces in catalog order.
    pub const ALL: [SurfaceKey; 6] = [
        SurfaceKey::Primary,
        SurfaceKey::ApproachDeparture,
        SurfaceKey::Transitional,
        SurfaceKey::InnerHorizontal,
        SurfaceKey::Conical,
        SurfaceKey::OuterHorizontal,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            SurfaceKey::Primary => "Primary Surface",
            SurfaceKey::ApproachDeparture => "Approach-Departure Clearance Surface",
            SurfaceKey::Transitional => "Transitional Surface",
            SurfaceKey::InnerHorizontal => "Inner Horizontal Surface",
            SurfaceKey::Conical => "Conical Surface",
            SurfaceKey::OuterHorizontal => "Outer Horizontal Surface",
        }
    }

    /// Index into catalog-ordered arrays.
    pub(crate) fn index(self) -> usize {
        match self {
            SurfaceKey::Primary => 0,
            SurfaceKey::ApproachDeparture => 1,
            SurfaceKey::Transitional => 2,
            SurfaceKey::InnerHorizontal => 3,
            SurfaceKey::Conical => 4,
            SurfaceKey::OuterHorizontal => 5,
        }
    }
}

/// Outcome of evaluating one surface at one point. Ephemeral.
///
/// Serialize-only: results flow out to persistence and UI layers, never
/// back in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SurfaceEvaluation {
    pub surface: SurfaceKey,
    pub surface_name: &'static str,
    /// Whether the point falls within this surface's horizontal bounds.
    pub is_within_bounds: bool,
    /// Allowable height relative to the point's own ground elevation.
    pub max_allowable_height_agl_ft: f64,
    pub max_allowable_height_msl_ft: f64,
    pub obstruction_top_msl_ft: f64,
    /// In bounds and obstruction top exceeds the allowable height.
    pub violated: bool,
    /// Feet by which the top exceeds the surface; 0 when not violated.
    pub penetration_ft: f64,
    pub citation: &'static str,
    /// Resolved criteria description for this surface and runway class.
    pub criteria: String,
}

/// Aggregate result of one obstruction evaluation.
///
/// Created fresh per request and owned by the caller; the engine retains
/// nothing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObstructionAnalysis {
    pub point: LatLon,
    pub ground_elevation_msl_ft: f64,
    pub obstruction_height_agl_ft: f64,
    /// `ground_elevation_msl_ft + obstruction_height_agl_ft`
    pub obstruction_top_msl_ft: f64,
    pub relation: RunwayRelation,
    /// All six surface evaluations, in catalog order.
    pub surfaces: [SurfaceEvaluation; 6],
    pub has_violation: bool,
    /// The in-bounds surface with the lowest allowable height, or None if
    /// the point lies outside all six surfaces.
    pub controlling_surface: Option<SurfaceKey>,
    pub violated_surfaces: Vec<SurfaceKey>,
    /// Ordered remediation guidance; empty when there is no violation.
    pub waiver_guidance: Vec<String>,
}

impl ObstructionAnalysis {
    /// Evaluation record for a given surface.
    pub fn surface(&self, key: SurfaceKey) -> &SurfaceEvaluation {
        &self.surfaces[key.index()]
    }

    /// Evaluation record for the controlling surface, if any.
    pub fn controlling_evaluation(&self) -> Option<&SurfaceEvaluation> {
        self.controlling_surface.map(|key| self.surface(key))
    }
}
