//! Per-runway-class geometric and height constants for the six imaginary
//! surfaces, with UFC 3-260-01 citations.
//!
//! The tables are `const` and indexed by [`RunwayClass`]; nothing here is
//! ever mutated at runtime. Slopes are expressed as the N of an "N:1"
//! ratio (horizontal feet per foot of rise).

use crate::models::{RunwayClass, SurfaceKey};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrimaryCriteria {
    pub half_width_ft: f64,
    /// Longitudinal extension past each threshold.
    pub extension_ft: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApproachDepartureCriteria {
    pub slope: f64,
    /// Half-width at the primary surface end.
    pub inner_half_width_ft: f64,
    /// Half-width at the far end of the sloped surface.
    pub outer_half_width_ft: f64,
    /// Length of the sloped surface measured from the primary surface end.
    pub length_ft: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionalCriteria {
    pub slope: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HorizontalCriteria {
    pub height_ft: f64,
    pub radius_ft: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConicalCriteria {
    pub slope: f64,
    pub horizontal_extent_ft: f64,
    /// Height at the inner edge; equals the inner horizontal height so the
    /// two surfaces meet without a step.
    pub base_height_ft: f64,
}

/// The full criteria table for one runway class.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceCatalog {
    pub primary: PrimaryCriteria,
    pub approach_departure: ApproachDepartureCriteria,
    pub transitional: TransitionalCriteria,
    pub inner_horizontal: HorizontalCriteria,
    pub conical: ConicalCriteria,
    pub outer_horizontal: HorizontalCriteria,
}

const CLASS_A: SurfaceCatalog = SurfaceCatalog {
    primary: PrimaryCriteria {
        half_width_ft: 1_000.0,
        extension_ft: 200.0,
    },
    approach_departure: ApproachDepartureCriteria {
        slope: 50.0,
        inner_half_width_ft: 1_000.0,
        outer_half_width_ft: 8_000.0,
        length_ft: 25_000.0,
    },
    transitional: TransitionalCriteria { slope: 7.0 },
    inner_horizontal: HorizontalCriteria {
        height_ft: 150.0,
        radius_ft: 7_500.0,
    },
    conical: ConicalCriteria {
        slope: 20.0,
        horizontal_extent_ft: 7_000.0,
        base_height_ft: 150.0,
    },
    outer_horizontal: HorizontalCriteria {
        height_ft: 500.0,
        radius_ft: 30_000.0,
    },
};

const CLASS_B: SurfaceCatalog = SurfaceCatalog {
    primary: PrimaryCriteria {
        half_width_ft: 750.0,
        extension_ft: 200.0,
    },
    approach_departure: ApproachDepartureCriteria {
        slope: 50.0,
        inner_half_width_ft: 750.0,
        outer_half_width_ft: 6_625.0,
        length_ft: 25_000.0,
    },
    transitional: TransitionalCriteria { slope: 7.0 },
    inner_horizontal: HorizontalCriteria {
        height_ft: 150.0,
        radius_ft: 7_500.0,
    },
    conical: ConicalCriteria {
        slope: 20.0,
        horizontal_extent_ft: 7_000.0,
        base_height_ft: 150.0,
    },
    outer_horizontal: HorizontalCriteria {
        height_ft: 500.0,
        radius_ft: 30_000.0,
    },
};

impl SurfaceCatalog {
    /// Criteria table for a runway class.
    pub const fn for_class(class: RunwayClass) -> &'static SurfaceCatalog {
        match class {
            RunwayClass::A => &CLASS_A,
            RunwayClass::B => &CLASS_B,
        }
    }

    /// Lateral extent of the transitional surface beyond the primary edge:
    /// the distance at which the 7:1 slope reaches the inner horizontal
    /// height (1,050 ft for the standard tables).
    pub fn transitional_extent_ft(&self) -> f64 {
        self.inner_horizontal.height_ft * self.transitional.slope
    }

    /// Stadium radius of the conical surface's outer boundary.
    pub fn conical_outer_radius_ft(&self) -> f64 {
        self.inner_horizontal.radius_ft + self.conical.horizontal_extent_ft
    }

    /// Resolved criteria description for a surface under this class.
    pub fn criteria_text(&self, key: SurfaceKey) -> String {
        match key {
            SurfaceKey::Primary => format!(
                "No object may exceed runway elevation within the {:.0} ft wide \
                 primary surface (runway plus {:.0} ft past each threshold)",
                self.primary.half_width_ft * 2.0,
                self.primary.extension_ft,
            ),
            SurfaceKey::ApproachDeparture => format!(
                "{:.0}:1 slope from the primary surface end, widening from \
                 {:.0} ft to {:.0} ft over {:.0} ft of extended centerline",
                self.approach_departure.slope,
                self.approach_departure.inner_half_width_ft * 2.0,
                self.approach_departure.outer_half_width_ft * 2.0,
                self.approach_departure.length_ft,
            ),
            SurfaceKey::Transitional => format!(
                "{:.0}:1 slope from the primary surface edge up to the inner \
                 horizontal surface height",
                self.transitional.slope,
            ),
            SurfaceKey::InnerHorizontal => format!(
                "{:.0} ft above established airfield elevation within \
                 {:.0} ft of the runway",
                self.inner_horizontal.height_ft, self.inner_horizontal.radius_ft,
            ),
            SurfaceKey::Conical => format!(
                "{:.0}:1 slope outward from the inner horizontal surface for \
                 {:.0} ft",
                self.conical.slope, self.conical.horizontal_extent_ft,
            ),
            SurfaceKey::OuterHorizontal => format!(
                "{:.0} ft above established airfield elevation out to \
                 {:.0} ft from the runway",
                self.outer_horizontal.height_ft, self.outer_horizontal.radius_ft,
            ),
        }
    }
}

/// Regulatory citation for a surface. Class-independent.
pub fn citation(key: SurfaceKey) -> &'static str {
    match key {
        SurfaceKey::Primary => "UFC 3-260-01, Chapter 3, Table 3-2, Item 1 (Primary Surface)",
        SurfaceKey::ApproachDeparture => {
            "UFC 3-260-01, Chapter 3, Table 3-2, Item 10 (Approach-Departure Clearance Surface)"
        }
        SurfaceKey::Transitional => {
            "UFC 3-260-01, Chapter 3, Table 3-2, Item 8 (Transitional Surface)"
        }
        SurfaceKey::InnerHorizontal => {
            "UFC 3-260-01, Chapter 3, Table 3-2, Item 5 (Inner Horizontal Surface)"
        }
        SurfaceKey::Conical => "UFC 3-260-01, Chapter 3, Table 3-2, Item 6 (Conical Surface)",
        SurfaceKey::OuterHorizontal => {
            "UFC 3-260-01, Chapter 3, Table 3-2, Item 7 (Outer Horizontal Surface)"
        }
    }
}
