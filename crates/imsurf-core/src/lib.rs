//! Obstruction evaluation engine for airfield imaginary surfaces.
//!
//! Given a point near a runway and an object height, determines whether
//! the object penetrates any of the six UFC 3-260-01 imaginary surfaces,
//! by how much, and under which rule. Pure computation: synchronous,
//! stateless apart from `const` criteria tables, and safe to call from
//! any number of threads.

pub mod analyzer;
pub mod catalog;
pub mod config;
pub mod frame;
pub mod geodesy;
pub mod models;
pub mod polygons;
mod surfaces;

pub use analyzer::{evaluate, identify_surface};
pub use catalog::SurfaceCatalog;
pub use config::{ConfigError, InstallationConfig, RunwayConfig};
pub use models::{
    LatLon, ObstructionAnalysis, RunwayClass, RunwayEnd, RunwayGeometry, RunwayRelation,
    RunwaySide, SurfaceEvaluation, SurfaceKey,
};
