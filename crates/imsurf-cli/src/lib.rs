//! CLI tooling around the obstruction evaluation engine.
//!
//! The engine itself never performs I/O; everything that talks to the
//! outside world (elevation providers, config files, report output)
//! lives here:
//! - evaluate_point: evaluate one obstruction and print a report
//! - export_surfaces: emit surface boundary rings as GeoJSON

pub mod elevation;
pub mod report;
