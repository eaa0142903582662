//! Installation configuration: the static runway/airfield record the
//! engine consumes.
//!
//! Validation happens once here at load time. The evaluation routines do
//! not defend against degenerate geometry (identical thresholds yield an
//! undefined bearing), so a config must pass [`InstallationConfig::validate`]
//! before its runways are handed to the analyzer.

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::models::RunwayClass;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read installation config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse installation config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid installation config: {}", .0.join("; "))]
    Invalid(Vec<String>),
}

/// One runway threshold as configured.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunwayEndConfig {
    /// Painted designator, e.g. "01"
    pub designator: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Static configuration for a single runway.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunwayConfig {
    /// Runway identifier, e.g. "01/19"
    pub id: String,
    pub end1: RunwayEndConfig,
    pub end2: RunwayEndConfig,
    pub length_ft: f64,
    pub width_ft: f64,
    /// Published true heading end1 -> end2; computed from the threshold
    /// coordinates when absent.
    #[serde(default)]
    pub true_heading_deg: Option<f64>,
    pub class: RunwayClass,
}

/// Top-level installation record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstallationConfig {
    pub name: String,
    pub icao: String,
    /// Reference airfield elevation, feet MSL. Also the fallback ground
    /// elevation when a point lookup fails.
    pub elevation_msl_ft: f64,
    pub runways: Vec<RunwayConfig>,
}

impl InstallationConfig {
    /// Parse and validate a config from a reader.
    pub fn from_reader(reader: impl Read) -> Result<Self, ConfigError> {
        let config: InstallationConfig = serde_json::from_reader(reader)?;
        let errors = config.validate();
        if errors.is_empty() {
            Ok(config)
        } else {
            Err(ConfigError::Invalid(errors))
        }
    }

    /// Parse and validate a config file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Validate the record. Returns a list of problems (empty = valid).
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.runways.is_empty() {
            errors.push("installation has no runways".to_string());
        }
        if !self.elevation_msl_ft.is_finite() {
            errors.push("elevation_msl_ft must be finite".to_string());
        }

        for runway in &self.runways {
            runway.collect_errors(&mut errors);
        }

        errors
    }
}

impl RunwayConfig {
    fn collect_errors(&self, errors: &mut Vec<String>) {
        let id = &self.id;

        for (label, end) in [("end1", &self.end1), ("end2", &self.end2)] {
            if !(-90.0..=90.0).contains(&end.latitude) {
                errors.push(format!("runway {id} {label}: latitude out of range"));
            }
            if !(-180.0..=180.0).contains(&end.longitude) {
                errors.push(format!("runway {id} {label}: longitude out of range"));
            }
        }

        // Identical thresholds make the runway bearing undefined.
        if (self.end1.latitude - self.end2.latitude).abs() < 1e-9
            && (self.end1.longitude - self.end2.longitude).abs() < 1e-9
        {
            errors.push(format!("runway {id}: end1 and end2 are the same point"));
        }

        if !(self.length_ft.is_finite() && self.length_ft > 0.0) {
            errors.push(format!("runway {id}: length_ft must be positive"));
        }
        if !(self.width_ft.is_finite() && self.width_ft > 0.0) {
            errors.push(format!("runway {id}: width_ft must be positive"));
        }

        if let Some(heading) = self.true_heading_deg {
            if !heading.is_finite() || !(0.0..360.0).contains(&heading) {
                errors.push(format!(
                    "runway {id}: true_heading_deg must be in [0, 360)"
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> &'static str {
        r#"{
            "name": "Selfridge ANGB",
            "icao": "KMTC",
            "elevation_msl_ft": 580.0,
            "runways": [
                {
                    "id": "01/19",
                    "end1": { "designator": "01", "latitude": 42.6140, "longitude": -82.8356 },
                    "end2": { "designator": "19", "latitude": 42.6065, "longitude": -82.8203 },
                    "length_ft": 9002.0,
                    "width_ft": 150.0,
                    "class": "B"
                }
            ]
        }"#
    }

    #[test]
    fn parses_and_validates_sample() {
        let config = InstallationConfig::from_reader(sample_json().as_bytes()).unwrap();
        assert_eq!(config.icao, "KMTC");
        assert_eq!(config.runways.len(), 1);
        assert_eq!(config.runways[0].class, RunwayClass::B);
        assert!(config.runways[0].true_heading_deg.is_none());
    }

    #[test]
    fn rejects_identical_thresholds() {
        let mut config = InstallationConfig::from_reader(sample_json().as_bytes()).unwrap();
        config.runways[0].end2.latitude = config.runways[0].end1.latitude;
        config.runways[0].end2.longitude = config.runways[0].end1.longitude;
        let errors = config.validate();
        assert!(errors.iter().any(|e| e.contains("same point")), "{errors:?}");
    }

    #[test]
    fn rejects_nonpositive_dimensions() {
        let mut config = InstallationConfig::from_reader(sample_json().as_bytes()).unwrap();
        config.runways[0].length_ft = 0.0;
        config.runways[0].width_ft = -150.0;
        let errors = config.validate();
        assert_eq!(errors.len(), 2, "{errors:?}");
    }

    #[test]
    fn rejects_out_of_range_heading() {
        let mut config = InstallationConfig::from_reader(sample_json().as_bytes()).unwrap();
        config.runways[0].true_heading_deg = Some(360.0);
        assert!(!config.validate().is_empty());
    }

    #[test]
    fn from_reader_reports_invalid_config() {
        let json = sample_json().replace("9002.0", "-1.0");
        let err = InstallationConfig::from_reader(json.as_bytes()).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }
}
