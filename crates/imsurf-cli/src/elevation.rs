//! Ground elevation lookup.
//!
//! The engine requires a resolved ground elevation (or the documented
//! field-elevation fallback); fetching one, with timeout and fallback
//! policy, is this caller's job.

use imsurf_core::geodesy::M_TO_FT;
use imsurf_core::LatLon;
use reqwest::blocking::Client;
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_PROVIDER_URL: &str = "https://api.open-elevation.com/api/v1/lookup";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(8);

#[derive(Debug, Deserialize)]
struct LookupResponse {
    results: Vec<LookupResult>,
}

#[derive(Debug, Deserialize)]
struct LookupResult {
    /// Meters MSL
    elevation: f64,
}

/// Fetch ground elevation at a point, in feet MSL.
///
/// Returns `None` on any provider failure; the caller substitutes the
/// reference airfield elevation.
pub fn fetch_elevation_ft(client: &Client, provider_url: &str, point: LatLon) -> Option<f64> {
    let url = format!(
        "{provider_url}?locations={:.6},{:.6}",
        point.lat, point.lon
    );

    let response = match client.get(&url).timeout(REQUEST_TIMEOUT).send() {
        Ok(response) => response,
        Err(err) => {
            tracing::warn!("elevation fetch failed: {err}");
            return None;
        }
    };
    if !response.status().is_success() {
        tracing::warn!("elevation provider HTTP {}", response.status());
        return None;
    }

    let payload: LookupResponse = match response.json() {
        Ok(payload) => payload,
        Err(err) => {
            tracing::warn!("elevation response parse failed: {err}");
            return None;
        }
    };

    let meters = payload.results.first()?.elevation;
    if !meters.is_finite() {
        return None;
    }
    Some(meters_to_ft_rounded(meters))
}

/// Convert meters to feet, rounded to hundredths.
fn meters_to_ft_rounded(meters: f64) -> f64 {
    (meters * M_TO_FT * 100.0).round() / 100.0
}
