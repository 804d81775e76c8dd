use crate::error::Result;
use crate::geometry::DEFAULT_RADIUS;
use serde::Deserialize;

/// View-level settings for planning what to draw
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MapConfig {
    /// Devices outside this elevation band are hidden
    pub elevation_range: ElevationRange,
    /// Degree-space radius of measuring-direction overlays
    pub overlay_radius: f64,
    pub wait_thresholds: WaitThresholds,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            elevation_range: ElevationRange::default(),
            overlay_radius: DEFAULT_RADIUS,
            wait_thresholds: WaitThresholds::default(),
        }
    }
}

impl MapConfig {
    /// Parse from JSON, filling missing keys with defaults
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Inclusive elevation band in meters
///
/// Deserializes from a `[min, max]` pair.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(from = "[f64; 2]")]
pub struct ElevationRange {
    pub min: f64,
    pub max: f64,
}

impl ElevationRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, elevation: f64) -> bool {
        elevation >= self.min && elevation <= self.max
    }
}

impl Default for ElevationRange {
    fn default() -> Self {
        Self::new(-50.0, 50.0)
    }
}

impl From<[f64; 2]> for ElevationRange {
    fn from([min, max]: [f64; 2]) -> Self {
        Self::new(min, max)
    }
}

/// Traffic light wait-time color bands, in seconds
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WaitThresholds {
    /// Average waits below this are green
    pub green_below: f64,
    /// Average waits below this (and not green) are yellow, the rest red
    pub yellow_below: f64,
}

impl Default for WaitThresholds {
    fn default() -> Self {
        Self {
            green_below: 10.0,
            yellow_below: 20.0,
        }
    }
}
