//! Deciding which shapes to draw for a device
//!
//! The renderer gets a list of [`Overlay`]s per device and draws them as-is.

use crate::config::{MapConfig, WaitThresholds};
use crate::error::{Error, Result};
use crate::geometry;
use crate::types::{Device, DirectionInterval, GeoPoint};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayColor {
    Green,
    Yellow,
    Red,
    Blue,
}

impl OverlayColor {
    /// Color of a traffic light's measuring area for an average wait in seconds
    pub fn from_wait(average_wait: f64, thresholds: &WaitThresholds) -> Self {
        if average_wait < thresholds.green_below {
            OverlayColor::Green
        } else if average_wait < thresholds.yellow_below {
            OverlayColor::Yellow
        } else {
            OverlayColor::Red
        }
    }

    /// CSS color name
    pub fn as_str(&self) -> &'static str {
        match self {
            OverlayColor::Green => "green",
            OverlayColor::Yellow => "yellow",
            OverlayColor::Red => "red",
            OverlayColor::Blue => "blue",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayKind {
    /// Cone or circle showing where the sensor measures (filled polygon)
    MeasuringDirection,
    /// Route of a moving sensor (polyline)
    Path,
    /// Area a moving sensor covers (polygon)
    Area,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Overlay {
    pub kind: OverlayKind,
    pub color: OverlayColor,
    pub points: Vec<GeoPoint>,
}

impl Overlay {
    /// Whether the shape is drawn filled
    pub fn is_filled(&self) -> bool {
        self.kind == OverlayKind::MeasuringDirection
    }
}

/// Plan the overlays for a normalized device
///
/// `average_wait` is the traffic light API's mean wait time, if it has been
/// fetched. Traffic lights only get their measuring area, colored by wait
/// time, and nothing until a wait time is known. Other sensors get a blue
/// measuring area plus their path and area outlines.
///
/// The measuring area exists only when the device has a direction and a
/// non-zero radius. Its size comes from `config.overlay_radius`; the device's
/// own radius is a distance in meters and only decides whether it is drawn.
///
/// Fails with [`Error::NotNormalized`] if the device is not in EPSG:4326.
pub fn plan_overlays(
    device: &Device,
    average_wait: Option<f64>,
    config: &MapConfig,
) -> Result<Vec<Overlay>> {
    let origin = device
        .position
        .as_geographic()
        .ok_or_else(|| Error::NotNormalized {
            id: device.id.clone(),
            crs: device.crs().to_string(),
        })?;

    let direction = match device.measuring_direction {
        Some(direction) if device.measuring_radius != 0.0 => Some(direction),
        _ => None,
    };

    let mut overlays = Vec::new();

    if device.is_traffic_light() {
        if let (Some(direction), Some(wait)) = (direction, average_wait) {
            overlays.push(Overlay {
                kind: OverlayKind::MeasuringDirection,
                color: OverlayColor::from_wait(wait, &config.wait_thresholds),
                points: geometry::generate(origin, direction, Some(config.overlay_radius))?,
            });
        }
        return Ok(overlays);
    }

    // A zero bound means "not configured" for non-traffic sensors
    if let Some(direction) = direction.filter(has_nonzero_bounds) {
        overlays.push(Overlay {
            kind: OverlayKind::MeasuringDirection,
            color: OverlayColor::Blue,
            points: geometry::generate(origin, direction, Some(config.overlay_radius))?,
        });
    }

    if let Some(path) = &device.path {
        let mut points = path.clone();
        points.push(origin);
        overlays.push(Overlay {
            kind: OverlayKind::Path,
            color: OverlayColor::Blue,
            points,
        });
    }

    if let Some(area) = &device.area {
        overlays.push(Overlay {
            kind: OverlayKind::Area,
            color: OverlayColor::Blue,
            points: area.clone(),
        });
    }

    Ok(overlays)
}

fn has_nonzero_bounds(direction: &DirectionInterval) -> bool {
    let (start, end) = direction.to_degrees();
    start != 0.0 && end != 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Position, ProjectedPoint, SensorType};
    use insta::assert_compact_debug_snapshot;

    fn sample_device(sensor_type: SensorType) -> Device {
        let mut device = Device::new("D-1", Position::Geographic(GeoPoint::new(65.0, 25.0)));
        device.sensor_type = sensor_type;
        device.measuring_direction = Some(DirectionInterval::from_degrees(-45.0, 45.0));
        device.measuring_radius = 30.0;
        device
    }

    fn kinds(overlays: &[Overlay]) -> Vec<(OverlayKind, OverlayColor, usize)> {
        overlays
            .iter()
            .map(|o| (o.kind, o.color, o.points.len()))
            .collect()
    }

    #[test]
    fn wait_color_bands() {
        let thresholds = WaitThresholds::default();
        assert_eq!(OverlayColor::from_wait(0.0, &thresholds), OverlayColor::Green);
        assert_eq!(OverlayColor::from_wait(9.99, &thresholds), OverlayColor::Green);
        assert_eq!(OverlayColor::from_wait(10.0, &thresholds), OverlayColor::Yellow);
        assert_eq!(OverlayColor::from_wait(19.5, &thresholds), OverlayColor::Yellow);
        assert_eq!(OverlayColor::from_wait(20.0, &thresholds), OverlayColor::Red);
        assert_eq!(OverlayColor::Red.as_str(), "red");
    }

    #[test]
    fn traffic_light_waits_for_data() {
        let device = sample_device(SensorType::TrafficLight);
        let config = MapConfig::default();

        let overlays = plan_overlays(&device, None, &config).unwrap();
        assert!(overlays.is_empty());

        let overlays = plan_overlays(&device, Some(14.0), &config).unwrap();
        assert_compact_debug_snapshot!(kinds(&overlays), @"[(MeasuringDirection, Yellow, 23)]");
        assert!(overlays[0].is_filled());
    }

    #[test]
    fn traffic_light_ignores_path_and_area() {
        let mut device = sample_device(SensorType::TrafficLight);
        device.path = Some(vec![GeoPoint::new(65.001, 25.001)]);
        device.area = Some(vec![GeoPoint::new(65.001, 25.001)]);

        let overlays = plan_overlays(&device, Some(25.0), &MapConfig::default()).unwrap();
        assert_compact_debug_snapshot!(kinds(&overlays), @"[(MeasuringDirection, Red, 23)]");
    }

    #[test]
    fn other_sensor_gets_direction_path_and_area() {
        let mut device = sample_device(SensorType::Counter);
        device.measuring_direction = Some(DirectionInterval::FullCircle);
        device.path = Some(vec![GeoPoint::new(65.001, 25.001), GeoPoint::new(65.002, 25.002)]);
        device.area = Some(vec![
            GeoPoint::new(65.0, 25.0),
            GeoPoint::new(65.1, 25.0),
            GeoPoint::new(65.1, 25.1),
        ]);

        let overlays = plan_overlays(&device, None, &MapConfig::default()).unwrap();
        assert_compact_debug_snapshot!(kinds(&overlays), @"[(MeasuringDirection, Blue, 20), (Path, Blue, 3), (Area, Blue, 3)]");

        // Path ends at the device itself
        assert_eq!(overlays[1].points.last(), Some(&GeoPoint::new(65.0, 25.0)));
        assert!(!overlays[1].is_filled());
    }

    #[test]
    fn zero_radius_or_zero_bound_skips_direction() {
        let mut device = sample_device(SensorType::WeatherStation);
        device.measuring_radius = 0.0;
        assert!(plan_overlays(&device, None, &MapConfig::default()).unwrap().is_empty());

        let mut device = sample_device(SensorType::WeatherStation);
        device.measuring_direction = Some(DirectionInterval::from_degrees(0.0, 90.0));
        assert!(plan_overlays(&device, None, &MapConfig::default()).unwrap().is_empty());

        device.measuring_direction = None;
        assert!(plan_overlays(&device, None, &MapConfig::default()).unwrap().is_empty());
    }

    #[test]
    fn configured_radius_is_used() {
        let device = sample_device(SensorType::Counter);
        let config = MapConfig {
            overlay_radius: 0.01,
            ..MapConfig::default()
        };

        let overlays = plan_overlays(&device, None, &config).unwrap();
        let expected = geometry::cone(GeoPoint::new(65.0, 25.0), -45.0, 45.0, 0.01);
        assert_eq!(overlays[0].points, expected);
    }

    #[test]
    fn legacy_device_must_be_normalized_first() {
        let device = Device::new(
            "OULU175",
            Position::Projected(ProjectedPoint::new(429_616.0, 7_216_617.0)),
        );

        let result = plan_overlays(&device, None, &MapConfig::default());
        assert_compact_debug_snapshot!(result.unwrap_err(), @r#"NotNormalized { id: "OULU175", crs: "EPSG:3067" }"#);
    }
}
