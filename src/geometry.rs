//! Measuring-direction overlay geometry
//!
//! Offsets are applied directly in degree space: `radius` is a latitude delta,
//! and longitude deltas are widened by `1 / cos(lat)` to compensate for
//! meridian convergence. This is accurate enough at street-level zoom.

use crate::error::{Error, Result};
use crate::types::{DirectionInterval, GeoPoint};
use std::f64::consts::PI;

/// Number of angular steps used for both cones and circles
pub const POINT_COUNT: usize = 20;

/// Overlay radius (degree-space offset) used when none is given
pub const DEFAULT_RADIUS: f64 = 0.0005;

/// Generate the overlay outline for a sensor at `origin`
///
/// A [`DirectionInterval::Cone`] yields [`cone`], a
/// [`DirectionInterval::FullCircle`] yields [`circle`]. `radius` falls back to
/// [`DEFAULT_RADIUS`].
///
/// Fails with [`Error::InvalidCoordinate`] for a non-finite origin,
/// [`Error::InvalidDirection`] for non-finite cone bounds and
/// [`Error::InvalidRadius`] for a non-finite radius.
pub fn generate(
    origin: GeoPoint,
    direction: DirectionInterval,
    radius: Option<f64>,
) -> Result<Vec<GeoPoint>> {
    let radius = radius.unwrap_or(DEFAULT_RADIUS);

    if !origin.is_finite() {
        return Err(Error::InvalidCoordinate {
            x: origin.lng,
            y: origin.lat,
        });
    }
    if !radius.is_finite() {
        return Err(Error::InvalidRadius(radius));
    }
    if !direction.is_finite() {
        let (start_deg, end_deg) = direction.to_degrees();
        return Err(Error::InvalidDirection { start_deg, end_deg });
    }

    Ok(match direction {
        DirectionInterval::FullCircle => circle(origin, radius),
        DirectionInterval::Cone { start_deg, end_deg } => cone(origin, start_deg, end_deg, radius),
    })
}

/// Closed cone polygon between two bearings (degrees, clockwise from north)
///
/// The sequence is `origin`, `POINT_COUNT + 1` arc points from `start_deg` to
/// `end_deg` inclusive, then `origin` again.
///
/// Each arc point corrects its longitude offset with the cosine of its own
/// latitude, unlike [`circle`] which uses the origin latitude throughout.
pub fn cone(origin: GeoPoint, start_deg: f64, end_deg: f64, radius: f64) -> Vec<GeoPoint> {
    let start = start_deg * (PI / 180.0);
    let end = end_deg * (PI / 180.0);

    let mut points = Vec::with_capacity(POINT_COUNT + 3);
    points.push(origin);

    for i in 0..=POINT_COUNT {
        let theta = start + (i as f64 / POINT_COUNT as f64) * (end - start);
        let lat = origin.lat + radius * theta.cos();
        let lng = origin.lng + (radius * theta.sin()) / (lat * (PI / 180.0)).cos();
        points.push(GeoPoint::new(lat, lng));
    }

    points.push(origin);
    points
}

/// Ring of `POINT_COUNT` evenly spaced points around `origin`
///
/// Starts due north and proceeds clockwise. The origin itself is not part of
/// the ring.
pub fn circle(origin: GeoPoint, radius: f64) -> Vec<GeoPoint> {
    let step = (2.0 * PI) / POINT_COUNT as f64;
    let lng_scale = (origin.lat * (PI / 180.0)).cos();

    (0..POINT_COUNT)
        .map(|i| {
            let angle = i as f64 * step;
            let delta_lat = radius * angle.cos();
            let delta_lng = (radius * angle.sin()) / lng_scale;
            GeoPoint::new(origin.lat + delta_lat, origin.lng + delta_lng)
        })
        .collect()
}
