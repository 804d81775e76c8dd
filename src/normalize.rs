use crate::error::Result;
use crate::transform;
use crate::types::{Device, Position};

/// Bring a device's position into EPSG:4326
///
/// EPSG:3067 positions are converted; the CRS tag follows automatically since
/// it is derived from the position. WGS84 and unrecognized tags are left
/// untouched. On error the device is not modified.
pub fn normalize(device: &mut Device) -> Result<()> {
    if let Position::Projected(point) = device.position {
        let converted = transform::to_wgs84(point)?;
        log::debug!(
            "Converted {} from EPSG:3067 ({}, {}) to EPSG:4326 ({}, {})",
            device.id,
            point.easting,
            point.northing,
            converted.lat,
            converted.lng
        );
        device.position = Position::Geographic(converted);
    }

    Ok(())
}

/// Normalize all devices, dropping those that cannot be converted
///
/// A device that fails conversion is never handed on, so it cannot be drawn at
/// a bogus position.
pub fn normalize_devices(devices: Vec<Device>) -> Vec<Device> {
    devices
        .into_iter()
        .filter_map(|mut device| match normalize(&mut device) {
            Ok(()) => Some(device),
            Err(err) => {
                log::warn!("Dropping device {}: {err}", device.id);
                None
            }
        })
        .collect()
}
