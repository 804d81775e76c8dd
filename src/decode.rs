use crate::error::{Error, Result, Warning};
use crate::raw::RawDevice;
use crate::types::{Crs, Device, DirectionInterval, GeoPoint, Position, SensorType, Status};
use std::borrow::Cow;
use std::io::Read;

/// Decode raw bytes to string
///
/// Attempts UTF-8 decoding first, falling back to Windows-1252 (CP1252) if UTF-8 fails.
/// Some municipal exports still deliver street names like "Pöllöntie" in the
/// legacy Windows code page.
pub fn decode_string(bytes: &[u8]) -> Cow<'_, str> {
    match str::from_utf8(bytes) {
        Ok(s) => s.into(),
        Err(_) => encoding_rs::WINDOWS_1252.decode(bytes).0,
    }
}

/// Parse a backend device list
///
/// Malformed JSON, or a top level that is not an array, is an error. Individual
/// records with unexpected field types or failing validation are skipped and
/// reported as [`Warning::InvalidDevice`].
pub fn parse_devices(bytes: &[u8], warnings: &mut Vec<Warning>) -> Result<Vec<Device>> {
    let text = decode_string(bytes);
    let records: Vec<serde_json::Value> = serde_json::from_str(&text)?;

    let mut devices = Vec::with_capacity(records.len());
    for (index, record) in records.into_iter().enumerate() {
        let decoded = serde_json::from_value::<RawDevice>(record)
            .map_err(Error::from)
            .and_then(|raw| decode_device(raw, warnings));

        match decoded {
            Ok(device) => devices.push(device),
            Err(err) => {
                log::warn!("Skipping device #{index}: {err}");
                warnings.push(Warning::InvalidDevice {
                    index,
                    reason: err.to_string(),
                });
            }
        }
    }

    log::debug!("Decoded {} devices", devices.len());
    Ok(devices)
}

/// Read and parse a device list from any `Read` source
pub fn read_devices<R: Read>(mut reader: R, warnings: &mut Vec<Warning>) -> Result<Vec<Device>> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    parse_devices(&bytes, warnings)
}

/// Validate one raw record into a [`Device`]
///
/// `id` and a location with two coordinates are required. A missing CRS tag is
/// read as EPSG:4326.
pub fn decode_device(raw: RawDevice, warnings: &mut Vec<Warning>) -> Result<Device> {
    let id = raw.id.ok_or_else(|| missing_field("", "id"))?;
    let location = raw.location.ok_or_else(|| missing_field(&id, "location"))?;

    let (x, y) = match (location.lng, location.lat, location.coordinates.as_deref()) {
        (Some(lng), Some(lat), _) => (lng, lat),
        (_, _, Some([x, y, ..])) => (*x, *y),
        _ => return Err(missing_field(&id, "location.coordinates")),
    };
    if !x.is_finite() || !y.is_finite() {
        return Err(Error::InvalidCoordinate { x, y });
    }

    let elevation = location.elevation.or_else(|| {
        let coordinates = location.coordinates.as_deref()?;
        coordinates.get(2).copied()
    });

    let crs = raw.crs_type.as_deref().map_or(Crs::Wgs84, Crs::from_tag);
    if let Crs::Other(tag) = &crs {
        warnings.push(Warning::UnknownCrs {
            device_id: id.clone(),
            crs: tag.clone(),
        });
    }

    let measuring_direction = match raw.measuring_direction {
        None | Some(serde_json::Value::Null) => None,
        Some(value) => match direction_bounds(&value) {
            Some((start, end)) => Some(DirectionInterval::from_degrees(start, end)),
            None => {
                warnings.push(Warning::MalformedDirection {
                    device_id: id.clone(),
                    value: value.to_string(),
                });
                None
            }
        },
    };

    let data_latest_value = match raw.data_latest_value {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(value)) => Some(value),
        Some(value) => Some(value.to_string()),
    };

    Ok(Device {
        position: Position::from_raw(crs, x, y),
        elevation,
        path: location.path,
        area: location.area,
        sensor_type: SensorType::from_name(raw.sensor_type.as_deref().unwrap_or_default()),
        sensor_model: raw.sensor_model,
        status: Status::from_name(raw.status.as_deref().unwrap_or_default()),
        icon_name: raw.icon_name.unwrap_or_default(),
        description: raw.description.unwrap_or_default(),
        measuring_direction,
        measuring_radius: raw.measuring_radius.unwrap_or_default(),
        measuring_interval: raw.measuring_interval.unwrap_or_default(),
        measuring_description: raw.measuring_description,
        stationary: raw.stationary.unwrap_or(true),
        is_data_secret: raw.is_data_secret.or(raw.data_secret).unwrap_or_default(),
        data_link: raw.data_link,
        data_latest_value,
        id,
    })
}

/// Parse a JSON array of `{"lat": .., "lng": ..}` objects
///
/// Used for outlines such as the city area border.
pub fn parse_lat_lngs(bytes: &[u8]) -> Result<Vec<GeoPoint>> {
    let text = decode_string(bytes);
    let points: Vec<GeoPoint> = serde_json::from_str(&text)?;

    if let Some(point) = points.iter().find(|p| !p.is_valid()) {
        return Err(Error::InvalidCoordinate {
            x: point.lng,
            y: point.lat,
        });
    }

    Ok(points)
}

fn direction_bounds(value: &serde_json::Value) -> Option<(f64, f64)> {
    match value.as_array()?.as_slice() {
        [start, end] => Some((start.as_f64()?, end.as_f64()?)),
        _ => None,
    }
}

fn missing_field(id: &str, field: &'static str) -> Error {
    Error::MissingField {
        id: id.to_string(),
        field,
    }
}
