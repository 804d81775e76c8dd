#![doc = include_str!("../README.md")]

pub use crate::config::{ElevationRange, MapConfig, WaitThresholds};
pub use crate::error::{Error, Result, Warning};
pub use crate::geometry::{DEFAULT_RADIUS, POINT_COUNT};
pub use crate::layers::{Layer, LayerState};
pub use crate::overlay::{Overlay, OverlayColor, OverlayKind, plan_overlays};
pub use crate::transform::{EPSG_3067_DEFINITION, TransverseMercator};
pub use crate::types::*;

pub mod config;
pub mod decode;
mod error;
pub mod geometry;
pub mod layers;
pub mod normalize;
pub mod overlay;
pub mod raw;
pub mod transform;
mod types;
