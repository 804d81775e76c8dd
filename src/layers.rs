use crate::config::ElevationRange;
use crate::types::Device;
use std::collections::{BTreeMap, BTreeSet};

/// One sensor category's layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layer {
    pub visible: bool,
    pub item_ids: BTreeSet<String>,
}

impl Default for Layer {
    fn default() -> Self {
        Self {
            visible: true,
            item_ids: BTreeSet::new(),
        }
    }
}

/// Visibility and membership of the per-category map layers
///
/// Categories are keyed by the sensor type's display name. State changes only
/// through the methods below.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayerState {
    layers: BTreeMap<String, Layer>,
}

impl LayerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add devices to their category layers
    ///
    /// New categories start out visible; existing visibility is kept.
    pub fn register(&mut self, devices: &[Device]) {
        for device in devices {
            self.layers
                .entry(device.sensor_type.as_str().to_string())
                .or_default()
                .item_ids
                .insert(device.id.clone());
        }
    }

    /// Flip a category's visibility
    ///
    /// Returns the new visibility, or `None` for an unknown category.
    pub fn toggle(&mut self, category: &str) -> Option<bool> {
        let layer = self.layers.get_mut(category)?;
        layer.visible = !layer.visible;
        Some(layer.visible)
    }

    /// Returns `false` if the category is unknown
    pub fn set_visible(&mut self, category: &str, visible: bool) -> bool {
        match self.layers.get_mut(category) {
            Some(layer) => {
                layer.visible = visible;
                true
            }
            None => false,
        }
    }

    pub fn is_visible(&self, category: &str) -> bool {
        self.layers.get(category).is_some_and(|layer| layer.visible)
    }

    /// Category names in alphabetical order
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.layers.keys().map(String::as_str)
    }

    pub fn layer(&self, category: &str) -> Option<&Layer> {
        self.layers.get(category)
    }

    /// Devices to draw: category visible and elevation inside `range`
    ///
    /// Devices without an elevation are never drawn.
    pub fn visible<'a>(
        &'a self,
        devices: &'a [Device],
        range: &'a ElevationRange,
    ) -> impl Iterator<Item = &'a Device> + 'a {
        devices.iter().filter(move |device| {
            device.elevation.is_some_and(|elevation| range.contains(elevation))
                && self.is_visible(device.sensor_type.as_str())
        })
    }
}
