use serde::Deserialize;

/// Wait-time report from the traffic light API
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrafficLightData {
    #[serde(default)]
    pub dev_name: String,
    #[serde(default)]
    pub measured_time: String,
    #[serde(default)]
    pub values: Vec<SignalGroupValue>,
}

/// Measured wait time of one signal group (lane) at an intersection
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignalGroupValue {
    #[serde(default)]
    pub sg_name: String,
    #[serde(default)]
    pub interval: f64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub reliab_value: f64,
    #[serde(default)]
    pub unit: String,
    /// Wait time in seconds
    pub value: f64,
}

impl TrafficLightData {
    /// Mean wait time across all signal groups
    ///
    /// Returns `None` when the report has no signal groups.
    pub fn average_wait(&self) -> Option<f64> {
        if self.values.is_empty() {
            return None;
        }

        let total: f64 = self.values.iter().map(|v| v.value).sum();
        Some(total / self.values.len() as f64)
    }
}
