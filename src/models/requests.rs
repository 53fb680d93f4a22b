use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use validator::Validate;

/// Geographic context of a prediction request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LocationData {
    #[validate(length(min = 1))]
    pub lga_id: String,
    pub coordinates: Vec<f64>,
    #[validate(length(min = 1))]
    pub state: String,
    #[serde(default = "default_population_density")]
    pub population_density: f64,
}

fn default_population_density() -> f64 {
    1000.0
}

/// Request body for the prediction endpoints
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PredictionRequest {
    pub prediction_type: String,
    #[validate(nested)]
    pub location_data: LocationData,
    #[serde(default)]
    pub case_data: HashMap<String, serde_json::Value>,
}

impl PredictionRequest {
    /// Human-readable location string, "{state}, {lga_id}"
    pub fn location_label(&self) -> String {
        format!("{}, {}", self.location_data.state, self.location_data.lga_id)
    }
}
