use serde::{Deserialize, Serialize};

/// Response body shared by all prediction endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub prediction_id: String,
    pub prediction_type: String,
    pub confidence: f64,
    pub risk_level: String,
    pub recommendations: Vec<String>,
    pub timestamp: String,
    pub location: String,
}

/// Catalog entry returned by GET /models
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelInfo {
    pub name: String,
    pub version: String,
    pub accuracy: f64,
    pub last_trained: String,
    pub status: String,
}

/// Envelope for GET /models
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelsResponse {
    pub models: Vec<ModelInfo>,
}

/// Envelope for POST /predict/batch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchPredictionResponse {
    pub predictions: Vec<PredictionResponse>,
}

/// Quality figures returned by GET /models/{model_name}/metrics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelMetrics {
    pub model_name: String,
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub f1_score: f64,
    pub last_updated: String,
}

/// One row of the fixed prediction history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub location: String,
    pub risk_level: String,
    pub confidence: f64,
    pub timestamp: String,
}

/// Envelope for GET /predictions/history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionHistory {
    pub predictions: Vec<HistoryRecord>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub version: String,
    pub service: String,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
