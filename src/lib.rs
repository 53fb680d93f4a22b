//! Lassa Mock API - mock ML prediction service for the AI4Lassa platform
//!
//! Serves canned model metadata and randomly generated outbreak, case
//! classification, and risk assessment predictions so dependent services can
//! integrate against the real API contract before the models ship.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{risk_level_for_confidence, ModelRegistry, Predictor};
pub use crate::models::{
    LocationData, ModelInfo, PredictionKind, PredictionRequest, PredictionResponse,
};
