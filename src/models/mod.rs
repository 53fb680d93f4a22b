// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::PredictionKind;
pub use requests::{LocationData, PredictionRequest};
pub use responses::{
    BatchPredictionResponse, ErrorResponse, HealthResponse, HistoryRecord, ModelInfo,
    ModelMetrics, ModelsResponse, PredictionHistory, PredictionResponse,
};
