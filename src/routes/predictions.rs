use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::core::{ModelRegistry, Predictor};
use crate::models::{
    BatchPredictionResponse, ErrorResponse, HealthResponse, ModelsResponse, PredictionHistory,
    PredictionKind, PredictionRequest,
};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub predictor: Predictor,
    pub registry: ModelRegistry,
}

/// Configure all prediction-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/models", web::get().to(get_models))
        .route("/predict/outbreak", web::post().to(predict_outbreak))
        .route("/predict/case-classification", web::post().to(classify_case))
        .route("/predict/risk-assessment", web::post().to(assess_risk))
        .route("/predict/batch", web::post().to(batch_predict))
        .route("/models/{model_name}/metrics", web::get().to(get_model_metrics))
        .route("/predictions/history", web::get().to(get_prediction_history));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        service: "AI4Lassa Mock ML API".to_string(),
    })
}

/// Model catalog endpoint
async fn get_models(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(ModelsResponse {
        models: state.registry.models(),
    })
}

/// Shared body for the three single-prediction endpoints
fn run_prediction(
    state: &AppState,
    kind: PredictionKind,
    request: &PredictionRequest,
) -> HttpResponse {
    if let Err(errors) = request.validate() {
        tracing::info!(
            "Validation failed for {} request: {:?}",
            kind.wire_name(),
            errors
        );
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let response = state.predictor.predict(kind, request);

    tracing::info!(
        "{} {} for {}: {} (confidence {:.3})",
        kind.wire_name(),
        response.prediction_id,
        response.location,
        response.risk_level,
        response.confidence
    );

    HttpResponse::Ok().json(response)
}

/// Outbreak prediction endpoint
///
/// POST /predict/outbreak
async fn predict_outbreak(
    state: web::Data<AppState>,
    request: web::Json<PredictionRequest>,
) -> impl Responder {
    run_prediction(&state, PredictionKind::Outbreak, &request)
}

/// Case classification endpoint
///
/// POST /predict/case-classification
async fn classify_case(
    state: web::Data<AppState>,
    request: web::Json<PredictionRequest>,
) -> impl Responder {
    run_prediction(&state, PredictionKind::CaseClassification, &request)
}

/// Risk assessment endpoint
///
/// POST /predict/risk-assessment
async fn assess_risk(
    state: web::Data<AppState>,
    request: web::Json<PredictionRequest>,
) -> impl Responder {
    run_prediction(&state, PredictionKind::RiskAssessment, &request)
}

/// Batch prediction endpoint
///
/// POST /predict/batch
///
/// Body is a JSON array of prediction requests. Each element gets a kind
/// chosen uniformly at random; output preserves input order. There is no
/// per-element isolation: one invalid element fails the whole batch.
async fn batch_predict(
    state: web::Data<AppState>,
    requests: web::Json<Vec<PredictionRequest>>,
) -> impl Responder {
    for (index, request) in requests.iter().enumerate() {
        if let Err(errors) = request.validate() {
            return HttpResponse::BadRequest().json(ErrorResponse {
                error: "Validation failed".to_string(),
                message: format!("request {}: {}", index, errors),
                status_code: 400,
            });
        }
    }

    let predictions = requests
        .iter()
        .map(|request| {
            let kind = state.predictor.random_kind();
            state.predictor.predict(kind, request)
        })
        .collect::<Vec<_>>();

    tracing::info!("Batch produced {} predictions", predictions.len());

    HttpResponse::Ok().json(BatchPredictionResponse { predictions })
}

/// Model metrics endpoint
///
/// GET /models/{model_name}/metrics
async fn get_model_metrics(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let model_name = path.into_inner();
    HttpResponse::Ok().json(state.predictor.model_metrics(&model_name))
}

/// Prediction history endpoint
///
/// GET /predictions/history
async fn get_prediction_history(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(PredictionHistory {
        predictions: state.registry.history(),
    })
}
