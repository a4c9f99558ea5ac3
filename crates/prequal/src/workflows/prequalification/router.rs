use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::domain::PreQualificationForm;
use super::evaluation::EligibilityConfig;
use super::normalizer::ValidationError;
use super::offers::OfferPolicy;
use super::service::{PreQualificationError, PreQualificationService};

/// Offer selection request; the form is re-evaluated so pricing cannot be tampered with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfferSelectionRequest {
    pub form: PreQualificationForm,
    pub offer_index: usize,
}

#[derive(Debug, Serialize)]
pub(crate) struct PolicyView<'a> {
    pub(crate) eligibility: &'a EligibilityConfig,
    pub(crate) offers: &'a OfferPolicy,
}

/// Router builder exposing the quoting endpoints.
pub fn prequalification_router(service: Arc<PreQualificationService>) -> Router {
    Router::new()
        .route("/api/v1/prequalification", post(prequalify_handler))
        .route("/api/v1/prequalification/selection", post(selection_handler))
        .route("/api/v1/prequalification/policy", get(policy_handler))
        .with_state(service)
}

pub(crate) async fn prequalify_handler(
    State(service): State<Arc<PreQualificationService>>,
    Json(form): Json<PreQualificationForm>,
) -> Response {
    match service.prequalify(&form) {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(error) => validation_response(&error),
    }
}

pub(crate) async fn selection_handler(
    State(service): State<Arc<PreQualificationService>>,
    Json(request): Json<OfferSelectionRequest>,
) -> Response {
    match service.select(&request.form, request.offer_index) {
        Ok(selection) => (StatusCode::OK, Json(selection)).into_response(),
        Err(PreQualificationError::Validation(error)) => validation_response(&error),
        Err(PreQualificationError::Selection(error)) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn policy_handler(
    State(service): State<Arc<PreQualificationService>>,
) -> Response {
    let view = PolicyView {
        eligibility: service.eligibility_config(),
        offers: service.policy(),
    };
    (StatusCode::OK, Json(view)).into_response()
}

fn validation_response(error: &ValidationError) -> Response {
    let payload = json!({
        "error": error.to_string(),
        "field": error.field().key(),
    });
    (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
}
