use metrics_exporter_prometheus::PrometheusHandle;
use prequal::workflows::prequalification::{
    EligibilityConfig, OfferPolicy, PreQualificationService,
};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Engine wired with the production eligibility thresholds and pricing table.
pub(crate) fn prequalification_service() -> PreQualificationService {
    PreQualificationService::new(EligibilityConfig::default(), OfferPolicy::default())
}
