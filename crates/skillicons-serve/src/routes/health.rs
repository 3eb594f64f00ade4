//! Health check endpoint.

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::state::AppState;

/// Health check response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    status: &'static str,
    service: &'static str,
    version: &'static str,
    icons: usize,
}

/// Public health check endpoint.
///
/// Returns basic service health for load balancer probes.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: "skillicons-serve",
        version: env!("CARGO_PKG_VERSION"),
        icons: state.registry.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use skillicons_core::IconRegistry;

    #[tokio::test]
    async fn health_reports_icon_count() {
        let registry = IconRegistry::from_entries([("rust", "<svg/>"), ("go", "<svg/>")]).unwrap();
        let state = AppState::with_registry(Config::default(), registry);

        let Json(health) = health_check(State(state)).await;
        let value = serde_json::to_value(&health).unwrap();
        assert_eq!(value["status"], "ok");
        assert_eq!(value["service"], "skillicons-serve");
        assert_eq!(value["icons"], 2);
    }
}
