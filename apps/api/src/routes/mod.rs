pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::proxy::handlers;
use crate::state::AppState;

/// GET /
/// Plain-text liveness line.
async fn root() -> &'static str {
    "Supabase helper server running"
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health::health_handler))
        .route("/api/upsert-profile", post(handlers::handle_upsert_profile))
        .route("/api/save-roadmap", post(handlers::handle_save_roadmap))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::store::mock::MockStore;

    fn router() -> Router {
        build_router(AppState {
            store: MockStore::new(),
            config: Config {
                supabase_url: String::new(),
                supabase_service_key: String::new(),
                supabase_anon_key: String::new(),
                port: 4000,
                rust_log: "info".to_string(),
            },
        })
    }

    #[tokio::test]
    async fn test_root_reports_the_server_is_running() {
        let response = router()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"Supabase helper server running");
    }

    #[tokio::test]
    async fn test_health_reports_ok() {
        let response = router()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "ok");
    }
}
