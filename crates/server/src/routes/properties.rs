//! Read-only configuration property groups.

use axum::{extract::State, Json};
use configs::DroidConfig;

use crate::state::ServerState;

/// `greeting.name` as plain text.
#[utoipa::path(get, path = "/greeting", tag = "properties", responses((status = 200, description = "Greeting name", body = String, content_type = "text/plain")))]
pub async fn greeting(State(state): State<ServerState>) -> String {
    state.greeting.name.clone()
}

/// `greeting.coffee` as plain text.
#[utoipa::path(get, path = "/greeting/coffee", tag = "properties", responses((status = 200, description = "Greeting coffee", body = String, content_type = "text/plain")))]
pub async fn greeting_coffee(State(state): State<ServerState>) -> String {
    state.greeting.coffee.clone()
}

#[utoipa::path(get, path = "/droid", tag = "properties", responses((status = 200, description = "Droid properties", body = crate::openapi::DroidDoc)))]
pub async fn droid(State(state): State<ServerState>) -> Json<DroidConfig> {
    Json(state.droid.as_ref().clone())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use configs::AppConfig;
    use service::coffee::{memory::MemoryCoffeeRepository, CoffeeService};
    use tower::ServiceExt;
    use tower_http::cors::CorsLayer;

    use crate::routes::build_router;
    use crate::state::ServerState;

    fn app(cfg: &AppConfig) -> axum::Router {
        let svc = CoffeeService::new(Arc::new(MemoryCoffeeRepository::new()));
        build_router(ServerState::new(svc, cfg), CorsLayer::very_permissive())
    }

    async fn get_text(app: axum::Router, uri: &str) -> (StatusCode, Option<String>, String) {
        let resp = app.oneshot(Request::get(uri).body(Body::empty()).unwrap()).await.unwrap();
        let status = resp.status();
        let ctype = resp
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        (status, ctype, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn greeting_endpoints_return_plain_strings() {
        let mut cfg = AppConfig::default();
        cfg.greeting.name = "Ana".into();
        cfg.greeting.coffee = "Ana is drinking Cafe Lareno".into();

        let (status, ctype, body) = get_text(app(&cfg), "/greeting").await;
        assert_eq!(status, StatusCode::OK);
        assert!(ctype.unwrap_or_default().starts_with("text/plain"));
        assert_eq!(body, "Ana");

        let (_, _, body) = get_text(app(&cfg), "/greeting/coffee").await;
        assert_eq!(body, "Ana is drinking Cafe Lareno");
    }

    #[tokio::test]
    async fn droid_is_json() {
        let (status, _, body) = get_text(app(&AppConfig::default()), "/droid").await;
        assert_eq!(status, StatusCode::OK);
        let v: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(v, serde_json::json!({"id": "BB-8", "description": "Rolling around the Galaxy"}));
    }
}
