pub mod error;
pub mod handlers;
pub mod requests;
pub mod responses;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::db::SharedDatabase;
use crate::engine::RiskEngine;
use crate::notifications::Notifier;

#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<RiskEngine>,
    pub db: SharedDatabase,
    pub notifier: Arc<Notifier>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/register", post(handlers::register))
        .route("/login", post(handlers::login))
        .route("/logout", post(handlers::logout))
        .route("/check", post(handlers::check))
        .route("/report", post(handlers::report))
        .route("/alerts", get(handlers::alerts))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NotificationConfig;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use serde_json::json;
    use std::sync::atomic::{AtomicU64, Ordering};
    use tower::ServiceExt;

    static TEST_COUNTER: AtomicU64 = AtomicU64::new(0);

    fn test_state() -> AppState {
        let id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
        let path = std::env::temp_dir().join(format!(
            "finshield_api_test_{}_{}.db",
            std::process::id(),
            id
        ));
        let _ = std::fs::remove_file(&path);
        AppState {
            engine: Arc::new(RiskEngine::new()),
            db: SharedDatabase::open(&path).unwrap(),
            notifier: Arc::new(Notifier::new(&NotificationConfig {
                enabled: false,
                min_score: 80,
                webhook_url: None,
                cooldown_seconds: 0,
            })),
        }
    }

    async fn send(
        app: Router,
        method: &str,
        uri: &str,
        token: Option<&str>,
        body: Option<serde_json::Value>,
    ) -> (StatusCode, serde_json::Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(t) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {t}"));
        }
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = if bytes.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    async fn register_and_login(app: &Router) -> String {
        let (status, _) = send(
            app.clone(),
            "POST",
            "/register",
            None,
            Some(json!({"username": "alice", "password": "pw"})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, body) = send(
            app.clone(),
            "POST",
            "/login",
            None,
            Some(json!({"username": "alice", "password": "pw"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        body["token"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn health_ok() {
        let app = router(test_state());
        let (status, body) = send(app, "GET", "/health", None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn register_login_flow() {
        let app = router(test_state());
        let token = register_and_login(&app).await;
        assert!(!token.is_empty());
    }

    #[tokio::test]
    async fn register_defaults_account_type() {
        let app = router(test_state());
        register_and_login(&app).await;
        let (_, body) = send(
            app,
            "POST",
            "/login",
            None,
            Some(json!({"username": "alice", "password": "pw"})),
        )
        .await;
        assert_eq!(body["account_type"], "personal");
    }

    #[tokio::test]
    async fn duplicate_register_conflicts() {
        let app = router(test_state());
        register_and_login(&app).await;
        let (status, body) = send(
            app,
            "POST",
            "/register",
            None,
            Some(json!({"username": "alice", "password": "other"})),
        )
        .await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert!(body["error"].as_str().unwrap().contains("alice"));
    }

    #[tokio::test]
    async fn empty_username_rejected() {
        let app = router(test_state());
        let (status, _) = send(
            app,
            "POST",
            "/register",
            None,
            Some(json!({"username": "  ", "password": "pw"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn wrong_password_unauthorized() {
        let app = router(test_state());
        register_and_login(&app).await;
        let (status, _) = send(
            app,
            "POST",
            "/login",
            None,
            Some(json!({"username": "alice", "password": "wrong"})),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn check_requires_auth() {
        let app = router(test_state());
        let (status, _) = send(app, "POST", "/check", None, Some(json!({"text": "hi"}))).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn check_returns_tier_only() {
        let app = router(test_state());
        let token = register_and_login(&app).await;

        let (status, body) = send(
            app.clone(),
            "POST",
            "/check",
            Some(&token),
            Some(json!({"text": "Congratulations, you won a crypto giveaway, click here now!"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["risk_level"], "Medium");
        assert!(body.get("risk_score").is_none());

        let (_, body) = send(
            app,
            "POST",
            "/check",
            Some(&token),
            Some(json!({"text": ""})),
        )
        .await;
        assert_eq!(body["risk_level"], "Safe");
    }

    #[tokio::test]
    async fn report_scores_and_lists_in_alerts() {
        let app = router(test_state());
        let token = register_and_login(&app).await;

        let (status, body) = send(
            app.clone(),
            "POST",
            "/report",
            Some(&token),
            Some(json!({
                "recipient": "unknown",
                "amount": 15000,
                "description": "guaranteed returns, send money now"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["risk_score"], 100);
        assert_eq!(body["risk_level"], "Critical");
        assert_eq!(body["warnings"].as_array().unwrap().len(), 5);

        let (status, body) = send(app, "GET", "/alerts", Some(&token), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["count"], 1);
        assert_eq!(body["data"][0]["username"], "alice");
        assert_eq!(body["data"][0]["risk_level"], "Critical");
        assert_eq!(body["data"][0]["warnings"].as_array().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn report_missing_amount_coerces_to_zero() {
        let app = router(test_state());
        let token = register_and_login(&app).await;

        let (status, body) = send(
            app,
            "POST",
            "/report",
            Some(&token),
            Some(json!({
                "recipient": "Alice Smith",
                "description": "Paying back dinner"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["risk_score"], 0);
        assert_eq!(body["risk_level"], "Safe");
        assert!(body["warnings"].as_array().unwrap().is_empty());
        assert!(body["scam_types"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn logout_invalidates_session() {
        let app = router(test_state());
        let token = register_and_login(&app).await;

        let (status, _) = send(app.clone(), "POST", "/logout", Some(&token), None).await;
        assert_eq!(status, StatusCode::OK);

        let (status, _) = send(
            app,
            "POST",
            "/check",
            Some(&token),
            Some(json!({"text": "hi"})),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }
}
