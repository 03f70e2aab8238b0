use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::auth::{hash_password, new_session_token, CurrentUser};
use crate::core::{coerce_amount, RiskAssessment, TransactionInput};

use super::error::ApiError;
use super::requests::{CheckRequest, LoginRequest, RegisterRequest, ReportRequest};
use super::responses::{AlertItem, AlertsResponse, CheckResponse, LoginResponse, OkResponse};
use super::AppState;

/// Number of reports returned by the alerts view.
const ALERTS_LIMIT: usize = 50;

pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<OkResponse>), ApiError> {
    if body.username.trim().is_empty() {
        return Err(ApiError::Validation("username must not be empty".to_string()));
    }
    if body.password.is_empty() {
        return Err(ApiError::Validation("password must not be empty".to_string()));
    }

    let created = state.db.create_user(
        &body.username,
        &hash_password(&body.password),
        &body.account_type,
    )?;
    if !created {
        return Err(ApiError::Conflict(format!(
            "username '{}' already exists",
            body.username
        )));
    }

    tracing::info!("registered user {}", body.username);
    Ok((StatusCode::CREATED, Json(OkResponse { ok: true })))
}

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let user = state
        .db
        .verify_user(&body.username, &hash_password(&body.password))?
        .ok_or_else(|| ApiError::Unauthorized("invalid username or password".to_string()))?;

    let token = new_session_token();
    state.db.create_session(&token, &user.username)?;

    tracing::info!("user {} logged in", user.username);
    Ok(Json(LoginResponse {
        token,
        account_type: user.account_type,
    }))
}

pub async fn logout(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<OkResponse>, ApiError> {
    state.db.delete_session(&user.token)?;
    tracing::info!("user {} logged out", user.username);
    Ok(Json(OkResponse { ok: true }))
}

/// Text-only scoring: returns the risk tier alone.
pub async fn check(
    State(state): State<AppState>,
    _user: CurrentUser,
    Json(body): Json<CheckRequest>,
) -> Json<CheckResponse> {
    let level = state.engine.analyze_text(&body.text);
    Json(CheckResponse {
        risk_level: level.as_str(),
    })
}

/// Full transaction scoring: persists the report and fires an alert for
/// high scores without blocking the response.
pub async fn report(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(body): Json<ReportRequest>,
) -> Result<Json<RiskAssessment>, ApiError> {
    let input = TransactionInput {
        recipient: body.recipient,
        amount: coerce_amount(&body.amount),
        description: body.description,
    };
    let assessment = state.engine.analyze_transaction(&input);

    let warnings_json =
        serde_json::to_string(&assessment.warnings).unwrap_or_else(|_| "[]".to_string());
    let scam_types_json =
        serde_json::to_string(&assessment.scam_types).unwrap_or_else(|_| "[]".to_string());

    state.db.store_report(
        &user.username,
        &input.recipient,
        input.amount,
        &input.description,
        assessment.risk_score,
        assessment.risk_level.as_str(),
        &warnings_json,
        &scam_types_json,
    )?;

    state
        .notifier
        .notify(&user.username, &input.recipient, &assessment);

    Ok(Json(assessment))
}

pub async fn alerts(
    State(state): State<AppState>,
    _user: CurrentUser,
) -> Result<Json<AlertsResponse>, ApiError> {
    let records = state.db.get_recent_reports(ALERTS_LIMIT)?;
    let data: Vec<AlertItem> = records.into_iter().map(AlertItem::from).collect();
    let count = data.len();
    Ok(Json(AlertsResponse { data, count }))
}
