use serde::Serialize;

use crate::db::ReportRecord;

#[derive(Debug, Serialize)]
pub struct OkResponse {
    pub ok: bool,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub account_type: String,
}

#[derive(Debug, Serialize)]
pub struct CheckResponse {
    pub risk_level: &'static str,
}

#[derive(Debug, Serialize)]
pub struct AlertsResponse {
    pub data: Vec<AlertItem>,
    pub count: usize,
}

/// A stored report with its JSON columns expanded for clients.
#[derive(Debug, Serialize)]
pub struct AlertItem {
    pub id: i64,
    pub username: String,
    pub recipient: String,
    pub amount: f64,
    pub description: String,
    pub risk_score: u8,
    pub risk_level: String,
    pub warnings: Vec<String>,
    pub scam_types: Vec<String>,
    pub created_at: String,
}

impl From<ReportRecord> for AlertItem {
    fn from(record: ReportRecord) -> Self {
        let warnings = serde_json::from_str(&record.warnings_json).unwrap_or_default();
        let scam_types = serde_json::from_str(&record.scam_types_json).unwrap_or_default();
        Self {
            id: record.id,
            username: record.username,
            recipient: record.recipient,
            amount: record.amount,
            description: record.description,
            risk_score: record.risk_score,
            risk_level: record.risk_level,
            warnings,
            scam_types,
            created_at: record.created_at,
        }
    }
}
