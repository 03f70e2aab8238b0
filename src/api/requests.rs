use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    #[serde(default = "default_account_type")]
    pub account_type: String,
}

fn default_account_type() -> String {
    "personal".to_string()
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct CheckRequest {
    #[serde(default)]
    pub text: String,
}

/// Transaction submission. `amount` is taken as raw JSON so that absent,
/// null, or non-numeric values coerce to 0 instead of rejecting the request.
#[derive(Debug, Deserialize)]
pub struct ReportRequest {
    #[serde(default)]
    pub recipient: String,
    #[serde(default)]
    pub amount: serde_json::Value,
    #[serde(default)]
    pub description: String,
}
