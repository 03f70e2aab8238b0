use serde::{Deserialize, Serialize};

/// A structured transaction submitted for scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionInput {
    pub recipient: String,
    pub amount: f64,
    pub description: String,
}

/// The full result of a transaction analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub risk_score: u8, // 0-100
    pub risk_level: RiskLevel,
    pub warnings: Vec<String>,
    /// Detected scam categories, deduplicated, in detection order.
    pub scam_types: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Critical, // ≥80
    High,     // ≥60
    Medium,   // ≥40
    Low,      // ≥20
    Safe,     // <20
}

impl RiskLevel {
    pub fn from_score(score: u8) -> Self {
        if score >= 80 {
            RiskLevel::Critical
        } else if score >= 60 {
            RiskLevel::High
        } else if score >= 40 {
            RiskLevel::Medium
        } else if score >= 20 {
            RiskLevel::Low
        } else {
            RiskLevel::Safe
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Critical => "Critical",
            RiskLevel::High => "High",
            RiskLevel::Medium => "Medium",
            RiskLevel::Low => "Low",
            RiskLevel::Safe => "Safe",
        }
    }
}

/// Clamp a running score accumulator into the 0-100 range.
pub fn saturate(score: i32) -> u8 {
    score.clamp(0, 100) as u8
}

/// Coerce a JSON amount field to a number. Absent, null, or unparsable
/// values become 0.0 rather than an error.
pub fn coerce_amount(raw: &serde_json::Value) -> f64 {
    match raw {
        serde_json::Value::Number(n) => n.as_f64().unwrap_or(0.0),
        serde_json::Value::String(s) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_boundaries_exact() {
        assert_eq!(RiskLevel::from_score(0), RiskLevel::Safe);
        assert_eq!(RiskLevel::from_score(19), RiskLevel::Safe);
        assert_eq!(RiskLevel::from_score(20), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(39), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(40), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(59), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(60), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(79), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(80), RiskLevel::Critical);
        assert_eq!(RiskLevel::from_score(100), RiskLevel::Critical);
    }

    #[test]
    fn saturate_clamps_both_ends() {
        assert_eq!(saturate(-5), 0);
        assert_eq!(saturate(0), 0);
        assert_eq!(saturate(55), 55);
        assert_eq!(saturate(100), 100);
        assert_eq!(saturate(135), 100);
    }

    #[test]
    fn coerce_amount_number() {
        assert_eq!(coerce_amount(&serde_json::json!(150.5)), 150.5);
        assert_eq!(coerce_amount(&serde_json::json!(-20)), -20.0);
    }

    #[test]
    fn coerce_amount_numeric_string() {
        assert_eq!(coerce_amount(&serde_json::json!("42.5")), 42.5);
        assert_eq!(coerce_amount(&serde_json::json!(" 100 ")), 100.0);
    }

    #[test]
    fn coerce_amount_garbage_is_zero() {
        assert_eq!(coerce_amount(&serde_json::json!("a lot")), 0.0);
        assert_eq!(coerce_amount(&serde_json::Value::Null), 0.0);
        assert_eq!(coerce_amount(&serde_json::json!({"x": 1})), 0.0);
    }
}
