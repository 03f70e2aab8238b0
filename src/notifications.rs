use std::sync::Mutex;
use std::time::{Duration, Instant};

use crate::config::NotificationConfig;
use crate::core::RiskAssessment;

/// Outbound alert sender with cooldown to prevent spam. High-scoring
/// reports are forwarded to a webhook off the request path.
pub struct Notifier {
    enabled: bool,
    min_score: u8,
    webhook_url: Option<String>,
    cooldown: Duration,
    client: reqwest::Client,
    last_sent: Mutex<Option<Instant>>,
}

impl Notifier {
    pub fn new(config: &NotificationConfig) -> Self {
        Self {
            enabled: config.enabled,
            min_score: config.min_score,
            webhook_url: config.webhook_url.clone(),
            cooldown: Duration::from_secs(config.cooldown_seconds),
            client: reqwest::Client::new(),
            last_sent: Mutex::new(None),
        }
    }

    /// Try to send an alert for an assessed report.
    /// Returns true if an alert was dispatched, false if skipped.
    pub fn notify(&self, username: &str, recipient: &str, assessment: &RiskAssessment) -> bool {
        if !self.enabled {
            return false;
        }
        if assessment.risk_score < self.min_score {
            return false;
        }
        if !self.check_cooldown() {
            return false;
        }

        self.send_alert(username, recipient, assessment);
        true
    }

    /// Check and update cooldown. Returns true if enough time has passed.
    fn check_cooldown(&self) -> bool {
        let mut last = self.last_sent.lock().unwrap();
        let now = Instant::now();
        if let Some(prev) = *last {
            if now.duration_since(prev) < self.cooldown {
                return false;
            }
        }
        *last = Some(now);
        true
    }

    /// Fire-and-forget: deliver the alert without blocking the scoring path.
    fn send_alert(&self, username: &str, recipient: &str, assessment: &RiskAssessment) {
        let payload = serde_json::json!({
            "username": username,
            "recipient": recipient,
            "risk_score": assessment.risk_score,
            "risk_level": assessment.risk_level.as_str(),
            "scam_types": assessment.scam_types,
        });

        let Some(url) = self.webhook_url.clone() else {
            tracing::warn!(
                "High-risk report by {username}: score={} level={}",
                assessment.risk_score,
                assessment.risk_level.as_str()
            );
            return;
        };

        let client = self.client.clone();
        tokio::spawn(async move {
            match client.post(&url).json(&payload).send().await {
                Ok(resp) if !resp.status().is_success() => {
                    tracing::debug!("Alert webhook returned {}", resp.status());
                }
                Ok(_) => {}
                Err(e) => tracing::debug!("Alert webhook failed: {e}"),
            }
        });
    }
}
