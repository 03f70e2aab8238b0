pub mod heuristics;
pub mod rules;

use crate::core::{saturate, RiskAssessment, RiskLevel, TransactionInput};
use rules::{is_critical_crypto, RuleBase, ScamCategory, INVESTMENT_ANCHORS};

/// The risk engine scores free text and structured transactions against the
/// shared rule base. Stateless per call; a single instance is built at
/// startup and shared by every caller.
pub struct RiskEngine {
    rules: RuleBase,
}

impl RiskEngine {
    pub fn new() -> Self {
        Self {
            rules: RuleBase::new(),
        }
    }

    /// Coarse text-only scoring. Returns the tier alone; callers needing
    /// warnings or tags should analyze the text as a transaction
    /// description with a neutral recipient and zero amount.
    pub fn analyze_text(&self, text: &str) -> RiskLevel {
        let folded = text.to_lowercase();
        let mut score = 0i32;

        if INVESTMENT_ANCHORS.iter().any(|a| folded.contains(a)) {
            score += 20;
        }
        if self.rules.any_match(ScamCategory::Generic, &folded) {
            score += 30;
        }
        if self.rules.any_match(ScamCategory::Crypto, &folded) {
            score += 25;
        }

        RiskLevel::from_score(saturate(score))
    }

    /// Full transaction scoring: amount and recipient heuristics, the
    /// per-category keyword scan, then the escalation pass.
    pub fn analyze_transaction(&self, input: &TransactionInput) -> RiskAssessment {
        let mut score = 0i32;
        let mut warnings = Vec::new();
        let mut scam_types: Vec<String> = Vec::new();

        heuristics::check_amount(input.amount, &mut score, &mut warnings);
        heuristics::check_recipient(&input.recipient, &mut score, &mut warnings);

        let folded = input.description.to_lowercase();
        for category in ScamCategory::ALL {
            for entry in self.rules.matches(category, &folded) {
                score += entry.weight as i32;
                warnings.push(keyword_warning(category, entry.phrase));
                if let Some(tag) = category.scam_type(entry.phrase) {
                    if !scam_types.iter().any(|t| t == tag) {
                        scam_types.push(tag.to_string());
                    }
                }
            }
        }

        heuristics::apply_escalation(&mut score, &mut warnings);

        let risk_score = saturate(score);
        RiskAssessment {
            risk_score,
            risk_level: RiskLevel::from_score(risk_score),
            warnings,
            scam_types,
        }
    }
}

impl Default for RiskEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn keyword_warning(category: ScamCategory, phrase: &str) -> String {
    match category {
        ScamCategory::Generic => format!("Suspicious phrase detected: '{phrase}'"),
        ScamCategory::Investment => format!("Investment scam indicator: '{phrase}'"),
        ScamCategory::Crypto => {
            if is_critical_crypto(phrase) {
                format!("CRITICAL: '{phrase}' requested - likely cryptocurrency theft")
            } else {
                format!("Crypto scam indicator: '{phrase}'")
            }
        }
        ScamCategory::Romance => format!("Urgency scam indicator: '{phrase}'"),
        ScamCategory::Phishing => format!("Phishing indicator: '{phrase}'"),
    }
}
