use serde::{Deserialize, Serialize};

/// Semantic grouping of scam keywords. Evaluation always walks categories
/// in the order of `ScamCategory::ALL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScamCategory {
    Generic,
    Investment,
    Crypto,
    Romance,
    Phishing,
}

impl ScamCategory {
    pub const ALL: [ScamCategory; 5] = [
        ScamCategory::Generic,
        ScamCategory::Investment,
        ScamCategory::Crypto,
        ScamCategory::Romance,
        ScamCategory::Phishing,
    ];

    /// Resolve the scam-type tag for a matched phrase. Generic phrases and
    /// the softer romance/phishing phrases raise the score without tagging.
    pub fn scam_type(&self, phrase: &str) -> Option<&'static str> {
        match self {
            ScamCategory::Generic => None,
            ScamCategory::Investment => {
                if phrase.contains("ponzi") || phrase.contains("pyramid") {
                    Some("Ponzi/Pyramid Scheme")
                } else if phrase.contains("mlm") || phrase.contains("multi-level") {
                    Some("MLM Scam")
                } else {
                    Some("Fake Investment Scheme")
                }
            }
            ScamCategory::Crypto => {
                if is_critical_crypto(phrase) {
                    Some("Cryptocurrency Theft Scam")
                } else if phrase.contains("presale") || phrase.contains("ico") {
                    Some("Fake ICO/Presale")
                } else {
                    Some("Crypto Scam")
                }
            }
            ScamCategory::Romance => {
                if phrase.contains("stranded")
                    || phrase.contains("hospital")
                    || phrase.contains("emergency")
                {
                    Some("Romance/Urgency Scam")
                } else {
                    None
                }
            }
            ScamCategory::Phishing => {
                if phrase.contains("download attachment") || phrase.contains("click link") {
                    Some("Phishing Attempt")
                } else {
                    None
                }
            }
        }
    }
}

/// A single weighted keyword rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleEntry {
    pub phrase: &'static str,
    pub weight: u8, // 1-40
}

const fn rule(phrase: &'static str, weight: u8) -> RuleEntry {
    RuleEntry { phrase, weight }
}

/// Recipients that are suspicious by name alone. Matched case-folded, exact.
pub const RECIPIENT_DENYLIST: &[&str] = &["unknown", "anonymous", "stranger", "unknown person"];

/// Anchor tokens for the coarse text-only investment check.
pub const INVESTMENT_ANCHORS: &[&str] = &["invest", "returns", "profit", "yield", "interest"];

/// Crypto phrases that indicate outright credential theft rather than a
/// dubious offer. These get a distinguished critical warning.
pub fn is_critical_crypto(phrase: &str) -> bool {
    phrase.contains("seed phrase") || phrase.contains("private key")
}

/// The immutable phrase → weight tables, built once at startup and shared
/// read-only by every analysis call.
pub struct RuleBase {
    generic: Vec<RuleEntry>,
    investment: Vec<RuleEntry>,
    crypto: Vec<RuleEntry>,
    romance: Vec<RuleEntry>,
    phishing: Vec<RuleEntry>,
}

impl RuleBase {
    pub fn new() -> Self {
        Self {
            generic: vec![
                rule("urgent", 15),
                rule("act now", 20),
                rule("limited time offer", 15),
                rule("send money now", 25),
                rule("double your money", 30),
                rule("congratulations", 15),
                rule("you have won", 25),
                rule("claim your prize", 25),
                rule("free money", 20),
                rule("verify", 10),
                rule("verify account", 25),
            ],
            investment: vec![
                rule("guaranteed returns", 35),
                rule("guaranteed profit", 35),
                rule("double your investment", 30),
                rule("risk-free", 25),
                rule("high returns", 20),
                rule("get rich quick", 30),
                rule("insider tip", 25),
                rule("ponzi", 40),
                rule("pyramid scheme", 40),
                rule("mlm", 30),
                rule("multi-level marketing", 30),
            ],
            crypto: vec![
                rule("seed phrase", 40),
                rule("private key", 40),
                rule("crypto giveaway", 35),
                rule("bitcoin doubler", 35),
                rule("wallet verification", 30),
                rule("pump and dump", 30),
                rule("presale", 25),
                rule("ico", 20),
                rule("airdrop", 20),
            ],
            romance: vec![
                rule("stranded", 30),
                rule("need money urgently", 30),
                rule("hospital", 25),
                rule("emergency", 25),
                rule("western union", 25),
                rule("gift card", 25),
                rule("customs fee", 25),
            ],
            phishing: vec![
                rule("download attachment", 30),
                rule("account suspended", 30),
                rule("confirm your password", 30),
                rule("click link", 25),
                rule("verify your identity", 25),
                rule("update billing", 25),
                rule("login immediately", 25),
            ],
        }
    }

    pub fn entries(&self, category: ScamCategory) -> &[RuleEntry] {
        match category {
            ScamCategory::Generic => &self.generic,
            ScamCategory::Investment => &self.investment,
            ScamCategory::Crypto => &self.crypto,
            ScamCategory::Romance => &self.romance,
            ScamCategory::Phishing => &self.phishing,
        }
    }

    /// All rules whose phrase occurs as a substring of `folded`.
    /// Expects input already case-folded; each phrase matches independently,
    /// so overlapping phrases all count.
    pub fn matches<'a>(&'a self, category: ScamCategory, folded: &str) -> Vec<&'a RuleEntry> {
        self.entries(category)
            .iter()
            .filter(|entry| folded.contains(entry.phrase))
            .collect()
    }

    /// Whether any phrase of the category occurs in `folded`.
    pub fn any_match(&self, category: ScamCategory, folded: &str) -> bool {
        self.entries(category)
            .iter()
            .any(|entry| folded.contains(entry.phrase))
    }
}

impl Default for RuleBase {
    fn default() -> Self {
        Self::new()
    }
}
