use super::rules::RECIPIENT_DENYLIST;

/// Amounts above this raise a verification warning.
pub const LARGE_AMOUNT: f64 = 10_000.0;

/// More warnings than this triggers the escalation bonus.
pub const ESCALATION_THRESHOLD: usize = 3;

const ESCALATION_BONUS: i32 = 20;

/// Non-keyword checks on the transaction amount. Both conditions are
/// evaluated unconditionally; they are independent, not exclusive.
pub fn check_amount(amount: f64, score: &mut i32, warnings: &mut Vec<String>) {
    if amount > LARGE_AMOUNT {
        *score += 15;
        warnings.push("Large transaction amount - verify recipient".to_string());
    }
    if amount < 0.0 {
        *score += 20;
        warnings.push("Invalid amount detected".to_string());
    }
}

/// Non-keyword checks on the recipient name. Denylist and length checks
/// are independent and may both fire.
pub fn check_recipient(recipient: &str, score: &mut i32, warnings: &mut Vec<String>) {
    let folded = recipient.to_lowercase();
    if RECIPIENT_DENYLIST.contains(&folded.as_str()) {
        *score += 25;
        warnings.push("Unknown or suspicious recipient".to_string());
    }
    if recipient.chars().count() < 3 {
        *score += 15;
        warnings.push("Recipient name too short".to_string());
    }
}

/// Final pass over the collected warnings: many red flags compound
/// suspicion beyond the sum of individual weights.
pub fn apply_escalation(score: &mut i32, warnings: &mut Vec<String>) {
    if warnings.len() > ESCALATION_THRESHOLD {
        *score += ESCALATION_BONUS;
        warnings.push("Multiple red flags detected - HIGH SUSPICION".to_string());
    }
}
