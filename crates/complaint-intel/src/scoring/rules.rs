use super::domain::ComplaintInput;
use super::weights::{
    category_weight, channel_weight, tier_weight, CATEGORY_REASON_THRESHOLD, KEYWORD_SCORE_CAP,
    KEYWORD_WEIGHTS, ORDER_VALUE_BANDS, REPEAT_WEIGHT,
};
use super::ScoreBreakdown;

/// Walks the rule table in order, filling the breakdown and collecting the
/// reasons that fired along the way.
pub(crate) fn score_input(input: &ComplaintInput) -> (ScoreBreakdown, Vec<String>) {
    let mut reasons = Vec::new();
    let mut breakdown = ScoreBreakdown::default();

    breakdown.category_score = category_weight(&input.category);
    if breakdown.category_score >= CATEGORY_REASON_THRESHOLD {
        reasons.push(format!("Category: {}", input.category));
    }

    breakdown.keyword_score = keyword_score(&input.text, &mut reasons);

    if input.is_repeat {
        breakdown.repeat_score = REPEAT_WEIGHT;
        reasons.push("Repeat Issue".to_string());
    }

    breakdown.tier_score = tier_weight(&input.customer_tier);
    if input.customer_tier.is_vip() {
        reasons.push("VIP Customer".to_string());
    }

    breakdown.value_score = value_score(input.order_value);
    if input.order_value > ORDER_VALUE_BANDS[0].0 {
        reasons.push("Order Value > $1000".to_string());
    }

    breakdown.channel_score = channel_weight(&input.channel);

    (breakdown, reasons)
}

fn keyword_score(text: &str, reasons: &mut Vec<String>) -> u32 {
    let lowered = text.to_lowercase();
    let mut total = 0;

    // Each table entry is checked once, so repeated occurrences never double count.
    for (word, weight) in KEYWORD_WEIGHTS {
        if lowered.contains(word) {
            total += weight;
            reasons.push(format!("Keyword: \"{word}\""));
        }
    }

    total.min(KEYWORD_SCORE_CAP)
}

fn value_score(order_value: f64) -> u32 {
    // NaN fails every comparison and falls through to zero.
    ORDER_VALUE_BANDS
        .iter()
        .find(|(threshold, _)| order_value > *threshold)
        .map(|(_, weight)| *weight)
        .unwrap_or(0)
}
