use crate::scoring::{Channel, ComplaintCategory, ComplaintInput, CustomerTier};

/// Quiet baseline: no keywords, no signals, only the Other category weight.
pub(super) fn baseline_input() -> ComplaintInput {
    ComplaintInput {
        text: String::new(),
        category: ComplaintCategory::Other,
        channel: Channel::Email,
        customer_tier: CustomerTier::Standard,
        order_value: 0.0,
        is_repeat: false,
    }
}

pub(super) fn with_text(text: &str) -> ComplaintInput {
    ComplaintInput {
        text: text.to_string(),
        ..baseline_input()
    }
}

pub(super) fn escalated_input() -> ComplaintInput {
    ComplaintInput {
        text: "This is unsafe and I will sue, please refund immediately".to_string(),
        category: ComplaintCategory::Defect,
        channel: Channel::Voice,
        customer_tier: CustomerTier::Vip,
        order_value: 1500.0,
        is_repeat: true,
    }
}
