use super::domain::{Channel, ComplaintCategory, CustomerTier};

/// Keyword signals in evaluation order. Reasons are emitted in this order,
/// regardless of where the words appear in the complaint text.
pub const KEYWORD_WEIGHTS: [(&str, u32); 14] = [
    ("unsafe", 40),
    ("legal", 45),
    ("sue", 40),
    ("fraud", 35),
    ("scam", 35),
    ("chargeback", 30),
    ("refund", 15),
    ("broken", 20),
    ("shattered", 20),
    ("missing", 15),
    ("late", 10),
    ("rude", 10),
    ("cancel", 10),
    ("immediately", 5),
];

/// Ceiling applied to the summed keyword weights.
pub const KEYWORD_SCORE_CAP: u32 = 60;

/// Ceiling applied to the grand total.
pub const TOTAL_SCORE_CAP: u32 = 100;

/// Category weights at or above this value are called out as a reason.
pub(crate) const CATEGORY_REASON_THRESHOLD: u32 = 25;

pub(crate) const REPEAT_WEIGHT: u32 = 25;

/// Order value bands, highest first. The first band exceeded wins.
pub(crate) const ORDER_VALUE_BANDS: [(f64, u32); 3] = [(1000.0, 30), (500.0, 20), (100.0, 10)];

/// Weights are looked up by name, so a raw `Unrecognized("Defect")` scores
/// the same as `Defect`.
pub(crate) fn category_weight(category: &ComplaintCategory) -> u32 {
    match category.label() {
        "Defect" => 30,
        "Billing" => 25,
        "Delivery" => 20,
        "Service" => 15,
        _ => 10,
    }
}

pub(crate) fn tier_weight(tier: &CustomerTier) -> u32 {
    match tier.label() {
        "VIP" => 15,
        "Premium" => 5,
        _ => 0,
    }
}

pub(crate) fn channel_weight(channel: &Channel) -> u32 {
    match channel.label() {
        "Voice" => 5,
        _ => 0,
    }
}
