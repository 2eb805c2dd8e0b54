use std::fmt;

use serde::{Deserialize, Serialize};

/// Complaint category selected at intake.
///
/// Known names match exactly (case-sensitive). Anything else is kept verbatim
/// so it can still be displayed, and scores with the `Other` weight.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ComplaintCategory {
    Defect,
    Billing,
    Delivery,
    Service,
    #[default]
    Other,
    Unrecognized(String),
}

impl ComplaintCategory {
    pub fn label(&self) -> &str {
        match self {
            ComplaintCategory::Defect => "Defect",
            ComplaintCategory::Billing => "Billing",
            ComplaintCategory::Delivery => "Delivery",
            ComplaintCategory::Service => "Service",
            ComplaintCategory::Other => "Other",
            ComplaintCategory::Unrecognized(raw) => raw,
        }
    }
}

impl From<String> for ComplaintCategory {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Defect" => ComplaintCategory::Defect,
            "Billing" => ComplaintCategory::Billing,
            "Delivery" => ComplaintCategory::Delivery,
            "Service" => ComplaintCategory::Service,
            "Other" => ComplaintCategory::Other,
            _ => ComplaintCategory::Unrecognized(value),
        }
    }
}

impl From<&str> for ComplaintCategory {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<ComplaintCategory> for String {
    fn from(value: ComplaintCategory) -> Self {
        match value {
            ComplaintCategory::Unrecognized(raw) => raw,
            known => known.label().to_string(),
        }
    }
}

impl fmt::Display for ComplaintCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Contact channel the complaint arrived through.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Channel {
    Voice,
    Chat,
    #[default]
    Email,
    Social,
    Unrecognized(String),
}

impl Channel {
    pub fn label(&self) -> &str {
        match self {
            Channel::Voice => "Voice",
            Channel::Chat => "Chat",
            Channel::Email => "Email",
            Channel::Social => "Social",
            Channel::Unrecognized(raw) => raw,
        }
    }
}

impl From<String> for Channel {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Voice" => Channel::Voice,
            "Chat" => Channel::Chat,
            "Email" => Channel::Email,
            "Social" => Channel::Social,
            _ => Channel::Unrecognized(value),
        }
    }
}

impl From<&str> for Channel {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<Channel> for String {
    fn from(value: Channel) -> Self {
        match value {
            Channel::Unrecognized(raw) => raw,
            known => known.label().to_string(),
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Commercial tier of the complaining customer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CustomerTier {
    Vip,
    Premium,
    #[default]
    Standard,
    Unrecognized(String),
}

impl CustomerTier {
    pub fn label(&self) -> &str {
        match self {
            CustomerTier::Vip => "VIP",
            CustomerTier::Premium => "Premium",
            CustomerTier::Standard => "Standard",
            CustomerTier::Unrecognized(raw) => raw,
        }
    }

    pub fn is_vip(&self) -> bool {
        self.label() == "VIP"
    }
}

impl From<String> for CustomerTier {
    fn from(value: String) -> Self {
        match value.as_str() {
            "VIP" => CustomerTier::Vip,
            "Premium" => CustomerTier::Premium,
            "Standard" => CustomerTier::Standard,
            _ => CustomerTier::Unrecognized(value),
        }
    }
}

impl From<&str> for CustomerTier {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<CustomerTier> for String {
    fn from(value: CustomerTier) -> Self {
        match value {
            CustomerTier::Unrecognized(raw) => raw,
            known => known.label().to_string(),
        }
    }
}

impl fmt::Display for CustomerTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Complaint record handed to the scoring engine.
///
/// `order_value` is taken literally: negative amounts and `NaN` are not
/// rejected, they simply fail the value thresholds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplaintInput {
    pub text: String,
    #[serde(default)]
    pub category: ComplaintCategory,
    #[serde(default)]
    pub channel: Channel,
    #[serde(default, alias = "customerTier")]
    pub customer_tier: CustomerTier,
    #[serde(default, alias = "orderValue")]
    pub order_value: f64,
    #[serde(default, alias = "isRepeat")]
    pub is_repeat: bool,
}
