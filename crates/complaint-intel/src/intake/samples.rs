use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::form::IntakeForm;
use crate::scoring::{Channel, ComplaintCategory, CustomerTier};

/// Canned complaints used to demo the intake flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SampleComplaint {
    Delivery,
    Billing,
    Defect,
}

impl SampleComplaint {
    pub const ALL: [SampleComplaint; 3] = [
        SampleComplaint::Delivery,
        SampleComplaint::Billing,
        SampleComplaint::Defect,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SampleComplaint::Delivery => "delivery",
            SampleComplaint::Billing => "billing",
            SampleComplaint::Defect => "defect",
        }
    }

    pub fn form(self) -> IntakeForm {
        match self {
            SampleComplaint::Delivery => IntakeForm {
                customer_name: "Alice Chen".to_string(),
                contact: "alice.c@example.com".to_string(),
                channel: Channel::Email,
                category: ComplaintCategory::Delivery,
                complaint_text: "Order #9921 implies delivered yesterday but I haven't received anything. Camera doorbell has no record of delivery attempt. This contains frozen goods.".to_string(),
                order_value: "185.50".to_string(),
                customer_tier: CustomerTier::Premium,
                is_repeat: false,
            },
            SampleComplaint::Billing => IntakeForm {
                customer_name: "Marcus Johnson".to_string(),
                contact: "marcus.j@example.com".to_string(),
                channel: Channel::Voice,
                category: ComplaintCategory::Billing,
                complaint_text: "I was double charged for my subscription renewal. I see two pending transactions on my AMEX for $49.99 each. Please refund one immediately.".to_string(),
                order_value: "49.99".to_string(),
                customer_tier: CustomerTier::Standard,
                is_repeat: true,
            },
            SampleComplaint::Defect => IntakeForm {
                customer_name: "Sarah Williams".to_string(),
                contact: "sarah.w@example.com".to_string(),
                channel: Channel::Chat,
                category: ComplaintCategory::Defect,
                complaint_text: "The ceramic vase arrived shattered. The box looked crushed on one side. I have photos of the damage.".to_string(),
                order_value: "120.00".to_string(),
                customer_tier: CustomerTier::Vip,
                is_repeat: false,
            },
        }
    }
}

impl FromStr for SampleComplaint {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        SampleComplaint::ALL
            .into_iter()
            .find(|sample| sample.name().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| value.to_string())
    }
}

impl fmt::Display for SampleComplaint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
