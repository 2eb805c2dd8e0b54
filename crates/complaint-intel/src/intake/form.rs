use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::scoring::{Channel, ComplaintCategory, ComplaintInput, CustomerTier};

/// Raw intake form as typed by an agent. `order_value` stays a string until
/// the complaint is scored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntakeForm {
    #[serde(alias = "customerName")]
    pub customer_name: String,
    pub contact: String,
    pub channel: Channel,
    pub category: ComplaintCategory,
    #[serde(alias = "complaintText")]
    pub complaint_text: String,
    #[serde(alias = "orderValue")]
    pub order_value: String,
    #[serde(alias = "customerTier")]
    pub customer_tier: CustomerTier,
    #[serde(alias = "isRepeat")]
    pub is_repeat: bool,
}

impl Default for IntakeForm {
    fn default() -> Self {
        Self {
            customer_name: String::new(),
            contact: String::new(),
            channel: Channel::Email,
            category: ComplaintCategory::Service,
            complaint_text: String::new(),
            order_value: String::new(),
            customer_tier: CustomerTier::Standard,
            is_repeat: false,
        }
    }
}

impl IntakeForm {
    /// Checks required fields, collecting every failure rather than stopping at the first.
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();

        if self.customer_name.trim().is_empty() {
            errors.insert("customer_name", "Name is required");
        }

        let contact = self.contact.trim();
        if contact.is_empty() {
            errors.insert("contact", "Contact is required");
        } else if contact.contains('@') && !email_pattern().is_match(contact) {
            errors.insert("contact", "Invalid email");
        }

        if self.complaint_text.trim().is_empty() {
            errors.insert("complaint_text", "Description is required");
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    pub fn to_input(&self) -> ComplaintInput {
        ComplaintInput {
            text: self.complaint_text.clone(),
            category: self.category.clone(),
            channel: self.channel.clone(),
            customer_tier: self.customer_tier.clone(),
            order_value: parse_order_value(&self.order_value),
            is_repeat: self.is_repeat,
        }
    }
}

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^\S+@\S+\.\S+$").expect("email pattern compiles"))
}

/// Field name to message map returned when a form fails validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<&'static str, &'static str>);

impl FieldErrors {
    fn insert(&mut self, field: &'static str, message: &'static str) {
        self.0.insert(field, message);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.0.get(field).copied()
    }

    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.keys().copied()
    }

    pub fn summary(&self) -> String {
        self.0
            .iter()
            .map(|(field, message)| format!("{field}: {message}"))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Lenient amount parsing: reads the leading decimal number and ignores the
/// rest, so `"185.50 USD"` is 185.5. A leading `Infinity` (optionally signed)
/// is read as infinite. Blank or non-numeric input is 0.
pub fn parse_order_value(raw: &str) -> f64 {
    let trimmed = raw.trim();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    if unsigned.starts_with("Infinity") {
        return if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let prefix = &trimmed[..numeric_prefix_len(trimmed)];
    prefix.parse::<f64>().unwrap_or(0.0)
}

fn numeric_prefix_len(raw: &str) -> usize {
    let bytes = raw.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    if bytes.get(end) == Some(&b'.') {
        end += 1;
        while bytes.get(end).is_some_and(u8::is_ascii_digit) {
            end += 1;
        }
    }

    // Exponent only counts when digits follow it.
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exponent_end = end + 1;
        if matches!(bytes.get(exponent_end), Some(b'+' | b'-')) {
            exponent_end += 1;
        }
        let digits_start = exponent_end;
        while bytes.get(exponent_end).is_some_and(u8::is_ascii_digit) {
            exponent_end += 1;
        }
        if exponent_end > digits_start {
            end = exponent_end;
        }
    }

    end
}
