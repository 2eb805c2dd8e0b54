use serde::{Deserialize, Deserializer};
use std::io::Read;

use crate::intake::parse_order_value;
use crate::scoring::{Channel, ComplaintCategory, ComplaintInput, CustomerTier};

#[derive(Debug)]
pub(crate) struct ComplaintRecord {
    pub(crate) id: String,
    pub(crate) input: ComplaintInput,
}

pub(crate) fn parse_records<R: Read>(reader: R) -> Result<Vec<ComplaintRecord>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();

    for (index, record) in csv_reader.deserialize::<ComplaintRow>().enumerate() {
        let row = record?;
        let id = row.id.clone().unwrap_or_else(|| format!("row-{}", index + 1));
        records.push(ComplaintRecord {
            id,
            input: row.into_input(),
        });
    }

    Ok(records)
}

#[derive(Debug, Deserialize)]
struct ComplaintRow {
    #[serde(rename = "Id", default, deserialize_with = "empty_string_as_none")]
    id: Option<String>,
    #[serde(rename = "Text", default)]
    text: String,
    #[serde(rename = "Category", default, deserialize_with = "empty_string_as_none")]
    category: Option<String>,
    #[serde(rename = "Channel", default, deserialize_with = "empty_string_as_none")]
    channel: Option<String>,
    #[serde(
        rename = "Customer Tier",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    customer_tier: Option<String>,
    #[serde(
        rename = "Order Value",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    order_value: Option<String>,
    #[serde(rename = "Repeat", default, deserialize_with = "empty_string_as_none")]
    repeat: Option<String>,
}

impl ComplaintRow {
    fn into_input(self) -> ComplaintInput {
        ComplaintInput {
            text: self.text,
            category: self
                .category
                .map(ComplaintCategory::from)
                .unwrap_or_default(),
            channel: self.channel.map(Channel::from).unwrap_or_default(),
            customer_tier: self
                .customer_tier
                .map(CustomerTier::from)
                .unwrap_or_default(),
            order_value: self
                .order_value
                .as_deref()
                .map(parse_order_value)
                .unwrap_or(0.0),
            is_repeat: self.repeat.as_deref().is_some_and(is_truthy),
        }
    }
}

fn is_truthy(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "true" | "yes" | "y" | "1"
    )
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.and_then(|raw| {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }))
}
