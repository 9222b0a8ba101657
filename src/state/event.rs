//! Event definitions as served by the public event API

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Pricing category of an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Free,
    Paid,
}

/// How the `location` string of an event should be interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationType {
    #[default]
    Address,
    Url,
}

/// Input kind of a registration field.
///
/// Unknown tags coming from the backend degrade to plain text inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Email,
    #[serde(alias = "mobile", alias = "phone")]
    Tel,
    Number,
    Date,
    Dropdown,
    #[default]
    #[serde(other)]
    Text,
}

/// One input of the dynamically defined registration form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDefinition {
    pub id: String,
    pub label: String,
    #[serde(rename = "type", default)]
    pub kind: FieldKind,
    #[serde(default)]
    pub required: bool,
    /// Only meaningful for dropdown fields
    #[serde(default)]
    pub options: Vec<String>,
}

/// A registrable event with its form schema
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDefinition {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: Category,
    /// Present only for paid events
    #[serde(default)]
    pub amount: Option<f64>,
    pub expiry_date: DateTime<Utc>,
    #[serde(default)]
    pub contact_name: String,
    #[serde(default)]
    pub contact_phone: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub location_type: LocationType,
    #[serde(default)]
    pub fields: Vec<FieldDefinition>,
}

impl EventDefinition {
    pub fn is_paid(&self) -> bool {
        self.category == Category::Paid
    }

    /// Amount to charge, zero for free events or a paid event without an amount
    pub fn amount_due(&self) -> f64 {
        match self.category {
            Category::Paid => self.amount.unwrap_or_default(),
            Category::Free => 0.0,
        }
    }

    pub fn field(&self, field_id: &str) -> Option<&FieldDefinition> {
        self.fields.iter().find(|f| f.id == field_id)
    }

    /// Location if present and not blank
    pub fn location(&self) -> Option<&str> {
        self.location
            .as_deref()
            .map(str::trim)
            .filter(|l| !l.is_empty())
    }

    /// Price badge shown in the page header
    pub fn price_label(&self) -> String {
        match self.category {
            Category::Free => "FREE".to_string(),
            Category::Paid => format!("₹{}", format_amount(self.amount_due())),
        }
    }
}

/// Format an amount without a trailing `.0` for whole numbers
pub fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{amount:.0}")
    } else {
        format!("{amount:.2}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const EVENT_JSON: &str = r#"{
        "id": "evt-42",
        "name": "Rust Meetup",
        "description": "Talks and pizza",
        "category": "paid",
        "amount": 499,
        "expiryDate": "2030-01-01T10:00:00Z",
        "contactName": "Asha",
        "contactPhone": "+91 98765 43210",
        "location": "https://maps.example.com/x",
        "locationType": "url",
        "fields": [
            {"id": "name", "label": "Name", "type": "text", "required": true},
            {"id": "phone", "label": "Phone", "type": "mobile", "required": true},
            {"id": "size", "label": "T-shirt", "type": "dropdown", "options": ["S", "M", "L"]},
            {"id": "misc", "label": "Notes", "type": "textarea"}
        ]
    }"#;

    #[test]
    fn test_deserialize_event() {
        let event: EventDefinition = serde_json::from_str(EVENT_JSON).unwrap();
        assert_eq!(event.id, "evt-42");
        assert_eq!(event.category, Category::Paid);
        assert_eq!(event.amount, Some(499.0));
        assert_eq!(event.location_type, LocationType::Url);
        assert_eq!(event.fields.len(), 4);
        assert_eq!(event.fields[1].kind, FieldKind::Tel);
        assert_eq!(event.fields[2].kind, FieldKind::Dropdown);
        assert_eq!(event.fields[2].options, vec!["S", "M", "L"]);
        assert!(!event.fields[2].required);
    }

    #[test]
    fn test_unknown_field_kind_falls_back_to_text() {
        let event: EventDefinition = serde_json::from_str(EVENT_JSON).unwrap();
        assert_eq!(event.fields[3].kind, FieldKind::Text);

        let field: FieldDefinition =
            serde_json::from_str(r#"{"id": "sig", "label": "Signature", "type": "signature"}"#)
                .unwrap();
        assert_eq!(field.kind, FieldKind::Text);
        assert_eq!(FieldKind::default(), FieldKind::Text);
    }

    #[test]
    fn test_minimal_free_event_defaults() {
        let json = r#"{"id": "e", "name": "Open day", "expiryDate": "2030-01-01T00:00:00Z"}"#;
        let event: EventDefinition = serde_json::from_str(json).unwrap();
        assert_eq!(event.category, Category::Free);
        assert_eq!(event.location_type, LocationType::Address);
        assert!(event.fields.is_empty());
        assert!(event.location().is_none());
        assert_eq!(event.amount_due(), 0.0);
    }

    #[test]
    fn test_price_label() {
        let mut event: EventDefinition = serde_json::from_str(EVENT_JSON).unwrap();
        assert_eq!(event.price_label(), "₹499");
        event.amount = Some(12.5);
        assert_eq!(event.price_label(), "₹12.50");
        event.category = Category::Free;
        assert_eq!(event.price_label(), "FREE");
    }

    #[test]
    fn test_blank_location_is_none() {
        let mut event: EventDefinition = serde_json::from_str(EVENT_JSON).unwrap();
        event.location = Some("   ".to_string());
        assert!(event.location().is_none());
    }

    #[test]
    fn test_field_lookup() {
        let event: EventDefinition = serde_json::from_str(EVENT_JSON).unwrap();
        assert_eq!(event.field("size").map(|f| f.label.as_str()), Some("T-shirt"));
        assert!(event.field("missing").is_none());
    }
}
