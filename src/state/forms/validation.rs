//! Required-field validation

use super::{FormValues, ValidationErrors};
use crate::state::EventDefinition;

/// Validate `values` against the event's field definitions.
///
/// Every required field whose value is missing, empty or whitespace-only
/// yields `"<label> is required"`. The returned map replaces any previous
/// error state; an empty map means the form is valid.
pub fn validate(event: &EventDefinition, values: &FormValues) -> ValidationErrors {
    event
        .fields
        .iter()
        .filter(|field| field.required)
        .filter(|field| {
            values
                .get(&field.id)
                .map_or(true, |value| value.trim().is_empty())
        })
        .map(|field| (field.id.clone(), format!("{} is required", field.label)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Category, FieldDefinition, FieldKind, LocationType};
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    fn event_with(fields: Vec<(&str, &str, bool)>) -> EventDefinition {
        EventDefinition {
            id: "evt".to_string(),
            name: "Event".to_string(),
            description: String::new(),
            category: Category::Free,
            amount: None,
            expiry_date: Utc::now(),
            contact_name: String::new(),
            contact_phone: String::new(),
            location: None,
            location_type: LocationType::Address,
            fields: fields
                .into_iter()
                .map(|(id, label, required)| FieldDefinition {
                    id: id.to_string(),
                    label: label.to_string(),
                    kind: FieldKind::Text,
                    required,
                    options: Vec::new(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_empty_values_yield_one_error_per_required_field() {
        let event = event_with(vec![
            ("name", "Full Name", true),
            ("email", "Email", true),
            ("note", "Note", false),
            ("phone", "Phone", true),
        ]);
        let errors = validate(&event, &FormValues::new());

        assert_eq!(errors.len(), 3);
        for (id, label) in [("name", "Full Name"), ("email", "Email"), ("phone", "Phone")] {
            assert!(errors[id].contains(label));
        }
        assert!(!errors.contains_key("note"));
    }

    #[test]
    fn test_message_format() {
        let event = event_with(vec![("name", "Full Name", true)]);
        let errors = validate(&event, &FormValues::new());
        assert_eq!(errors["name"], "Full Name is required");
    }

    #[test]
    fn test_whitespace_only_counts_as_missing() {
        let event = event_with(vec![("name", "Name", true)]);
        let values: FormValues = [("name".to_string(), "  \t ".to_string())].into();
        assert_eq!(validate(&event, &values).len(), 1);
    }

    #[test]
    fn test_filled_values_are_valid() {
        let event = event_with(vec![("name", "Name", true), ("email", "Email", true)]);
        let values: FormValues = [
            ("name".to_string(), "Ravi".to_string()),
            ("email".to_string(), "ravi@example.com".to_string()),
        ]
        .into();
        assert!(validate(&event, &values).is_empty());
    }

    #[test]
    fn test_no_required_fields_is_valid() {
        let event = event_with(vec![("note", "Note", false)]);
        assert!(validate(&event, &FormValues::new()).is_empty());
    }
}
