//! Client-side validation of restaurant drafts.

use crate::domain::restaurant::{Field, RestaurantDraft};
use thiserror::Error;

/// A rule violation found before any request is made.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: Field,
    pub message: String,
}

/// Checks that every field is non-empty after trimming.
pub fn validate_draft(draft: &RestaurantDraft) -> Vec<ValidationError> {
    Field::ALL
        .into_iter()
        .filter(|&field| draft.get(field).trim().is_empty())
        .map(|field| ValidationError {
            field,
            message: field.required_message().to_string(),
        })
        .collect()
}

/// Messages shown next to the form: one slot per field plus a general slot
/// for failures that are not tied to a field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    name: Option<String>,
    address: Option<String>,
    contact: Option<String>,
    general: Option<String>,
}

impl FormErrors {
    pub fn from_violations(violations: &[ValidationError]) -> Self {
        let mut errors = Self::default();
        for v in violations {
            *errors.slot_mut(v.field) = Some(v.message.clone());
        }
        errors
    }

    fn slot_mut(&mut self, field: Field) -> &mut Option<String> {
        match field {
            Field::Name => &mut self.name,
            Field::Address => &mut self.address,
            Field::Contact => &mut self.contact,
        }
    }

    pub fn field(&self, field: Field) -> Option<&str> {
        match field {
            Field::Name => self.name.as_deref(),
            Field::Address => self.address.as_deref(),
            Field::Contact => self.contact.as_deref(),
        }
    }

    pub fn general(&self) -> Option<&str> {
        self.general.as_deref()
    }

    pub fn set_general(&mut self, message: impl Into<String>) {
        self.general = Some(message.into());
    }

    /// Clears the field's message together with the general one.
    pub fn clear_field(&mut self, field: Field) {
        *self.slot_mut(field) = None;
        self.general = None;
    }

    pub fn clear_fields(&mut self) {
        self.name = None;
        self.address = None;
        self.contact = None;
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn has_field_errors(&self) -> bool {
        Field::ALL.into_iter().any(|f| self.field(f).is_some())
    }

    pub fn is_empty(&self) -> bool {
        !self.has_field_errors() && self.general.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_draft_fails_every_field() {
        let violations = validate_draft(&RestaurantDraft::default());
        let fields: Vec<Field> = violations.iter().map(|v| v.field).collect();
        assert_eq!(fields, vec![Field::Name, Field::Address, Field::Contact]);

        let errors = FormErrors::from_violations(&violations);
        assert_eq!(errors.field(Field::Name), Some("Name is required"));
        assert_eq!(errors.field(Field::Address), Some("Address is required"));
        assert_eq!(errors.field(Field::Contact), Some("Contact is required"));
        assert_eq!(errors.general(), None);
        assert_eq!(violations[1].to_string(), "address: Address is required");
    }

    #[test]
    fn whitespace_counts_as_empty() {
        let draft = RestaurantDraft {
            name: "   ".into(),
            address: "\t12 Dock Rd\n".into(),
            contact: "5550000".into(),
        };
        let violations = validate_draft(&draft);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field, Field::Name);
    }

    #[test]
    fn clearing_a_field_also_clears_general() {
        let mut errors = FormErrors::from_violations(&validate_draft(&RestaurantDraft::default()));
        errors.set_general("Failed to save restaurant");

        errors.clear_field(Field::Address);
        assert_eq!(errors.field(Field::Address), None);
        assert_eq!(errors.general(), None);
        assert!(errors.field(Field::Name).is_some());
        assert!(!errors.is_empty());

        errors.clear();
        assert!(errors.is_empty());
    }
}
