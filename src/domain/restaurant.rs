//! Restaurant records and the client-side draft used by the edit form.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value as JsonValue;
use std::fmt;

/// Maximum number of digits accepted in the contact field while typing.
pub const CONTACT_MAX_DIGITS: usize = 10;

/// Server-assigned identifier of a restaurant.
///
/// Backends disagree on whether ids are integers or strings, so both are
/// accepted on the wire and kept as text on the client side.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "JsonValue", into = "String")]
pub struct RestaurantId(String);

impl RestaurantId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RestaurantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<RestaurantId> for String {
    fn from(id: RestaurantId) -> Self {
        id.0
    }
}

impl TryFrom<JsonValue> for RestaurantId {
    type Error = String;

    fn try_from(value: JsonValue) -> Result<Self, Self::Error> {
        match scalar_to_string(&value) {
            Some(s) if !s.is_empty() => Ok(Self(s)),
            Some(_) => Err("restaurant id must not be empty".to_string()),
            None => Err(format!("expected string or integer id, got {}", value)),
        }
    }
}

/// Renders a JSON string or integer as text. Anything else yields `None`.
pub fn scalar_to_string(v: &JsonValue) -> Option<String> {
    if let Some(s) = v.as_str() {
        return Some(s.to_string());
    }
    if let Some(i) = v.as_i64() {
        return Some(i.to_string());
    }
    if let Some(u) = v.as_u64() {
        return Some(u.to_string());
    }
    None
}

fn contact_from_json<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = JsonValue::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(String::new());
    }
    scalar_to_string(&value)
        .ok_or_else(|| serde::de::Error::custom(format!("expected contact text, got {}", value)))
}

/// A restaurant as stored by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: RestaurantId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default, deserialize_with = "contact_from_json")]
    pub contact: String,
}

/// The editable fields of a restaurant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Address,
    Contact,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Address, Field::Contact];

    /// Name of the field in request bodies.
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Address => "address",
            Field::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Restaurant Name",
            Field::Address => "Address",
            Field::Contact => "Contact",
        }
    }

    pub fn required_message(self) -> &'static str {
        match self {
            Field::Name => "Name is required",
            Field::Address => "Address is required",
            Field::Contact => "Contact is required",
        }
    }

    /// Case-insensitive lookup by wire name.
    pub fn parse(s: &str) -> Option<Field> {
        let s = s.trim().to_lowercase();
        Field::ALL.into_iter().find(|f| f.as_str() == s)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unsaved copy of a restaurant's editable fields.
///
/// Serializes to the `{name, address, contact}` body sent on create and update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestaurantDraft {
    pub name: String,
    pub address: String,
    pub contact: String,
}

impl RestaurantDraft {
    pub fn from_record(record: &Restaurant) -> Self {
        Self {
            name: record.name.clone(),
            address: record.address.clone(),
            contact: record.contact.clone(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Address => &self.address,
            Field::Contact => &self.contact,
        }
    }

    /// Stores a typed value. Contact input keeps digits only, capped at
    /// [`CONTACT_MAX_DIGITS`].
    pub fn set(&mut self, field: Field, value: &str) {
        match field {
            Field::Name => self.name = value.to_string(),
            Field::Address => self.address = value.to_string(),
            Field::Contact => self.contact = sanitize_contact(value),
        }
    }
}

pub fn sanitize_contact(input: &str) -> String {
    input
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(CONTACT_MAX_DIGITS)
        .collect()
}
