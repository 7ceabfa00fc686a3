//! Restaurant records, drafts and the rules a draft must satisfy before it is sent.

pub mod restaurant;
pub mod validation;

pub use restaurant::{Field, Restaurant, RestaurantDraft, RestaurantId};
pub use validation::{validate_draft, FormErrors, ValidationError};
