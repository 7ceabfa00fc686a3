pub mod controller;
pub mod store;
pub mod view;

pub use controller::{Confirm, Controller, DeleteOutcome, Mode, SubmitOutcome};
pub use store::RestaurantStore;
