pub mod app;
pub mod domain;
pub mod infra;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::{Controller, RestaurantStore};
pub use domain::{Field, Restaurant, RestaurantDraft, RestaurantId};
pub use infra::config::{ClientConfig, RouteStyle};
pub use transport::http::{RestaurantClient, TransportError};
