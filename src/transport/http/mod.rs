pub mod client;
pub mod error;
pub mod types;

pub use client::RestaurantClient;
pub use error::TransportError;
