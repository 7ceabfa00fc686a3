//! The seam between the controller and whatever holds the restaurant collection.

use crate::domain::{Restaurant, RestaurantDraft, RestaurantId};
use crate::transport::http::TransportError;
use async_trait::async_trait;

/// Contract for a remote restaurant collection.
///
/// Implementations hold no per-call state: every operation is a single
/// request that either succeeds or fails with a [`TransportError`].
#[async_trait]
pub trait RestaurantStore: Send + Sync {
    /// All records, in server order.
    async fn list_all(&self) -> Result<Vec<Restaurant>, TransportError>;

    /// Creates a record.
    ///
    /// Returns the record with its server-assigned id when the backend echoes
    /// it, `None` when it only acknowledges.
    async fn create(&self, draft: &RestaurantDraft) -> Result<Option<Restaurant>, TransportError>;

    /// Replaces every editable field of an existing record.
    ///
    /// Returns the updated record when the backend echoes it, `None` when it
    /// only acknowledges.
    async fn update(
        &self,
        id: &RestaurantId,
        draft: &RestaurantDraft,
    ) -> Result<Option<Restaurant>, TransportError>;

    async fn delete(&self, id: &RestaurantId) -> Result<(), TransportError>;
}
