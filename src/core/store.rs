//! Store traits for order and order-detail records
//!
//! The aggregator is agnostic to the underlying storage mechanism; these
//! traits are the seam. Implementations must provide their own internal
//! concurrency safety (atomic per-record read/write); no cross-record
//! transactions are required.

use crate::core::model::{ShopOrder, ShopOrderDetail};
use anyhow::Result;
use async_trait::async_trait;

/// Keyed storage for [`ShopOrder`] records
///
/// Ids are assigned by the store on create and are immutable afterwards.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Persist a new order, assigning its id
    ///
    /// The transient detail list is not persisted; callers must not rely on
    /// it surviving a round trip through the store.
    async fn create(&self, order: ShopOrder) -> Result<ShopOrder>;

    /// Get an order by id
    async fn get(&self, id: i64) -> Result<Option<ShopOrder>>;

    /// List all orders
    async fn list(&self) -> Result<Vec<ShopOrder>>;

    /// Replace an existing order record
    async fn update(&self, id: i64, order: ShopOrder) -> Result<ShopOrder>;

    /// Delete an order; deleting a missing id is a no-op
    async fn delete(&self, id: i64) -> Result<()>;
}

/// Keyed storage for [`ShopOrderDetail`] records, queryable by owning order
#[async_trait]
pub trait OrderDetailStore: Send + Sync {
    /// Persist a new detail, assigning its id
    async fn create(&self, detail: ShopOrderDetail) -> Result<ShopOrderDetail>;

    /// All details attached to an order, in stable id order
    async fn find_by_order_id(&self, order_id: i64) -> Result<Vec<ShopOrderDetail>>;

    /// Remove every detail attached to an order; removing zero is a no-op
    async fn delete_by_order_id(&self, order_id: i64) -> Result<()>;
}
