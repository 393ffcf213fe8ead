//! In-memory store implementations for testing and development
//!
//! Uses RwLock-guarded maps for thread-safe access and an atomic sequence
//! for server-assigned ids.

use crate::core::model::{ShopOrder, ShopOrderDetail};
use crate::core::store::{OrderDetailStore, OrderStore};
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, RwLock};

/// In-memory order store
#[derive(Clone)]
pub struct InMemoryOrderStore {
    orders: Arc<RwLock<HashMap<i64, ShopOrder>>>,
    sequence: Arc<AtomicI64>,
}

impl InMemoryOrderStore {
    pub fn new() -> Self {
        Self {
            orders: Arc::new(RwLock::new(HashMap::new())),
            sequence: Arc::new(AtomicI64::new(1)),
        }
    }
}

impl Default for InMemoryOrderStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn create(&self, mut order: ShopOrder) -> Result<ShopOrder> {
        order.id = self.sequence.fetch_add(1, Ordering::SeqCst);
        // Details are transient; the record is persisted without them
        order.shop_order_details = Vec::new();

        let mut orders = self
            .orders
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        orders.insert(order.id, order.clone());

        Ok(order)
    }

    async fn get(&self, id: i64) -> Result<Option<ShopOrder>> {
        let orders = self
            .orders
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(orders.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<ShopOrder>> {
        let orders = self
            .orders
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        let mut all: Vec<ShopOrder> = orders.values().cloned().collect();
        all.sort_by_key(|order| order.id);
        Ok(all)
    }

    async fn update(&self, id: i64, mut order: ShopOrder) -> Result<ShopOrder> {
        order.id = id;
        order.shop_order_details = Vec::new();

        let mut orders = self
            .orders
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        orders
            .get_mut(&id)
            .ok_or_else(|| anyhow!("Order {} not found", id))?;

        orders.insert(id, order.clone());

        Ok(order)
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let mut orders = self
            .orders
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        orders.remove(&id);

        Ok(())
    }
}

/// In-memory order-detail store
#[derive(Clone)]
pub struct InMemoryOrderDetailStore {
    details: Arc<RwLock<HashMap<i64, ShopOrderDetail>>>,
    sequence: Arc<AtomicI64>,
}

impl InMemoryOrderDetailStore {
    pub fn new() -> Self {
        Self {
            details: Arc::new(RwLock::new(HashMap::new())),
            sequence: Arc::new(AtomicI64::new(1)),
        }
    }
}

impl Default for InMemoryOrderDetailStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OrderDetailStore for InMemoryOrderDetailStore {
    async fn create(&self, mut detail: ShopOrderDetail) -> Result<ShopOrderDetail> {
        detail.id = self.sequence.fetch_add(1, Ordering::SeqCst);

        let mut details = self
            .details
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        details.insert(detail.id, detail.clone());

        Ok(detail)
    }

    async fn find_by_order_id(&self, order_id: i64) -> Result<Vec<ShopOrderDetail>> {
        let details = self
            .details
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        let mut matching: Vec<ShopOrderDetail> = details
            .values()
            .filter(|detail| detail.order_id == order_id)
            .cloned()
            .collect();
        // Insertion order equals id order under the atomic sequence
        matching.sort_by_key(|detail| detail.id);
        Ok(matching)
    }

    async fn delete_by_order_id(&self, order_id: i64) -> Result<()> {
        let mut details = self
            .details
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        details.retain(|_, detail| detail.order_id != order_id);

        Ok(())
    }
}
