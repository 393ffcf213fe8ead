//! Shared test harness: a configurable stub downstream client that records
//! every call it receives

#![allow(dead_code)]

use async_trait::async_trait;
use shop_orders::core::auth::Credential;
use shop_orders::core::model::{Customer, Item};
use shop_orders::downstream::{DownstreamClient, DownstreamError};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

pub fn customer(id: i64) -> Customer {
    Customer {
        id,
        name: format!("Customer {}", id),
        ssn: format!("000-00-{:04}", id),
    }
}

pub fn item(id: i64, price: i64) -> Item {
    Item {
        id,
        name: format!("Item {}", id),
        price,
    }
}

/// Stub downstream client
///
/// Resolves from fixed maps, optionally enforces an expected credential on
/// customer calls, and records the id of every call for assertion.
pub struct StubDownstream {
    customers: HashMap<i64, Customer>,
    items: HashMap<i64, Item>,
    required_credential: Option<String>,
    broken_items: HashSet<i64>,
    pub customer_calls: Mutex<Vec<i64>>,
    pub item_calls: Mutex<Vec<i64>>,
}

impl StubDownstream {
    pub fn new() -> Self {
        Self {
            customers: HashMap::new(),
            items: HashMap::new(),
            required_credential: None,
            broken_items: HashSet::new(),
            customer_calls: Mutex::new(Vec::new()),
            item_calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_customer(mut self, customer: Customer) -> Self {
        self.customers.insert(customer.id, customer);
        self
    }

    pub fn with_item(mut self, item: Item) -> Self {
        self.items.insert(item.id, item);
        self
    }

    /// Customer calls without exactly this credential are rejected as
    /// unauthorized
    pub fn require_credential(mut self, credential: &str) -> Self {
        self.required_credential = Some(credential.to_string());
        self
    }

    /// Item calls for this id fail at the transport level
    pub fn with_broken_item(mut self, id: i64) -> Self {
        self.broken_items.insert(id);
        self
    }

    pub fn customer_call_count(&self, id: i64) -> usize {
        self.customer_calls
            .lock()
            .unwrap()
            .iter()
            .filter(|called| **called == id)
            .count()
    }

    pub fn item_call_count(&self, id: i64) -> usize {
        self.item_calls
            .lock()
            .unwrap()
            .iter()
            .filter(|called| **called == id)
            .count()
    }
}

#[async_trait]
impl DownstreamClient for StubDownstream {
    async fn get_customer(
        &self,
        id: i64,
        credential: &Credential,
    ) -> Result<Customer, DownstreamError> {
        self.customer_calls.lock().unwrap().push(id);

        if let Some(required) = &self.required_credential {
            if credential.value() != Some(required.as_str()) {
                return Err(DownstreamError::Unauthorized);
            }
        }

        self.customers
            .get(&id)
            .cloned()
            .ok_or(DownstreamError::NotFound { id })
    }

    async fn get_item(&self, id: i64) -> Result<Item, DownstreamError> {
        self.item_calls.lock().unwrap().push(id);

        if self.broken_items.contains(&id) {
            return Err(DownstreamError::Unavailable {
                message: "connection reset by peer".to_string(),
            });
        }

        self.items
            .get(&id)
            .cloned()
            .ok_or(DownstreamError::NotFound { id })
    }
}
