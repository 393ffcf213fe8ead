//! # shop-orders
//!
//! A small order-management HTTP service. Orders and their line-item details
//! are persisted locally; reads assemble an enriched [`core::model::OrderView`]
//! by resolving the owning customer and every referenced item through two
//! downstream HTTP services.
//!
//! ## Architecture
//!
//! - [`core::aggregator::OrderAggregator`]: the request orchestration —
//!   validation ordering, persistence, and enrichment under partial-failure
//!   and authorization constraints
//! - [`core::store`]: trait seams for the two keyed record stores, with
//!   in-memory implementations in [`storage`]
//! - [`downstream`]: the customer/item service client, forwarding the
//!   caller's credential opaquely and classifying authorization rejections
//!   separately from all other failures
//! - [`server`]: axum routing and handlers
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use shop_orders::prelude::*;
//!
//! let config = ServiceConfig::load()?;
//! let downstream = Arc::new(HttpDownstreamClient::new(
//!     &config.customer_service_url,
//!     &config.item_service_url,
//!     config.downstream_timeout(),
//! )?);
//! let aggregator = OrderAggregator::new(
//!     Arc::new(InMemoryOrderStore::new()),
//!     Arc::new(InMemoryOrderDetailStore::new()),
//!     downstream,
//! );
//! let app = build_router(AppState::new(aggregator));
//! ```

pub mod config;
pub mod core;
pub mod downstream;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    pub use crate::config::ServiceConfig;
    pub use crate::core::{
        Credential, CreateOrderDetail, CreateOrderRequest, Customer, Item, OrderAggregator,
        OrderDetailStore, OrderResult, OrderServiceError, OrderStore, OrderView, ShopOrder,
        ShopOrderDetail, UpdateOrderRequest, ValidationError,
    };
    pub use crate::downstream::{DownstreamClient, DownstreamError, HttpDownstreamClient};
    pub use crate::server::{build_router, AppState};
    pub use crate::storage::{InMemoryOrderDetailStore, InMemoryOrderStore};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use chrono::NaiveDate;
    pub use serde::{Deserialize, Serialize};
}
