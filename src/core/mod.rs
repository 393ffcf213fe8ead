//! Core domain: model, validation, errors, store seams, and the aggregator

pub mod aggregator;
pub mod auth;
pub mod error;
pub mod model;
pub mod store;

pub use aggregator::OrderAggregator;
pub use auth::Credential;
pub use error::{OrderResult, OrderServiceError, ValidationError};
pub use model::{
    CreateOrderDetail, CreateOrderRequest, Customer, Item, OrderView, ShopOrder, ShopOrderDetail,
    UpdateOrderRequest,
};
pub use store::{OrderDetailStore, OrderStore};
