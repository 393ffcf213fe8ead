//! Storage backends for order and order-detail records

pub mod in_memory;

pub use in_memory::{InMemoryOrderDetailStore, InMemoryOrderStore};
