//! Router builder for the order API
//!
//! Routes:
//! - GET    /orders       - list enriched order views
//! - POST   /orders       - create an order with embedded details
//! - GET    /orders/{id}  - get one enriched order view
//! - PUT    /orders/{id}  - partial update (customerId, orderDate)
//! - DELETE /orders/{id}  - delete order and cascade its details

use crate::server::handlers::{
    create_order, delete_order, get_order, list_orders, update_order, AppState,
};
use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Build the service router with tracing and CORS layers applied
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/orders", get(list_orders).post(create_order))
        .route(
            "/orders/{id}",
            get(get_order).put(update_order).delete(delete_order),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
