//! HTTP handlers for order operations

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    Json,
};
use serde::Serialize;
use std::sync::Arc;

use crate::core::aggregator::OrderAggregator;
use crate::core::auth::Credential;
use crate::core::error::OrderServiceError;
use crate::core::model::{CreateOrderRequest, OrderView, ShopOrder, UpdateOrderRequest};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub aggregator: Arc<OrderAggregator>,
}

impl AppState {
    pub fn new(aggregator: OrderAggregator) -> Self {
        Self {
            aggregator: Arc::new(aggregator),
        }
    }
}

/// Confirmation body for deletes
#[derive(Debug, Serialize)]
pub struct DeleteConfirmation {
    pub deleted: i64,
}

/// GET /orders
pub async fn list_orders(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<OrderView>>, OrderServiceError> {
    let credential = Credential::from_headers(&headers);
    let views = state.aggregator.list_orders(&credential).await?;
    Ok(Json(views))
}

/// GET /orders/{id}
pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    headers: HeaderMap,
) -> Result<Json<OrderView>, OrderServiceError> {
    let credential = Credential::from_headers(&headers);
    let view = state.aggregator.get_order(id, &credential).await?;
    Ok(Json(view))
}

/// POST /orders
pub async fn create_order(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<CreateOrderRequest>,
) -> Result<(StatusCode, Json<ShopOrder>), OrderServiceError> {
    let credential = Credential::from_headers(&headers);
    let order = state.aggregator.create_order(body, &credential).await?;
    Ok((StatusCode::CREATED, Json(order)))
}

/// PUT /orders/{id}
pub async fn update_order(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<UpdateOrderRequest>,
) -> Result<Json<ShopOrder>, OrderServiceError> {
    let order = state.aggregator.update_order(id, body).await?;
    Ok(Json(order))
}

/// DELETE /orders/{id}
pub async fn delete_order(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<DeleteConfirmation>, OrderServiceError> {
    state.aggregator.delete_order(id).await?;
    Ok(Json(DeleteConfirmation { deleted: id }))
}
