//! The order aggregator: orchestration of validation, persistence, and
//! downstream enrichment
//!
//! This is the core of the service. Writes go through validation before any
//! record is persisted; reads join the order record with its details and
//! resolve the customer and every item through the downstream client,
//! forwarding the caller's credential to the customer service.

use crate::core::auth::Credential;
use crate::core::error::{
    FieldValidationError, OrderResult, OrderServiceError, ValidationError,
};
use crate::core::model::{
    CreateOrderRequest, OrderView, ShopOrder, ShopOrderDetail, UpdateOrderRequest,
};
use crate::core::store::{OrderDetailStore, OrderStore};
use crate::downstream::{DownstreamClient, DownstreamError};
use std::sync::Arc;
use validator::Validate;

/// Orchestrates order operations over the stores and the downstream client
#[derive(Clone)]
pub struct OrderAggregator {
    orders: Arc<dyn OrderStore>,
    details: Arc<dyn OrderDetailStore>,
    downstream: Arc<dyn DownstreamClient>,
}

impl OrderAggregator {
    pub fn new(
        orders: Arc<dyn OrderStore>,
        details: Arc<dyn OrderDetailStore>,
        downstream: Arc<dyn DownstreamClient>,
    ) -> Self {
        Self {
            orders,
            details,
            downstream,
        }
    }

    /// Assemble an enriched view for every stored order
    ///
    /// All-or-nothing: if any single order's enrichment fails, the whole
    /// operation fails with that error. An order is never silently dropped
    /// from the response.
    pub async fn list_orders(&self, credential: &Credential) -> OrderResult<Vec<OrderView>> {
        let orders = self
            .orders
            .list()
            .await
            .map_err(OrderServiceError::storage)?;

        let mut views = Vec::with_capacity(orders.len());
        for order in orders {
            views.push(self.enrich(order, credential).await?);
        }

        tracing::info!(count = views.len(), "listed orders");
        Ok(views)
    }

    /// Assemble the enriched view for one order
    pub async fn get_order(&self, id: i64, credential: &Credential) -> OrderResult<OrderView> {
        let order = self
            .orders
            .get(id)
            .await
            .map_err(OrderServiceError::storage)?
            .ok_or(OrderServiceError::OrderNotFound { id })?;

        self.enrich(order, credential).await
    }

    /// Create an order together with its line-item details
    ///
    /// Validation ordering: the order's own fields, then every detail, then
    /// the customer lookup. Nothing is persisted until all of those pass, so
    /// a bad detail can never leave a half-written order behind. The created
    /// order is returned with its persisted details attached.
    pub async fn create_order(
        &self,
        request: CreateOrderRequest,
        credential: &Credential,
    ) -> OrderResult<ShopOrder> {
        request
            .validate()
            .map_err(|e| OrderServiceError::Validation(e.into()))?;
        self.validate_details(&request)?;

        // The referenced customer must resolve before anything is persisted
        self.downstream
            .get_customer(request.customer_id, credential)
            .await
            .map_err(|e| classify_customer_error(request.customer_id, e))?;

        let order = self
            .orders
            .create(ShopOrder {
                id: 0,
                customer_id: request.customer_id,
                order_date: request.order_date,
                shop_order_details: Vec::new(),
            })
            .await
            .map_err(OrderServiceError::storage)?;

        let mut persisted_details = Vec::with_capacity(request.shop_order_details.len());
        for detail in &request.shop_order_details {
            let persisted = self
                .details
                .create(ShopOrderDetail {
                    id: 0,
                    item_id: detail.item_id,
                    order_id: order.id,
                })
                .await
                .map_err(OrderServiceError::storage)?;
            persisted_details.push(persisted);
        }

        tracing::info!(
            order_id = order.id,
            customer_id = order.customer_id,
            details = persisted_details.len(),
            "created order"
        );

        Ok(ShopOrder {
            shop_order_details: persisted_details,
            ..order
        })
    }

    /// Apply a partial update; only customerId and orderDate are mutable
    pub async fn update_order(
        &self,
        id: i64,
        request: UpdateOrderRequest,
    ) -> OrderResult<ShopOrder> {
        request
            .validate()
            .map_err(|e| OrderServiceError::Validation(e.into()))?;

        let mut order = self
            .orders
            .get(id)
            .await
            .map_err(OrderServiceError::storage)?
            .ok_or(OrderServiceError::OrderNotFound { id })?;

        if let Some(customer_id) = request.customer_id {
            order.customer_id = customer_id;
        }
        if let Some(order_date) = request.order_date {
            order.order_date = order_date;
        }

        let updated = self
            .orders
            .update(id, order)
            .await
            .map_err(OrderServiceError::storage)?;

        tracing::info!(order_id = id, "updated order");
        Ok(updated)
    }

    /// Remove an order and cascade-delete its details
    ///
    /// A no-op for unknown ids, matching the store's delete semantics;
    /// deleting zero details is likewise not an error.
    pub async fn delete_order(&self, id: i64) -> OrderResult<()> {
        self.orders
            .delete(id)
            .await
            .map_err(OrderServiceError::storage)?;
        self.details
            .delete_by_order_id(id)
            .await
            .map_err(OrderServiceError::storage)?;

        tracing::info!(order_id = id, "deleted order");
        Ok(())
    }

    /// Join an order with its details and resolve downstream data
    ///
    /// One customer call per order, one item call per detail in detail
    /// order. Repeated item ids are deliberately not deduplicated.
    async fn enrich(&self, order: ShopOrder, credential: &Credential) -> OrderResult<OrderView> {
        let details = self
            .details
            .find_by_order_id(order.id)
            .await
            .map_err(OrderServiceError::storage)?;

        let customer = self
            .downstream
            .get_customer(order.customer_id, credential)
            .await
            .map_err(|e| classify_customer_error(order.customer_id, e))?;

        let mut items = Vec::with_capacity(details.len());
        for detail in &details {
            let item = self
                .downstream
                .get_item(detail.item_id)
                .await
                .map_err(|e| classify_item_error(detail.item_id, e))?;
            items.push(item);
        }

        Ok(OrderView {
            id: order.id,
            order_date: order.order_date,
            customer,
            items,
        })
    }

    /// Validate each embedded detail individually, with indexed field names
    fn validate_details(&self, request: &CreateOrderRequest) -> OrderResult<()> {
        let mut fields = Vec::new();
        for (index, detail) in request.shop_order_details.iter().enumerate() {
            if let Err(errors) = detail.validate() {
                for (field, errs) in errors.field_errors() {
                    for err in errs.iter() {
                        fields.push(FieldValidationError {
                            field: format!("shopOrderDetails[{}].{}", index, field),
                            message: err
                                .message
                                .as_ref()
                                .map(|m| m.to_string())
                                .unwrap_or_else(|| err.code.to_string()),
                        });
                    }
                }
            }
        }

        if fields.is_empty() {
            Ok(())
        } else {
            Err(OrderServiceError::Validation(ValidationError::FieldErrors(
                fields,
            )))
        }
    }
}

/// Auth rejections propagate as InvalidAuth; every other customer failure
/// collapses into CustomerNotFound
fn classify_customer_error(id: i64, err: DownstreamError) -> OrderServiceError {
    match err {
        DownstreamError::Unauthorized => OrderServiceError::InvalidAuth,
        DownstreamError::NotFound { .. }
        | DownstreamError::InvalidPayload { .. }
        | DownstreamError::Unavailable { .. } => OrderServiceError::CustomerNotFound { id },
    }
}

/// Item lookups keep a finer split: absent items are 404s, transport and
/// payload failures surface as a downstream outage
fn classify_item_error(id: i64, err: DownstreamError) -> OrderServiceError {
    match err {
        DownstreamError::Unauthorized => OrderServiceError::InvalidAuth,
        DownstreamError::NotFound { .. } => OrderServiceError::ItemNotFound { id },
        DownstreamError::InvalidPayload { message } | DownstreamError::Unavailable { message } => {
            OrderServiceError::DownstreamUnavailable {
                service: "item",
                message,
            }
        }
    }
}
