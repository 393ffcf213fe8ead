//! Domain model for orders and their enriched read-side view
//!
//! `ShopOrder` and `ShopOrderDetail` are the two storage-owned records,
//! joined by `order_id` at read time. `Customer` and `Item` are read-only
//! projections of downstream service payloads and are never stored locally.
//! All wire field names are camelCase.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A customer's purchase record
///
/// Details are attached transiently when reading; the stores persist the
/// order record without them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShopOrder {
    /// Server-assigned, immutable once assigned
    pub id: i64,
    pub customer_id: i64,
    pub order_date: NaiveDate,
    /// Transient: rederived from the detail store on read, never persisted
    /// as part of this record
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub shop_order_details: Vec<ShopOrderDetail>,
}

/// A single line item reference within an order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShopOrderDetail {
    /// Server-assigned
    pub id: i64,
    /// References an item in the external item service
    pub item_id: i64,
    /// Foreign key to the owning order; 0 means unassigned
    #[serde(default)]
    pub order_id: i64,
}

/// Read-only projection of a customer service payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub ssn: String,
}

/// Read-only projection of an item service payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub price: i64,
}

/// The assembled read-side response: an order with its resolved customer
/// and item data. Constructed per request, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderView {
    pub id: i64,
    pub order_date: NaiveDate,
    pub customer: Customer,
    pub items: Vec<Item>,
}

/// Request body for creating an order
///
/// Ids are never client-supplied; the stores assign them.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    #[validate(range(min = 0, message = "customerId must be non-negative"))]
    pub customer_id: i64,
    #[validate(custom(function = in_the_past))]
    pub order_date: NaiveDate,
    #[serde(default)]
    pub shop_order_details: Vec<CreateOrderDetail>,
}

/// An embedded line item in a create request
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderDetail {
    #[validate(range(min = 0, message = "itemId must be non-negative"))]
    pub item_id: i64,
}

/// Request body for updating an order
///
/// Partial: only fields that are present are applied. Id and details are
/// untouched by updates.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrderRequest {
    #[validate(range(min = 0, message = "customerId must be non-negative"))]
    pub customer_id: Option<i64>,
    #[validate(custom(function = in_the_past))]
    pub order_date: Option<NaiveDate>,
}

fn in_the_past(date: &NaiveDate) -> Result<(), validator::ValidationError> {
    if *date < Utc::now().date_naive() {
        Ok(())
    } else {
        let mut err = validator::ValidationError::new("past");
        err.message = Some("order date must be in the past".into());
        Err(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn yesterday() -> NaiveDate {
        Utc::now().date_naive() - Duration::days(1)
    }

    fn tomorrow() -> NaiveDate {
        Utc::now().date_naive() + Duration::days(1)
    }

    #[test]
    fn valid_create_request_passes() {
        let req = CreateOrderRequest {
            customer_id: 5,
            order_date: yesterday(),
            shop_order_details: vec![CreateOrderDetail { item_id: 3 }],
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn negative_customer_id_is_rejected() {
        let req = CreateOrderRequest {
            customer_id: -1,
            order_date: yesterday(),
            shop_order_details: vec![],
        };
        let errs = req.validate().unwrap_err();
        assert!(errs.field_errors().contains_key("customer_id"));
    }

    #[test]
    fn future_order_date_is_rejected() {
        let req = CreateOrderRequest {
            customer_id: 5,
            order_date: tomorrow(),
            shop_order_details: vec![],
        };
        let errs = req.validate().unwrap_err();
        assert!(errs.field_errors().contains_key("order_date"));
    }

    #[test]
    fn today_is_not_in_the_past() {
        let req = CreateOrderRequest {
            customer_id: 5,
            order_date: Utc::now().date_naive(),
            shop_order_details: vec![],
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn negative_item_id_is_rejected() {
        let detail = CreateOrderDetail { item_id: -3 };
        assert!(detail.validate().is_err());
    }

    #[test]
    fn update_request_validates_only_present_fields() {
        let req = UpdateOrderRequest {
            customer_id: None,
            order_date: None,
        };
        assert!(req.validate().is_ok());

        let req = UpdateOrderRequest {
            customer_id: Some(-4),
            order_date: None,
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn order_serializes_camel_case() {
        let order = ShopOrder {
            id: 1,
            customer_id: 5,
            order_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            shop_order_details: vec![ShopOrderDetail {
                id: 2,
                item_id: 3,
                order_id: 1,
            }],
        };
        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["customerId"], 5);
        assert_eq!(json["orderDate"], "2024-03-01");
        assert_eq!(json["shopOrderDetails"][0]["itemId"], 3);
        assert_eq!(json["shopOrderDetails"][0]["orderId"], 1);
    }

    #[test]
    fn order_without_details_omits_the_field() {
        let order = ShopOrder {
            id: 1,
            customer_id: 5,
            order_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            shop_order_details: vec![],
        };
        let json = serde_json::to_value(&order).unwrap();
        assert!(json.get("shopOrderDetails").is_none());
    }

    #[test]
    fn detail_order_id_defaults_to_unassigned() {
        let detail: ShopOrderDetail =
            serde_json::from_str(r#"{"id": 1, "itemId": 9}"#).unwrap();
        assert_eq!(detail.order_id, 0);
    }

    #[test]
    fn customer_and_item_parse_downstream_payloads() {
        let customer: Customer =
            serde_json::from_str(r#"{"id": 5, "name": "Alice", "ssn": "123-45-6789"}"#).unwrap();
        assert_eq!(customer.name, "Alice");

        let item: Item =
            serde_json::from_str(r#"{"id": 3, "name": "Widget", "price": 250}"#).unwrap();
        assert_eq!(item.price, 250);
    }
}
