//! Catalog (checkout) order model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use maison_core::types::{DbId, Money, Timestamp};
use maison_core::workflow::OrderStatus;

/// An order row from the `orders` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Order {
    pub id: DbId,
    pub customer_name: String,
    pub phone: String,
    pub address: String,
    pub status: OrderStatus,
    pub subtotal: Money,
    pub discount: Money,
    pub grand_total: Money,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// An item row from the `order_items` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct OrderItem {
    pub id: DbId,
    pub order_id: DbId,
    pub design_id: DbId,
    pub quantity: i32,
    /// Unit price snapshotted from the design at insert time.
    pub unit_price: Money,
    pub line_total: Money,
    pub created_at: Timestamp,
}

/// Client-facing DTO for creating an order with items.
#[derive(Debug, Deserialize)]
pub struct CreateOrder {
    pub customer_name: String,
    pub phone: String,
    pub address: String,
    #[serde(default)]
    pub discount: Money,
    pub items: Vec<CreateOrderItem>,
}

/// Client-facing DTO for one requested item.
#[derive(Debug, Deserialize)]
pub struct CreateOrderItem {
    pub design_id: DbId,
    pub quantity: i32,
}

/// Fully-priced item row ready for insertion.
#[derive(Debug, Clone)]
pub struct NewOrderItemRow {
    pub design_id: DbId,
    pub quantity: i32,
    pub unit_price: Money,
    pub line_total: Money,
}

/// An order together with its items, for detail responses.
#[derive(Debug, Serialize)]
pub struct OrderWithItems {
    #[serde(flatten)]
    pub order: Order,
    pub items: Vec<OrderItem>,
}
