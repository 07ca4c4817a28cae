//! Repository for the `orders` and `order_items` tables.

use sqlx::PgPool;

use maison_core::types::{DbId, Money};
use maison_core::workflow::OrderStatus;

use crate::models::order::{NewOrderItemRow, Order, OrderItem};

/// Column list for `orders`.
const COLUMNS: &str = "id, customer_name, phone, address, status, subtotal, discount, \
                        grand_total, created_at, updated_at";

/// Column list for `order_items`.
const ITEM_COLUMNS: &str = "id, order_id, design_id, quantity, unit_price, line_total, created_at";

/// Provides CRUD operations for catalog orders and their items.
pub struct OrderRepo;

impl OrderRepo {
    /// Insert an order with its priced items and totals in one transaction.
    pub async fn create_with_items(
        pool: &PgPool,
        customer_name: &str,
        phone: &str,
        address: &str,
        items: &[NewOrderItemRow],
        subtotal: Money,
        discount: Money,
        grand_total: Money,
    ) -> Result<Order, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO orders (customer_name, phone, address, subtotal, discount, grand_total)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        let order = sqlx::query_as::<_, Order>(&query)
            .bind(customer_name)
            .bind(phone)
            .bind(address)
            .bind(subtotal)
            .bind(discount)
            .bind(grand_total)
            .fetch_one(&mut *tx)
            .await?;

        for item in items {
            sqlx::query(
                "INSERT INTO order_items (order_id, design_id, quantity, unit_price, line_total)
                 VALUES ($1, $2, $3, $4, $5)",
            )
            .bind(order.id)
            .bind(item.design_id)
            .bind(item.quantity)
            .bind(item.unit_price)
            .bind(item.line_total)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(order)
    }

    /// Find an order by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Order>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM orders WHERE id = $1");
        sqlx::query_as::<_, Order>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all orders, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Order>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM orders ORDER BY created_at DESC");
        sqlx::query_as::<_, Order>(&query).fetch_all(pool).await
    }

    /// List an order's items in insertion order.
    pub async fn items_for(pool: &PgPool, order_id: DbId) -> Result<Vec<OrderItem>, sqlx::Error> {
        let query = format!("SELECT {ITEM_COLUMNS} FROM order_items WHERE order_id = $1 ORDER BY id");
        sqlx::query_as::<_, OrderItem>(&query)
            .bind(order_id)
            .fetch_all(pool)
            .await
    }

    /// Overwrite the order's status. Transition legality is checked by
    /// the handler before calling this.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        status: OrderStatus,
    ) -> Result<Option<Order>, sqlx::Error> {
        let query = format!(
            "UPDATE orders SET status = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Order>(&query)
            .bind(id)
            .bind(status)
            .fetch_optional(pool)
            .await
    }
}
