//! Repository for the `interior_orders` and `interior_order_items` tables.
//!
//! Creation and item mutations run in a transaction so the persisted
//! totals can never drift from the item rows they summarize.

use sqlx::PgPool;

use maison_core::types::{DbId, Money};
use maison_core::workflow::InteriorOrderStatus;

use crate::models::interior_order::{InteriorOrder, InteriorOrderItem, NewItemRow};

/// Column list for `interior_orders`.
const COLUMNS: &str = "id, lead_id, client_name, status, subtotal, discount, grand_total, \
                        created_by, created_at, updated_at";

/// Column list for `interior_order_items`.
const ITEM_COLUMNS: &str =
    "id, order_id, design_id, room, area_sqft_x100, rate, line_total, created_at";

/// Provides CRUD operations for interior orders and their items.
pub struct InteriorOrderRepo;

impl InteriorOrderRepo {
    /// Insert an order with its priced items and totals in one transaction.
    pub async fn create_with_items(
        pool: &PgPool,
        lead_id: Option<DbId>,
        client_name: &str,
        created_by: DbId,
        items: &[NewItemRow],
        subtotal: Money,
        discount: Money,
        grand_total: Money,
    ) -> Result<InteriorOrder, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO interior_orders (lead_id, client_name, subtotal, discount, grand_total, created_by)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        let order = sqlx::query_as::<_, InteriorOrder>(&query)
            .bind(lead_id)
            .bind(client_name)
            .bind(subtotal)
            .bind(discount)
            .bind(grand_total)
            .bind(created_by)
            .fetch_one(&mut *tx)
            .await?;

        for item in items {
            sqlx::query(
                "INSERT INTO interior_order_items (order_id, design_id, room, area_sqft_x100, rate, line_total)
                 VALUES ($1, $2, $3, $4, $5, $6)",
            )
            .bind(order.id)
            .bind(item.design_id)
            .bind(&item.room)
            .bind(item.area_sqft_x100)
            .bind(item.rate)
            .bind(item.line_total)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(order)
    }

    /// Find an order by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<InteriorOrder>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM interior_orders WHERE id = $1");
        sqlx::query_as::<_, InteriorOrder>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all orders, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<InteriorOrder>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM interior_orders ORDER BY created_at DESC");
        sqlx::query_as::<_, InteriorOrder>(&query)
            .fetch_all(pool)
            .await
    }

    /// List an order's items in insertion order.
    pub async fn items_for(
        pool: &PgPool,
        order_id: DbId,
    ) -> Result<Vec<InteriorOrderItem>, sqlx::Error> {
        let query =
            format!("SELECT {ITEM_COLUMNS} FROM interior_order_items WHERE order_id = $1 ORDER BY id");
        sqlx::query_as::<_, InteriorOrderItem>(&query)
            .bind(order_id)
            .fetch_all(pool)
            .await
    }

    /// Insert one priced item and refresh the order totals in one
    /// transaction. Returns the new item.
    pub async fn add_item(
        pool: &PgPool,
        order_id: DbId,
        item: &NewItemRow,
        subtotal: Money,
        discount: Money,
        grand_total: Money,
    ) -> Result<InteriorOrderItem, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO interior_order_items (order_id, design_id, room, area_sqft_x100, rate, line_total)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {ITEM_COLUMNS}"
        );
        let inserted = sqlx::query_as::<_, InteriorOrderItem>(&query)
            .bind(order_id)
            .bind(item.design_id)
            .bind(&item.room)
            .bind(item.area_sqft_x100)
            .bind(item.rate)
            .bind(item.line_total)
            .fetch_one(&mut *tx)
            .await?;

        sqlx::query(
            "UPDATE interior_orders SET subtotal = $2, discount = $3, grand_total = $4, updated_at = NOW()
             WHERE id = $1",
        )
        .bind(order_id)
        .bind(subtotal)
        .bind(discount)
        .bind(grand_total)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(inserted)
    }

    /// Remove one item and refresh the order totals in one transaction.
    /// Returns `false` if the item did not belong to the order.
    pub async fn remove_item(
        pool: &PgPool,
        order_id: DbId,
        item_id: DbId,
        subtotal: Money,
        discount: Money,
        grand_total: Money,
    ) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let result =
            sqlx::query("DELETE FROM interior_order_items WHERE order_id = $1 AND id = $2")
                .bind(order_id)
                .bind(item_id)
                .execute(&mut *tx)
                .await?;
        if result.rows_affected() == 0 {
            return Ok(false);
        }

        sqlx::query(
            "UPDATE interior_orders SET subtotal = $2, discount = $3, grand_total = $4, updated_at = NOW()
             WHERE id = $1",
        )
        .bind(order_id)
        .bind(subtotal)
        .bind(discount)
        .bind(grand_total)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(true)
    }

    /// Overwrite the discount and derived totals.
    pub async fn update_totals(
        pool: &PgPool,
        id: DbId,
        subtotal: Money,
        discount: Money,
        grand_total: Money,
    ) -> Result<Option<InteriorOrder>, sqlx::Error> {
        let query = format!(
            "UPDATE interior_orders SET subtotal = $2, discount = $3, grand_total = $4, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, InteriorOrder>(&query)
            .bind(id)
            .bind(subtotal)
            .bind(discount)
            .bind(grand_total)
            .fetch_optional(pool)
            .await
    }

    /// Overwrite the order's status. Transition legality is checked by
    /// the handler before calling this.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        status: InteriorOrderStatus,
    ) -> Result<Option<InteriorOrder>, sqlx::Error> {
        let query = format!(
            "UPDATE interior_orders SET status = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, InteriorOrder>(&query)
            .bind(id)
            .bind(status)
            .fetch_optional(pool)
            .await
    }
}
