//! Interior order model and DTOs.
//!
//! An interior order captures a design selection per room with an area,
//! snapshots the design's rate at insert time, and carries totals computed
//! by `maison_core::pricing`. Totals are persisted so listings never need
//! to re-aggregate items, and recomputed on every mutation.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use maison_core::types::{DbId, Money, Timestamp};
use maison_core::workflow::InteriorOrderStatus;

/// An interior order row from the `interior_orders` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct InteriorOrder {
    pub id: DbId,
    pub lead_id: Option<DbId>,
    pub client_name: String,
    pub status: InteriorOrderStatus,
    pub subtotal: Money,
    /// Flat discount as requested; the applied value is clamped into
    /// `grand_total` by the pricing layer.
    pub discount: Money,
    pub grand_total: Money,
    pub created_by: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// An item row from the `interior_order_items` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct InteriorOrderItem {
    pub id: DbId,
    pub order_id: DbId,
    pub design_id: DbId,
    pub room: String,
    /// Area in hundredths of a square foot.
    pub area_sqft_x100: i32,
    /// Rate per sq ft snapshotted from the design at insert time.
    pub rate: Money,
    pub line_total: Money,
    pub created_at: Timestamp,
}

/// Client-facing DTO for creating an interior order with items.
#[derive(Debug, Deserialize)]
pub struct CreateInteriorOrder {
    pub lead_id: Option<DbId>,
    pub client_name: String,
    #[serde(default)]
    pub discount: Money,
    pub items: Vec<CreateInteriorOrderItem>,
}

/// Client-facing DTO for one requested item. The rate is never taken
/// from the client; it is resolved from the design.
#[derive(Debug, Deserialize)]
pub struct CreateInteriorOrderItem {
    pub design_id: DbId,
    pub room: String,
    pub area_sqft_x100: i32,
}

/// Fully-priced item row ready for insertion, built by the handler after
/// resolving design rates and computing line totals.
#[derive(Debug, Clone)]
pub struct NewItemRow {
    pub design_id: DbId,
    pub room: String,
    pub area_sqft_x100: i32,
    pub rate: Money,
    pub line_total: Money,
}

/// An interior order together with its items, for detail responses.
#[derive(Debug, Serialize)]
pub struct InteriorOrderWithItems {
    #[serde(flatten)]
    pub order: InteriorOrder,
    pub items: Vec<InteriorOrderItem>,
}
