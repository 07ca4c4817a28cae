//! Back-office handlers for interior orders
//! (`/api/admin/interior-orders`).
//!
//! Prices are never taken from the client: each item's rate is
//! snapshotted from its design at insert time and all totals come from
//! `maison_core::pricing`. Items and the discount are mutable only while
//! the order is still a draft.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use maison_core::error::CoreError;
use maison_core::pricing;
use maison_core::types::{DbId, Money};
use maison_core::workflow::InteriorOrderStatus;
use maison_db::models::interior_order::{
    CreateInteriorOrder, CreateInteriorOrderItem, InteriorOrder, InteriorOrderItem,
    InteriorOrderWithItems, NewItemRow,
};
use maison_db::repositories::{DesignRepo, InteriorOrderRepo, LeadRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireStaff;
use crate::state::AppState;

/// Request body for the status transition endpoint.
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: InteriorOrderStatus,
}

/// Request body for the discount endpoint.
#[derive(Debug, Deserialize)]
pub struct UpdateDiscountRequest {
    pub discount: Money,
}

/// POST /api/admin/interior-orders
pub async fn create(
    RequireStaff(staff): RequireStaff,
    State(state): State<AppState>,
    Json(input): Json<CreateInteriorOrder>,
) -> AppResult<(StatusCode, Json<InteriorOrderWithItems>)> {
    if input.client_name.trim().is_empty() {
        return Err(AppError::BadRequest("client_name must not be empty".into()));
    }
    if input.items.is_empty() {
        return Err(AppError::BadRequest(
            "an order needs at least one item".into(),
        ));
    }
    if input.discount < 0 {
        return Err(AppError::BadRequest("discount must not be negative".into()));
    }
    if let Some(lead_id) = input.lead_id {
        LeadRepo::find_by_id(&state.pool, lead_id)
            .await?
            .ok_or_else(|| AppError::BadRequest(format!("Lead {lead_id} does not exist")))?;
    }

    let rows = price_items(&state, &input.items).await?;
    let line_totals: Vec<Money> = rows.iter().map(|r| r.line_total).collect();
    let totals = pricing::order_totals(&line_totals, input.discount);

    let order = InteriorOrderRepo::create_with_items(
        &state.pool,
        input.lead_id,
        input.client_name.trim(),
        staff.user_id,
        &rows,
        totals.subtotal,
        totals.discount,
        totals.grand_total,
    )
    .await?;

    let items = InteriorOrderRepo::items_for(&state.pool, order.id).await?;
    tracing::info!(
        order_id = order.id,
        by = staff.user_id,
        grand_total = order.grand_total,
        "Interior order created"
    );
    Ok((
        StatusCode::CREATED,
        Json(InteriorOrderWithItems { order, items }),
    ))
}

/// GET /api/admin/interior-orders
pub async fn list(
    _staff: RequireStaff,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<InteriorOrder>>> {
    let orders = InteriorOrderRepo::list(&state.pool).await?;
    Ok(Json(orders))
}

/// GET /api/admin/interior-orders/{id}
pub async fn get_by_id(
    _staff: RequireStaff,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<InteriorOrderWithItems>> {
    let order = find_order(&state, id).await?;
    let items = InteriorOrderRepo::items_for(&state.pool, id).await?;
    Ok(Json(InteriorOrderWithItems { order, items }))
}

/// POST /api/admin/interior-orders/{id}/items
pub async fn add_item(
    _staff: RequireStaff,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<CreateInteriorOrderItem>,
) -> AppResult<(StatusCode, Json<InteriorOrderItem>)> {
    let order = find_order(&state, id).await?;
    ensure_draft(&order)?;

    let rows = price_items(&state, std::slice::from_ref(&input)).await?;
    let row = rows.into_iter().next().expect("one input yields one row");

    let existing = InteriorOrderRepo::items_for(&state.pool, id).await?;
    let mut line_totals: Vec<Money> = existing.iter().map(|i| i.line_total).collect();
    line_totals.push(row.line_total);
    let totals = pricing::order_totals(&line_totals, order.discount);

    let item = InteriorOrderRepo::add_item(
        &state.pool,
        id,
        &row,
        totals.subtotal,
        totals.discount,
        totals.grand_total,
    )
    .await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// DELETE /api/admin/interior-orders/{id}/items/{item_id}
pub async fn remove_item(
    _staff: RequireStaff,
    State(state): State<AppState>,
    Path((id, item_id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    let order = find_order(&state, id).await?;
    ensure_draft(&order)?;

    let existing = InteriorOrderRepo::items_for(&state.pool, id).await?;
    let line_totals: Vec<Money> = existing
        .iter()
        .filter(|i| i.id != item_id)
        .map(|i| i.line_total)
        .collect();
    let totals = pricing::order_totals(&line_totals, order.discount);

    let removed = InteriorOrderRepo::remove_item(
        &state.pool,
        id,
        item_id,
        totals.subtotal,
        totals.discount,
        totals.grand_total,
    )
    .await?;
    if !removed {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "InteriorOrderItem",
            id: item_id,
        }));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/admin/interior-orders/{id}/discount
pub async fn update_discount(
    _staff: RequireStaff,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateDiscountRequest>,
) -> AppResult<Json<InteriorOrder>> {
    if input.discount < 0 {
        return Err(AppError::BadRequest("discount must not be negative".into()));
    }

    let order = find_order(&state, id).await?;
    ensure_draft(&order)?;

    let items = InteriorOrderRepo::items_for(&state.pool, id).await?;
    let line_totals: Vec<Money> = items.iter().map(|i| i.line_total).collect();
    let totals = pricing::order_totals(&line_totals, input.discount);

    let updated = InteriorOrderRepo::update_totals(
        &state.pool,
        id,
        totals.subtotal,
        totals.discount,
        totals.grand_total,
    )
    .await?
    .ok_or(AppError::Core(CoreError::NotFound {
        entity: "InteriorOrder",
        id,
    }))?;
    Ok(Json(updated))
}

/// PUT /api/admin/interior-orders/{id}/status
pub async fn update_status(
    _staff: RequireStaff,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateStatusRequest>,
) -> AppResult<Json<InteriorOrder>> {
    let order = find_order(&state, id).await?;

    if !order.status.can_transition_to(input.status) {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Cannot move interior order from '{}' to '{}'",
            order.status.as_str(),
            input.status.as_str()
        ))));
    }

    let updated = InteriorOrderRepo::update_status(&state.pool, id, input.status)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "InteriorOrder",
            id,
        }))?;
    Ok(Json(updated))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn find_order(state: &AppState, id: DbId) -> AppResult<InteriorOrder> {
    InteriorOrderRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "InteriorOrder",
            id,
        }))
}

fn ensure_draft(order: &InteriorOrder) -> AppResult<()> {
    if order.status != InteriorOrderStatus::Draft {
        return Err(AppError::Core(CoreError::Conflict(
            "Items and discount can only change while the order is a draft".into(),
        )));
    }
    Ok(())
}

/// Resolve each requested item's design and compute its line total.
async fn price_items(
    state: &AppState,
    items: &[CreateInteriorOrderItem],
) -> AppResult<Vec<NewItemRow>> {
    let mut rows = Vec::with_capacity(items.len());
    for item in items {
        if item.room.trim().is_empty() {
            return Err(AppError::BadRequest("room must not be empty".into()));
        }
        if item.area_sqft_x100 <= 0 {
            return Err(AppError::BadRequest("area must be positive".into()));
        }

        let design = DesignRepo::find_by_id(&state.pool, item.design_id)
            .await?
            .ok_or_else(|| {
                AppError::BadRequest(format!("Design {} does not exist", item.design_id))
            })?;

        rows.push(NewItemRow {
            design_id: design.id,
            room: item.room.trim().to_string(),
            area_sqft_x100: item.area_sqft_x100,
            rate: design.rate,
            line_total: pricing::interior_line_total(design.rate, item.area_sqft_x100),
        });
    }
    Ok(rows)
}
