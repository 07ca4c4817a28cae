//! Back-office handlers for catalog orders (`/api/admin/orders`).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use maison_core::error::CoreError;
use maison_core::pricing;
use maison_core::types::{DbId, Money};
use maison_core::workflow::OrderStatus;
use maison_db::models::order::{CreateOrder, NewOrderItemRow, Order, OrderWithItems};
use maison_db::repositories::{DesignRepo, OrderRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireStaff;
use crate::state::AppState;

/// Request body for the status transition endpoint.
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: OrderStatus,
}

/// POST /api/admin/orders
pub async fn create(
    RequireStaff(staff): RequireStaff,
    State(state): State<AppState>,
    Json(input): Json<CreateOrder>,
) -> AppResult<(StatusCode, Json<OrderWithItems>)> {
    if input.customer_name.trim().is_empty() {
        return Err(AppError::BadRequest(
            "customer_name must not be empty".into(),
        ));
    }
    if input.items.is_empty() {
        return Err(AppError::BadRequest(
            "an order needs at least one item".into(),
        ));
    }
    if input.discount < 0 {
        return Err(AppError::BadRequest("discount must not be negative".into()));
    }

    // Resolve designs and snapshot unit prices.
    let mut rows = Vec::with_capacity(input.items.len());
    for item in &input.items {
        if item.quantity <= 0 {
            return Err(AppError::BadRequest("quantity must be positive".into()));
        }
        let design = DesignRepo::find_by_id(&state.pool, item.design_id)
            .await?
            .ok_or_else(|| {
                AppError::BadRequest(format!("Design {} does not exist", item.design_id))
            })?;
        rows.push(NewOrderItemRow {
            design_id: design.id,
            quantity: item.quantity,
            unit_price: design.rate,
            line_total: pricing::catalog_line_total(design.rate, item.quantity),
        });
    }

    let line_totals: Vec<Money> = rows.iter().map(|r| r.line_total).collect();
    let totals = pricing::order_totals(&line_totals, input.discount);

    let order = OrderRepo::create_with_items(
        &state.pool,
        input.customer_name.trim(),
        input.phone.trim(),
        input.address.trim(),
        &rows,
        totals.subtotal,
        totals.discount,
        totals.grand_total,
    )
    .await?;

    let items = OrderRepo::items_for(&state.pool, order.id).await?;
    tracing::info!(order_id = order.id, by = staff.user_id, "Order created");
    Ok((StatusCode::CREATED, Json(OrderWithItems { order, items })))
}

/// GET /api/admin/orders
pub async fn list(
    _staff: RequireStaff,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Order>>> {
    let orders = OrderRepo::list(&state.pool).await?;
    Ok(Json(orders))
}

/// GET /api/admin/orders/{id}
pub async fn get_by_id(
    _staff: RequireStaff,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<OrderWithItems>> {
    let order = OrderRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Order",
            id,
        }))?;
    let items = OrderRepo::items_for(&state.pool, id).await?;
    Ok(Json(OrderWithItems { order, items }))
}

/// PUT /api/admin/orders/{id}/status
pub async fn update_status(
    _staff: RequireStaff,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateStatusRequest>,
) -> AppResult<Json<Order>> {
    let order = OrderRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Order",
            id,
        }))?;

    if !order.status.can_transition_to(input.status) {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Cannot move order from '{}' to '{}'",
            order.status.as_str(),
            input.status.as_str()
        ))));
    }

    let updated = OrderRepo::update_status(&state.pool, id, input.status)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Order",
            id,
        }))?;
    Ok(Json(updated))
}
