//! Route definitions for the back office (`/api/admin`).
//!
//! Authorization is enforced per-handler through the RBAC extractors,
//! not at the router level, so each handler names its own requirement.

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::{
    auth, designs, entries, interior_orders, leads, materials, media, milestones, orders,
    projects, users,
};
use crate::state::AppState;

/// Routes mounted at `/api/admin`.
pub fn router() -> Router<AppState> {
    let auth_routes = Router::new()
        .route("/login", post(auth::login))
        .route("/refresh", post(auth::refresh))
        .route("/logout", post(auth::logout));

    let user_routes = Router::new()
        .route("/", get(users::list).post(users::create))
        .route(
            "/{id}",
            get(users::get_by_id)
                .put(users::update)
                .delete(users::deactivate),
        )
        .route("/{id}/reset-password", post(users::reset_password));

    let lead_routes = Router::new()
        .route("/", get(leads::list))
        .route("/{id}", get(leads::get_by_id).patch(leads::update))
        .route("/{id}/status", put(leads::update_status));

    let design_routes = Router::new()
        .route("/", get(designs::list).post(designs::create))
        .route(
            "/{id}",
            get(designs::get_by_id)
                .put(designs::update)
                .delete(designs::delete),
        );

    let milestone_routes = Router::new()
        .route("/", get(milestones::list).post(milestones::create))
        .route("/{id}", put(milestones::update).delete(milestones::delete))
        .route("/{id}/mark-paid", post(milestones::mark_paid));

    let material_routes = Router::new()
        .route("/", get(materials::list).post(materials::create))
        .route("/{id}", put(materials::update).delete(materials::delete));

    let media_routes = Router::new()
        .route("/", get(media::list).post(media::create))
        .route("/{id}", delete(media::delete));

    let project_routes = Router::new()
        .route("/", get(projects::list).post(projects::create))
        .route(
            "/{id}",
            get(projects::get_by_id)
                .put(projects::update)
                .delete(projects::delete),
        )
        .route("/{id}/status", put(projects::update_status))
        .route(
            "/{id}/closure",
            get(projects::get_closure).put(projects::put_closure),
        )
        .nest("/{project_id}/milestones", milestone_routes)
        .nest("/{project_id}/materials", material_routes)
        .nest("/{project_id}/media", media_routes);

    let interior_order_routes = Router::new()
        .route(
            "/",
            get(interior_orders::list).post(interior_orders::create),
        )
        .route("/{id}", get(interior_orders::get_by_id))
        .route("/{id}/items", post(interior_orders::add_item))
        .route(
            "/{id}/items/{item_id}",
            delete(interior_orders::remove_item),
        )
        .route("/{id}/discount", put(interior_orders::update_discount))
        .route("/{id}/status", put(interior_orders::update_status));

    let order_routes = Router::new()
        .route("/", get(orders::list).post(orders::create))
        .route("/{id}", get(orders::get_by_id))
        .route("/{id}/status", put(orders::update_status));

    let entry_routes = Router::new()
        .route("/", get(entries::list))
        .route("/clock-in", post(entries::clock_in))
        .route("/clock-out", post(entries::clock_out))
        .route("/me", get(entries::list_own));

    Router::new()
        .nest("/auth", auth_routes)
        .nest("/users", user_routes)
        .nest("/leads", lead_routes)
        .nest("/designs", design_routes)
        .nest("/projects", project_routes)
        .nest("/interior-orders", interior_order_routes)
        .nest("/orders", order_routes)
        .nest("/entries", entry_routes)
}
