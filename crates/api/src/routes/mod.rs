pub mod admin;
pub mod cta;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /health                                      service + DB health (root level)
///
/// /cta/submit                                  POST lead capture (public, rate limited)
/// /cta/config                                  GET public / PUT with x-api-key
/// /cta/designs                                 GET published designs (public)
/// /cta/analytics                               GET with x-api-key
///
/// /admin/auth/login                            login (public)
/// /admin/auth/refresh                          refresh (public)
/// /admin/auth/logout                           logout (requires auth)
///
/// /admin/users                                 list, create (admin only)
/// /admin/users/{id}                            get, update, deactivate
/// /admin/users/{id}/reset-password             reset password
///
/// /admin/leads                                 list (staff)
/// /admin/leads/{id}                            get, patch
/// /admin/leads/{id}/status                     funnel transition (PUT)
///
/// /admin/designs                               list (staff), create (admin)
/// /admin/designs/{id}                          get, update, delete
///
/// /admin/projects                              list, create (staff)
/// /admin/projects/{id}                         get, update, delete
/// /admin/projects/{id}/status                  lifecycle transition (PUT)
/// /admin/projects/{id}/closure                 get, put (closes the project)
/// /admin/projects/{project_id}/milestones      list, create
/// /admin/projects/{project_id}/milestones/{id} update, delete
/// /admin/projects/{project_id}/milestones/{id}/mark-paid   POST
/// /admin/projects/{project_id}/materials       list, create
/// /admin/projects/{project_id}/materials/{id}  update, delete
/// /admin/projects/{project_id}/media           list, create
/// /admin/projects/{project_id}/media/{id}      delete
///
/// /admin/interior-orders                       list, create (staff)
/// /admin/interior-orders/{id}                  get (with items)
/// /admin/interior-orders/{id}/items            add item (POST)
/// /admin/interior-orders/{id}/items/{item_id}  remove item (DELETE)
/// /admin/interior-orders/{id}/discount         update discount (PUT)
/// /admin/interior-orders/{id}/status           transition (PUT)
///
/// /admin/orders                                list, create (staff)
/// /admin/orders/{id}                           get (with items)
/// /admin/orders/{id}/status                    transition (PUT)
///
/// /admin/entries/clock-in                      POST (salesman)
/// /admin/entries/clock-out                     POST (salesman)
/// /admin/entries/me                            own history (salesman)
/// /admin/entries                               all entries (admin)
/// ```
pub fn api_routes(state: AppState) -> Router<AppState> {
    Router::new()
        // Health sits beside the nested trees, outside the rate limiter.
        .merge(health::router())
        .nest("/cta", cta::router(state))
        .nest("/admin", admin::router())
}
