use axum::Router;
use domain_inventory::{PgCategoryRepository, PgProductRepository, PgSupplierRepository};
use std::sync::Arc;

pub mod health;

/// Creates the API routes without the `/api` prefix.
/// The `/api` prefix will be added by the `create_router` helper.
///
/// One repository per table, shared by every service that touches it.
pub fn routes(state: &crate::state::AppState) -> Router {
    domain_inventory::router(
        Arc::new(PgCategoryRepository::new(state.db.clone())),
        Arc::new(PgSupplierRepository::new(state.db.clone())),
        Arc::new(PgProductRepository::new(state.db.clone())),
    )
}

/// Creates a router with the /ready endpoint that performs actual health checks.
///
/// This router has state applied and can be merged with the stateless app router
/// from `create_router`.
pub fn ready_router(state: crate::state::AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
