//! Shared application state.

/// Cloned into the readiness handler and the shutdown cleanup; the
/// connection is an `Arc`-backed pool, so clones are cheap.
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub db: database::postgres::DatabaseConnection,
}
