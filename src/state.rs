//! Shared application state for all routes.

use crate::repository::{PgStore, Store};
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
}

impl AppState {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    pub fn postgres(pool: PgPool) -> Self {
        Self::new(Arc::new(PgStore::new(pool)))
    }
}
