//! Pedidos API: REST backend for customers, products, orders and order items.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod migration;
pub mod model;
pub mod openapi;
pub mod repository;
pub mod response;
pub mod routes;
pub mod state;
pub mod validation;

pub use config::Settings;
pub use error::{AppError, ConfigError, StoreError};
pub use migration::{apply_migrations, ensure_database_exists};
pub use repository::{ClienteRepository, ItemDoPedidoRepository, PedidoRepository, PgStore, ProdutoRepository, Store};
pub use routes::{app, common_routes, resource_routes};
pub use state::AppState;
