//! Entities, request payloads and response shapes.

mod cliente;
mod data;
mod item;
mod pedido;
mod produto;

pub use cliente::*;
pub use data::parse_data;
pub use item::*;
pub use pedido::*;
pub use produto::*;

use serde::Serialize;
use utoipa::ToSchema;

/// Body of successful deletes.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageBody {
    pub message: String,
}

impl MessageBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}
