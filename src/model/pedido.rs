use crate::model::Cliente;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Pedido {
    pub id: i32,
    pub data: DateTime<Utc>,
    pub id_cliente: i32,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct PedidoPayload {
    /// RFC 3339 timestamp, `YYYY-MM-DD` or milliseconds since the Unix epoch.
    #[serde(default, deserialize_with = "crate::model::data::deserialize_opt")]
    #[schema(value_type = Option<String>)]
    pub data: Option<DateTime<Utc>>,
    pub id_cliente: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NovoPedido {
    pub data: DateTime<Utc>,
    pub id_cliente: i32,
}

/// Order header as shown next to its customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct PedidoResumo {
    pub id: i32,
    pub data: DateTime<Utc>,
}

/// An order paired with its customer; `cliente` is null when the customer row is missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct PedidoComCliente {
    pub pedido: PedidoResumo,
    pub cliente: Option<Cliente>,
}

impl PedidoComCliente {
    pub fn new(pedido: &Pedido, cliente: Option<Cliente>) -> Self {
        Self {
            pedido: PedidoResumo {
                id: pedido.id,
                data: pedido.data,
            },
            cliente,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PedidosComClienteBody {
    pub pedidos: Vec<PedidoComCliente>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PedidosBody {
    pub pedidos: Vec<Pedido>,
}
