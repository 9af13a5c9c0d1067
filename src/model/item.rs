use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct ItemDoPedido {
    pub id: i32,
    pub id_pedido: i32,
    pub id_produto: i32,
    pub qtdade: i32,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct ItemDoPedidoPayload {
    pub id_pedido: Option<i32>,
    pub id_produto: Option<i32>,
    pub qtdade: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NovoItemDoPedido {
    pub id_pedido: i32,
    pub id_produto: i32,
    pub qtdade: i32,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ItensDoPedidoBody {
    #[serde(rename = "itensDoPedido")]
    pub itens_do_pedido: Vec<ItemDoPedido>,
}
