use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Cliente {
    pub id: i32,
    pub nome: String,
    pub sobrenome: String,
    pub cpf: String,
}

/// Request body of `incluirCliente` and `atualizarCliente`. Fields are optional here so
/// that missing ones are reported by validation instead of by the JSON decoder.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct ClientePayload {
    pub nome: Option<String>,
    pub sobrenome: Option<String>,
    pub cpf: Option<String>,
}

/// Validated customer fields, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NovoCliente {
    pub nome: String,
    pub sobrenome: String,
    pub cpf: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ClientesBody {
    pub clientes: Vec<Cliente>,
}
