use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Produto {
    pub id: i32,
    pub descricao: String,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct ProdutoPayload {
    pub descricao: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NovoProduto {
    pub descricao: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProdutosBody {
    pub produtos: Vec<Produto>,
}
