//! OpenAPI document for the resource routes.

use crate::error::ErrorBody;
use crate::handlers::{clientes, itens, pedidos, produtos};
use crate::model::MessageBody;
use axum::Json;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "pedidos-api", description = "Customers, products, orders and order items"),
    paths(
        clientes::listar,
        clientes::obter,
        clientes::pedidos,
        clientes::incluir,
        clientes::atualizar,
        clientes::excluir,
        produtos::listar,
        produtos::obter,
        produtos::incluir,
        produtos::atualizar,
        produtos::excluir,
        pedidos::listar,
        pedidos::obter,
        pedidos::itens,
        pedidos::incluir,
        pedidos::atualizar,
        pedidos::excluir,
        itens::listar,
        itens::obter,
        itens::incluir,
        itens::atualizar,
        itens::excluir,
    ),
    components(schemas(ErrorBody, MessageBody)),
    tags(
        (name = "clientes", description = "Customers"),
        (name = "produtos", description = "Products"),
        (name = "pedidos", description = "Orders"),
        (name = "itensDoPedido", description = "Order items")
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
