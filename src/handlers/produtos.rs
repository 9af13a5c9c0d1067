//! Product handlers.

use crate::error::{AppError, ErrorBody};
use crate::extractors::{Payload, RecordId};
use crate::model::{MessageBody, Produto, ProdutoPayload, ProdutosBody};
use crate::response::{created, message, ok};
use crate::state::AppState;
use crate::validation::Validate;
use axum::{extract::State, response::IntoResponse};

pub const NAO_ENCONTRADO: &str = "Produto não encontrado";
pub const EXCLUIDO: &str = "Produto excluído com sucesso";
pub const POSSUI_ITENS: &str = "Produto possui itens de pedido vinculados";

#[utoipa::path(
    get,
    path = "/produtos",
    responses((status = 200, description = "All products", body = ProdutosBody)),
    tag = "produtos"
)]
pub async fn listar(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let produtos = state.store.produtos().list().await?;
    Ok(ok(ProdutosBody { produtos }))
}

#[utoipa::path(
    get,
    path = "/produtos/{id}",
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product", body = Produto),
        (status = 404, description = "Unknown id", body = ErrorBody)
    ),
    tag = "produtos"
)]
pub async fn obter(State(state): State<AppState>, RecordId(id): RecordId) -> Result<impl IntoResponse, AppError> {
    let produto = state
        .store
        .produtos()
        .find(id)
        .await?
        .ok_or_else(|| AppError::NotFound(NAO_ENCONTRADO.into()))?;
    Ok(ok(produto))
}

#[utoipa::path(
    post,
    path = "/incluirProduto",
    request_body = ProdutoPayload,
    responses(
        (status = 201, description = "Created product", body = Produto),
        (status = 400, description = "Missing field", body = ErrorBody)
    ),
    tag = "produtos"
)]
pub async fn incluir(
    State(state): State<AppState>,
    Payload(payload): Payload<ProdutoPayload>,
) -> Result<impl IntoResponse, AppError> {
    let novo = payload.validate()?;
    let produto = state.store.produtos().insert(&novo).await?;
    tracing::info!(id = produto.id, "produto incluído");
    Ok(created(produto))
}

#[utoipa::path(
    put,
    path = "/atualizarProduto/{id}",
    params(("id" = i32, Path, description = "Product id")),
    request_body = ProdutoPayload,
    responses(
        (status = 200, description = "Updated product", body = Produto),
        (status = 400, description = "Missing field", body = ErrorBody),
        (status = 404, description = "Unknown id", body = ErrorBody)
    ),
    tag = "produtos"
)]
pub async fn atualizar(
    State(state): State<AppState>,
    RecordId(id): RecordId,
    Payload(payload): Payload<ProdutoPayload>,
) -> Result<impl IntoResponse, AppError> {
    let dados = payload.validate()?;
    let produto = state
        .store
        .produtos()
        .update(id, &dados)
        .await?
        .ok_or_else(|| AppError::NotFound(NAO_ENCONTRADO.into()))?;
    Ok(ok(produto))
}

#[utoipa::path(
    delete,
    path = "/excluirProduto/{id}",
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 200, description = "Deleted", body = MessageBody),
        (status = 400, description = "Product still referenced by order items", body = ErrorBody),
        (status = 404, description = "Unknown id", body = ErrorBody)
    ),
    tag = "produtos"
)]
pub async fn excluir(State(state): State<AppState>, RecordId(id): RecordId) -> Result<impl IntoResponse, AppError> {
    let removed = state
        .store
        .produtos()
        .delete(id)
        .await
        .map_err(|e| AppError::from_write(e, POSSUI_ITENS))?;
    if !removed {
        return Err(AppError::NotFound(NAO_ENCONTRADO.into()));
    }
    tracing::info!(id, "produto excluído");
    Ok(message(EXCLUIDO))
}
