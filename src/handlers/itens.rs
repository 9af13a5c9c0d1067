//! Order item handlers.

use crate::error::{AppError, ErrorBody};
use crate::extractors::{Payload, RecordId};
use crate::model::{ItemDoPedido, ItemDoPedidoPayload, ItensDoPedidoBody, MessageBody};
use crate::response::{created, message, ok};
use crate::state::AppState;
use crate::validation::Validate;
use axum::{extract::State, response::IntoResponse};

pub const NAO_ENCONTRADO: &str = "Item do Pedido não encontrado";
pub const EXCLUIDO: &str = "Item do Pedido excluído com sucesso";
pub const REFERENCIA_INEXISTENTE: &str = "Pedido ou produto informado não existe";

#[utoipa::path(
    get,
    path = "/itensDoPedido",
    responses((status = 200, description = "All order items", body = ItensDoPedidoBody)),
    tag = "itensDoPedido"
)]
pub async fn listar(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let itens_do_pedido = state.store.itens().list().await?;
    Ok(ok(ItensDoPedidoBody { itens_do_pedido }))
}

#[utoipa::path(
    get,
    path = "/itensDoPedido/{id}",
    params(("id" = i32, Path, description = "Order item id")),
    responses(
        (status = 200, description = "Order item", body = ItemDoPedido),
        (status = 404, description = "Unknown id", body = ErrorBody)
    ),
    tag = "itensDoPedido"
)]
pub async fn obter(State(state): State<AppState>, RecordId(id): RecordId) -> Result<impl IntoResponse, AppError> {
    let item = state
        .store
        .itens()
        .find(id)
        .await?
        .ok_or_else(|| AppError::NotFound(NAO_ENCONTRADO.into()))?;
    Ok(ok(item))
}

#[utoipa::path(
    post,
    path = "/incluirItemDoPedido",
    request_body = ItemDoPedidoPayload,
    responses(
        (status = 201, description = "Created order item", body = ItemDoPedido),
        (status = 400, description = "Invalid field or unknown order/product", body = ErrorBody)
    ),
    tag = "itensDoPedido"
)]
pub async fn incluir(
    State(state): State<AppState>,
    Payload(payload): Payload<ItemDoPedidoPayload>,
) -> Result<impl IntoResponse, AppError> {
    let novo = payload.validate()?;
    let item = state
        .store
        .itens()
        .insert(&novo)
        .await
        .map_err(|e| AppError::from_write(e, REFERENCIA_INEXISTENTE))?;
    tracing::info!(id = item.id, id_pedido = item.id_pedido, "item do pedido incluído");
    Ok(created(item))
}

#[utoipa::path(
    put,
    path = "/atualizarItemDoPedido/{id}",
    params(("id" = i32, Path, description = "Order item id")),
    request_body = ItemDoPedidoPayload,
    responses(
        (status = 200, description = "Updated order item", body = ItemDoPedido),
        (status = 400, description = "Invalid field or unknown order/product", body = ErrorBody),
        (status = 404, description = "Unknown id", body = ErrorBody)
    ),
    tag = "itensDoPedido"
)]
pub async fn atualizar(
    State(state): State<AppState>,
    RecordId(id): RecordId,
    Payload(payload): Payload<ItemDoPedidoPayload>,
) -> Result<impl IntoResponse, AppError> {
    let dados = payload.validate()?;
    let item = state
        .store
        .itens()
        .update(id, &dados)
        .await
        .map_err(|e| AppError::from_write(e, REFERENCIA_INEXISTENTE))?
        .ok_or_else(|| AppError::NotFound(NAO_ENCONTRADO.into()))?;
    Ok(ok(item))
}

#[utoipa::path(
    delete,
    path = "/excluirItemDoPedido/{id}",
    params(("id" = i32, Path, description = "Order item id")),
    responses(
        (status = 200, description = "Deleted", body = MessageBody),
        (status = 404, description = "Unknown id", body = ErrorBody)
    ),
    tag = "itensDoPedido"
)]
pub async fn excluir(State(state): State<AppState>, RecordId(id): RecordId) -> Result<impl IntoResponse, AppError> {
    if !state.store.itens().delete(id).await? {
        return Err(AppError::NotFound(NAO_ENCONTRADO.into()));
    }
    tracing::info!(id, "item do pedido excluído");
    Ok(message(EXCLUIDO))
}
