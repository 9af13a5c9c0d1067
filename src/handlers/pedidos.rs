//! Order handlers. Reads return each order next to its customer; writes return the plain
//! order record.

use crate::error::{AppError, ErrorBody};
use crate::extractors::{Payload, RecordId};
use crate::model::{ItensDoPedidoBody, MessageBody, Pedido, PedidoComCliente, PedidoPayload, PedidosComClienteBody};
use crate::response::{created, message, ok};
use crate::state::AppState;
use crate::validation::Validate;
use axum::{extract::State, response::IntoResponse};

pub const NAO_ENCONTRADO: &str = "Pedido não encontrado";
pub const EXCLUIDO: &str = "Pedido excluído com sucesso";
pub const CLIENTE_INEXISTENTE: &str = "Cliente informado não existe";
pub const POSSUI_ITENS: &str = "Pedido possui itens vinculados";

#[utoipa::path(
    get,
    path = "/pedidos",
    responses((status = 200, description = "All orders with their customers", body = PedidosComClienteBody)),
    tag = "pedidos"
)]
pub async fn listar(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let pedidos = state.store.pedidos().list_with_cliente().await?;
    Ok(ok(PedidosComClienteBody { pedidos }))
}

#[utoipa::path(
    get,
    path = "/pedidos/{id}",
    params(("id" = i32, Path, description = "Order id")),
    responses(
        (status = 200, description = "Order with its customer", body = PedidoComCliente),
        (status = 404, description = "Unknown id", body = ErrorBody)
    ),
    tag = "pedidos"
)]
pub async fn obter(State(state): State<AppState>, RecordId(id): RecordId) -> Result<impl IntoResponse, AppError> {
    let pedido = state
        .store
        .pedidos()
        .find_with_cliente(id)
        .await?
        .ok_or_else(|| AppError::NotFound(NAO_ENCONTRADO.into()))?;
    Ok(ok(pedido))
}

/// GET /pedidos/:id/itensDoPedido
#[utoipa::path(
    get,
    path = "/pedidos/{id}/itensDoPedido",
    params(("id" = i32, Path, description = "Order id")),
    responses(
        (status = 200, description = "Items of the order", body = ItensDoPedidoBody),
        (status = 404, description = "Unknown id", body = ErrorBody)
    ),
    tag = "pedidos"
)]
pub async fn itens(State(state): State<AppState>, RecordId(id): RecordId) -> Result<impl IntoResponse, AppError> {
    if state.store.pedidos().find_with_cliente(id).await?.is_none() {
        return Err(AppError::NotFound(NAO_ENCONTRADO.into()));
    }
    let itens_do_pedido = state.store.itens().list_by_pedido(id).await?;
    Ok(ok(ItensDoPedidoBody { itens_do_pedido }))
}

/// POST /incluirPedido. The customer is not looked up first; the foreign key rejects
/// unknown ids.
#[utoipa::path(
    post,
    path = "/incluirPedido",
    request_body = PedidoPayload,
    responses(
        (status = 201, description = "Created order", body = Pedido),
        (status = 400, description = "Missing field or unknown customer", body = ErrorBody)
    ),
    tag = "pedidos"
)]
pub async fn incluir(
    State(state): State<AppState>,
    Payload(payload): Payload<PedidoPayload>,
) -> Result<impl IntoResponse, AppError> {
    let novo = payload.validate()?;
    let pedido = state
        .store
        .pedidos()
        .insert(&novo)
        .await
        .map_err(|e| AppError::from_write(e, CLIENTE_INEXISTENTE))?;
    tracing::info!(id = pedido.id, id_cliente = pedido.id_cliente, "pedido incluído");
    Ok(created(pedido))
}

#[utoipa::path(
    put,
    path = "/atualizarPedido/{id}",
    params(("id" = i32, Path, description = "Order id")),
    request_body = PedidoPayload,
    responses(
        (status = 200, description = "Updated order", body = Pedido),
        (status = 400, description = "Missing field or unknown customer", body = ErrorBody),
        (status = 404, description = "Unknown id", body = ErrorBody)
    ),
    tag = "pedidos"
)]
pub async fn atualizar(
    State(state): State<AppState>,
    RecordId(id): RecordId,
    Payload(payload): Payload<PedidoPayload>,
) -> Result<impl IntoResponse, AppError> {
    let dados = payload.validate()?;
    let pedido = state
        .store
        .pedidos()
        .update(id, &dados)
        .await
        .map_err(|e| AppError::from_write(e, CLIENTE_INEXISTENTE))?
        .ok_or_else(|| AppError::NotFound(NAO_ENCONTRADO.into()))?;
    Ok(ok(pedido))
}

#[utoipa::path(
    delete,
    path = "/excluirPedido/{id}",
    params(("id" = i32, Path, description = "Order id")),
    responses(
        (status = 200, description = "Deleted", body = MessageBody),
        (status = 400, description = "Order still has items", body = ErrorBody),
        (status = 404, description = "Unknown id", body = ErrorBody)
    ),
    tag = "pedidos"
)]
pub async fn excluir(State(state): State<AppState>, RecordId(id): RecordId) -> Result<impl IntoResponse, AppError> {
    let removed = state
        .store
        .pedidos()
        .delete(id)
        .await
        .map_err(|e| AppError::from_write(e, POSSUI_ITENS))?;
    if !removed {
        return Err(AppError::NotFound(NAO_ENCONTRADO.into()));
    }
    tracing::info!(id, "pedido excluído");
    Ok(message(EXCLUIDO))
}
