//! Customer handlers: list, get, create, update, delete, and the customer's orders.

use crate::error::{AppError, ErrorBody, StoreError};
use crate::extractors::{Payload, RecordId};
use crate::model::{Cliente, ClientePayload, ClientesBody, MessageBody, PedidosBody};
use crate::response::{created, message, ok};
use crate::state::AppState;
use crate::validation::Validate;
use axum::{extract::State, response::IntoResponse};

pub const NAO_ENCONTRADO: &str = "Cliente não encontrado";
pub const CPF_CADASTRADO: &str = "CPF já cadastrado";
pub const CPF_EM_USO: &str = "CPF já está sendo usado por outro cliente";
pub const EXCLUIDO: &str = "Cliente excluído com sucesso";
pub const POSSUI_PEDIDOS: &str = "Cliente possui pedidos vinculados";

fn cpf_conflict(e: StoreError, msg: &str) -> AppError {
    match e {
        StoreError::UniqueViolation(_) => AppError::Conflict(msg.to_string()),
        other => AppError::Store(other),
    }
}

/// GET /clientes. An empty table is an empty list, as for every other listing.
#[utoipa::path(
    get,
    path = "/clientes",
    responses((status = 200, description = "All customers", body = ClientesBody)),
    tag = "clientes"
)]
pub async fn listar(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let clientes = state.store.clientes().list().await?;
    Ok(ok(ClientesBody { clientes }))
}

#[utoipa::path(
    get,
    path = "/clientes/{id}",
    params(("id" = i32, Path, description = "Customer id")),
    responses(
        (status = 200, description = "Customer", body = Cliente),
        (status = 404, description = "Unknown id", body = ErrorBody)
    ),
    tag = "clientes"
)]
pub async fn obter(State(state): State<AppState>, RecordId(id): RecordId) -> Result<impl IntoResponse, AppError> {
    let cliente = state
        .store
        .clientes()
        .find(id)
        .await?
        .ok_or_else(|| AppError::NotFound(NAO_ENCONTRADO.into()))?;
    Ok(ok(cliente))
}

/// GET /clientes/:id/pedidos
#[utoipa::path(
    get,
    path = "/clientes/{id}/pedidos",
    params(("id" = i32, Path, description = "Customer id")),
    responses(
        (status = 200, description = "Orders placed by the customer", body = PedidosBody),
        (status = 404, description = "Unknown id", body = ErrorBody)
    ),
    tag = "clientes"
)]
pub async fn pedidos(State(state): State<AppState>, RecordId(id): RecordId) -> Result<impl IntoResponse, AppError> {
    if state.store.clientes().find(id).await?.is_none() {
        return Err(AppError::NotFound(NAO_ENCONTRADO.into()));
    }
    let pedidos = state.store.pedidos().list_by_cliente(id).await?;
    Ok(ok(PedidosBody { pedidos }))
}

#[utoipa::path(
    post,
    path = "/incluirCliente",
    request_body = ClientePayload,
    responses(
        (status = 201, description = "Created customer", body = Cliente),
        (status = 400, description = "Missing field or CPF already registered", body = ErrorBody)
    ),
    tag = "clientes"
)]
pub async fn incluir(
    State(state): State<AppState>,
    Payload(payload): Payload<ClientePayload>,
) -> Result<impl IntoResponse, AppError> {
    let novo = payload.validate()?;
    let cliente = state
        .store
        .clientes()
        .insert(&novo)
        .await
        .map_err(|e| cpf_conflict(e, CPF_CADASTRADO))?;
    tracing::info!(id = cliente.id, "cliente incluído");
    Ok(created(cliente))
}

#[utoipa::path(
    put,
    path = "/atualizarCliente/{id}",
    params(("id" = i32, Path, description = "Customer id")),
    request_body = ClientePayload,
    responses(
        (status = 200, description = "Updated customer", body = Cliente),
        (status = 400, description = "Missing field or CPF used by another customer", body = ErrorBody),
        (status = 404, description = "Unknown id", body = ErrorBody)
    ),
    tag = "clientes"
)]
pub async fn atualizar(
    State(state): State<AppState>,
    RecordId(id): RecordId,
    Payload(payload): Payload<ClientePayload>,
) -> Result<impl IntoResponse, AppError> {
    let dados = payload.validate()?;
    let cliente = state
        .store
        .clientes()
        .update(id, &dados)
        .await
        .map_err(|e| cpf_conflict(e, CPF_EM_USO))?
        .ok_or_else(|| AppError::NotFound(NAO_ENCONTRADO.into()))?;
    Ok(ok(cliente))
}

#[utoipa::path(
    delete,
    path = "/excluirCliente/{id}",
    params(("id" = i32, Path, description = "Customer id")),
    responses(
        (status = 200, description = "Deleted", body = MessageBody),
        (status = 400, description = "Customer still has orders", body = ErrorBody),
        (status = 404, description = "Unknown id", body = ErrorBody)
    ),
    tag = "clientes"
)]
pub async fn excluir(State(state): State<AppState>, RecordId(id): RecordId) -> Result<impl IntoResponse, AppError> {
    let removed = state
        .store
        .clientes()
        .delete(id)
        .await
        .map_err(|e| AppError::from_write(e, POSSUI_PEDIDOS))?;
    if !removed {
        return Err(AppError::NotFound(NAO_ENCONTRADO.into()));
    }
    tracing::info!(id, "cliente excluído");
    Ok(message(EXCLUIDO))
}
