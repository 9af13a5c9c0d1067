//! Resource routes. Reads live under the plural collection path; writes use one verb-named
//! path per operation (`incluirX`, `atualizarX/:id`, `excluirX/:id`).

use crate::handlers::{clientes, itens, pedidos, produtos};
use crate::state::AppState;
use axum::{
    routing::{delete, get, post, put},
    Router,
};

pub fn resource_routes(state: AppState) -> Router {
    Router::new()
        .route("/clientes", get(clientes::listar))
        .route("/clientes/:id", get(clientes::obter))
        .route("/clientes/:id/pedidos", get(clientes::pedidos))
        .route("/incluirCliente", post(clientes::incluir))
        .route("/atualizarCliente/:id", put(clientes::atualizar))
        .route("/excluirCliente/:id", delete(clientes::excluir))
        .route("/produtos", get(produtos::listar))
        .route("/produtos/:id", get(produtos::obter))
        .route("/incluirProduto", post(produtos::incluir))
        .route("/atualizarProduto/:id", put(produtos::atualizar))
        .route("/excluirProduto/:id", delete(produtos::excluir))
        .route("/pedidos", get(pedidos::listar))
        .route("/pedidos/:id", get(pedidos::obter))
        .route("/pedidos/:id/itensDoPedido", get(pedidos::itens))
        .route("/incluirPedido", post(pedidos::incluir))
        .route("/atualizarPedido/:id", put(pedidos::atualizar))
        .route("/excluirPedido/:id", delete(pedidos::excluir))
        .route("/itensDoPedido", get(itens::listar))
        .route("/itensDoPedido/:id", get(itens::obter))
        .route("/incluirItemDoPedido", post(itens::incluir))
        .route("/atualizarItemDoPedido/:id", put(itens::atualizar))
        .route("/excluirItemDoPedido/:id", delete(itens::excluir))
        .with_state(state)
}
