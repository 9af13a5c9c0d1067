//! HTTP handlers, one module per resource.

pub mod clientes;
pub mod itens;
pub mod pedidos;
pub mod produtos;
