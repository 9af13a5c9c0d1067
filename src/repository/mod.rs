//! Repository traits, one per entity. Relationships between entities are expressed as
//! query methods here (`find_with_cliente`, `list_by_cliente`, `list_by_pedido`) rather
//! than registered globally.
//!
//! Writes report storage constraint failures as [`StoreError::UniqueViolation`] and
//! [`StoreError::ForeignKeyViolation`]; callers decide what they mean for the request.

mod postgres;

pub use postgres::PgStore;

use crate::error::StoreError;
use crate::model::{
    Cliente, ItemDoPedido, NovoCliente, NovoItemDoPedido, NovoPedido, NovoProduto, Pedido, PedidoComCliente, Produto,
};
use async_trait::async_trait;

#[async_trait]
pub trait ClienteRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Cliente>, StoreError>;

    async fn find(&self, id: i32) -> Result<Option<Cliente>, StoreError>;

    /// Insert unless the cpf is taken, in which case `UniqueViolation` is returned and
    /// nothing is written.
    async fn insert(&self, novo: &NovoCliente) -> Result<Cliente, StoreError>;

    /// Overwrite every field. `Ok(None)` when no row has this id; `UniqueViolation` when
    /// the cpf belongs to another customer.
    async fn update(&self, id: i32, dados: &NovoCliente) -> Result<Option<Cliente>, StoreError>;

    /// Returns whether a row was removed.
    async fn delete(&self, id: i32) -> Result<bool, StoreError>;
}

#[async_trait]
pub trait ProdutoRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Produto>, StoreError>;

    async fn find(&self, id: i32) -> Result<Option<Produto>, StoreError>;

    async fn insert(&self, novo: &NovoProduto) -> Result<Produto, StoreError>;

    async fn update(&self, id: i32, dados: &NovoProduto) -> Result<Option<Produto>, StoreError>;

    async fn delete(&self, id: i32) -> Result<bool, StoreError>;
}

#[async_trait]
pub trait PedidoRepository: Send + Sync {
    /// Every order with its customer loaded in the same query.
    async fn list_with_cliente(&self) -> Result<Vec<PedidoComCliente>, StoreError>;

    async fn find_with_cliente(&self, id: i32) -> Result<Option<PedidoComCliente>, StoreError>;

    async fn list_by_cliente(&self, id_cliente: i32) -> Result<Vec<Pedido>, StoreError>;

    /// `ForeignKeyViolation` when `id_cliente` does not exist.
    async fn insert(&self, novo: &NovoPedido) -> Result<Pedido, StoreError>;

    async fn update(&self, id: i32, dados: &NovoPedido) -> Result<Option<Pedido>, StoreError>;

    /// Items are not removed with the order; a referenced order yields `ForeignKeyViolation`.
    async fn delete(&self, id: i32) -> Result<bool, StoreError>;
}

#[async_trait]
pub trait ItemDoPedidoRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<ItemDoPedido>, StoreError>;

    async fn find(&self, id: i32) -> Result<Option<ItemDoPedido>, StoreError>;

    async fn list_by_pedido(&self, id_pedido: i32) -> Result<Vec<ItemDoPedido>, StoreError>;

    /// `ForeignKeyViolation` when the order or the product does not exist.
    async fn insert(&self, novo: &NovoItemDoPedido) -> Result<ItemDoPedido, StoreError>;

    async fn update(&self, id: i32, dados: &NovoItemDoPedido) -> Result<Option<ItemDoPedido>, StoreError>;

    async fn delete(&self, id: i32) -> Result<bool, StoreError>;
}

/// Access to all repositories plus a liveness probe for the backing store.
#[async_trait]
pub trait Store: Send + Sync {
    fn clientes(&self) -> &dyn ClienteRepository;

    fn produtos(&self) -> &dyn ProdutoRepository;

    fn pedidos(&self) -> &dyn PedidoRepository;

    fn itens(&self) -> &dyn ItemDoPedidoRepository;

    async fn ping(&self) -> Result<(), StoreError>;
}
