//! Shared helpers for router tests: an in-memory store that enforces the same unique and
//! foreign-key constraints as the PostgreSQL schema, and a one-shot request helper.
#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    Router,
};
use pedidos_api::model::{
    Cliente, ItemDoPedido, NovoCliente, NovoItemDoPedido, NovoPedido, NovoProduto, Pedido, PedidoComCliente, Produto,
};
use pedidos_api::{
    app, AppState, ClienteRepository, ItemDoPedidoRepository, PedidoRepository, ProdutoRepository, Store, StoreError,
};
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};
use tower::ServiceExt;

pub const BODY_LIMIT: usize = 64 * 1024;

#[derive(Default)]
struct Tables {
    offline: bool,
    next_id: i32,
    clientes: BTreeMap<i32, Cliente>,
    produtos: BTreeMap<i32, Produto>,
    pedidos: BTreeMap<i32, Pedido>,
    itens: BTreeMap<i32, ItemDoPedido>,
}

impl Tables {
    fn next_id(&mut self) -> i32 {
        self.next_id += 1;
        self.next_id
    }
}

#[derive(Clone, Default)]
struct Shared(Arc<Mutex<Tables>>);

impl Shared {
    /// Lock the tables, failing like an unreachable database when offline.
    fn lock(&self) -> Result<MutexGuard<'_, Tables>, StoreError> {
        let tables = self.0.lock().unwrap();
        if tables.offline {
            return Err(StoreError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(tables)
    }
}

fn fk(name: &str) -> StoreError {
    StoreError::ForeignKeyViolation(name.to_string())
}

#[derive(Clone)]
pub struct MemoryStore {
    shared: Shared,
    clientes: MemClientes,
    produtos: MemProdutos,
    pedidos: MemPedidos,
    itens: MemItens,
}

impl MemoryStore {
    pub fn new() -> Self {
        let shared = Shared::default();
        Self {
            clientes: MemClientes(shared.clone()),
            produtos: MemProdutos(shared.clone()),
            pedidos: MemPedidos(shared.clone()),
            itens: MemItens(shared.clone()),
            shared,
        }
    }

    /// Make every later call fail with a database error.
    pub fn set_offline(&self, offline: bool) {
        self.shared.0.lock().unwrap().offline = offline;
    }

    /// Store an order without checking its customer, as rows predating the constraint would be.
    pub fn insert_orphan_pedido(&self, data: &str, id_cliente: i32) -> i32 {
        let mut t = self.shared.0.lock().unwrap();
        let id = t.next_id();
        let data = pedidos_api::model::parse_data(data).unwrap();
        t.pedidos.insert(id, Pedido { id, data, id_cliente });
        id
    }

    pub fn cliente_count(&self) -> usize {
        self.shared.0.lock().unwrap().clientes.len()
    }

    pub fn pedido_exists(&self, id: i32) -> bool {
        self.shared.0.lock().unwrap().pedidos.contains_key(&id)
    }

    pub fn item_exists(&self, id: i32) -> bool {
        self.shared.0.lock().unwrap().itens.contains_key(&id)
    }
}

#[async_trait]
impl Store for MemoryStore {
    fn clientes(&self) -> &dyn ClienteRepository {
        &self.clientes
    }

    fn produtos(&self) -> &dyn ProdutoRepository {
        &self.produtos
    }

    fn pedidos(&self) -> &dyn PedidoRepository {
        &self.pedidos
    }

    fn itens(&self) -> &dyn ItemDoPedidoRepository {
        &self.itens
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.shared.lock().map(|_| ())
    }
}

#[derive(Clone, Default)]
struct MemClientes(Shared);

#[async_trait]
impl ClienteRepository for MemClientes {
    async fn list(&self) -> Result<Vec<Cliente>, StoreError> {
        Ok(self.0.lock()?.clientes.values().cloned().collect())
    }

    async fn find(&self, id: i32) -> Result<Option<Cliente>, StoreError> {
        Ok(self.0.lock()?.clientes.get(&id).cloned())
    }

    async fn insert(&self, novo: &NovoCliente) -> Result<Cliente, StoreError> {
        let mut t = self.0.lock()?;
        if t.clientes.values().any(|c| c.cpf == novo.cpf) {
            return Err(StoreError::UniqueViolation("clientes_cpf_key".into()));
        }
        let id = t.next_id();
        let cliente = Cliente {
            id,
            nome: novo.nome.clone(),
            sobrenome: novo.sobrenome.clone(),
            cpf: novo.cpf.clone(),
        };
        t.clientes.insert(id, cliente.clone());
        Ok(cliente)
    }

    async fn update(&self, id: i32, dados: &NovoCliente) -> Result<Option<Cliente>, StoreError> {
        let mut t = self.0.lock()?;
        if !t.clientes.contains_key(&id) {
            return Ok(None);
        }
        if t.clientes.values().any(|c| c.id != id && c.cpf == dados.cpf) {
            return Err(StoreError::UniqueViolation("clientes_cpf_key".into()));
        }
        let cliente = Cliente {
            id,
            nome: dados.nome.clone(),
            sobrenome: dados.sobrenome.clone(),
            cpf: dados.cpf.clone(),
        };
        t.clientes.insert(id, cliente.clone());
        Ok(Some(cliente))
    }

    async fn delete(&self, id: i32) -> Result<bool, StoreError> {
        let mut t = self.0.lock()?;
        if t.pedidos.values().any(|p| p.id_cliente == id) {
            return Err(fk("pedidos_id_cliente_fkey"));
        }
        Ok(t.clientes.remove(&id).is_some())
    }
}

#[derive(Clone, Default)]
struct MemProdutos(Shared);

#[async_trait]
impl ProdutoRepository for MemProdutos {
    async fn list(&self) -> Result<Vec<Produto>, StoreError> {
        Ok(self.0.lock()?.produtos.values().cloned().collect())
    }

    async fn find(&self, id: i32) -> Result<Option<Produto>, StoreError> {
        Ok(self.0.lock()?.produtos.get(&id).cloned())
    }

    async fn insert(&self, novo: &NovoProduto) -> Result<Produto, StoreError> {
        let mut t = self.0.lock()?;
        let id = t.next_id();
        let produto = Produto {
            id,
            descricao: novo.descricao.clone(),
        };
        t.produtos.insert(id, produto.clone());
        Ok(produto)
    }

    async fn update(&self, id: i32, dados: &NovoProduto) -> Result<Option<Produto>, StoreError> {
        let mut t = self.0.lock()?;
        Ok(t.produtos.get_mut(&id).map(|p| {
            p.descricao = dados.descricao.clone();
            p.clone()
        }))
    }

    async fn delete(&self, id: i32) -> Result<bool, StoreError> {
        let mut t = self.0.lock()?;
        if t.itens.values().any(|i| i.id_produto == id) {
            return Err(fk("itens_do_pedido_id_produto_fkey"));
        }
        Ok(t.produtos.remove(&id).is_some())
    }
}

#[derive(Clone, Default)]
struct MemPedidos(Shared);

fn com_cliente(t: &Tables, p: &Pedido) -> PedidoComCliente {
    PedidoComCliente::new(p, t.clientes.get(&p.id_cliente).cloned())
}

#[async_trait]
impl PedidoRepository for MemPedidos {
    async fn list_with_cliente(&self) -> Result<Vec<PedidoComCliente>, StoreError> {
        let t = self.0.lock()?;
        Ok(t.pedidos.values().map(|p| com_cliente(&t, p)).collect())
    }

    async fn find_with_cliente(&self, id: i32) -> Result<Option<PedidoComCliente>, StoreError> {
        let t = self.0.lock()?;
        Ok(t.pedidos.get(&id).map(|p| com_cliente(&t, p)))
    }

    async fn list_by_cliente(&self, id_cliente: i32) -> Result<Vec<Pedido>, StoreError> {
        let t = self.0.lock()?;
        Ok(t.pedidos.values().filter(|p| p.id_cliente == id_cliente).cloned().collect())
    }

    async fn insert(&self, novo: &NovoPedido) -> Result<Pedido, StoreError> {
        let mut t = self.0.lock()?;
        if !t.clientes.contains_key(&novo.id_cliente) {
            return Err(fk("pedidos_id_cliente_fkey"));
        }
        let id = t.next_id();
        let pedido = Pedido {
            id,
            data: novo.data,
            id_cliente: novo.id_cliente,
        };
        t.pedidos.insert(id, pedido.clone());
        Ok(pedido)
    }

    async fn update(&self, id: i32, dados: &NovoPedido) -> Result<Option<Pedido>, StoreError> {
        let mut t = self.0.lock()?;
        if !t.pedidos.contains_key(&id) {
            return Ok(None);
        }
        if !t.clientes.contains_key(&dados.id_cliente) {
            return Err(fk("pedidos_id_cliente_fkey"));
        }
        let pedido = Pedido {
            id,
            data: dados.data,
            id_cliente: dados.id_cliente,
        };
        t.pedidos.insert(id, pedido.clone());
        Ok(Some(pedido))
    }

    async fn delete(&self, id: i32) -> Result<bool, StoreError> {
        let mut t = self.0.lock()?;
        if t.itens.values().any(|i| i.id_pedido == id) {
            return Err(fk("itens_do_pedido_id_pedido_fkey"));
        }
        Ok(t.pedidos.remove(&id).is_some())
    }
}

#[derive(Clone, Default)]
struct MemItens(Shared);

fn check_item_refs(t: &Tables, item: &NovoItemDoPedido) -> Result<(), StoreError> {
    if !t.pedidos.contains_key(&item.id_pedido) {
        return Err(fk("itens_do_pedido_id_pedido_fkey"));
    }
    if !t.produtos.contains_key(&item.id_produto) {
        return Err(fk("itens_do_pedido_id_produto_fkey"));
    }
    Ok(())
}

#[async_trait]
impl ItemDoPedidoRepository for MemItens {
    async fn list(&self) -> Result<Vec<ItemDoPedido>, StoreError> {
        Ok(self.0.lock()?.itens.values().cloned().collect())
    }

    async fn find(&self, id: i32) -> Result<Option<ItemDoPedido>, StoreError> {
        Ok(self.0.lock()?.itens.get(&id).cloned())
    }

    async fn list_by_pedido(&self, id_pedido: i32) -> Result<Vec<ItemDoPedido>, StoreError> {
        let t = self.0.lock()?;
        Ok(t.itens.values().filter(|i| i.id_pedido == id_pedido).cloned().collect())
    }

    async fn insert(&self, novo: &NovoItemDoPedido) -> Result<ItemDoPedido, StoreError> {
        let mut t = self.0.lock()?;
        check_item_refs(&t, novo)?;
        let id = t.next_id();
        let item = ItemDoPedido {
            id,
            id_pedido: novo.id_pedido,
            id_produto: novo.id_produto,
            qtdade: novo.qtdade,
        };
        t.itens.insert(id, item.clone());
        Ok(item)
    }

    async fn update(&self, id: i32, dados: &NovoItemDoPedido) -> Result<Option<ItemDoPedido>, StoreError> {
        let mut t = self.0.lock()?;
        if !t.itens.contains_key(&id) {
            return Ok(None);
        }
        check_item_refs(&t, dados)?;
        let item = ItemDoPedido {
            id,
            id_pedido: dados.id_pedido,
            id_produto: dados.id_produto,
            qtdade: dados.qtdade,
        };
        t.itens.insert(id, item.clone());
        Ok(Some(item))
    }

    async fn delete(&self, id: i32) -> Result<bool, StoreError> {
        Ok(self.0.lock()?.itens.remove(&id).is_some())
    }
}

/// A router over a fresh in-memory store, plus the store for direct inspection.
pub fn test_app() -> (Router, MemoryStore) {
    let store = MemoryStore::new();
    let router = app(AppState::new(Arc::new(store.clone())), BODY_LIMIT);
    (router, store)
}

/// Send one request and decode the JSON response body (`Value::Null` when empty).
pub async fn send(router: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

pub async fn get(router: &Router, uri: &str) -> (StatusCode, Value) {
    send(router, Method::GET, uri, None).await
}

pub async fn post(router: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(router, Method::POST, uri, Some(body)).await
}

pub async fn put(router: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(router, Method::PUT, uri, Some(body)).await
}

pub async fn delete(router: &Router, uri: &str) -> (StatusCode, Value) {
    send(router, Method::DELETE, uri, None).await
}

/// Create a customer through the API and return its id.
pub async fn novo_cliente(router: &Router, cpf: &str) -> i64 {
    let (status, body) = post(
        router,
        "/incluirCliente",
        serde_json::json!({ "nome": "Cliente", "sobrenome": "Teste", "cpf": cpf }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    body["id"].as_i64().unwrap()
}

pub async fn novo_produto(router: &Router, descricao: &str) -> i64 {
    let (status, body) = post(router, "/incluirProduto", serde_json::json!({ "descricao": descricao })).await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    body["id"].as_i64().unwrap()
}

pub async fn novo_pedido(router: &Router, id_cliente: i64) -> i64 {
    let (status, body) = post(
        router,
        "/incluirPedido",
        serde_json::json!({ "data": "2024-08-01T00:00:00Z", "id_cliente": id_cliente }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    body["id"].as_i64().unwrap()
}
