//! PostgreSQL implementation of the repositories.

use super::{ClienteRepository, ItemDoPedidoRepository, PedidoRepository, ProdutoRepository, Store};
use crate::error::StoreError;
use crate::model::{
    Cliente, ItemDoPedido, NovoCliente, NovoItemDoPedido, NovoPedido, NovoProduto, Pedido, PedidoComCliente, Produto,
};
use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

/// Constraint reported when an insert skips a row because its cpf is taken.
const CPF_UNIQUE_CONSTRAINT: &str = "clientes_cpf_key";

#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
    clientes: PgClienteRepository,
    produtos: PgProdutoRepository,
    pedidos: PgPedidoRepository,
    itens: PgItemDoPedidoRepository,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self {
            clientes: PgClienteRepository { pool: pool.clone() },
            produtos: PgProdutoRepository { pool: pool.clone() },
            pedidos: PgPedidoRepository { pool: pool.clone() },
            itens: PgItemDoPedidoRepository { pool: pool.clone() },
            pool,
        }
    }
}

#[async_trait]
impl Store for PgStore {
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
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

#[derive(Clone)]
pub struct PgClienteRepository {
    pool: PgPool,
}

#[async_trait]
impl ClienteRepository for PgClienteRepository {
    async fn list(&self) -> Result<Vec<Cliente>, StoreError> {
        let sql = "SELECT id, nome, sobrenome, cpf FROM clientes ORDER BY id";
        tracing::debug!(sql = %sql, "query");
        Ok(sqlx::query_as::<_, Cliente>(sql).fetch_all(&self.pool).await?)
    }

    async fn find(&self, id: i32) -> Result<Option<Cliente>, StoreError> {
        let sql = "SELECT id, nome, sobrenome, cpf FROM clientes WHERE id = $1";
        tracing::debug!(sql = %sql, id, "query");
        Ok(sqlx::query_as::<_, Cliente>(sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn insert(&self, novo: &NovoCliente) -> Result<Cliente, StoreError> {
        let sql = "INSERT INTO clientes (nome, sobrenome, cpf) VALUES ($1, $2, $3) \
                   ON CONFLICT (cpf) DO NOTHING \
                   RETURNING id, nome, sobrenome, cpf";
        tracing::debug!(sql = %sql, "query");
        sqlx::query_as::<_, Cliente>(sql)
            .bind(&novo.nome)
            .bind(&novo.sobrenome)
            .bind(&novo.cpf)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| StoreError::UniqueViolation(CPF_UNIQUE_CONSTRAINT.to_string()))
    }

    async fn update(&self, id: i32, dados: &NovoCliente) -> Result<Option<Cliente>, StoreError> {
        let sql = "UPDATE clientes SET nome = $2, sobrenome = $3, cpf = $4 WHERE id = $1 \
                   RETURNING id, nome, sobrenome, cpf";
        tracing::debug!(sql = %sql, id, "query");
        Ok(sqlx::query_as::<_, Cliente>(sql)
            .bind(id)
            .bind(&dados.nome)
            .bind(&dados.sobrenome)
            .bind(&dados.cpf)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn delete(&self, id: i32) -> Result<bool, StoreError> {
        delete_by_id(&self.pool, "clientes", id).await
    }
}

#[derive(Clone)]
pub struct PgProdutoRepository {
    pool: PgPool,
}

#[async_trait]
impl ProdutoRepository for PgProdutoRepository {
    async fn list(&self) -> Result<Vec<Produto>, StoreError> {
        let sql = "SELECT id, descricao FROM produtos ORDER BY id";
        tracing::debug!(sql = %sql, "query");
        Ok(sqlx::query_as::<_, Produto>(sql).fetch_all(&self.pool).await?)
    }

    async fn find(&self, id: i32) -> Result<Option<Produto>, StoreError> {
        let sql = "SELECT id, descricao FROM produtos WHERE id = $1";
        tracing::debug!(sql = %sql, id, "query");
        Ok(sqlx::query_as::<_, Produto>(sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn insert(&self, novo: &NovoProduto) -> Result<Produto, StoreError> {
        let sql = "INSERT INTO produtos (descricao) VALUES ($1) RETURNING id, descricao";
        tracing::debug!(sql = %sql, "query");
        Ok(sqlx::query_as::<_, Produto>(sql)
            .bind(&novo.descricao)
            .fetch_one(&self.pool)
            .await?)
    }

    async fn update(&self, id: i32, dados: &NovoProduto) -> Result<Option<Produto>, StoreError> {
        let sql = "UPDATE produtos SET descricao = $2 WHERE id = $1 RETURNING id, descricao";
        tracing::debug!(sql = %sql, id, "query");
        Ok(sqlx::query_as::<_, Produto>(sql)
            .bind(id)
            .bind(&dados.descricao)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn delete(&self, id: i32) -> Result<bool, StoreError> {
        delete_by_id(&self.pool, "produtos", id).await
    }
}

#[derive(Clone)]
pub struct PgPedidoRepository {
    pool: PgPool,
}

const PEDIDO_COM_CLIENTE_SELECT: &str = "SELECT p.id, p.data, p.id_cliente, \
     c.id AS cliente_id, c.nome AS cliente_nome, c.sobrenome AS cliente_sobrenome, c.cpf AS cliente_cpf \
     FROM pedidos p LEFT JOIN clientes c ON c.id = p.id_cliente";

fn pedido_com_cliente(row: &PgRow) -> Result<PedidoComCliente, sqlx::Error> {
    let pedido = Pedido {
        id: row.try_get("id")?,
        data: row.try_get("data")?,
        id_cliente: row.try_get("id_cliente")?,
    };
    let cliente_id: Option<i32> = row.try_get("cliente_id")?;
    let cliente = match cliente_id {
        Some(id) => Some(Cliente {
            id,
            nome: row.try_get("cliente_nome")?,
            sobrenome: row.try_get("cliente_sobrenome")?,
            cpf: row.try_get("cliente_cpf")?,
        }),
        None => None,
    };
    Ok(PedidoComCliente::new(&pedido, cliente))
}

#[async_trait]
impl PedidoRepository for PgPedidoRepository {
    async fn list_with_cliente(&self) -> Result<Vec<PedidoComCliente>, StoreError> {
        let sql = format!("{} ORDER BY p.id", PEDIDO_COM_CLIENTE_SELECT);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;
        let pedidos = rows
            .iter()
            .map(pedido_com_cliente)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(pedidos)
    }

    async fn find_with_cliente(&self, id: i32) -> Result<Option<PedidoComCliente>, StoreError> {
        let sql = format!("{} WHERE p.id = $1", PEDIDO_COM_CLIENTE_SELECT);
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query(&sql).bind(id).fetch_optional(&self.pool).await?;
        Ok(row.as_ref().map(pedido_com_cliente).transpose()?)
    }

    async fn list_by_cliente(&self, id_cliente: i32) -> Result<Vec<Pedido>, StoreError> {
        let sql = "SELECT id, data, id_cliente FROM pedidos WHERE id_cliente = $1 ORDER BY id";
        tracing::debug!(sql = %sql, id_cliente, "query");
        Ok(sqlx::query_as::<_, Pedido>(sql)
            .bind(id_cliente)
            .fetch_all(&self.pool)
            .await?)
    }

    async fn insert(&self, novo: &NovoPedido) -> Result<Pedido, StoreError> {
        let sql = "INSERT INTO pedidos (data, id_cliente) VALUES ($1, $2) RETURNING id, data, id_cliente";
        tracing::debug!(sql = %sql, "query");
        Ok(sqlx::query_as::<_, Pedido>(sql)
            .bind(novo.data)
            .bind(novo.id_cliente)
            .fetch_one(&self.pool)
            .await?)
    }

    async fn update(&self, id: i32, dados: &NovoPedido) -> Result<Option<Pedido>, StoreError> {
        let sql = "UPDATE pedidos SET data = $2, id_cliente = $3 WHERE id = $1 RETURNING id, data, id_cliente";
        tracing::debug!(sql = %sql, id, "query");
        Ok(sqlx::query_as::<_, Pedido>(sql)
            .bind(id)
            .bind(dados.data)
            .bind(dados.id_cliente)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn delete(&self, id: i32) -> Result<bool, StoreError> {
        delete_by_id(&self.pool, "pedidos", id).await
    }
}

#[derive(Clone)]
pub struct PgItemDoPedidoRepository {
    pool: PgPool,
}

#[async_trait]
impl ItemDoPedidoRepository for PgItemDoPedidoRepository {
    async fn list(&self) -> Result<Vec<ItemDoPedido>, StoreError> {
        let sql = "SELECT id, id_pedido, id_produto, qtdade FROM itens_do_pedido ORDER BY id";
        tracing::debug!(sql = %sql, "query");
        Ok(sqlx::query_as::<_, ItemDoPedido>(sql).fetch_all(&self.pool).await?)
    }

    async fn find(&self, id: i32) -> Result<Option<ItemDoPedido>, StoreError> {
        let sql = "SELECT id, id_pedido, id_produto, qtdade FROM itens_do_pedido WHERE id = $1";
        tracing::debug!(sql = %sql, id, "query");
        Ok(sqlx::query_as::<_, ItemDoPedido>(sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn list_by_pedido(&self, id_pedido: i32) -> Result<Vec<ItemDoPedido>, StoreError> {
        let sql = "SELECT id, id_pedido, id_produto, qtdade FROM itens_do_pedido WHERE id_pedido = $1 ORDER BY id";
        tracing::debug!(sql = %sql, id_pedido, "query");
        Ok(sqlx::query_as::<_, ItemDoPedido>(sql)
            .bind(id_pedido)
            .fetch_all(&self.pool)
            .await?)
    }

    async fn insert(&self, novo: &NovoItemDoPedido) -> Result<ItemDoPedido, StoreError> {
        let sql = "INSERT INTO itens_do_pedido (id_pedido, id_produto, qtdade) VALUES ($1, $2, $3) \
                   RETURNING id, id_pedido, id_produto, qtdade";
        tracing::debug!(sql = %sql, "query");
        Ok(sqlx::query_as::<_, ItemDoPedido>(sql)
            .bind(novo.id_pedido)
            .bind(novo.id_produto)
            .bind(novo.qtdade)
            .fetch_one(&self.pool)
            .await?)
    }

    async fn update(&self, id: i32, dados: &NovoItemDoPedido) -> Result<Option<ItemDoPedido>, StoreError> {
        let sql = "UPDATE itens_do_pedido SET id_pedido = $2, id_produto = $3, qtdade = $4 WHERE id = $1 \
                   RETURNING id, id_pedido, id_produto, qtdade";
        tracing::debug!(sql = %sql, id, "query");
        Ok(sqlx::query_as::<_, ItemDoPedido>(sql)
            .bind(id)
            .bind(dados.id_pedido)
            .bind(dados.id_produto)
            .bind(dados.qtdade)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn delete(&self, id: i32) -> Result<bool, StoreError> {
        delete_by_id(&self.pool, "itens_do_pedido", id).await
    }
}

/// `table` is a literal from this module, never request input.
async fn delete_by_id(pool: &PgPool, table: &'static str, id: i32) -> Result<bool, StoreError> {
    let sql = format!("DELETE FROM {} WHERE id = $1", table);
    tracing::debug!(sql = %sql, id, "query");
    let result = sqlx::query(&sql).bind(id).execute(pool).await?;
    Ok(result.rows_affected() > 0)
}
