//! Database bootstrap: create the target database if missing, then the four tables.
//! Statements are idempotent so the service can run them on every start.

use crate::error::StoreError;
use sqlx::postgres::PgConnectOptions;
use sqlx::{ConnectOptions, PgPool};
use std::str::FromStr;

/// Tables in dependency order. Foreign keys use the default `ON DELETE NO ACTION`, so a
/// referenced row cannot be removed and nothing cascades.
const DDL: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS clientes (
        id SERIAL PRIMARY KEY,
        nome VARCHAR(255) NOT NULL,
        sobrenome VARCHAR(255) NOT NULL,
        cpf VARCHAR(14) NOT NULL,
        CONSTRAINT clientes_cpf_key UNIQUE (cpf)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS produtos (
        id SERIAL PRIMARY KEY,
        descricao VARCHAR(255) NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS pedidos (
        id SERIAL PRIMARY KEY,
        data TIMESTAMPTZ NOT NULL,
        id_cliente INTEGER NOT NULL,
        CONSTRAINT pedidos_id_cliente_fkey FOREIGN KEY (id_cliente) REFERENCES clientes (id)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS itens_do_pedido (
        id SERIAL PRIMARY KEY,
        id_pedido INTEGER NOT NULL,
        id_produto INTEGER NOT NULL,
        qtdade INTEGER NOT NULL,
        CONSTRAINT itens_do_pedido_id_pedido_fkey FOREIGN KEY (id_pedido) REFERENCES pedidos (id),
        CONSTRAINT itens_do_pedido_id_produto_fkey FOREIGN KEY (id_produto) REFERENCES produtos (id),
        CONSTRAINT itens_do_pedido_qtdade_check CHECK (qtdade > 0)
    )
    "#,
    "CREATE INDEX IF NOT EXISTS pedidos_id_cliente_idx ON pedidos (id_cliente)",
    "CREATE INDEX IF NOT EXISTS itens_do_pedido_id_pedido_idx ON itens_do_pedido (id_pedido)",
    "CREATE INDEX IF NOT EXISTS itens_do_pedido_id_produto_idx ON itens_do_pedido (id_produto)",
];

/// Create tables, constraints and indexes that do not exist yet.
pub async fn apply_migrations(pool: &PgPool) -> Result<(), StoreError> {
    for sql in DDL {
        tracing::debug!(sql = %sql.trim(), "migration");
        sqlx::query(sql).execute(pool).await?;
    }
    tracing::info!(statements = DDL.len(), "schema ready");
    Ok(())
}

/// Ensure the database in `database_url` exists; create it if not. Connects to the
/// `postgres` maintenance database to run CREATE DATABASE. Call before creating the pool.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), StoreError> {
    let (admin_url, db_name) = split_database_url(database_url);
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let opts = PgConnectOptions::from_str(&admin_url)?;
    let mut conn = opts.connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

/// Split a connection URL into the maintenance-database URL and the target database name.
/// Query parameters are carried over to the maintenance URL.
fn split_database_url(url: &str) -> (String, String) {
    let authority_start = url.find("://").map(|i| i + 3).unwrap_or(0);
    let path_start = match url[authority_start..].find('/') {
        Some(i) => authority_start + i + 1,
        None => return (format!("{}/postgres", url), String::new()),
    };
    let rest = &url[path_start..];
    let (db_name, query) = match rest.split_once('?') {
        Some((name, q)) => (name, Some(q)),
        None => (rest, None),
    };
    let base = &url[..path_start];
    let admin_url = match query {
        Some(q) => format!("{}postgres?{}", base, q),
        None => format!("{}postgres", base),
    };
    (admin_url, db_name.trim().to_string())
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
