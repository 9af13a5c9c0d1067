//! Request validation: turns raw payloads into the typed values the repositories write.

use crate::error::AppError;
use crate::model::{
    ClientePayload, ItemDoPedidoPayload, NovoCliente, NovoItemDoPedido, NovoPedido, NovoProduto, PedidoPayload,
    ProdutoPayload,
};

/// Column width of the text fields.
pub const MAX_TEXT_LEN: usize = 255;
/// Room for a punctuated CPF (`000.000.000-00`).
pub const MAX_CPF_LEN: usize = 14;

pub trait Validate {
    type Output;

    fn validate(self) -> Result<Self::Output, AppError>;
}

fn required<T>(field: &str, value: Option<T>) -> Result<T, AppError> {
    value.ok_or_else(|| AppError::Validation(format!("{} é obrigatório", field)))
}

/// Trimmed, non-empty text of at most `max` characters.
fn required_text(field: &str, value: Option<String>, max: usize) -> Result<String, AppError> {
    let v = required(field, value)?;
    let v = v.trim();
    if v.is_empty() {
        return Err(AppError::Validation(format!("{} é obrigatório", field)));
    }
    if v.chars().count() > max {
        return Err(AppError::Validation(format!(
            "{} deve ter no máximo {} caracteres",
            field, max
        )));
    }
    Ok(v.to_string())
}

fn positive(field: &str, value: Option<i32>) -> Result<i32, AppError> {
    let v = required(field, value)?;
    if v <= 0 {
        return Err(AppError::Validation(format!("{} deve ser um inteiro positivo", field)));
    }
    Ok(v)
}

impl Validate for ClientePayload {
    type Output = NovoCliente;

    fn validate(self) -> Result<NovoCliente, AppError> {
        Ok(NovoCliente {
            nome: required_text("nome", self.nome, MAX_TEXT_LEN)?,
            sobrenome: required_text("sobrenome", self.sobrenome, MAX_TEXT_LEN)?,
            cpf: required_text("cpf", self.cpf, MAX_CPF_LEN)?,
        })
    }
}

impl Validate for ProdutoPayload {
    type Output = NovoProduto;

    fn validate(self) -> Result<NovoProduto, AppError> {
        Ok(NovoProduto {
            descricao: required_text("descricao", self.descricao, MAX_TEXT_LEN)?,
        })
    }
}

impl Validate for PedidoPayload {
    type Output = NovoPedido;

    fn validate(self) -> Result<NovoPedido, AppError> {
        Ok(NovoPedido {
            data: required("data", self.data)?,
            id_cliente: required("id_cliente", self.id_cliente)?,
        })
    }
}

impl Validate for ItemDoPedidoPayload {
    type Output = NovoItemDoPedido;

    fn validate(self) -> Result<NovoItemDoPedido, AppError> {
        Ok(NovoItemDoPedido {
            id_pedido: required("id_pedido", self.id_pedido)?,
            id_produto: required("id_produto", self.id_produto)?,
            qtdade: positive("qtdade", self.qtdade)?,
        })
    }
}
