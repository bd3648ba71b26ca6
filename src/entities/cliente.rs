//! Customer (cliente) resource.

use serde::{Deserialize, Serialize};

use super::Resource;

/// Postal address, embedded 1:1 inside [`Cliente`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Endereco {
    pub rua: String,
    pub numero: i32,
    pub cep: String,
    pub cidade: String,
    pub estado: String,
}

/// A store customer. Referenced by orders through `cliente_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cliente {
    pub nome: String,
    pub cpf: String,
    pub telefone: String,
    pub email: String,
    pub endereco: Endereco,
}

impl Resource for Cliente {
    const COLLECTION: &'static str = "clientes";
    const SINGULAR: &'static str = "cliente";
    const COUNT_ENVELOPE: bool = true;

    const MSG_CREATE_FAILED: &'static str = "Erro ao criar cliente";
    const MSG_NOT_FOUND: &'static str = "Cliente não encontrado";
    const MSG_DELETED: &'static str = "Cliente deletado com sucesso";
}
