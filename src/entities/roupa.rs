//! Garment (roupa) resource.

use serde::{Deserialize, Serialize};

use super::Resource;

/// A garment in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Roupa {
    pub nome: String,
    pub tamanho: String,
    pub cor: String,
    pub preco: f64,
    /// Supplier reference, stored as the supplier's id in hex form.
    pub fornecedor_id: String,
}

impl Resource for Roupa {
    const COLLECTION: &'static str = "roupas";
    const SINGULAR: &'static str = "roupa";
    const COUNT_ENVELOPE: bool = false;

    const MSG_CREATE_FAILED: &'static str = "Erro ao criar roupa";
    const MSG_NOT_FOUND: &'static str = "Roupa não encontrada";
    const MSG_DELETED: &'static str = "Roupa deletada com sucesso";
}
