//! Order line-item (item de pedido) resource.
//!
//! Resolves the N:N relation between orders and garments as its own
//! collection, one document per (order, garment) line.

use serde::{Deserialize, Serialize};

use super::Resource;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemPedido {
    /// Order reference, stored as the order's id in hex form.
    pub pedido_id: String,
    /// Garment reference, stored as the garment's id in hex form.
    pub roupa_id: String,
    pub quantidade: i32,
    pub preco_unitario: f64,
    pub subtotal: f64,
}

impl Resource for ItemPedido {
    const COLLECTION: &'static str = "itens_pedidos";
    const SINGULAR: &'static str = "item";
    const COUNT_ENVELOPE: bool = false;

    const MSG_CREATE_FAILED: &'static str = "Erro ao criar item do pedido";
    const MSG_NOT_FOUND: &'static str = "Item do pedido não encontrado";
    const MSG_DELETED: &'static str = "Item do pedido deletado com sucesso";
}
