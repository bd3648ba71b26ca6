//! Order (pedido) resource.

use chrono::{DateTime, Utc};
use mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime;
use serde::{Deserialize, Serialize};

use super::Resource;

/// A customer order.
///
/// `data` is accepted as an RFC 3339 string on the wire but stored as a
/// native BSON datetime, so the by-year range queries compare real
/// datetimes instead of strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pedido {
    #[serde(serialize_with = "chrono_datetime_as_bson_datetime::serialize")]
    pub data: DateTime<Utc>,
    pub status: String,
    pub valor_total: f64,
    /// Customer reference, stored as the customer's id in hex form.
    pub cliente_id: String,
}

impl Resource for Pedido {
    const COLLECTION: &'static str = "pedidos";
    const SINGULAR: &'static str = "pedido";
    const COUNT_ENVELOPE: bool = true;

    const MSG_CREATE_FAILED: &'static str = "Erro ao criar pedido";
    const MSG_NOT_FOUND: &'static str = "Pedido não encontrado";
    const MSG_DELETED: &'static str = "Pedido deletado com sucesso";
}
