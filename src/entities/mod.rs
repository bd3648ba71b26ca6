//! The five store resources and their wire contracts.
//!
//! Each entity is a plain payload struct carrying exactly the fields a
//! client sends. The document identifier is never part of a payload: it
//! is assigned by MongoDB on insert and only appears (as a hex string) in
//! responses.
//!
//! The [`Resource`] trait is what lets one set of generic CRUD handlers
//! serve all five collections: it names the collection, the fetch-one
//! path segment and the per-entity response messages.

mod cliente;
mod fornecedor;
mod item_pedido;
mod pedido;
mod roupa;

pub use cliente::{Cliente, Endereco};
pub use fornecedor::Fornecedor;
pub use item_pedido::ItemPedido;
pub use pedido::Pedido;
pub use roupa::Roupa;

use mongodb::bson::Document;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Binds a payload struct to its collection and response vocabulary.
pub trait Resource: Serialize + DeserializeOwned + Send + Sync + Sized + 'static {
    /// Backing MongoDB collection.
    const COLLECTION: &'static str;

    /// Path segment of the fetch-one route (`GET /{SINGULAR}/{id}`).
    const SINGULAR: &'static str;

    /// Whether `GET /count` wraps the total in the
    /// `{"quantidade de entidades": n}` envelope or returns the bare
    /// integer. The split across resources is part of the observed wire
    /// contract and is kept as-is.
    const COUNT_ENVELOPE: bool;

    const MSG_CREATE_FAILED: &'static str;
    const MSG_NOT_FOUND: &'static str;
    const MSG_DELETED: &'static str;

    /// Serialize the payload into the document that gets stored.
    fn to_document(&self) -> mongodb::error::Result<Document> {
        Ok(mongodb::bson::to_document(self)?)
    }
}
