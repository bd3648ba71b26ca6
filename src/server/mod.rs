//! HTTP surface: application state and router assembly.
//!
//! Five resource routers are nested under their Portuguese path
//! prefixes, the reporting routes are merged unprefixed, and the root
//! route answers with a service banner. All handlers share one
//! [`AppState`] holding the process-wide database handle.

pub mod consultas;
pub mod resources;

use axum::routing::get;
use axum::{Json, Router};
use mongodb::bson::oid::ObjectId;
use mongodb::Database;
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;

use crate::core::ApiError;
use crate::entities::{Cliente, Fornecedor, ItemPedido, Pedido, Resource, Roupa};
use crate::storage::DataStore;

/// Shared state: the single database handle created at startup.
#[derive(Clone)]
pub struct AppState {
    db: Database,
}

impl AppState {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Build the store façade for one resource. Cheap, the handle is
    /// reference-counted.
    pub fn store<R: Resource>(&self) -> DataStore<R> {
        DataStore::new(&self.db)
    }
}

/// Validate a path identifier before it reaches the store.
pub(crate) fn parse_id(id: &str) -> Result<ObjectId, ApiError> {
    ObjectId::parse_str(id).map_err(|_| ApiError::InvalidId)
}

/// Assemble the full application router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .nest(
            "/fornecedores",
            resources::routes::<Fornecedor>()
                .route("/filter", get(resources::filtrar_fornecedores)),
        )
        .nest(
            "/clientes",
            resources::routes::<Cliente>().route("/filter", get(resources::filtrar_clientes)),
        )
        .nest("/roupas", resources::routes::<Roupa>())
        .nest("/pedidos", resources::routes::<Pedido>())
        .nest("/itensPedidos", resources::routes::<ItemPedido>())
        .merge(consultas::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn home() -> Json<Value> {
    Json(json!({ "message": "API de Gestão de loja de roupas" }))
}
