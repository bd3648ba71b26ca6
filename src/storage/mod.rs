//! MongoDB persistence layer.
//!
//! One [`mongodb::Client`] is created at startup and shared for the
//! process lifetime; the driver handles pooling internally. Everything
//! above this module talks to [`DataStore`], a thin per-collection façade
//! with no retries and no transactions.

mod mongo;

pub use mongo::{document_to_json, DataStore};

use mongodb::{Client, Database};

use crate::config::AppConfig;

/// Connect to MongoDB and select the configured database.
///
/// Called once from the entrypoint; the returned handle is cloned into
/// every router (clones share the same underlying client).
pub async fn connect(config: &AppConfig) -> mongodb::error::Result<Database> {
    let client = Client::with_uri_str(&config.mongo_uri).await?;
    Ok(client.database(&config.database))
}
