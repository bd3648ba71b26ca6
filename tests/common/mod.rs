//! Shared end-to-end test harness.
//!
//! Starts a single MongoDB container for the whole test binary (via
//! `OnceLock`) and hands every test its own fresh database plus an
//! in-process `TestServer` running the real router.
//!
//! # Requirements
//!
//! Docker must be running — testcontainers launches the MongoDB
//! container on first use.

#![allow(dead_code)]

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;

use axum_test::TestServer;
use mongodb::{Client, Database};
use serde_json::{json, Value};
use testcontainers::runners::AsyncRunner;
use testcontainers_modules::mongo::Mongo;

use gestao_roupas::server::{build_router, AppState};

/// Holds the testcontainer handle (keeps it alive) and the connection URL.
struct MongoTestEnv {
    _container: testcontainers::ContainerAsync<Mongo>,
    connection_url: String,
}

static TEST_ENV: OnceLock<MongoTestEnv> = OnceLock::new();

/// Start the shared MongoDB container (if not already running).
async fn init_mongo_env() -> &'static MongoTestEnv {
    if let Some(env) = TEST_ENV.get() {
        return env;
    }

    let container = Mongo::default()
        .start()
        .await
        .expect("Failed to start MongoDB container — is Docker running?");

    let host = container.get_host().await.unwrap();
    let port = container.get_host_port_ipv4(27017).await.unwrap();
    let url = format!("mongodb://{}:{}", host, port);

    let env = MongoTestEnv {
        _container: container,
        connection_url: url,
    };

    let _ = TEST_ENV.set(env);
    TEST_ENV.get().unwrap()
}

/// Counter for unique database names, so tests never share state.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// A running application instance bound to its own database.
pub struct TestApp {
    pub server: TestServer,
    /// Direct handle to the same database, for seeding and independent
    /// verification.
    pub db: Database,
}

/// Boot the full router against a fresh database.
pub async fn spawn_app() -> TestApp {
    let env = init_mongo_env().await;

    let client = Client::with_uri_str(&env.connection_url)
        .await
        .expect("Failed to connect to MongoDB");
    let db_num = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
    let db = client.database(&format!("gestao_roupas_test_{}", db_num));

    let server = TestServer::try_new(build_router(AppState::new(db.clone())))
        .expect("Failed to start test server");

    TestApp { server, db }
}

// ---------------------------------------------------------------------------
// Payload builders
// ---------------------------------------------------------------------------

pub fn fornecedor_payload(nome: &str, cidade: &str) -> Value {
    json!({
        "nome": nome,
        "telefone": "51999990000",
        "email": "contato@exemplo.com",
        "cidade": cidade,
        "frete": 25.5
    })
}

pub fn cliente_payload(nome: &str, cpf: &str, cidade: &str) -> Value {
    json!({
        "nome": nome,
        "cpf": cpf,
        "telefone": "51988887777",
        "email": "cliente@exemplo.com",
        "endereco": {
            "rua": "Rua das Flores",
            "numero": 123,
            "cep": "90000-000",
            "cidade": cidade,
            "estado": "RS"
        }
    })
}

pub fn roupa_payload(nome: &str, preco: f64, fornecedor_id: &str) -> Value {
    json!({
        "nome": nome,
        "tamanho": "M",
        "cor": "preta",
        "preco": preco,
        "fornecedor_id": fornecedor_id
    })
}

pub fn pedido_payload(data: &str, status: &str, valor_total: f64, cliente_id: &str) -> Value {
    json!({
        "data": data,
        "status": status,
        "valor_total": valor_total,
        "cliente_id": cliente_id
    })
}

pub fn item_pedido_payload(pedido_id: &str, roupa_id: &str, quantidade: i32) -> Value {
    json!({
        "pedido_id": pedido_id,
        "roupa_id": roupa_id,
        "quantidade": quantidade,
        "preco_unitario": 49.9,
        "subtotal": 49.9 * quantidade as f64
    })
}

/// POST a payload and return the created document's id.
pub async fn create(app: &TestApp, prefix: &str, payload: &Value) -> String {
    let response = app.server.post(prefix).json(payload).await;
    assert_eq!(
        response.status_code(),
        200,
        "create at {prefix} failed: {}",
        response.text()
    );

    response.json::<Value>()["_id"]
        .as_str()
        .expect("created document must carry a string _id")
        .to_string()
}
