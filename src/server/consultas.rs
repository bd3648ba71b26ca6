//! Reporting endpoints: fixed, parameterized queries and aggregation
//! pipelines across the five collections.
//!
//! All endpoints are read-only `GET`s returning `{data: [...]}` with at
//! most 100 rows. Stored foreign keys are hex strings while `_id` is a
//! native ObjectId, so the `$lookup` stages convert the owning side with
//! `$toString` before comparing.

use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use chrono::{TimeZone, Utc};
use mongodb::bson::{doc, DateTime, Document};
use serde::Deserialize;

use super::{parse_id, AppState};
use crate::core::pagination::default_limit;
use crate::core::{ApiError, DataResponse, Pagination};
use crate::entities::{ItemPedido, Pedido, Roupa};
use crate::storage::document_to_json;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/itensPedidoPorPedido/{pedido_id}", get(itens_por_pedido))
        .route("/search/roupas", get(buscar_roupas_por_nome))
        .route("/pedidosPorAno", get(pedidos_por_ano))
        .route("/contagemPedidosPorStatus", get(contagem_pedidos_por_status))
        .route("/contarPedidosPorCliente", get(contar_pedidos_por_cliente))
        .route("/totalPedidosPorCliente", get(total_pedidos_por_cliente))
        .route("/roupasOrdenadasPorPreco", get(roupas_ordenadas_por_preco))
        .route("/pedidosComItens", get(pedidos_com_itens))
        .route(
            "/listarRoupasPorFornecedor/{fornecedor_id}",
            get(roupas_por_fornecedor),
        )
        .route("/itens_vendidos_por_roupa", get(itens_vendidos_por_roupa))
}

fn data_response(docs: Vec<Document>) -> Json<DataResponse> {
    Json(DataResponse {
        data: docs.into_iter().map(document_to_json).collect(),
    })
}

/// `$lookup` stage joining a collection's string foreign key against
/// this collection's `_id`.
fn lookup_by_string_id(from: &str, foreign_field: &str, output: &str) -> Document {
    doc! {
        "$lookup": {
            "from": from,
            "let": { "id": { "$toString": "$_id" } },
            "pipeline": [
                { "$match": { "$expr": { "$eq": [format!("${foreign_field}"), "$$id"] } } }
            ],
            "as": output,
        }
    }
}

/// Calendar-year window over `data`: `[ano-01-01, (ano+1)-01-01)`, upper
/// bound exclusive. `None` when the year is out of range.
fn year_window(ano: i32) -> Option<(DateTime, DateTime)> {
    let start = Utc.with_ymd_and_hms(ano, 1, 1, 0, 0, 0).single()?;
    let end = Utc
        .with_ymd_and_hms(ano.checked_add(1)?, 1, 1, 0, 0, 0)
        .single()?;
    Some((DateTime::from_chrono(start), DateTime::from_chrono(end)))
}

// ---------------------------------------------------------------------------
// Filtered listings
// ---------------------------------------------------------------------------

async fn itens_por_pedido(
    State(state): State<AppState>,
    Path(pedido_id): Path<String>,
    Query(pagination): Query<Pagination>,
) -> Result<Json<DataResponse>, ApiError> {
    // Only the identifier's form is checked; the filter matches the raw
    // string the items were stored with.
    parse_id(&pedido_id)?;

    let docs = state
        .store::<ItemPedido>()
        .find_page(doc! { "pedido_id": pedido_id }, &pagination)
        .await?;

    Ok(data_response(docs))
}

#[derive(Debug, Deserialize)]
struct BuscaRoupas {
    nome: String,
    #[serde(default)]
    skip: u64,
    #[serde(default = "default_limit")]
    limit: i64,
}

async fn buscar_roupas_por_nome(
    State(state): State<AppState>,
    Query(busca): Query<BuscaRoupas>,
) -> Result<Json<DataResponse>, ApiError> {
    let filter = doc! { "nome": { "$regex": busca.nome, "$options": "i" } };

    let docs = state
        .store::<Roupa>()
        .find_page(filter, &Pagination::new(busca.skip, busca.limit))
        .await?;

    Ok(data_response(docs))
}

#[derive(Debug, Deserialize)]
struct PedidosDoAno {
    ano: i32,
    #[serde(default)]
    skip: u64,
    #[serde(default = "default_limit")]
    limit: i64,
}

async fn pedidos_por_ano(
    State(state): State<AppState>,
    Query(consulta): Query<PedidosDoAno>,
) -> Result<Json<DataResponse>, ApiError> {
    let (inicio, fim) = year_window(consulta.ano)
        .ok_or_else(|| ApiError::Validation("ano inválido".to_string()))?;

    let docs = state
        .store::<Pedido>()
        .find_page(
            doc! { "data": { "$gte": inicio, "$lt": fim } },
            &Pagination::new(consulta.skip, consulta.limit),
        )
        .await?;

    Ok(data_response(docs))
}

async fn roupas_por_fornecedor(
    State(state): State<AppState>,
    Path(fornecedor_id): Path<String>,
    Query(pagination): Query<Pagination>,
) -> Result<Json<DataResponse>, ApiError> {
    let docs = state
        .store::<Roupa>()
        .find_page(doc! { "fornecedor_id": fornecedor_id }, &pagination)
        .await?;

    Ok(data_response(docs))
}

#[derive(Debug, Deserialize)]
struct Ordenacao {
    #[serde(default = "ordem_padrao")]
    ordem: String,
}

fn ordem_padrao() -> String {
    "asc".to_string()
}

async fn roupas_ordenadas_por_preco(
    State(state): State<AppState>,
    Query(ordenacao): Query<Ordenacao>,
) -> Result<Json<DataResponse>, ApiError> {
    // Anything other than the literal "asc" sorts descending.
    let direction = if ordenacao.ordem == "asc" { 1 } else { -1 };

    let docs = state
        .store::<Roupa>()
        .find_capped(doc! {}, Some(doc! { "preco": direction }))
        .await?;

    Ok(data_response(docs))
}

// ---------------------------------------------------------------------------
// Aggregations
// ---------------------------------------------------------------------------

async fn contagem_pedidos_por_status(
    State(state): State<AppState>,
) -> Result<Json<DataResponse>, ApiError> {
    let pipeline = vec![doc! {
        "$group": { "_id": "$status", "total": { "$sum": 1 } }
    }];

    let rows = state.store::<Pedido>().aggregate(pipeline).await?;
    Ok(data_response(rows))
}

async fn contar_pedidos_por_cliente(
    State(state): State<AppState>,
) -> Result<Json<DataResponse>, ApiError> {
    let pipeline = vec![doc! {
        "$group": { "_id": "$cliente_id", "quantidade_pedidos": { "$sum": 1 } }
    }];

    let rows = state.store::<Pedido>().aggregate(pipeline).await?;
    Ok(data_response(rows))
}

async fn total_pedidos_por_cliente(
    State(state): State<AppState>,
) -> Result<Json<DataResponse>, ApiError> {
    let pipeline = vec![doc! {
        "$group": { "_id": "$cliente_id", "valor_total": { "$sum": "$valor_total" } }
    }];

    let rows = state.store::<Pedido>().aggregate(pipeline).await?;
    Ok(data_response(rows))
}

/// Each order with its line-items nested under `itens`. Orders without
/// items keep an empty array.
async fn pedidos_com_itens(State(state): State<AppState>) -> Result<Json<DataResponse>, ApiError> {
    let pipeline = vec![lookup_by_string_id("itens_pedidos", "pedido_id", "itens")];

    let rows = state.store::<Pedido>().aggregate(pipeline).await?;
    Ok(data_response(rows))
}

/// Quantity sold per garment: fan orders out to their line-items, group
/// by garment summing quantities, then attach the garment document.
/// Inner-join semantics: orders without items and garments never sold
/// contribute nothing.
async fn itens_vendidos_por_roupa(
    State(state): State<AppState>,
) -> Result<Json<DataResponse>, ApiError> {
    let pipeline = vec![
        lookup_by_string_id("itens_pedidos", "pedido_id", "itens_pedido"),
        doc! { "$unwind": "$itens_pedido" },
        doc! {
            "$group": {
                "_id": "$itens_pedido.roupa_id",
                "quantidade_vendida": { "$sum": "$itens_pedido.quantidade" },
            }
        },
        doc! {
            "$lookup": {
                "from": "roupas",
                "let": { "roupa_id": "$_id" },
                "pipeline": [
                    { "$match": { "$expr": { "$eq": [{ "$toString": "$_id" }, "$$roupa_id"] } } }
                ],
                "as": "roupa",
            }
        },
        doc! { "$unwind": "$roupa" },
    ];

    let rows = state.store::<Pedido>().aggregate(pipeline).await?;
    Ok(data_response(rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_window_is_upper_exclusive() {
        let (inicio, fim) = year_window(2024).unwrap();

        assert_eq!(inicio.to_chrono().to_rfc3339(), "2024-01-01T00:00:00+00:00");
        assert_eq!(fim.to_chrono().to_rfc3339(), "2025-01-01T00:00:00+00:00");
    }

    #[test]
    fn year_window_rejects_out_of_range_years() {
        assert!(year_window(i32::MAX).is_none());
    }

    #[test]
    fn lookup_stage_compares_string_ids() {
        let stage = lookup_by_string_id("itens_pedidos", "pedido_id", "itens");

        assert_eq!(
            stage,
            doc! {
                "$lookup": {
                    "from": "itens_pedidos",
                    "let": { "id": { "$toString": "$_id" } },
                    "pipeline": [
                        { "$match": { "$expr": { "$eq": ["$pedido_id", "$$id"] } } }
                    ],
                    "as": "itens",
                }
            }
        );
    }
}
