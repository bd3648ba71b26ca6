//! Generic CRUD handlers, instantiated once per resource.
//!
//! Every resource gets the same route table:
//!
//! - `POST /` - create (insert, then read the stored document back)
//! - `GET /` - paginated listing with the `metadados` envelope
//! - `GET /{singular}/{id}` - fetch one
//! - `PUT /{id}` - full-document replace
//! - `DELETE /{id}` - delete with confirmation message
//! - `GET /count` - unfiltered total
//!
//! Suppliers and customers additionally expose `GET /filter`, a
//! case-insensitive substring search over a fixed set of fields.

use axum::extract::{Path, Query, State};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use mongodb::bson::{doc, Document};
use serde::Deserialize;
use serde_json::{json, Value};

use super::{parse_id, AppState};
use crate::core::{ApiError, DataResponse, Metadados, PagedResponse, Pagination, Payload};
use crate::entities::{Cliente, Fornecedor, Resource};
use crate::storage::document_to_json;

/// Route table shared by all five resources.
pub fn routes<R: Resource>() -> Router<AppState> {
    Router::new()
        .route("/", post(create::<R>).get(list::<R>))
        .route(&format!("/{}/{{id}}", R::SINGULAR), get(fetch::<R>))
        .route("/{id}", put(update::<R>).delete(remove::<R>))
        .route("/count", get(count::<R>))
}

async fn create<R: Resource>(
    State(state): State<AppState>,
    Payload(payload): Payload<R>,
) -> Result<Json<Value>, ApiError> {
    let created = state
        .store::<R>()
        .insert_then_fetch(&payload)
        .await?
        .ok_or(ApiError::CreationFailed(R::MSG_CREATE_FAILED))?;

    Ok(Json(document_to_json(created)))
}

async fn list<R: Resource>(
    State(state): State<AppState>,
    Query(pagination): Query<Pagination>,
) -> Result<Json<PagedResponse>, ApiError> {
    let store = state.store::<R>();

    let total = store.count().await?;
    let docs = store.find_page(doc! {}, &pagination).await?;

    Ok(Json(PagedResponse {
        data: docs.into_iter().map(document_to_json).collect(),
        metadados: Metadados::new(total, &pagination),
    }))
}

async fn fetch<R: Resource>(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let id = parse_id(&id)?;

    let doc = state
        .store::<R>()
        .find_by_id(id)
        .await?
        .ok_or(ApiError::NotFound(R::MSG_NOT_FOUND))?;

    Ok(Json(document_to_json(doc)))
}

async fn update<R: Resource>(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Payload(payload): Payload<R>,
) -> Result<Json<Value>, ApiError> {
    let id = parse_id(&id)?;
    let store = state.store::<R>();

    let matched = store.replace(id, &payload).await?;
    if matched == 0 {
        return Err(ApiError::NotFound(R::MSG_NOT_FOUND));
    }

    let updated = store
        .find_by_id(id)
        .await?
        .ok_or(ApiError::NotFound(R::MSG_NOT_FOUND))?;

    Ok(Json(document_to_json(updated)))
}

async fn remove<R: Resource>(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let id = parse_id(&id)?;

    let deleted = state.store::<R>().delete(id).await?;
    if deleted == 0 {
        return Err(ApiError::NotFound(R::MSG_NOT_FOUND));
    }

    Ok(Json(json!({ "message": R::MSG_DELETED })))
}

async fn count<R: Resource>(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let total = state.store::<R>().count().await?;

    let body = if R::COUNT_ENVELOPE {
        json!({ "quantidade de entidades": total })
    } else {
        json!(total)
    };
    Ok(Json(body))
}

// ---------------------------------------------------------------------------
// Filter endpoints (suppliers and customers only)
// ---------------------------------------------------------------------------

/// Combine the provided fields into an ANDed case-insensitive substring
/// filter. Absent or empty fields impose no constraint.
fn regex_filter(fields: &[(&str, Option<&str>)]) -> Document {
    let mut filter = Document::new();
    for (field, value) in fields {
        if let Some(value) = value {
            if !value.is_empty() {
                filter.insert(*field, doc! { "$regex": *value, "$options": "i" });
            }
        }
    }
    filter
}

#[derive(Debug, Default, Deserialize)]
pub struct FiltroFornecedor {
    nome: Option<String>,
    telefone: Option<String>,
    cidade: Option<String>,
}

pub async fn filtrar_fornecedores(
    State(state): State<AppState>,
    Query(filtro): Query<FiltroFornecedor>,
) -> Result<Json<DataResponse>, ApiError> {
    let filter = regex_filter(&[
        ("nome", filtro.nome.as_deref()),
        ("telefone", filtro.telefone.as_deref()),
        ("cidade", filtro.cidade.as_deref()),
    ]);

    let docs = state.store::<Fornecedor>().find_capped(filter, None).await?;
    Ok(Json(DataResponse {
        data: docs.into_iter().map(document_to_json).collect(),
    }))
}

#[derive(Debug, Default, Deserialize)]
pub struct FiltroCliente {
    nome: Option<String>,
    cpf: Option<String>,
    email: Option<String>,
    cidade: Option<String>,
}

pub async fn filtrar_clientes(
    State(state): State<AppState>,
    Query(filtro): Query<FiltroCliente>,
) -> Result<Json<DataResponse>, ApiError> {
    // The city lives inside the embedded address document.
    let filter = regex_filter(&[
        ("nome", filtro.nome.as_deref()),
        ("cpf", filtro.cpf.as_deref()),
        ("email", filtro.email.as_deref()),
        ("endereco.cidade", filtro.cidade.as_deref()),
    ]);

    let docs = state.store::<Cliente>().find_capped(filter, None).await?;
    Ok(Json(DataResponse {
        data: docs.into_iter().map(document_to_json).collect(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regex_filter_skips_absent_fields() {
        let filter = regex_filter(&[("nome", Some("ana")), ("cidade", None)]);

        assert_eq!(
            filter,
            doc! { "nome": { "$regex": "ana", "$options": "i" } }
        );
    }

    #[test]
    fn regex_filter_skips_empty_strings() {
        let filter = regex_filter(&[("nome", Some("")), ("cidade", Some("porto"))]);

        assert_eq!(
            filter,
            doc! { "cidade": { "$regex": "porto", "$options": "i" } }
        );
    }

    #[test]
    fn regex_filter_ands_provided_fields() {
        let filter = regex_filter(&[("nome", Some("ana")), ("cpf", Some("111"))]);

        assert_eq!(
            filter,
            doc! {
                "nome": { "$regex": "ana", "$options": "i" },
                "cpf": { "$regex": "111", "$options": "i" },
            }
        );
    }

    #[test]
    fn regex_filter_with_nothing_provided_matches_all() {
        assert_eq!(regex_filter(&[("nome", None)]), Document::new());
    }
}
