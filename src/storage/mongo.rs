//! Per-collection data store and BSON→JSON response shaping.
//!
//! # Storage model
//!
//! One collection per resource, named by
//! [`Resource::COLLECTION`](crate::entities::Resource::COLLECTION).
//! Documents are handled raw (`bson::Document`): payload structs are
//! serialized on the way in, and read results are converted to JSON on
//! the way out without an intermediate typed round-trip.
//!
//! # Identifier convention
//!
//! MongoDB assigns the `_id` ObjectId on insert. Responses keep the
//! `_id` key but carry the 24-char hex string instead of the native
//! ObjectId; the conversion is recursive, so identifiers nested by
//! `$lookup` stages come out stringified too.

use chrono::SecondsFormat;
use futures::TryStreamExt;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{doc, Bson, Document};
use mongodb::{Collection, Cursor, Database};
use serde_json::Value;
use std::marker::PhantomData;

use crate::core::pagination::{Pagination, MAX_RESULTS};
use crate::entities::Resource;

type StoreResult<T> = mongodb::error::Result<T>;

// ---------------------------------------------------------------------------
// Conversion helpers
// ---------------------------------------------------------------------------

/// Convert a single BSON value into response JSON.
///
/// ObjectIds become hex strings and datetimes become RFC 3339 strings;
/// everything else follows the relaxed Extended JSON mapping (plain
/// numbers, strings, booleans).
fn bson_to_json(value: Bson) -> Value {
    match value {
        Bson::ObjectId(oid) => Value::String(oid.to_hex()),
        Bson::DateTime(dt) => Value::String(
            dt.to_chrono()
                .to_rfc3339_opts(SecondsFormat::Millis, true),
        ),
        Bson::Document(doc) => Value::Object(
            doc.into_iter()
                .map(|(key, value)| (key, bson_to_json(value)))
                .collect(),
        ),
        Bson::Array(items) => Value::Array(items.into_iter().map(bson_to_json).collect()),
        other => other.into_relaxed_extjson(),
    }
}

/// Convert a stored document into the JSON shape responses use.
pub fn document_to_json(doc: Document) -> Value {
    bson_to_json(Bson::Document(doc))
}

/// Drain a cursor into a vector, stopping at `cap` documents.
async fn collect_capped(mut cursor: Cursor<Document>, cap: usize) -> StoreResult<Vec<Document>> {
    let mut docs = Vec::new();
    while docs.len() < cap {
        match cursor.try_next().await? {
            Some(doc) => docs.push(doc),
            None => break,
        }
    }
    Ok(docs)
}

// ---------------------------------------------------------------------------
// DataStore<R>
// ---------------------------------------------------------------------------

/// Typed façade over one resource's collection.
///
/// Construction is cheap (the database handle is reference-counted), so
/// handlers build one per request via
/// [`AppState::store`](crate::server::AppState::store).
#[derive(Clone, Debug)]
pub struct DataStore<R> {
    collection: Collection<Document>,
    _marker: PhantomData<R>,
}

impl<R: Resource> DataStore<R> {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection(R::COLLECTION),
            _marker: PhantomData,
        }
    }

    /// Insert a payload and read the stored document back by the
    /// assigned id.
    ///
    /// The two calls are independent; a concurrent delete between them
    /// makes the read-back return `None`, which the router reports as a
    /// creation failure.
    pub async fn insert_then_fetch(&self, payload: &R) -> StoreResult<Option<Document>> {
        let doc = payload.to_document()?;
        let inserted = self.collection.insert_one(doc).await?;

        self.collection
            .find_one(doc! { "_id": inserted.inserted_id })
            .await
    }

    pub async fn find_by_id(&self, id: ObjectId) -> StoreResult<Option<Document>> {
        self.collection.find_one(doc! { "_id": id }).await
    }

    /// A page of documents in store order. `limit` 0 means "no limit",
    /// leaving only the [`MAX_RESULTS`] ceiling in effect.
    pub async fn find_page(
        &self,
        filter: Document,
        pagination: &Pagination,
    ) -> StoreResult<Vec<Document>> {
        let cursor = self
            .collection
            .find(filter)
            .skip(pagination.skip)
            .limit(pagination.limit)
            .await?;

        collect_capped(cursor, MAX_RESULTS).await
    }

    /// All documents matching `filter`, optionally sorted, up to the
    /// [`MAX_RESULTS`] ceiling. Used by the filter and reporting
    /// endpoints, which have no pagination envelope.
    pub async fn find_capped(
        &self,
        filter: Document,
        sort: Option<Document>,
    ) -> StoreResult<Vec<Document>> {
        let mut find = self.collection.find(filter);
        if let Some(sort) = sort {
            find = find.sort(sort);
        }

        collect_capped(find.await?, MAX_RESULTS).await
    }

    /// Full-document replace. Returns how many documents matched (0 or
    /// 1); fields absent from `payload` are gone after the replace.
    pub async fn replace(&self, id: ObjectId, payload: &R) -> StoreResult<u64> {
        let doc = payload.to_document()?;
        let result = self.collection.replace_one(doc! { "_id": id }, doc).await?;
        Ok(result.matched_count)
    }

    /// Delete by id. Returns how many documents were deleted (0 or 1).
    pub async fn delete(&self, id: ObjectId) -> StoreResult<u64> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;
        Ok(result.deleted_count)
    }

    /// Unfiltered collection count.
    pub async fn count(&self) -> StoreResult<u64> {
        self.collection.count_documents(doc! {}).await
    }

    /// Run a fixed aggregation pipeline, capped at [`MAX_RESULTS`] rows.
    pub async fn aggregate(&self, pipeline: Vec<Document>) -> StoreResult<Vec<Document>> {
        collect_capped(self.collection.aggregate(pipeline).await?, MAX_RESULTS).await
    }
}
