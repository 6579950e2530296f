use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use crate::document::{
    Collection, DeleteResult, Document, Fields, Filter, InsertOneResult, UpdateResult,
};
use crate::error::StoreError;

/// Collection-scoped CRUD over schemaless documents.
///
/// Implementations assign document ids on insert, ignore any `_id` field in
/// written bodies, and apply `update_one` as a top-level field merge. A
/// filter that matches nothing is not an error: lookups return `None` or an
/// empty list and writes report zero counts.
#[async_trait]
pub trait DocumentStore: fmt::Debug + Send + Sync {
    /// First matching document in insertion order.
    async fn find_one(
        &self,
        collection: Collection,
        filter: &Filter,
    ) -> Result<Option<Document>, StoreError>;

    /// All matching documents in insertion order.
    async fn find(&self, collection: Collection, filter: &Filter)
    -> Result<Vec<Document>, StoreError>;

    async fn insert_one(
        &self,
        collection: Collection,
        body: Fields,
    ) -> Result<InsertOneResult, StoreError>;

    /// Merges `set` into the first matching document.
    ///
    /// `modified_count` is 0 when every field in `set` already holds the
    /// given value.
    async fn update_one(
        &self,
        collection: Collection,
        filter: &Filter,
        set: Fields,
    ) -> Result<UpdateResult, StoreError>;

    async fn delete_one(
        &self,
        collection: Collection,
        filter: &Filter,
    ) -> Result<DeleteResult, StoreError>;

    /// Releases connections. Called once at shutdown.
    async fn close(&self);
}

pub type SharedStore = Arc<dyn DocumentStore>;
