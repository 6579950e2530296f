//! In-process document store.
//!
//! Keeps every collection in insertion order behind a single lock. Used by
//! the integration tests and for running the API without PostgreSQL.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::document::{
    Collection, DeleteResult, Document, Fields, Filter, InsertOneResult, UpdateResult,
};
use crate::error::StoreError;
use crate::store::DocumentStore;

#[derive(Debug, Default)]
pub struct MemoryDocumentStore {
    collections: RwLock<HashMap<Collection, Vec<Document>>>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn violates_unique(collection: Collection, existing: &[Document], candidate: &Fields) -> bool {
    let Some(field) = collection.unique_field() else {
        return false;
    };
    match candidate.get(field) {
        Some(value) => existing.iter().any(|doc| doc.body.get(field) == Some(value)),
        None => false,
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn find_one(
        &self,
        collection: Collection,
        filter: &Filter,
    ) -> Result<Option<Document>, StoreError> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(&collection)
            .and_then(|docs| docs.iter().find(|doc| filter.matches(doc)))
            .cloned())
    }

    async fn find(
        &self,
        collection: Collection,
        filter: &Filter,
    ) -> Result<Vec<Document>, StoreError> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(&collection)
            .map(|docs| docs.iter().filter(|doc| filter.matches(doc)).cloned().collect())
            .unwrap_or_default())
    }

    async fn insert_one(
        &self,
        collection: Collection,
        mut body: Fields,
    ) -> Result<InsertOneResult, StoreError> {
        body.remove("_id");

        let mut collections = self.collections.write().await;
        let docs = collections.entry(collection).or_default();

        if violates_unique(collection, docs, &body) {
            return Err(StoreError::Duplicate {
                collection: collection.name(),
                field: collection.unique_field().unwrap_or("_id"),
            });
        }

        let id = Uuid::new_v4();
        docs.push(Document::new(id, body));
        Ok(InsertOneResult::new(id))
    }

    async fn update_one(
        &self,
        collection: Collection,
        filter: &Filter,
        mut set: Fields,
    ) -> Result<UpdateResult, StoreError> {
        set.remove("_id");

        let mut collections = self.collections.write().await;
        let Some(docs) = collections.get_mut(&collection) else {
            return Ok(UpdateResult::new(0, 0));
        };
        let Some(position) = docs.iter().position(|doc| filter.matches(doc)) else {
            return Ok(UpdateResult::new(0, 0));
        };

        let changed = set
            .iter()
            .any(|(field, value)| docs[position].body.get(field) != Some(value));
        if !changed {
            return Ok(UpdateResult::new(1, 0));
        }

        if let Some(field) = collection.unique_field() {
            if let Some(value) = set.get(field) {
                let taken = docs
                    .iter()
                    .enumerate()
                    .any(|(i, doc)| i != position && doc.body.get(field) == Some(value));
                if taken {
                    return Err(StoreError::Duplicate {
                        collection: collection.name(),
                        field,
                    });
                }
            }
        }

        docs[position].body.extend(set);
        Ok(UpdateResult::new(1, 1))
    }

    async fn delete_one(
        &self,
        collection: Collection,
        filter: &Filter,
    ) -> Result<DeleteResult, StoreError> {
        let mut collections = self.collections.write().await;
        let Some(docs) = collections.get_mut(&collection) else {
            return Ok(DeleteResult::new(0));
        };

        match docs.iter().position(|doc| filter.matches(doc)) {
            Some(position) => {
                docs.remove(position);
                Ok(DeleteResult::new(1))
            }
            None => Ok(DeleteResult::new(0)),
        }
    }

    async fn close(&self) {}
}
