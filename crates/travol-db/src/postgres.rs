//! PostgreSQL-backed document store.
//!
//! All collections share the `documents` table; each row holds one document
//! body as JSONB. Field filters use JSONB containment (`@>`), which for the
//! top-level scalar values the API filters on is exact equality.
//! `update_one` locks its target row (`FOR UPDATE`), so a filter on the
//! current value of a field is re-checked against concurrent writers.

use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use sqlx::types::Json;
use tracing::instrument;
use uuid::Uuid;

use travol_config::DatabaseConfig;

use crate::document::{
    Collection, DeleteResult, Document, Fields, Filter, InsertOneResult, UpdateResult,
};
use crate::error::StoreError;
use crate::store::DocumentStore;

/// Opens a connection pool using the configured URL and pool size.
pub async fn init_db_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.url)
        .await
}

#[derive(Debug, Clone)]
pub struct PgDocumentStore {
    pool: PgPool,
}

impl PgDocumentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

fn map_write_error(err: sqlx::Error, collection: Collection) -> StoreError {
    let unique_violation = err
        .as_database_error()
        .is_some_and(|db_err| db_err.is_unique_violation());

    if unique_violation {
        StoreError::Duplicate {
            collection: collection.name(),
            field: collection.unique_field().unwrap_or("_id"),
        }
    } else {
        StoreError::Database(err)
    }
}

fn into_document((id, Json(body)): (Uuid, Json<Fields>)) -> Document {
    Document::new(id, body)
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    #[instrument(skip(self))]
    async fn find_one(
        &self,
        collection: Collection,
        filter: &Filter,
    ) -> Result<Option<Document>, StoreError> {
        let row: Option<(Uuid, Json<Fields>)> = sqlx::query_as(
            r#"
            SELECT id, body
            FROM documents
            WHERE collection = $1
              AND ($2::uuid IS NULL OR id = $2)
              AND body @> $3
              AND NOT EXISTS (
                SELECT 1 FROM unnest($4::text[]) AS m(field)
                WHERE COALESCE(jsonb_typeof(body -> m.field), 'null') <> 'null'
              )
            ORDER BY created_at, id
            LIMIT 1
            "#,
        )
        .bind(collection.name())
        .bind(filter.id())
        .bind(Json(filter.fields()))
        .bind(filter.missing())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(into_document))
    }

    #[instrument(skip(self))]
    async fn find(
        &self,
        collection: Collection,
        filter: &Filter,
    ) -> Result<Vec<Document>, StoreError> {
        let rows: Vec<(Uuid, Json<Fields>)> = sqlx::query_as(
            r#"
            SELECT id, body
            FROM documents
            WHERE collection = $1
              AND ($2::uuid IS NULL OR id = $2)
              AND body @> $3
              AND NOT EXISTS (
                SELECT 1 FROM unnest($4::text[]) AS m(field)
                WHERE COALESCE(jsonb_typeof(body -> m.field), 'null') <> 'null'
              )
            ORDER BY created_at, id
            "#,
        )
        .bind(collection.name())
        .bind(filter.id())
        .bind(Json(filter.fields()))
        .bind(filter.missing())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(into_document).collect())
    }

    #[instrument(skip(self, body))]
    async fn insert_one(
        &self,
        collection: Collection,
        mut body: Fields,
    ) -> Result<InsertOneResult, StoreError> {
        body.remove("_id");
        let id = Uuid::new_v4();

        sqlx::query(
            r#"
            INSERT INTO documents (collection, id, body)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(collection.name())
        .bind(id)
        .bind(Json(&body))
        .execute(&self.pool)
        .await
        .map_err(|err| map_write_error(err, collection))?;

        Ok(InsertOneResult::new(id))
    }

    #[instrument(skip(self, set))]
    async fn update_one(
        &self,
        collection: Collection,
        filter: &Filter,
        mut set: Fields,
    ) -> Result<UpdateResult, StoreError> {
        set.remove("_id");

        let (matched, modified): (i64, i64) = sqlx::query_as(
            r#"
            WITH target AS (
                SELECT id, body
                FROM documents
                WHERE collection = $1
                  AND ($2::uuid IS NULL OR id = $2)
                  AND body @> $3
                  AND NOT EXISTS (
                    SELECT 1 FROM unnest($5::text[]) AS m(field)
                    WHERE COALESCE(jsonb_typeof(body -> m.field), 'null') <> 'null'
                  )
                ORDER BY created_at, id
                LIMIT 1
                FOR UPDATE
            ),
            updated AS (
                UPDATE documents d
                SET body = d.body || $4, updated_at = NOW()
                FROM target t
                WHERE d.collection = $1
                  AND d.id = t.id
                  AND NOT (t.body @> $4)
                RETURNING d.id
            )
            SELECT
                (SELECT COUNT(*) FROM target) AS matched,
                (SELECT COUNT(*) FROM updated) AS modified
            "#,
        )
        .bind(collection.name())
        .bind(filter.id())
        .bind(Json(filter.fields()))
        .bind(Json(&set))
        .bind(filter.missing())
        .fetch_one(&self.pool)
        .await
        .map_err(|err| map_write_error(err, collection))?;

        Ok(UpdateResult::new(matched as u64, modified as u64))
    }

    #[instrument(skip(self))]
    async fn delete_one(
        &self,
        collection: Collection,
        filter: &Filter,
    ) -> Result<DeleteResult, StoreError> {
        let result = sqlx::query(
            r#"
            DELETE FROM documents
            WHERE collection = $1
              AND id IN (
                SELECT id
                FROM documents
                WHERE collection = $1
                  AND ($2::uuid IS NULL OR id = $2)
                  AND body @> $3
                  AND NOT EXISTS (
                    SELECT 1 FROM unnest($4::text[]) AS m(field)
                    WHERE COALESCE(jsonb_typeof(body -> m.field), 'null') <> 'null'
                  )
                ORDER BY created_at, id
                LIMIT 1
              )
            "#,
        )
        .bind(collection.name())
        .bind(filter.id())
        .bind(Json(filter.fields()))
        .bind(filter.missing())
        .execute(&self.pool)
        .await?;

        Ok(DeleteResult::new(result.rows_affected()))
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}
