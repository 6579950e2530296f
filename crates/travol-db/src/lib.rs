//! # Travol DB
//!
//! The document store client used by every route handler.
//!
//! - [`document`]: Documents, collections, filters, write acknowledgements
//! - [`store`]: The [`DocumentStore`] trait and the shared handle type
//! - [`postgres`]: PostgreSQL/JSONB implementation
//! - [`memory`]: In-process implementation
//!
//! The store is constructed once at startup, shared through application
//! state as a [`SharedStore`], and closed on shutdown.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use travol_db::{Collection, Filter, PgDocumentStore, SharedStore, init_db_pool};
//!
//! let pool = init_db_pool(&database_config).await?;
//! let store: SharedStore = Arc::new(PgDocumentStore::new(pool));
//!
//! let bookings = store
//!     .find(Collection::Bookings, &Filter::eq("touristEmail", "t@example.com"))
//!     .await?;
//! ```

pub mod document;
pub mod error;
pub mod memory;
pub mod postgres;
pub mod store;

// Re-export commonly used types at crate root
pub use document::{
    Collection, DeleteResult, Document, Fields, Filter, InsertOneResult, UpdateResult,
};
pub use error::StoreError;
pub use memory::MemoryDocumentStore;
pub use postgres::{PgDocumentStore, init_db_pool};
pub use sqlx::PgPool;
pub use store::{DocumentStore, SharedStore};
