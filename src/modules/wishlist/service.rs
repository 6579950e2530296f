use anyhow::Context;
use tracing::{info, instrument};
use uuid::Uuid;

use travol_core::AppError;
use travol_db::{Collection, DeleteResult, Document, DocumentStore, Filter, InsertOneResult};
use travol_models::{CreateWishlistEntryDto, IntoFields};

pub struct WishlistService;

impl WishlistService {
    #[instrument(skip(store, dto), fields(email = %dto.email))]
    pub async fn add_entry(
        store: &dyn DocumentStore,
        dto: CreateWishlistEntryDto,
    ) -> Result<InsertOneResult, AppError> {
        let result = store
            .insert_one(Collection::Wishlist, dto.into_fields())
            .await
            .context("Failed to add wishlist entry")
            .map_err(AppError::database)?;

        info!(id = %result.inserted_id, "Wishlist entry added");
        Ok(result)
    }

    #[instrument(skip(store))]
    pub async fn get_entries(store: &dyn DocumentStore) -> Result<Vec<Document>, AppError> {
        store
            .find(Collection::Wishlist, &Filter::all())
            .await
            .context("Failed to fetch wishlist")
            .map_err(AppError::database)
    }

    #[instrument(skip(store))]
    pub async fn get_entries_for(
        store: &dyn DocumentStore,
        email: &str,
    ) -> Result<Vec<Document>, AppError> {
        store
            .find(Collection::Wishlist, &Filter::eq("email", email))
            .await
            .context("Failed to fetch wishlist")
            .map_err(AppError::database)
    }

    #[instrument(skip(store))]
    pub async fn get_entry(
        store: &dyn DocumentStore,
        id: Uuid,
    ) -> Result<Option<Document>, AppError> {
        store
            .find_one(Collection::Wishlist, &Filter::by_id(id))
            .await
            .context("Failed to fetch wishlist entry")
            .map_err(AppError::database)
    }

    #[instrument(skip(store))]
    pub async fn delete_entry(
        store: &dyn DocumentStore,
        id: Uuid,
    ) -> Result<DeleteResult, AppError> {
        store
            .delete_one(Collection::Wishlist, &Filter::by_id(id))
            .await
            .context("Failed to delete wishlist entry")
            .map_err(AppError::database)
    }
}
