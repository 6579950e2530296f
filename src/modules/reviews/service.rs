use anyhow::Context;
use tracing::{info, instrument};
use uuid::Uuid;

use travol_core::AppError;
use travol_db::{Collection, Document, DocumentStore, Filter, InsertOneResult};
use travol_models::{CreateReviewDto, IntoFields};

pub struct ReviewService;

impl ReviewService {
    #[instrument(skip(store))]
    pub async fn get_reviews(store: &dyn DocumentStore) -> Result<Vec<Document>, AppError> {
        store
            .find(Collection::Reviews, &Filter::all())
            .await
            .context("Failed to fetch reviews")
            .map_err(AppError::database)
    }

    #[instrument(skip(store))]
    pub async fn get_review(
        store: &dyn DocumentStore,
        id: Uuid,
    ) -> Result<Option<Document>, AppError> {
        store
            .find_one(Collection::Reviews, &Filter::by_id(id))
            .await
            .context("Failed to fetch review")
            .map_err(AppError::database)
    }

    #[instrument(skip(store, dto))]
    pub async fn create_review(
        store: &dyn DocumentStore,
        dto: CreateReviewDto,
    ) -> Result<InsertOneResult, AppError> {
        let result = store
            .insert_one(Collection::Reviews, dto.into_fields())
            .await
            .context("Failed to create review")
            .map_err(AppError::database)?;

        info!(id = %result.inserted_id, "Review created");
        Ok(result)
    }
}
