use anyhow::Context;
use tracing::{info, instrument};
use uuid::Uuid;

use travol_core::AppError;
use travol_db::{Collection, Document, DocumentStore, Filter, InsertOneResult};
use travol_models::{CreateTourGuideDto, IntoFields};

pub struct TourGuideService;

impl TourGuideService {
    #[instrument(skip(store))]
    pub async fn get_tour_guides(store: &dyn DocumentStore) -> Result<Vec<Document>, AppError> {
        store
            .find(Collection::TourGuides, &Filter::all())
            .await
            .context("Failed to fetch tour guides")
            .map_err(AppError::database)
    }

    #[instrument(skip(store))]
    pub async fn get_tour_guide(
        store: &dyn DocumentStore,
        id: Uuid,
    ) -> Result<Option<Document>, AppError> {
        store
            .find_one(Collection::TourGuides, &Filter::by_id(id))
            .await
            .context("Failed to fetch tour guide")
            .map_err(AppError::database)
    }

    /// First profile whose `name` matches exactly.
    #[instrument(skip(store))]
    pub async fn find_by_name(
        store: &dyn DocumentStore,
        name: &str,
    ) -> Result<Option<Document>, AppError> {
        store
            .find_one(Collection::TourGuides, &Filter::eq("name", name))
            .await
            .context("Failed to fetch tour guide")
            .map_err(AppError::database)
    }

    #[instrument(skip(store, dto), fields(name = %dto.name))]
    pub async fn create_tour_guide(
        store: &dyn DocumentStore,
        dto: CreateTourGuideDto,
    ) -> Result<InsertOneResult, AppError> {
        let result = store
            .insert_one(Collection::TourGuides, dto.into_fields())
            .await
            .context("Failed to create tour guide")
            .map_err(AppError::database)?;

        info!(id = %result.inserted_id, "Tour guide profile created");
        Ok(result)
    }
}
