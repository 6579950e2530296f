use anyhow::Context;
use tracing::{info, instrument};
use uuid::Uuid;

use travol_core::AppError;
use travol_db::{Collection, Document, DocumentStore, Filter, InsertOneResult};
use travol_models::{CreatePackageDto, IntoFields};

pub struct PackageService;

impl PackageService {
    #[instrument(skip(store))]
    pub async fn get_packages(store: &dyn DocumentStore) -> Result<Vec<Document>, AppError> {
        store
            .find(Collection::Packages, &Filter::all())
            .await
            .context("Failed to fetch packages")
            .map_err(AppError::database)
    }

    #[instrument(skip(store))]
    pub async fn get_package(
        store: &dyn DocumentStore,
        id: Uuid,
    ) -> Result<Option<Document>, AppError> {
        store
            .find_one(Collection::Packages, &Filter::by_id(id))
            .await
            .context("Failed to fetch package")
            .map_err(AppError::database)
    }

    #[instrument(skip(store, dto), fields(trip_title = %dto.trip_title))]
    pub async fn create_package(
        store: &dyn DocumentStore,
        dto: CreatePackageDto,
    ) -> Result<InsertOneResult, AppError> {
        let result = store
            .insert_one(Collection::Packages, dto.into_fields())
            .await
            .context("Failed to create package")
            .map_err(AppError::database)?;

        info!(id = %result.inserted_id, "Package created");
        Ok(result)
    }
}
