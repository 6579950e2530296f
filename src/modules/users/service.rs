use anyhow::Context;
use tracing::{info, instrument};
use uuid::Uuid;

use travol_core::AppError;
use travol_db::{Collection, Document, DocumentStore, Filter, UpdateResult};
use travol_models::{CreateUserDto, CreateUserResponse, IntoFields, UserRole};

pub struct UserService;

impl UserService {
    #[instrument(skip(store))]
    pub async fn find_by_email(
        store: &dyn DocumentStore,
        email: &str,
    ) -> Result<Option<Document>, AppError> {
        store
            .find_one(Collection::Users, &Filter::eq("email", email))
            .await
            .context("Failed to fetch user")
            .map_err(AppError::database)
    }

    #[instrument(skip(store))]
    pub async fn get_users(store: &dyn DocumentStore) -> Result<Vec<Document>, AppError> {
        store
            .find(Collection::Users, &Filter::all())
            .await
            .context("Failed to fetch users")
            .map_err(AppError::database)
    }

    /// Registers a user unless one with the same email exists.
    ///
    /// An existing email is not an error; the response carries a message and
    /// no id instead.
    #[instrument(skip(store, dto), fields(email = %dto.email))]
    pub async fn create_user(
        store: &dyn DocumentStore,
        dto: CreateUserDto,
    ) -> Result<CreateUserResponse, AppError> {
        if Self::find_by_email(store, &dto.email).await?.is_some() {
            return Ok(CreateUserResponse::already_exists());
        }

        match store.insert_one(Collection::Users, dto.into_fields()).await {
            Ok(result) => {
                info!(id = %result.inserted_id, "User created");
                Ok(CreateUserResponse::created(result.inserted_id))
            }
            // Lost a race with a concurrent registration of the same email
            Err(e) if e.is_duplicate() => Ok(CreateUserResponse::already_exists()),
            Err(e) => Err(AppError::database(
                anyhow::Error::new(e).context("Failed to create user"),
            )),
        }
    }

    #[instrument(skip(store))]
    pub async fn has_role(
        store: &dyn DocumentStore,
        email: &str,
        role: UserRole,
    ) -> Result<bool, AppError> {
        let user = Self::find_by_email(store, email).await?;
        Ok(user.as_ref().and_then(UserRole::of) == Some(role))
    }

    /// Overwrites the role of the user with document id `id`.
    #[instrument(skip(store))]
    pub async fn set_role(
        store: &dyn DocumentStore,
        id: Uuid,
        role: UserRole,
    ) -> Result<UpdateResult, AppError> {
        let result = store
            .update_one(Collection::Users, &Filter::by_id(id), role.as_patch())
            .await
            .context("Failed to update user role")
            .map_err(AppError::database)?;

        if result.modified_count > 0 {
            info!(%id, %role, "User role updated");
        }

        Ok(result)
    }

    /// Sets the role of the user registered under `email`.
    #[instrument(skip(store))]
    pub async fn set_role_by_email(
        store: &dyn DocumentStore,
        email: &str,
        role: UserRole,
    ) -> Result<UpdateResult, AppError> {
        store
            .update_one(Collection::Users, &Filter::eq("email", email), role.as_patch())
            .await
            .context("Failed to update user role")
            .map_err(AppError::database)
    }
}
