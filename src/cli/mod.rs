//! Administrative commands run outside the HTTP server.

use anyhow::anyhow;
use serde_json::Value;
use uuid::Uuid;

use travol_db::{Collection, DocumentStore, Fields};
use travol_models::UserRole;

use crate::modules::users::service::UserService;

/// Role names accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum RoleArg {
    Admin,
    Guide,
}

impl From<RoleArg> for UserRole {
    fn from(role: RoleArg) -> Self {
        match role {
            RoleArg::Admin => UserRole::Admin,
            RoleArg::Guide => UserRole::TourGuide,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromoteOutcome {
    /// No user had the email; one was registered with the role.
    Created(Uuid),
    Updated,
    /// The user already held the role.
    Unchanged,
}

/// Grants `role` to the user registered under `email`, registering the user
/// first if needed.
///
/// Promotion routes require an existing admin, so the first admin is created
/// this way.
pub async fn promote_user(
    store: &dyn DocumentStore,
    email: &str,
    role: UserRole,
) -> anyhow::Result<PromoteOutcome> {
    let result = UserService::set_role_by_email(store, email, role)
        .await
        .map_err(|e| e.error)?;

    if result.matched_count > 0 {
        return Ok(if result.modified_count > 0 {
            PromoteOutcome::Updated
        } else {
            PromoteOutcome::Unchanged
        });
    }

    let mut user = Fields::new();
    user.insert("email".to_string(), Value::from(email));
    user.extend(role.as_patch());

    let inserted = store
        .insert_one(Collection::Users, user)
        .await
        .map_err(|e| anyhow!(e).context("Failed to create user"))?;

    Ok(PromoteOutcome::Created(inserted.inserted_id))
}
