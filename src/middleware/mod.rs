//! Middleware and extractors for authentication and authorization.
//!
//! - [`auth`]: Bearer token verification and the [`auth::AuthUser`] extractor
//! - [`role`]: Role guards backed by the user's stored role
//!
//! # Request Flow
//!
//! 1. Client sends `Authorization: Bearer <token>`
//! 2. [`auth::authenticate`] verifies the token and stores the
//!    [`travol_auth::RequestIdentity`] in the request extensions
//! 3. A role guard such as [`role::require_admin`] loads the caller's user
//!    document and compares its role
//! 4. The handler runs, reading the identity through [`auth::AuthUser`]
//!
//! # Example
//!
//! ```ignore
//! use axum::{Router, middleware, routing::get};
//! use crate::middleware::{auth::authenticate, role::require_admin};
//!
//! let admin_routes = Router::new()
//!     .route("/users", get(get_users))
//!     .route_layer(middleware::from_fn_with_state(state.clone(), require_admin))
//!     .route_layer(middleware::from_fn_with_state(state.clone(), authenticate));
//! ```
//!
//! Layers added last run first, so `authenticate` must be added after the
//! role guard.

pub mod auth;
pub mod role;
