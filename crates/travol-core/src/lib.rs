//! # Travol Core
//!
//! Foundational types shared across the Travol API:
//!
//! - [`errors`]: Application error type with HTTP response conversion
//! - [`ids`]: Parsing of document identifiers from path segments
//!
//! # Example
//!
//! ```ignore
//! use travol_core::{AppError, parse_document_id};
//!
//! let id = parse_document_id("0f8b6a52-3d7e-4a38-9c51-7b2f0e1d9a44")?;
//! let error = AppError::bad_request(anyhow::anyhow!("price must be positive"));
//! ```

pub mod errors;
pub mod ids;

// Re-export commonly used types at crate root
pub use errors::{AppError, ErrorResponse};
pub use ids::parse_document_id;
