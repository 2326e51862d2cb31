//! Experience Service Backend
//!
//! Serves the in-memory experience store over HTTP:
//! - Schema adapter: explicit wire mappings and declared schema
//! - Query/mutation dispatch over `experience`, `experiences`, `createExperience`
//! - Environment-driven configuration and build info

pub mod api;
pub mod config;
pub mod error;
pub mod schema;
pub mod version;

pub use api::*;
pub use config::*;
pub use error::*;
