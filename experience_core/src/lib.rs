//! Experience Core
//!
//! In-memory store of employment-history records:
//! - Taxonomy: the closed set of organizations a record may reference
//! - Store: create / get / list with unique identifier assignment
//! - Seed: the records a fresh store starts with

pub mod error;
pub mod seed;
pub mod store;
pub mod taxonomy;
pub mod types;

pub use error::*;
pub use seed::*;
pub use store::*;
pub use taxonomy::*;
pub use types::*;
