//! compound-core
//!
//! Business logic for the finance tracker: validation of new records,
//! transaction filtering, summary aggregation, and goal projection.
//! Depends on compound-domain. Persistence is reached only through the
//! [`storage::DocumentStorage`] trait.

pub mod error;
pub mod filter;
pub mod goal_service;
pub mod storage;
pub mod summary_service;
pub mod transaction_service;

pub use error::CoreError;
pub use filter::*;
pub use goal_service::*;
pub use storage::DocumentStorage;
pub use summary_service::*;
pub use transaction_service::*;
