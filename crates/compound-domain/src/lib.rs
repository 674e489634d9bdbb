//! compound-domain
//!
//! Record shapes for the finance tracker (Transaction, Goal, Document) and the
//! derived summary/projection values.
//! No I/O, no storage, no validation beyond what the types themselves enforce.

pub mod category;
pub mod document;
pub mod goal;
pub mod summary;
pub mod transaction;

pub use category::*;
pub use document::*;
pub use goal::*;
pub use summary::*;
pub use transaction::*;
