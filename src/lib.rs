#![doc(test(attr(deny(warnings))))]

//! Compound is a personal finance tracker: it records transactions and savings
//! goals in a single JSON document and derives goal projections and
//! income/expense summaries from them.

pub mod tracker;
pub mod utils;

pub use compound_config::{Config, ConfigError, ConfigManager};
pub use compound_core::{
    sort_recent_first, CoreError, DocumentStorage, GoalService, SummaryService,
    TransactionFilter, TransactionService,
};
pub use compound_domain::{
    Document, Goal, GoalProjection, GoalWithProjection, NewGoal, NewTransaction, Summary,
    Transaction, TransactionCategory, UnknownCategory,
};
pub use compound_storage_json::JsonDocumentStorage;
pub use tracker::FinanceTracker;

use std::sync::Once;

use compound_config::model::DEFAULT_LOG_DIRECTIVE;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing with the default directive and emits a startup log.
pub fn init() {
    init_with_directive(DEFAULT_LOG_DIRECTIVE);
}

/// Initializes global tracing using the log filter from `config`.
pub fn init_with_config(config: &Config) {
    init_with_directive(config.log_directive());
}

fn init_with_directive(directive: &str) {
    INIT_TRACING.call_once(|| {
        utils::init_tracing(directive);
        tracing::info!("Compound tracing initialized.");
    });
}
