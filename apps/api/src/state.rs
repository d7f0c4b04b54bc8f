use std::sync::Arc;

use crate::config::Config;
use crate::search::pacing::{pacer_for_delay, RowPacer};
use crate::search::searcher::PersonSearcher;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub searcher: Arc<PersonSearcher>,
    /// Pluggable inter-row pacing for CSV batches. Default: FixedDelay from config.
    pub pacer: Arc<dyn RowPacer>,
}

impl AppState {
    pub fn from_config(config: Config) -> Self {
        let searcher = Arc::new(PersonSearcher::new(config.social_lookup_base_url.clone()));
        let pacer = pacer_for_delay(config.batch_row_delay_ms);
        AppState {
            config,
            searcher,
            pacer,
        }
    }
}
