use std::sync::Arc;

use crate::core::AppConfig;
use crate::model::SlotScorer;

pub struct AppState {
    // Loaded once at startup and shared read-only across requests
    pub scorer: Arc<dyn SlotScorer>,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(scorer: Arc<dyn SlotScorer>, config: AppConfig) -> Self {
        Self { scorer, config }
    }
}
