use std::env;

use crate::schedule::DEFAULT_MAX_SUGGESTIONS;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub model_path: String,
    pub max_suggestions: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        let model_path =
            env::var("SLOTCAST_MODEL_PATH").unwrap_or_else(|_| "./model.json".to_string());
        let max_suggestions = env::var("SLOTCAST_MAX_SUGGESTIONS")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(DEFAULT_MAX_SUGGESTIONS);

        Self {
            model_path,
            max_suggestions,
        }
    }
}
