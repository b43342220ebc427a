//! Test utilities for integration tests
use std::env;
use std::fs;
use std::sync::{Arc, RwLock};
use std::time::SystemTime;

use axum::{Router, body::Body};

use slotcast::api::AppState;
use slotcast::api::app;
use slotcast::core::AppConfig;
use slotcast::model::LinearSlotModel;

/// Creates a test application router backed by a 96-slot model written
/// to a temporary file. The fixture model has zero feature weights and
/// bias = -index, so it always prefers the earliest slots of the day
/// and ranking is fully predictable.
pub fn test_app() -> Router {
    let temp_dir = env::temp_dir();
    let ts = SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .unwrap()
        .as_nanos()
        .to_string();
    let model_path = temp_dir.join(format!("slotcast-model-{}.json", ts));

    let weights = vec![[0.0_f32; 3]; 96];
    let bias: Vec<f32> = (0..96).map(|i| -(i as f32)).collect();
    fs::write(
        &model_path,
        serde_json::json!({ "weights": weights, "bias": bias }).to_string(),
    )
    .expect("Failed to write model fixture");

    let scorer =
        LinearSlotModel::from_file(&model_path).expect("Failed to load model fixture");

    let app_config = AppConfig {
        model_path: model_path.display().to_string(),
        max_suggestions: 4,
    };
    let app_state = AppState::new(Arc::new(scorer), app_config);
    app(Arc::new(RwLock::new(app_state)))
}

pub async fn body_to_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Failed to read response body");
    String::from_utf8(bytes.to_vec()).expect("Response body was not utf-8")
}
