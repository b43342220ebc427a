use std::fs;

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use serde_json::json;

use crate::api::public::events::EventsRequest;
use crate::core::AppConfig;
use crate::model::LinearSlotModel;
use crate::schedule;

pub fn run(input: &str, model_path: Option<&str>) -> Result<()> {
    let config = AppConfig::default();
    let model_path = model_path.unwrap_or(&config.model_path);
    let scorer = LinearSlotModel::from_file(model_path)?;

    let body = fs::read_to_string(input)
        .with_context(|| format!("Failed to read request payload {}", input))?;
    let request: EventsRequest = serde_json::from_str(&body)
        .with_context(|| format!("Failed to parse request payload {}", input))?;

    let candidate = &request.event_data;
    let busy: Vec<(NaiveDateTime, NaiveDateTime)> = request
        .events
        .as_deref()
        .unwrap_or_default()
        .iter()
        .map(|event| (event.start_date_time, event.end_date_time))
        .collect();

    let suggestions = schedule::suggest_slots(
        &scorer,
        &candidate.features(),
        candidate.day(),
        &busy,
        candidate.duration,
        config.max_suggestions,
    )?;

    println!(
        "{}",
        json!({
            "day": candidate.day(),
            "suggestions": suggestions
                .iter()
                .map(|slot| json!({
                    "startDateTime": slot.start,
                    "endDateTime": slot.end,
                    "score": slot.score,
                }))
                .collect::<Vec<_>>(),
        })
    );
    Ok(())
}
