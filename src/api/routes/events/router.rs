//! Router for the events API

use std::sync::{Arc, RwLock};

use axum::{Json, Router, extract::State};
use chrono::NaiveDateTime;

use super::public;
use crate::api::public::ApiError;
use crate::api::state::AppState;
use crate::schedule;

type SharedState = Arc<RwLock<AppState>>;

/// Accept a candidate event plus the day's existing events and respond
/// with ranked free-slot suggestions. When no event list is given, fall
/// back to synthetic predictions over a fully free day.
async fn receive_events(
    State(state): State<SharedState>,
    Json(payload): Json<public::EventsRequest>,
) -> Result<Json<public::EventsResponse>, ApiError> {
    let (scorer, max_suggestions) = {
        let shared = state.read().unwrap();
        (Arc::clone(&shared.scorer), shared.config.max_suggestions)
    };

    let candidate = &payload.event_data;
    if !candidate.duration.is_finite() || candidate.duration < 0.0 {
        return Err(ApiError::BadRequest(format!(
            "duration must be a non-negative number of minutes, got {}",
            candidate.duration
        )));
    }

    let response = match &payload.events {
        Some(events) => {
            let busy: Vec<(NaiveDateTime, NaiveDateTime)> = events
                .iter()
                .map(|event| (event.start_date_time, event.end_date_time))
                .collect();

            let suggestions = schedule::suggest_slots(
                scorer.as_ref(),
                &candidate.features(),
                candidate.day(),
                &busy,
                candidate.duration,
                max_suggestions,
            )?;
            tracing::debug!(
                "Suggested {} of {} requested slots for {}",
                suggestions.len(),
                max_suggestions,
                candidate.day()
            );

            let message = if suggestions.is_empty() {
                "No free slots available for the requested day.".to_string()
            } else {
                "Free slots suggested successfully.".to_string()
            };
            let predicted_slots = suggestions
                .into_iter()
                .map(|slot| public::ProposedEvent {
                    name: candidate.name.clone(),
                    description: candidate.description.clone(),
                    start_date_time: slot.start,
                    end_date_time: slot.end,
                    r#type: candidate.r#type.clone(),
                })
                .collect();

            public::EventsResponse {
                message,
                processed_data: None,
                predicted_slots: Some(predicted_slots),
            }
        }
        None => {
            // No calendar given: every slot is a candidate and the
            // returned events are synthetic placeholders
            let suggestions = schedule::suggest_slots(
                scorer.as_ref(),
                &candidate.features(),
                candidate.day(),
                &[],
                candidate.duration,
                max_suggestions,
            )?;

            let processed_data = suggestions
                .into_iter()
                .enumerate()
                .map(|(i, slot)| public::ProposedEvent {
                    name: format!("Predicted Event {}", i + 1),
                    description: format!("Description {}", i + 1),
                    start_date_time: slot.start,
                    end_date_time: slot.end,
                    r#type: candidate.r#type.clone(),
                })
                .collect();

            public::EventsResponse {
                message: "Event data processed successfully.".to_string(),
                processed_data: Some(processed_data),
                predicted_slots: None,
            }
        }
    };

    Ok(Json(response))
}

/// Create the events router
pub fn router() -> Router<SharedState> {
    Router::new().route("/", axum::routing::post(receive_events))
}
