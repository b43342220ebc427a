//! Public types for the events API
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::model::EventFeatures;

/// The event the client wants scheduled
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateEvent {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub start_date_time: NaiveDateTime,
    /// Requested duration in minutes
    #[serde(default)]
    pub duration: f64,
    #[serde(default)]
    pub r#type: String,
}

impl CandidateEvent {
    /// Calendar date used as the discretization window
    pub fn day(&self) -> NaiveDate {
        self.start_date_time.date()
    }

    pub fn features(&self) -> EventFeatures {
        EventFeatures::new(&self.name, &self.description, self.duration)
    }
}

/// An event already on the calendar
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExistingEvent {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub start_date_time: NaiveDateTime,
    pub end_date_time: NaiveDateTime,
    #[serde(default)]
    pub r#type: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventsRequest {
    pub event_data: CandidateEvent,
    /// Existing events for the day. When omitted the service responds
    /// with synthetic predictions instead of free-slot suggestions.
    pub events: Option<Vec<ExistingEvent>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposedEvent {
    pub name: String,
    pub description: String,
    pub start_date_time: NaiveDateTime,
    pub end_date_time: NaiveDateTime,
    pub r#type: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventsResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processed_data: Option<Vec<ProposedEvent>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub predicted_slots: Option<Vec<ProposedEvent>>,
}
