//! Free-slot discretization and ranking for a single calendar day.

pub mod grid;
pub mod rank;

pub use grid::{DEFAULT_SLOT_COUNT, SlotGrid};
pub use rank::{DEFAULT_MAX_SUGGESTIONS, ScoredSlot, SlotSuggestion};

use anyhow::Result;
use chrono::{NaiveDate, NaiveDateTime};

use crate::model::{EventFeatures, SlotScorer};

/// Run the full pipeline for one request: discretize the candidate's
/// day against the busy intervals, score the day with the model, and
/// rank the free slots.
pub fn suggest_slots(
    scorer: &dyn SlotScorer,
    features: &EventFeatures,
    day: NaiveDate,
    busy: &[(NaiveDateTime, NaiveDateTime)],
    duration_minutes: f64,
    max_suggestions: usize,
) -> Result<Vec<SlotSuggestion>> {
    let mut grid = SlotGrid::new(day, scorer.slot_count())?;
    for &(start, end) in busy {
        grid.mark(start, end);
    }

    let scores = scorer.score(features)?;
    rank::top_suggestions(&grid, &scores, duration_minutes, max_suggestions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LinearSlotModel;
    use chrono::NaiveDate;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 12, 19).unwrap()
    }

    /// 24-slot model preferring earlier slots
    fn scorer() -> LinearSlotModel {
        let bias = (0..24).map(|i| -(i as f32)).collect();
        LinearSlotModel::new(vec![[0.0; 3]; 24], bias).unwrap()
    }

    #[test]
    fn it_suggests_the_best_free_slots_for_the_day() {
        let busy = vec![(
            day().and_hms_opt(0, 0, 0).unwrap(),
            day().and_hms_opt(2, 0, 0).unwrap(),
        )];
        let features = EventFeatures::new("Standup", "Daily sync", 30.0);

        let suggestions =
            suggest_slots(&scorer(), &features, day(), &busy, 30.0, 4).unwrap();

        let starts: Vec<_> = suggestions.iter().map(|s| s.start).collect();
        assert_eq!(
            starts,
            vec![
                day().and_hms_opt(2, 0, 0).unwrap(),
                day().and_hms_opt(3, 0, 0).unwrap(),
                day().and_hms_opt(4, 0, 0).unwrap(),
                day().and_hms_opt(5, 0, 0).unwrap(),
            ]
        );
    }

    #[test]
    fn it_returns_empty_when_the_day_is_fully_booked() {
        let busy = vec![(
            day().and_hms_opt(0, 0, 0).unwrap(),
            NaiveDate::from_ymd_opt(2023, 12, 20)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
        )];
        let features = EventFeatures::new("Standup", "", 30.0);

        let suggestions =
            suggest_slots(&scorer(), &features, day(), &busy, 30.0, 4).unwrap();
        assert!(suggestions.is_empty());
    }
}
