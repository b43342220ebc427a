//! Slot ranker: restricts model scores to free slots and picks the
//! highest-scoring candidates.

use anyhow::{Result, bail};
use chrono::{Duration, NaiveDateTime};
use itertools::Itertools;

use super::grid::SlotGrid;

/// How many proposals the ranker yields by default
pub const DEFAULT_MAX_SUGGESTIONS: usize = 4;

/// A free slot paired with its model score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredSlot {
    pub index: usize,
    pub score: f32,
}

/// A concrete proposal derived from a ranked slot
#[derive(Debug, Clone, PartialEq)]
pub struct SlotSuggestion {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub score: f32,
}

/// Pick up to `max_suggestions` of the highest-scoring free slots.
/// Occupied slots are never candidates regardless of score. Equal
/// scores order by ascending slot index so results are deterministic.
pub fn top_free_slots(scores: &[f32], free: &[usize], max_suggestions: usize) -> Vec<ScoredSlot> {
    free.iter()
        .map(|&index| ScoredSlot {
            index,
            score: scores[index],
        })
        .sorted_by(|a, b| b.score.total_cmp(&a.score).then(a.index.cmp(&b.index)))
        .take(max_suggestions)
        .collect()
}

/// Rank the grid's free slots and turn the winners into concrete
/// proposals, ordered highest score first.
///
/// The proposal end time comes from the requested duration rather than
/// the slot width, so adjacent proposals may overlap; proposals are
/// alternatives for the same event, not a combined schedule.
pub fn top_suggestions(
    grid: &SlotGrid,
    scores: &[f32],
    duration_minutes: f64,
    max_suggestions: usize,
) -> Result<Vec<SlotSuggestion>> {
    if scores.len() != grid.slot_count() {
        bail!(
            "Scoring model returned {} scores for a {}-slot grid",
            scores.len(),
            grid.slot_count()
        );
    }

    let duration = Duration::seconds((duration_minutes * 60.0).round() as i64);
    Ok(top_free_slots(scores, &grid.free_slots(), max_suggestions)
        .into_iter()
        .map(|slot| {
            let start = grid.slot_start(slot.index);
            SlotSuggestion {
                start,
                end: start + duration,
                score: slot.score,
            }
        })
        .collect())
}
