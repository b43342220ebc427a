//! Time discretizer: one calendar day split into equal-width slots.

use anyhow::{Result, bail};
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

pub const MINUTES_PER_DAY: u32 = 1440;

/// Default grid resolution (15-minute slots)
pub const DEFAULT_SLOT_COUNT: usize = 96;

/// Occupancy flags for one calendar day, indexed 0..N-1. Slot `i`
/// covers the half-open interval `[i * width, (i + 1) * width)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotGrid {
    day: NaiveDate,
    occupied: Vec<bool>,
}

impl SlotGrid {
    /// Create an empty grid for `day`. The slot count must evenly
    /// divide the 1440-minute day so slot boundaries align with event
    /// times.
    pub fn new(day: NaiveDate, slot_count: usize) -> Result<Self> {
        if slot_count == 0 || MINUTES_PER_DAY as usize % slot_count != 0 {
            bail!(
                "Slot count {} does not evenly divide a {}-minute day",
                slot_count,
                MINUTES_PER_DAY
            );
        }
        Ok(Self {
            day,
            occupied: vec![false; slot_count],
        })
    }

    pub fn day(&self) -> NaiveDate {
        self.day
    }

    pub fn slot_count(&self) -> usize {
        self.occupied.len()
    }

    /// Width of a single slot in minutes
    pub fn slot_minutes(&self) -> u32 {
        MINUTES_PER_DAY / self.occupied.len() as u32
    }

    /// Start timestamp of slot `index`
    pub fn slot_start(&self, index: usize) -> NaiveDateTime {
        self.day.and_time(NaiveTime::MIN)
            + Duration::minutes(i64::from(self.slot_minutes()) * index as i64)
    }

    pub fn is_occupied(&self, index: usize) -> bool {
        self.occupied[index]
    }

    /// Mark every slot overlapping `[start, end)` as occupied.
    ///
    /// Events whose start date is not this grid's day are ignored. An
    /// event running past midnight is clipped at the end of its start
    /// day; the overflow into the next day is not represented.
    pub fn mark(&mut self, start: NaiveDateTime, end: NaiveDateTime) {
        if start.date() != self.day || end <= start {
            return;
        }
        let day_start = self.day.and_time(NaiveTime::MIN);
        let width_seconds = i64::from(self.slot_minutes()) * 60;
        let start_offset = (start - day_start).num_seconds();
        let end_offset = (end - day_start)
            .num_seconds()
            .min(i64::from(MINUTES_PER_DAY) * 60);
        let first = (start_offset / width_seconds) as usize;
        let last = ((end_offset + width_seconds - 1) / width_seconds) as usize;
        for flag in &mut self.occupied[first..last] {
            *flag = true;
        }
    }

    /// Indices of unoccupied slots, in ascending order
    pub fn free_slots(&self) -> Vec<usize> {
        self.occupied
            .iter()
            .enumerate()
            .filter_map(|(index, occupied)| (!occupied).then_some(index))
            .collect()
    }
}
