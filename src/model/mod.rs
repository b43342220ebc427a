//! Slot scoring model, loaded from disk once at startup and shared
//! read-only across requests.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;

use crate::schedule::grid::MINUTES_PER_DAY;

/// Numeric encoding of a candidate event fed to the scoring model
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventFeatures {
    pub name_len: f32,
    pub description_len: f32,
    /// Requested duration as a fraction of a day
    pub duration_norm: f32,
}

impl EventFeatures {
    pub fn new(name: &str, description: &str, duration_minutes: f64) -> Self {
        Self {
            name_len: name.chars().count() as f32,
            description_len: description.chars().count() as f32,
            duration_norm: (duration_minutes / f64::from(MINUTES_PER_DAY)) as f32,
        }
    }

    pub fn as_array(&self) -> [f32; 3] {
        [self.name_len, self.description_len, self.duration_norm]
    }
}

/// The single capability the request pipeline needs from a predictive
/// model: one desirability score per slot of the day. The output
/// dimensionality dictates the slot grid size.
pub trait SlotScorer: Send + Sync {
    fn slot_count(&self) -> usize;

    fn score(&self, features: &EventFeatures) -> Result<Vec<f32>>;
}

/// Per-slot linear regression deserialized from a JSON weights file:
/// `score[i] = weights[i] . features + bias[i]`
#[derive(Debug, Deserialize)]
pub struct LinearSlotModel {
    weights: Vec<[f32; 3]>,
    bias: Vec<f32>,
}

impl LinearSlotModel {
    pub fn new(weights: Vec<[f32; 3]>, bias: Vec<f32>) -> Result<Self> {
        let model = Self { weights, bias };
        model.validate()?;
        Ok(model)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Failed to open model file {}", path.display()))?;
        let model: Self = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Failed to parse model file {}", path.display()))?;
        model.validate()?;
        Ok(model)
    }

    fn validate(&self) -> Result<()> {
        if self.weights.is_empty() {
            bail!("Model has no slot weights");
        }
        if self.weights.len() != self.bias.len() {
            bail!(
                "Model has {} weight rows but {} bias terms",
                self.weights.len(),
                self.bias.len()
            );
        }
        if MINUTES_PER_DAY as usize % self.weights.len() != 0 {
            bail!(
                "Model slot count {} does not evenly divide a {}-minute day",
                self.weights.len(),
                MINUTES_PER_DAY
            );
        }
        Ok(())
    }
}

impl SlotScorer for LinearSlotModel {
    fn slot_count(&self) -> usize {
        self.weights.len()
    }

    fn score(&self, features: &EventFeatures) -> Result<Vec<f32>> {
        let input = features.as_array();
        Ok(self
            .weights
            .iter()
            .zip(&self.bias)
            .map(|(row, bias)| row.iter().zip(input).map(|(w, x)| w * x).sum::<f32>() + bias)
            .collect())
    }
}
