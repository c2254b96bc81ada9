//! Read-only serializable view of engine state for external consumers.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::types::SyncEngine;
use crate::error::SeityResult;
use crate::genesis::Geometry;
use crate::population::Oscillator;

/// Point-in-time copy of everything a visualizer or report needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub steps: u64,
    pub coherence: f64,
    pub mean_phase: f64,
    pub generation_id: u64,
    pub baseline: f64,
    pub geometric_phase: f64,
    pub symmetry_broken: bool,
    pub oscillators: Vec<Oscillator>,
    pub geometry: Option<Geometry>,
}

impl Snapshot {
    /// Serialize as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> SeityResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write pretty-printed JSON to `path`.
    pub fn write_json(&self, path: impl AsRef<Path>) -> SeityResult<()> {
        std::fs::write(path, self.to_json_pretty()?)?;
        Ok(())
    }
}

impl<R> SyncEngine<R> {
    /// Capture the current state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            steps: self.steps,
            coherence: self.coherence,
            mean_phase: self.mean_phase,
            generation_id: self.generation_id,
            baseline: self.baseline,
            geometric_phase: self.geometric_phase,
            symmetry_broken: self.symmetry_broken,
            oscillators: self.population.oscillators().to_vec(),
            geometry: self.geometry.clone(),
        }
    }
}
