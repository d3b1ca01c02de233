//! Weekly Drift
//!
//! Ambient healing and decay applied once per game week, independent of any
//! drama that week. Conflict and tension cool off, creative alignment drifts
//! back toward neutral, and chronic conflict wears cohesion down.

use band_events::{ChemistryState, ChemistryUpdate, AXIS_MAX};
use serde::{Deserialize, Serialize};

/// Drift tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DriftConfig {
    /// Conflict lost per week
    pub conflict_decay: u8,
    /// Tension lost per week
    pub tension_decay: u8,
    /// Alignment value the band drifts toward
    pub neutral_alignment: u8,
    /// Alignment gained per week when below neutral
    pub alignment_recovery: u8,
    /// Alignment lost per week when above neutral
    pub alignment_erosion: u8,
    /// Conflict above which chemistry erodes
    pub chronic_conflict_threshold: u8,
    /// Chemistry lost per week under chronic conflict
    pub chronic_conflict_erosion: u8,
}

impl Default for DriftConfig {
    fn default() -> Self {
        Self {
            conflict_decay: 3,
            tension_decay: 2,
            neutral_alignment: 50,
            alignment_recovery: 2,
            alignment_erosion: 1,
            chronic_conflict_threshold: 50,
            chronic_conflict_erosion: 2,
        }
    }
}

/// Computes one week of drift with default tuning.
pub fn weekly_drift(state: &ChemistryState) -> ChemistryUpdate {
    weekly_drift_with(state, &DriftConfig::default())
}

/// Computes one week of drift. The update holds only the fields that change.
///
/// The chronic-conflict check uses conflict as it was before this week's decay.
pub fn weekly_drift_with(state: &ChemistryState, config: &DriftConfig) -> ChemistryUpdate {
    let conflict = state.conflict_index();
    let tension = state.romantic_tension();
    let alignment = state.creative_alignment();
    let chemistry = state.chemistry_level();

    let new_conflict = conflict.saturating_sub(config.conflict_decay);
    let new_tension = tension.saturating_sub(config.tension_decay);

    let new_alignment = if alignment < config.neutral_alignment {
        alignment.saturating_add(config.alignment_recovery).min(AXIS_MAX)
    } else if alignment > config.neutral_alignment {
        alignment.saturating_sub(config.alignment_erosion)
    } else {
        alignment
    };

    let new_chemistry = if conflict > config.chronic_conflict_threshold {
        chemistry.saturating_sub(config.chronic_conflict_erosion)
    } else {
        chemistry
    };

    ChemistryUpdate {
        chemistry_level: changed(chemistry, new_chemistry),
        romantic_tension: changed(tension, new_tension),
        creative_alignment: changed(alignment, new_alignment),
        conflict_index: changed(conflict, new_conflict),
    }
}

fn changed(old: u8, new: u8) -> Option<u8> {
    (old != new).then_some(new)
}
