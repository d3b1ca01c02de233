//! Band Chemistry State
//!
//! The four-axis relationship record every band carries. All axes live in
//! `[AXIS_MIN, AXIS_MAX]`; every way of building or mutating a state clamps,
//! including deserialization of rows written by older or corrupted code.
//!
//! # Example
//!
//! ```
//! use band_events::{ChemistryDelta, ChemistryState};
//!
//! let mut state = ChemistryState::new(50, 50, 50, 50);
//! state.apply_delta(&ChemistryDelta::new(-15, 30, -10, 60));
//! assert_eq!(state.conflict_index(), 100);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lowest value any chemistry axis can hold.
pub const AXIS_MIN: u8 = 0;

/// Highest value any chemistry axis can hold.
pub const AXIS_MAX: u8 = 100;

fn clamp_axis(value: i64) -> u8 {
    value.clamp(AXIS_MIN as i64, AXIS_MAX as i64) as u8
}

/// Current social state of a band.
///
/// Fields are private so that no consumer can observe an out-of-range value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawChemistryState")]
pub struct ChemistryState {
    chemistry_level: u8,
    romantic_tension: u8,
    creative_alignment: u8,
    conflict_index: u8,
}

/// Unchecked wire shape; wide integers so that bad rows still parse.
#[derive(Deserialize)]
struct RawChemistryState {
    #[serde(default = "neutral_axis")]
    chemistry_level: i64,
    #[serde(default)]
    romantic_tension: i64,
    #[serde(default = "neutral_axis")]
    creative_alignment: i64,
    #[serde(default)]
    conflict_index: i64,
}

fn neutral_axis() -> i64 {
    50
}

impl From<RawChemistryState> for ChemistryState {
    fn from(raw: RawChemistryState) -> Self {
        Self::new(
            raw.chemistry_level,
            raw.romantic_tension,
            raw.creative_alignment,
            raw.conflict_index,
        )
    }
}

impl Default for ChemistryState {
    /// A freshly formed band: neutral cohesion and vision, no tension or conflict.
    fn default() -> Self {
        Self {
            chemistry_level: 50,
            romantic_tension: 0,
            creative_alignment: 50,
            conflict_index: 0,
        }
    }
}

impl ChemistryState {
    /// Creates a state, clamping every axis into range.
    pub fn new(
        chemistry_level: i64,
        romantic_tension: i64,
        creative_alignment: i64,
        conflict_index: i64,
    ) -> Self {
        Self {
            chemistry_level: clamp_axis(chemistry_level),
            romantic_tension: clamp_axis(romantic_tension),
            creative_alignment: clamp_axis(creative_alignment),
            conflict_index: clamp_axis(conflict_index),
        }
    }

    pub fn chemistry_level(&self) -> u8 {
        self.chemistry_level
    }

    pub fn romantic_tension(&self) -> u8 {
        self.romantic_tension
    }

    pub fn creative_alignment(&self) -> u8 {
        self.creative_alignment
    }

    pub fn conflict_index(&self) -> u8 {
        self.conflict_index
    }

    /// Applies a set of deltas and clamps the result.
    pub fn apply_delta(&mut self, delta: &ChemistryDelta) {
        *self = Self::new(
            self.chemistry_level as i64 + delta.chemistry as i64,
            self.romantic_tension as i64 + delta.romantic_tension as i64,
            self.creative_alignment as i64 + delta.creative_alignment as i64,
            self.conflict_index as i64 + delta.conflict as i64,
        );
    }

    /// Overwrites the fields present in a partial update.
    pub fn apply_update(&mut self, update: &ChemistryUpdate) {
        if let Some(value) = update.chemistry_level {
            self.chemistry_level = value.min(AXIS_MAX);
        }
        if let Some(value) = update.romantic_tension {
            self.romantic_tension = value.min(AXIS_MAX);
        }
        if let Some(value) = update.creative_alignment {
            self.creative_alignment = value.min(AXIS_MAX);
        }
        if let Some(value) = update.conflict_index {
            self.conflict_index = value.min(AXIS_MAX);
        }
    }

    /// Returns a copy with a partial update applied.
    pub fn with_update(mut self, update: &ChemistryUpdate) -> Self {
        self.apply_update(update);
        self
    }

    /// Coarse label for the band's cohesion.
    pub fn tier(&self) -> ChemistryTier {
        ChemistryTier::from_level(self.chemistry_level)
    }
}

impl fmt::Display for ChemistryState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "chemistry={} tension={} alignment={} conflict={}",
            self.chemistry_level, self.romantic_tension, self.creative_alignment, self.conflict_index
        )
    }
}

/// Per-axis change requested by a drama preset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChemistryDelta {
    pub chemistry: i32,
    pub romantic_tension: i32,
    pub creative_alignment: i32,
    pub conflict: i32,
}

impl ChemistryDelta {
    pub const fn new(
        chemistry: i32,
        romantic_tension: i32,
        creative_alignment: i32,
        conflict: i32,
    ) -> Self {
        Self {
            chemistry,
            romantic_tension,
            creative_alignment,
            conflict,
        }
    }
}

/// Partial state update. Only changed fields are present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChemistryUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chemistry_level: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub romantic_tension: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creative_alignment: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conflict_index: Option<u8>,
}

impl ChemistryUpdate {
    /// Returns true if the update changes nothing.
    pub fn is_empty(&self) -> bool {
        self.chemistry_level.is_none()
            && self.romantic_tension.is_none()
            && self.creative_alignment.is_none()
            && self.conflict_index.is_none()
    }
}

/// Coarse cohesion bands, used for summaries and UI labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChemistryTier {
    /// Below 20
    Toxic,
    /// 20 to 39
    Strained,
    /// 40 to 59
    Stable,
    /// 60 to 79
    Tight,
    /// 80 and above
    Inseparable,
}

impl ChemistryTier {
    pub fn from_level(level: u8) -> Self {
        match level {
            0..=19 => ChemistryTier::Toxic,
            20..=39 => ChemistryTier::Strained,
            40..=59 => ChemistryTier::Stable,
            60..=79 => ChemistryTier::Tight,
            _ => ChemistryTier::Inseparable,
        }
    }
}

impl fmt::Display for ChemistryTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChemistryTier::Toxic => write!(f, "toxic"),
            ChemistryTier::Strained => write!(f, "strained"),
            ChemistryTier::Stable => write!(f, "stable"),
            ChemistryTier::Tight => write!(f, "tight"),
            ChemistryTier::Inseparable => write!(f, "inseparable"),
        }
    }
}
