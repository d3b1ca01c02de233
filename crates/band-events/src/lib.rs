//! Shared data types for the band chemistry engine.
//!
//! This crate contains pure data structures with no simulation logic:
//! the four-axis chemistry state, drama preset definitions, trigger
//! sources and the drama event history record. It is a dependency for
//! all other crates in the workspace.

pub mod event;
pub mod preset;
pub mod state;
pub mod timestamp;
pub mod trigger;

#[cfg(feature = "test-fixtures")]
pub mod fixtures;

// Re-export state types
pub use state::{
    ChemistryDelta, ChemistryState, ChemistryTier, ChemistryUpdate, AXIS_MAX, AXIS_MIN,
};

// Re-export preset types
pub use preset::{DramaCategory, DramaEventPreset, ParsePresetKeyError, PresetKey, Severity};

// Re-export trigger types
pub use trigger::{Candidate, ParseTriggerSourceError, TriggerSource};

// Re-export event types
pub use event::{BandDramaEvent, BandId, EventContext, MemberId, Resolution};

// Re-export timestamp types
pub use timestamp::GameWeek;
