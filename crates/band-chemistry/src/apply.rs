//! Preset Application
//!
//! Applies fired presets to a band's state and builds the matching history
//! records. Presets apply one at a time in roll order with a clamp after
//! each, so the result can differ from summing the deltas first when a band
//! sits near the edge of a range.

use band_events::{BandDramaEvent, ChemistryState, EventContext, PresetKey};

use crate::catalog;
use crate::error::ChemistryError;

/// New state plus the history records for the presets that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct AppliedDrama {
    pub state: ChemistryState,
    pub events: Vec<BandDramaEvent>,
}

/// Applies each fired preset in order, clamping after every step.
///
/// History records carry the deltas the preset requested, not the amount
/// the state actually moved.
pub fn apply_presets(
    state: &ChemistryState,
    fired: &[PresetKey],
    ctx: &EventContext,
) -> AppliedDrama {
    let mut state = *state;
    let mut events = Vec::with_capacity(fired.len());
    for key in fired {
        let preset = catalog::preset(*key);
        state.apply_delta(&preset.deltas);
        events.push(BandDramaEvent::from_preset(preset, ctx));
    }
    AppliedDrama { state, events }
}

/// Applies presets named by their persisted string keys.
///
/// Every key is checked before anything is applied; an unknown key fails the
/// whole batch.
pub fn apply_preset_keys(
    state: &ChemistryState,
    keys: &[&str],
    ctx: &EventContext,
) -> Result<AppliedDrama, ChemistryError> {
    let fired = keys
        .iter()
        .map(|key| key.parse::<PresetKey>().map_err(ChemistryError::from))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(apply_presets(state, &fired, ctx))
}
