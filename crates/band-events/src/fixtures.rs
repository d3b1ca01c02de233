//! Sample data fixtures for testing.
//!
//! Enable the `test-fixtures` feature to access these helpers.
//!
//! ```ignore
//! // [dev-dependencies]
//! // band-events = { path = "../band-events", features = ["test-fixtures"] }
//!
//! use band_events::fixtures;
//!
//! let history = fixtures::sample_history();
//! let state = fixtures::volatile_band();
//! ```

use crate::{BandDramaEvent, BandId, ChemistryState};

/// Band id used by every fixture row.
pub fn sample_band_id() -> BandId {
    BandId::new("band_velvet_static")
}

/// Returns the sample history from the fixtures file.
///
/// Contains 3 events for `band_velvet_static`:
/// - an unresolved romantic breakup (week 3)
/// - a resolved media fallout with metadata (week 5)
/// - an unresolved unity moment (week 9)
pub fn sample_history() -> Vec<BandDramaEvent> {
    let jsonl = include_str!("../tests/fixtures/sample_history.jsonl");
    jsonl
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| {
            BandDramaEvent::from_jsonl(l)
                .unwrap_or_else(|e| panic!("Failed to parse history line: {}\nError: {}", l, e))
        })
        .collect()
}

/// Every axis at its midpoint.
pub fn midpoint_band() -> ChemistryState {
    ChemistryState::new(50, 50, 50, 50)
}

/// Tight band on the edge of a unity moment.
pub fn harmonious_band() -> ChemistryState {
    ChemistryState::new(80, 10, 70, 10)
}

/// High conflict and tension; weekly checks threaten departures.
pub fn volatile_band() -> ChemistryState {
    ChemistryState::new(40, 65, 50, 70)
}
