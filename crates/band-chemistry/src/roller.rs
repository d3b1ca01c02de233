//! Event Roller
//!
//! Decides which candidates actually fire.

use band_events::{Candidate, PresetKey};
use rand::Rng;

/// Default cap on events fired per trigger.
pub const DEFAULT_MAX_EVENTS: usize = 2;

/// Rolls each candidate in order and returns the presets that fired.
///
/// One uniform draw in `[0, 100)` is taken per candidate; the candidate fires
/// when the draw is below its probability (clamped to `[0, 100]`). Rolling
/// stops as soon as `max_events` have fired, so earlier candidates win when
/// the cap truncates the list.
pub fn roll_events<R: Rng + ?Sized>(
    candidates: &[Candidate],
    max_events: usize,
    rng: &mut R,
) -> Vec<PresetKey> {
    let mut fired = Vec::new();
    for candidate in candidates {
        if fired.len() >= max_events {
            break;
        }
        let probability = candidate.probability.clamp(0.0, 100.0);
        let roll: f64 = rng.gen_range(0.0..100.0);
        if roll < probability {
            fired.push(candidate.preset);
        }
    }
    fired
}
