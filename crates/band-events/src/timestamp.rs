//! Game Time
//!
//! Band state evolves in game weeks; history rows are stamped with the week
//! they were created or resolved in.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Game week number. Seasons run by the CLI start at week 1.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameWeek(pub u32);

impl GameWeek {
    pub fn new(week: u32) -> Self {
        Self(week)
    }

    /// Returns the following week.
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl fmt::Display for GameWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "week_{}", self.0)
    }
}
