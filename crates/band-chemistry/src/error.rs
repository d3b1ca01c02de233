//! Error types for the chemistry engine.

use band_events::{BandId, ParsePresetKeyError};
use uuid::Uuid;

use crate::config::ConfigError;
use crate::history::HistoryError;

/// Errors raised by the pure engine functions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChemistryError {
    /// A preset key that the catalog does not contain. Indicates the caller
    /// and the catalog disagree.
    #[error("unknown drama preset: {0}")]
    UnknownPreset(String),
}

impl From<ParsePresetKeyError> for ChemistryError {
    fn from(e: ParsePresetKeyError) -> Self {
        ChemistryError::UnknownPreset(e.0)
    }
}

/// Errors raised by a chemistry store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("band not found: {0}")]
    UnknownBand(BandId),

    #[error("band already exists: {0}")]
    BandExists(BandId),

    /// Someone else wrote the band's state after it was read.
    #[error("version conflict for band {band}: expected {expected}, found {found}")]
    VersionConflict {
        band: BandId,
        expected: u64,
        found: u64,
    },

    #[error("drama event {event_id} not found for band {band}")]
    UnknownEvent { band: BandId, event_id: Uuid },

    #[error("drama event {0} is already resolved")]
    AlreadyResolved(Uuid),

    #[error("store lock poisoned")]
    Poisoned,
}

/// Errors raised by the band engine.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Chemistry error: {0}")]
    Chemistry(#[from] ChemistryError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("History error: {0}")]
    History(#[from] HistoryError),
}
