//! Chemistry Persistence
//!
//! Storage boundary for band state and drama history. Writes are optimistic:
//! a caller reads a versioned state, computes the new one, and commits it
//! together with the events that produced it. If another writer got there
//! first the commit is rejected with `StoreError::VersionConflict`.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use band_events::{BandDramaEvent, BandId, ChemistryState, GameWeek};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::StoreError;

/// A value paired with the version it was read at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Versioned<T> {
    pub value: T,
    pub version: u64,
}

/// Storage for band chemistry rows and their drama history.
pub trait ChemistryStore {
    /// Reads a band's current state and version.
    fn load_state(&self, band: &BandId) -> Result<Versioned<ChemistryState>, StoreError>;

    /// Atomically writes a new state and appends events, provided the stored
    /// version still equals `expected_version`. Returns the new version.
    fn commit(
        &self,
        band: &BandId,
        state: ChemistryState,
        expected_version: u64,
        events: &[BandDramaEvent],
    ) -> Result<u64, StoreError>;

    /// A band's full history, oldest first.
    fn events_for_band(&self, band: &BandId) -> Result<Vec<BandDramaEvent>, StoreError>;

    /// A band's unresolved events, oldest first.
    fn unresolved_events(&self, band: &BandId) -> Result<Vec<BandDramaEvent>, StoreError> {
        Ok(self
            .events_for_band(band)?
            .into_iter()
            .filter(|e| !e.is_resolved())
            .collect())
    }

    /// Marks an event resolved and returns the updated record.
    fn resolve_event(
        &self,
        band: &BandId,
        event_id: Uuid,
        resolution_type: &str,
        week: GameWeek,
    ) -> Result<BandDramaEvent, StoreError>;
}

#[derive(Debug)]
struct BandRow {
    state: ChemistryState,
    version: u64,
    history: Vec<BandDramaEvent>,
}

/// In-memory store, safe to share between threads.
#[derive(Debug, Default)]
pub struct MemoryStore {
    bands: Mutex<HashMap<BandId, BandRow>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a band at version 0.
    pub fn insert_band(&self, band: BandId, state: ChemistryState) -> Result<(), StoreError> {
        let mut bands = self.lock()?;
        if bands.contains_key(&band) {
            return Err(StoreError::BandExists(band));
        }
        bands.insert(
            band,
            BandRow {
                state,
                version: 0,
                history: Vec::new(),
            },
        );
        Ok(())
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<BandId, BandRow>>, StoreError> {
        self.bands.lock().map_err(|_| StoreError::Poisoned)
    }
}

impl ChemistryStore for MemoryStore {
    fn load_state(&self, band: &BandId) -> Result<Versioned<ChemistryState>, StoreError> {
        let bands = self.lock()?;
        let row = bands
            .get(band)
            .ok_or_else(|| StoreError::UnknownBand(band.clone()))?;
        Ok(Versioned {
            value: row.state,
            version: row.version,
        })
    }

    fn commit(
        &self,
        band: &BandId,
        state: ChemistryState,
        expected_version: u64,
        events: &[BandDramaEvent],
    ) -> Result<u64, StoreError> {
        let mut bands = self.lock()?;
        let row = bands
            .get_mut(band)
            .ok_or_else(|| StoreError::UnknownBand(band.clone()))?;
        if row.version != expected_version {
            return Err(StoreError::VersionConflict {
                band: band.clone(),
                expected: expected_version,
                found: row.version,
            });
        }
        row.state = state;
        row.version += 1;
        row.history.extend_from_slice(events);
        Ok(row.version)
    }

    fn events_for_band(&self, band: &BandId) -> Result<Vec<BandDramaEvent>, StoreError> {
        let bands = self.lock()?;
        let row = bands
            .get(band)
            .ok_or_else(|| StoreError::UnknownBand(band.clone()))?;
        Ok(row.history.clone())
    }

    fn resolve_event(
        &self,
        band: &BandId,
        event_id: Uuid,
        resolution_type: &str,
        week: GameWeek,
    ) -> Result<BandDramaEvent, StoreError> {
        let mut bands = self.lock()?;
        let row = bands
            .get_mut(band)
            .ok_or_else(|| StoreError::UnknownBand(band.clone()))?;
        let event = row
            .history
            .iter_mut()
            .find(|e| e.event_id == event_id)
            .ok_or_else(|| StoreError::UnknownEvent {
                band: band.clone(),
                event_id,
            })?;
        if !event.resolve(resolution_type, week) {
            return Err(StoreError::AlreadyResolved(event_id));
        }
        Ok(event.clone())
    }
}

macro_rules! forward_store {
    () => {
        fn load_state(&self, band: &BandId) -> Result<Versioned<ChemistryState>, StoreError> {
            (**self).load_state(band)
        }

        fn commit(
            &self,
            band: &BandId,
            state: ChemistryState,
            expected_version: u64,
            events: &[BandDramaEvent],
        ) -> Result<u64, StoreError> {
            (**self).commit(band, state, expected_version, events)
        }

        fn events_for_band(&self, band: &BandId) -> Result<Vec<BandDramaEvent>, StoreError> {
            (**self).events_for_band(band)
        }

        fn unresolved_events(&self, band: &BandId) -> Result<Vec<BandDramaEvent>, StoreError> {
            (**self).unresolved_events(band)
        }

        fn resolve_event(
            &self,
            band: &BandId,
            event_id: Uuid,
            resolution_type: &str,
            week: GameWeek,
        ) -> Result<BandDramaEvent, StoreError> {
            (**self).resolve_event(band, event_id, resolution_type, week)
        }
    };
}

// Several engines can write through one store by borrowing or sharing it.
impl<T: ChemistryStore + ?Sized> ChemistryStore for &T {
    forward_store!();
}

impl<T: ChemistryStore + ?Sized> ChemistryStore for Arc<T> {
    forward_store!();
}
