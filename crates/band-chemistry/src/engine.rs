//! Band Engine
//!
//! Runs the read-modify-write cycle for band chemistry against a store. The
//! engine owns the RNG so that a seeded engine replays identically; all
//! mutation of persisted state goes through [`ChemistryStore::commit`].
//!
//! # Flow
//!
//! ```text
//! load state ─▶ evaluate triggers ─▶ roll ─▶ apply presets ─▶ commit
//!      ▲                                                        │
//!      └──────────────── version conflict: retry ───────────────┘
//! ```

use band_events::{
    BandDramaEvent, BandId, Candidate, ChemistryState, ChemistryUpdate, EventContext, GameWeek,
    TriggerSource,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::apply::apply_presets;
use crate::config::EngineConfig;
use crate::drift::weekly_drift_with;
use crate::error::{EngineError, StoreError};
use crate::modifiers::{ModifierCalculator, Modifiers};
use crate::roller::roll_events;
use crate::store::ChemistryStore;
use crate::triggers::evaluate_triggers;

/// Result of processing one trigger for one band.
#[derive(Debug, Clone, PartialEq)]
pub struct TriggerOutcome {
    pub source: TriggerSource,
    pub previous: ChemistryState,
    pub state: ChemistryState,
    pub candidates: Vec<Candidate>,
    pub events: Vec<BandDramaEvent>,
    /// Store version after the commit
    pub version: u64,
}

/// Result of applying a week of drift.
#[derive(Debug, Clone, PartialEq)]
pub struct DriftOutcome {
    pub update: ChemistryUpdate,
    pub state: ChemistryState,
    pub version: u64,
}

/// Everything that happened to a band in one weekly tick.
#[derive(Debug, Clone, PartialEq)]
pub struct WeeklyReport {
    pub week: GameWeek,
    pub check: TriggerOutcome,
    pub drift: DriftOutcome,
    pub modifiers: Modifiers,
}

/// Orchestrates triggers, drift and modifiers for bands in a store.
pub struct BandEngine<S: ChemistryStore> {
    config: EngineConfig,
    store: S,
    calculator: ModifierCalculator,
    rng: SmallRng,
}

impl<S: ChemistryStore> BandEngine<S> {
    /// Creates an engine. Seeds the RNG from the config, or from entropy.
    pub fn new(config: EngineConfig, store: S) -> Self {
        let rng = match config.engine.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        Self::with_rng(config, store, rng)
    }

    /// Creates an engine with an explicit RNG.
    pub fn with_rng(config: EngineConfig, store: S, rng: SmallRng) -> Self {
        Self {
            calculator: ModifierCalculator::new(config.volatility.clone()),
            config,
            store,
            rng,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Current modifiers for a band, with a fresh volatility sample.
    pub fn modifiers(&mut self, band: &BandId) -> Result<Modifiers, EngineError> {
        let state = self.store.load_state(band)?.value;
        Ok(self.calculator.compute(&state, &mut self.rng))
    }

    /// Evaluates, rolls and applies drama for one trigger, then commits.
    ///
    /// On a version conflict the whole cycle reruns against the fresh state,
    /// up to `write_retry_limit` extra times.
    pub fn process_trigger(
        &mut self,
        source: TriggerSource,
        ctx: &EventContext,
    ) -> Result<TriggerOutcome, EngineError> {
        let band = &ctx.band_id;
        let max_events = self.config.engine.max_events_per_trigger;
        let mut attempt = 0;
        loop {
            let loaded = self.store.load_state(band)?;
            let candidates = evaluate_triggers(&loaded.value, source);
            let fired = roll_events(&candidates, max_events, &mut self.rng);
            let applied = apply_presets(&loaded.value, &fired, ctx);

            match self
                .store
                .commit(band, applied.state, loaded.version, &applied.events)
            {
                Ok(version) => {
                    for event in &applied.events {
                        tracing::info!(
                            band = %band,
                            preset = %event.preset,
                            severity = %event.severity,
                            "drama event fired"
                        );
                    }
                    tracing::debug!(
                        band = %band,
                        source = %source,
                        candidates = candidates.len(),
                        fired = applied.events.len(),
                        state = %applied.state,
                        "trigger processed"
                    );
                    return Ok(TriggerOutcome {
                        source,
                        previous: loaded.value,
                        state: applied.state,
                        candidates,
                        events: applied.events,
                        version,
                    });
                }
                Err(conflict @ StoreError::VersionConflict { .. }) => {
                    attempt += 1;
                    if attempt > self.config.engine.write_retry_limit {
                        tracing::warn!(band = %band, source = %source, "giving up after {} attempts", attempt);
                        return Err(conflict.into());
                    }
                    tracing::warn!(band = %band, source = %source, attempt, "retrying after version conflict");
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// Applies one week of drift to a band and commits it.
    pub fn apply_weekly_drift(&mut self, band: &BandId) -> Result<DriftOutcome, EngineError> {
        let mut attempt = 0;
        loop {
            let loaded = self.store.load_state(band)?;
            let update = weekly_drift_with(&loaded.value, &self.config.drift);
            let state = loaded.value.with_update(&update);

            match self.store.commit(band, state, loaded.version, &[]) {
                Ok(version) => {
                    tracing::debug!(band = %band, state = %state, "weekly drift applied");
                    return Ok(DriftOutcome {
                        update,
                        state,
                        version,
                    });
                }
                Err(conflict @ StoreError::VersionConflict { .. }) => {
                    attempt += 1;
                    if attempt > self.config.engine.write_retry_limit {
                        return Err(conflict.into());
                    }
                    tracing::warn!(band = %band, attempt, "retrying drift after version conflict");
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// Runs a weekly check, then drift, then samples the week's modifiers.
    pub fn weekly_tick(&mut self, band: &BandId, week: GameWeek) -> Result<WeeklyReport, EngineError> {
        let ctx = EventContext::new(band.clone(), week);
        let check = self.process_trigger(TriggerSource::WeeklyCheck, &ctx)?;
        let drift = self.apply_weekly_drift(band)?;
        let modifiers = self.calculator.compute(&drift.state, &mut self.rng);

        tracing::info!(
            band = %band,
            week = %week,
            events = check.events.len(),
            tier = %drift.state.tier(),
            "weekly tick complete"
        );

        Ok(WeeklyReport {
            week,
            check,
            drift,
            modifiers,
        })
    }
}
