//! Band relationship dynamics engine.
//!
//! Models a band's social state on four axes (chemistry, romantic tension,
//! creative alignment, conflict), derives gameplay modifiers from it, and
//! generates drama events that push the state around over time.
//!
//! # Architecture
//!
//! ```text
//! trigger source ─▶ triggers ─▶ roller ─▶ apply ─▶ new state + history
//!                                                   │
//!                      weekly tick ─▶ drift ────────┤
//!                                                   ▼
//!                                              modifiers ─▶ gig / rehearsal systems
//! ```
//!
//! # Modules
//!
//! - [`catalog`]: The static table of drama presets
//! - [`modifiers`]: State to gameplay multipliers, with injected volatility
//! - [`triggers`]: Candidate drama events per trigger source
//! - [`roller`]: Probabilistic selection of candidates
//! - [`drift`]: Weekly natural decay and healing
//! - [`apply`]: Applying fired presets and building history records
//! - [`store`]: Versioned persistence boundary
//! - [`engine`]: Read-modify-write orchestration over a store
//! - [`history`]: JSONL history export
//! - [`config`]: TOML configuration

pub mod apply;
pub mod catalog;
pub mod config;
pub mod drift;
pub mod engine;
pub mod error;
pub mod history;
pub mod modifiers;
pub mod roller;
pub mod store;
pub mod triggers;

// Re-export the pure engine functions
pub use apply::{apply_preset_keys, apply_presets, AppliedDrama};
pub use drift::{weekly_drift, weekly_drift_with, DriftConfig};
pub use modifiers::{
    compute_modifiers, compute_modifiers_with, ModifierCalculator, Modifiers, TensionVolatility,
    VolatilityConfig,
};
pub use roller::{roll_events, DEFAULT_MAX_EVENTS};
pub use triggers::{evaluate_triggers, evaluate_triggers_by_name};

// Re-export config types
pub use config::{default_config_toml, ConfigError, EngineConfig, GeneralConfig};

// Re-export error types
pub use error::{ChemistryError, EngineError, StoreError};

// Re-export persistence and orchestration types
pub use engine::{BandEngine, DriftOutcome, TriggerOutcome, WeeklyReport};
pub use history::{read_history, HistoryError, HistoryLog};
pub use store::{ChemistryStore, MemoryStore, Versioned};
