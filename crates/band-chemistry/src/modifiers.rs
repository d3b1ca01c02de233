//! Modifier Calculator
//!
//! Turns a band's chemistry state into the multipliers and risk figures that
//! gig, rehearsal and songwriting systems consume. The formulas themselves are
//! deterministic; the only randomness is the tension volatility sample, which
//! is drawn from a caller-supplied RNG so runs can be replayed.

use band_events::ChemistryState;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Output ranges for each modifier.
pub mod ranges {
    pub const SONG_QUALITY: (f64, f64) = (0.6, 1.5);
    pub const PERFORMANCE_RATING: (f64, f64) = (0.5, 1.5);
    pub const MEMBER_LEAVE_RISK: (f64, f64) = (0.0, 80.0);
    pub const DRAMA_EVENT_CHANCE: (f64, f64) = (2.0, 60.0);
    pub const REHEARSAL_EFFICIENCY: (f64, f64) = (0.5, 1.5);
    pub const FAN_PERCEPTION: (f64, f64) = (-25.0, 25.0);
}

/// Gameplay modifiers derived from a chemistry state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Modifiers {
    pub song_quality_multiplier: f64,
    pub performance_rating_multiplier: f64,
    /// Percent chance per member of leaving
    pub member_leave_risk: u8,
    /// Percent chance of a drama event
    pub drama_event_chance: u8,
    pub rehearsal_efficiency_multiplier: f64,
    pub fan_perception_modifier: i32,
}

/// Tuning for the high-tension performance swing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VolatilityConfig {
    /// Tension above which performances become volatile
    pub tension_threshold: u8,
    /// Added to the performance multiplier on a bad night
    pub destabilizing_adjustment: f64,
    /// Added to the performance multiplier on an electric night
    pub electric_adjustment: f64,
    /// Chance of a bad night, 0.0 to 1.0
    pub destabilizing_probability: f64,
}

impl Default for VolatilityConfig {
    fn default() -> Self {
        Self {
            tension_threshold: 50,
            destabilizing_adjustment: -0.10,
            electric_adjustment: 0.08,
            destabilizing_probability: 0.6,
        }
    }
}

/// One sample of how romantic tension swings a performance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TensionVolatility {
    /// Tension too low to matter
    Calm,
    /// Tension drags the performance down
    Destabilizing,
    /// Tension produces an electric performance
    Electric,
}

impl TensionVolatility {
    /// Draws a volatility sample with default tuning.
    pub fn sample<R: Rng + ?Sized>(state: &ChemistryState, rng: &mut R) -> Self {
        Self::sample_with(state, &VolatilityConfig::default(), rng)
    }

    /// Draws a volatility sample. Consumes no randomness for calm bands.
    pub fn sample_with<R: Rng + ?Sized>(
        state: &ChemistryState,
        config: &VolatilityConfig,
        rng: &mut R,
    ) -> Self {
        if state.romantic_tension() <= config.tension_threshold {
            return TensionVolatility::Calm;
        }
        if rng.gen::<f64>() < config.destabilizing_probability {
            TensionVolatility::Destabilizing
        } else {
            TensionVolatility::Electric
        }
    }

    /// Amount added to the performance multiplier.
    pub fn adjustment(self, config: &VolatilityConfig) -> f64 {
        match self {
            TensionVolatility::Calm => 0.0,
            TensionVolatility::Destabilizing => config.destabilizing_adjustment,
            TensionVolatility::Electric => config.electric_adjustment,
        }
    }
}

/// Computes modifiers with the volatility tuning it was built with.
#[derive(Debug, Clone, Default)]
pub struct ModifierCalculator {
    volatility: VolatilityConfig,
}

impl ModifierCalculator {
    pub fn new(volatility: VolatilityConfig) -> Self {
        Self { volatility }
    }

    /// Samples tension volatility from `rng` and computes all modifiers.
    pub fn compute<R: Rng + ?Sized>(&self, state: &ChemistryState, rng: &mut R) -> Modifiers {
        let volatility = TensionVolatility::sample_with(state, &self.volatility, rng);
        self.compute_with(state, volatility)
    }

    /// Computes all modifiers for a known volatility sample.
    pub fn compute_with(&self, state: &ChemistryState, volatility: TensionVolatility) -> Modifiers {
        // Axes are already clamped by ChemistryState; only outputs need clamping here.
        let ch = state.chemistry_level() as f64;
        let t = state.romantic_tension() as f64;
        let ca = state.creative_alignment() as f64;
        let co = state.conflict_index() as f64;

        let song_quality = 0.7 + ca / 200.0 + ch / 500.0 - co / 500.0 - t / 1000.0;

        let performance = 0.6 + ch / 150.0 - co / 400.0 + ca / 500.0
            + volatility.adjustment(&self.volatility);

        let leave_risk = 0.4 * co + 0.2 * t - 0.3 * ch - 0.1 * ca + 15.0;

        let drama_chance = 2.0 + 0.35 * co + 0.2 * t - 0.15 * ch;

        let rehearsal = 0.6 + ch / 200.0 + ca / 250.0 - co / 500.0;

        let fan_perception = ch / 5.0 - co / 5.0 - t / 10.0 - 5.0;

        Modifiers {
            song_quality_multiplier: round3(clamp(song_quality, ranges::SONG_QUALITY)),
            performance_rating_multiplier: round3(clamp(performance, ranges::PERFORMANCE_RATING)),
            member_leave_risk: clamp(leave_risk, ranges::MEMBER_LEAVE_RISK).round() as u8,
            drama_event_chance: clamp(drama_chance, ranges::DRAMA_EVENT_CHANCE).round() as u8,
            rehearsal_efficiency_multiplier: round3(clamp(rehearsal, ranges::REHEARSAL_EFFICIENCY)),
            fan_perception_modifier: clamp(fan_perception, ranges::FAN_PERCEPTION).round() as i32,
        }
    }
}

/// Computes modifiers with default volatility tuning.
pub fn compute_modifiers<R: Rng + ?Sized>(state: &ChemistryState, rng: &mut R) -> Modifiers {
    ModifierCalculator::default().compute(state, rng)
}

/// Deterministic variant of [`compute_modifiers`] for a known volatility sample.
pub fn compute_modifiers_with(state: &ChemistryState, volatility: TensionVolatility) -> Modifiers {
    ModifierCalculator::default().compute_with(state, volatility)
}

fn clamp(value: f64, (min, max): (f64, f64)) -> f64 {
    value.clamp(min, max)
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_midpoint_band_calm() {
        // Tension 50 is not above the threshold, so no volatility applies.
        let state = ChemistryState::new(50, 50, 50, 50);
        let m = compute_modifiers_with(&state, TensionVolatility::Calm);

        // 0.7 + 0.25 + 0.1 - 0.1 - 0.05
        assert_eq!(m.song_quality_multiplier, 0.9);
        // 0.6 + 0.3333 - 0.125 + 0.1
        assert_eq!(m.performance_rating_multiplier, 0.908);
        // 20 + 10 - 15 - 5 + 15
        assert_eq!(m.member_leave_risk, 25);
        // 2 + 17.5 + 10 - 7.5
        assert_eq!(m.drama_event_chance, 22);
        // 0.6 + 0.25 + 0.2 - 0.1
        assert_eq!(m.rehearsal_efficiency_multiplier, 0.95);
        // 10 - 10 - 5 - 5
        assert_eq!(m.fan_perception_modifier, -10);
    }

    #[test]
    fn test_perfect_band_hits_upper_clamps() {
        let state = ChemistryState::new(100, 0, 100, 0);
        let m = compute_modifiers_with(&state, TensionVolatility::Calm);

        // 0.7 + 0.5 + 0.2
        assert_eq!(m.song_quality_multiplier, 1.4);
        // 0.6 + 0.6667 + 0.2 = 1.4667
        assert_eq!(m.performance_rating_multiplier, 1.467);
        // 15 - 30 - 10 is negative
        assert_eq!(m.member_leave_risk, 0);
        // 2 - 15 clamps to the floor
        assert_eq!(m.drama_event_chance, 2);
        // 0.6 + 0.5 + 0.4 = 1.5
        assert_eq!(m.rehearsal_efficiency_multiplier, 1.5);
        // 20 - 5
        assert_eq!(m.fan_perception_modifier, 15);
    }

    #[test]
    fn test_worst_band_hits_lower_clamps() {
        let state = ChemistryState::new(0, 100, 0, 100);
        let m = compute_modifiers_with(&state, TensionVolatility::Destabilizing);

        // 0.7 - 0.2 - 0.1 = 0.4 clamps up
        assert_eq!(m.song_quality_multiplier, 0.6);
        // 0.6 - 0.25 - 0.1 = 0.25 clamps up
        assert_eq!(m.performance_rating_multiplier, 0.5);
        // 40 + 20 + 15 = 75
        assert_eq!(m.member_leave_risk, 75);
        // 2 + 35 + 20 = 57
        assert_eq!(m.drama_event_chance, 57);
        // 0.6 - 0.2 = 0.4 clamps up
        assert_eq!(m.rehearsal_efficiency_multiplier, 0.5);
        // -20 - 10 - 5 = -35 clamps up
        assert_eq!(m.fan_perception_modifier, -25);
    }

    #[test]
    fn test_half_points_round_away_from_zero() {
        // 10 - 10 - 1.5 - 5
        let m = compute_modifiers_with(&ChemistryState::new(50, 15, 50, 50), TensionVolatility::Calm);
        assert_eq!(m.fan_perception_modifier, -7);
        // -0.5 - 5
        let m = compute_modifiers_with(&ChemistryState::new(0, 5, 0, 0), TensionVolatility::Calm);
        assert_eq!(m.fan_perception_modifier, -6);
        // 12 - 0.5 - 5
        let m = compute_modifiers_with(&ChemistryState::new(60, 5, 0, 0), TensionVolatility::Calm);
        assert_eq!(m.fan_perception_modifier, 7);
    }

    #[test]
    fn test_volatility_shifts_only_performance() {
        let state = ChemistryState::new(60, 80, 50, 20);
        let calm = compute_modifiers_with(&state, TensionVolatility::Calm);
        let bad = compute_modifiers_with(&state, TensionVolatility::Destabilizing);
        let electric = compute_modifiers_with(&state, TensionVolatility::Electric);

        assert!((bad.performance_rating_multiplier - (calm.performance_rating_multiplier - 0.1)).abs() < 0.0015);
        assert!((electric.performance_rating_multiplier - (calm.performance_rating_multiplier + 0.08)).abs() < 0.0015);

        assert_eq!(bad.song_quality_multiplier, calm.song_quality_multiplier);
        assert_eq!(electric.member_leave_risk, calm.member_leave_risk);
        assert_eq!(electric.fan_perception_modifier, calm.fan_perception_modifier);
    }

    #[test]
    fn test_low_tension_is_always_calm() {
        let mut rng = SmallRng::seed_from_u64(7);
        let state = ChemistryState::new(50, 50, 50, 50);
        for _ in 0..50 {
            assert_eq!(TensionVolatility::sample(&state, &mut rng), TensionVolatility::Calm);
        }
    }

    #[test]
    fn test_high_tension_samples_both_outcomes() {
        let mut rng = SmallRng::seed_from_u64(42);
        let state = ChemistryState::new(50, 90, 50, 50);
        let samples: Vec<_> = (0..1000)
            .map(|_| TensionVolatility::sample(&state, &mut rng))
            .collect();

        let bad = samples.iter().filter(|v| **v == TensionVolatility::Destabilizing).count();
        let electric = samples.iter().filter(|v| **v == TensionVolatility::Electric).count();

        assert_eq!(bad + electric, 1000);
        // Expect roughly 600 / 400
        assert!((500..700).contains(&bad), "destabilizing count {}", bad);
    }

    #[test]
    fn test_compute_is_reproducible_with_seed() {
        let state = ChemistryState::new(45, 75, 40, 55);
        let mut rng1 = SmallRng::seed_from_u64(99);
        let mut rng2 = SmallRng::seed_from_u64(99);
        for _ in 0..20 {
            assert_eq!(compute_modifiers(&state, &mut rng1), compute_modifiers(&state, &mut rng2));
        }
    }

    #[test]
    fn test_custom_volatility_tuning() {
        let calculator = ModifierCalculator::new(VolatilityConfig {
            tension_threshold: 10,
            destabilizing_adjustment: -0.2,
            electric_adjustment: 0.2,
            destabilizing_probability: 1.0,
        });
        let state = ChemistryState::new(50, 20, 50, 50);
        let mut rng = SmallRng::seed_from_u64(1);
        let m = calculator.compute(&state, &mut rng);
        let calm = calculator.compute_with(&state, TensionVolatility::Calm);
        assert!((m.performance_rating_multiplier - (calm.performance_rating_multiplier - 0.2)).abs() < 0.0015);
    }
}
