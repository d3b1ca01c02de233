//! Trigger Evaluator
//!
//! Proposes drama candidates for a situation. Each trigger source has one
//! handler; probabilities are independent percentages and are not
//! normalized. Candidate order matters: the roller gives earlier entries
//! priority when its cap truncates the list.

use band_events::{Candidate, ChemistryState, PresetKey, TriggerSource};

/// Proposes candidates for a trigger source. Deterministic.
pub fn evaluate_triggers(state: &ChemistryState, source: TriggerSource) -> Vec<Candidate> {
    match source {
        TriggerSource::RomanticBreakup => romantic_breakup(state),
        TriggerSource::Rivalry => rivalry(state),
        TriggerSource::CreativeDisagreement => creative_disagreement(state),
        TriggerSource::PublicScandal => public_scandal(),
        TriggerSource::WeeklyCheck => weekly_check(state),
        TriggerSource::GigOutcome => gig_outcome(state),
        TriggerSource::SongwritingSession => songwriting_session(state),
    }
}

/// Evaluates a string-tagged trigger. Unrecognized tags yield no candidates.
pub fn evaluate_triggers_by_name(state: &ChemistryState, source: &str) -> Vec<Candidate> {
    match source.parse::<TriggerSource>() {
        Ok(source) => evaluate_triggers(state, source),
        Err(_) => Vec::new(),
    }
}

fn romantic_breakup(state: &ChemistryState) -> Vec<Candidate> {
    let mut candidates = vec![Candidate::new(PresetKey::RomanticBreakup, 90.0)];
    if state.romantic_tension() > 40 {
        candidates.push(Candidate::new(PresetKey::MemberThreatLeave, 20.0));
    }
    if state.conflict_index() > 50 {
        candidates.push(Candidate::new(PresetKey::RivalryEruption, 30.0));
    }
    candidates
}

fn rivalry(state: &ChemistryState) -> Vec<Candidate> {
    let mut candidates = vec![
        Candidate::new(PresetKey::RivalryEruption, 70.0),
        Candidate::new(PresetKey::JealousyIncident, 40.0),
    ];
    if state.conflict_index() > 60 {
        candidates.push(Candidate::new(PresetKey::MemberThreatLeave, 25.0));
    }
    candidates
}

fn creative_disagreement(state: &ChemistryState) -> Vec<Candidate> {
    let mut candidates = vec![
        Candidate::new(PresetKey::CreativeClash, 60.0),
        Candidate::new(PresetKey::GenreDisagreement, 40.0),
        Candidate::new(PresetKey::SongwritingDispute, 30.0),
    ];
    // A well-aligned band can argue its way into something better.
    if state.creative_alignment() > 60 {
        candidates.push(Candidate::new(PresetKey::CreativeBreakthrough, 15.0));
    }
    candidates
}

fn public_scandal() -> Vec<Candidate> {
    vec![
        Candidate::new(PresetKey::PublicScandal, 80.0),
        Candidate::new(PresetKey::MediaFallout, 60.0),
        Candidate::new(PresetKey::FanBacklash, 50.0),
    ]
}

fn weekly_check(state: &ChemistryState) -> Vec<Candidate> {
    let mut candidates = Vec::new();
    let conflict = state.conflict_index();
    let tension = state.romantic_tension();

    if conflict > 60 {
        candidates.push(Candidate::new(PresetKey::MemberThreatLeave, conflict as f64 / 5.0));
    }
    if tension > 50 {
        candidates.push(Candidate::new(PresetKey::RomanticTensionRise, tension as f64 / 4.0));
    }
    if state.creative_alignment() < 30 {
        candidates.push(Candidate::new(PresetKey::CreativeClash, 15.0));
    }
    if state.chemistry_level() > 75 && conflict < 20 {
        candidates.push(Candidate::new(PresetKey::UnityMoment, 10.0));
    }
    candidates
}

fn gig_outcome(state: &ChemistryState) -> Vec<Candidate> {
    let mut candidates = Vec::new();
    if state.conflict_index() > 40 {
        candidates.push(Candidate::new(PresetKey::RivalryEruption, 15.0));
    }
    if state.romantic_tension() > 60 {
        candidates.push(Candidate::new(PresetKey::JealousyIncident, 20.0));
    }
    if state.chemistry_level() > 60 {
        candidates.push(Candidate::new(PresetKey::UnityMoment, 12.0));
    }
    candidates
}

fn songwriting_session(state: &ChemistryState) -> Vec<Candidate> {
    let mut candidates = Vec::new();
    if state.creative_alignment() < 40 {
        candidates.push(Candidate::new(PresetKey::SongwritingDispute, 25.0));
    }
    if state.creative_alignment() > 70 {
        candidates.push(Candidate::new(PresetKey::CreativeBreakthrough, 20.0));
    }
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(candidates: &[Candidate]) -> Vec<PresetKey> {
        candidates.iter().map(|c| c.preset).collect()
    }

    fn probability_of(candidates: &[Candidate], key: PresetKey) -> Option<f64> {
        candidates.iter().find(|c| c.preset == key).map(|c| c.probability)
    }

    #[test]
    fn test_breakup_always_proposes_breakup_first() {
        let calm = ChemistryState::new(80, 10, 70, 10);
        let candidates = evaluate_triggers(&calm, TriggerSource::RomanticBreakup);
        assert_eq!(candidates, vec![Candidate::new(PresetKey::RomanticBreakup, 90.0)]);
    }

    #[test]
    fn test_breakup_escalates_with_tension_and_conflict() {
        let state = ChemistryState::new(40, 41, 50, 51);
        let candidates = evaluate_triggers(&state, TriggerSource::RomanticBreakup);
        assert_eq!(
            candidates,
            vec![
                Candidate::new(PresetKey::RomanticBreakup, 90.0),
                Candidate::new(PresetKey::MemberThreatLeave, 20.0),
                Candidate::new(PresetKey::RivalryEruption, 30.0),
            ]
        );
    }

    #[test]
    fn test_breakup_thresholds_are_strict() {
        let state = ChemistryState::new(40, 40, 50, 50);
        assert_eq!(evaluate_triggers(&state, TriggerSource::RomanticBreakup).len(), 1);
    }

    #[test]
    fn test_rivalry_candidates() {
        let low = ChemistryState::new(50, 20, 50, 60);
        assert_eq!(
            keys(&evaluate_triggers(&low, TriggerSource::Rivalry)),
            vec![PresetKey::RivalryEruption, PresetKey::JealousyIncident]
        );

        let high = ChemistryState::new(50, 20, 50, 61);
        let candidates = evaluate_triggers(&high, TriggerSource::Rivalry);
        assert_eq!(probability_of(&candidates, PresetKey::MemberThreatLeave), Some(25.0));
    }

    #[test]
    fn test_creative_disagreement_can_break_through() {
        let aligned = ChemistryState::new(50, 0, 61, 0);
        let candidates = evaluate_triggers(&aligned, TriggerSource::CreativeDisagreement);
        assert_eq!(
            keys(&candidates),
            vec![
                PresetKey::CreativeClash,
                PresetKey::GenreDisagreement,
                PresetKey::SongwritingDispute,
                PresetKey::CreativeBreakthrough,
            ]
        );
        assert_eq!(probability_of(&candidates, PresetKey::CreativeBreakthrough), Some(15.0));

        let split = ChemistryState::new(50, 0, 60, 0);
        assert_eq!(evaluate_triggers(&split, TriggerSource::CreativeDisagreement).len(), 3);
    }

    #[test]
    fn test_public_scandal_ignores_state() {
        let expected = vec![
            Candidate::new(PresetKey::PublicScandal, 80.0),
            Candidate::new(PresetKey::MediaFallout, 60.0),
            Candidate::new(PresetKey::FanBacklash, 50.0),
        ];
        assert_eq!(evaluate_triggers(&ChemistryState::default(), TriggerSource::PublicScandal), expected);
        assert_eq!(
            evaluate_triggers(&ChemistryState::new(0, 100, 0, 100), TriggerSource::PublicScandal),
            expected
        );
    }

    #[test]
    fn test_weekly_check_harmonious_band() {
        let state = ChemistryState::new(80, 10, 70, 10);
        let candidates = evaluate_triggers(&state, TriggerSource::WeeklyCheck);
        assert_eq!(probability_of(&candidates, PresetKey::UnityMoment), Some(10.0));
        assert_eq!(probability_of(&candidates, PresetKey::CreativeClash), None);
    }

    #[test]
    fn test_weekly_check_volatile_band() {
        let state = ChemistryState::new(40, 65, 50, 70);
        let candidates = evaluate_triggers(&state, TriggerSource::WeeklyCheck);
        assert_eq!(probability_of(&candidates, PresetKey::MemberThreatLeave), Some(14.0));
        assert_eq!(probability_of(&candidates, PresetKey::RomanticTensionRise), Some(16.25));
        assert_eq!(probability_of(&candidates, PresetKey::UnityMoment), None);
        assert_eq!(candidates.len(), 2);
    }

    #[test]
    fn test_weekly_check_misaligned_band_clashes() {
        let state = ChemistryState::new(50, 0, 29, 0);
        let candidates = evaluate_triggers(&state, TriggerSource::WeeklyCheck);
        assert_eq!(candidates, vec![Candidate::new(PresetKey::CreativeClash, 15.0)]);
    }

    #[test]
    fn test_weekly_check_quiet_band_has_no_candidates() {
        assert!(evaluate_triggers(&ChemistryState::default(), TriggerSource::WeeklyCheck).is_empty());
    }

    #[test]
    fn test_gig_outcome_candidates() {
        let state = ChemistryState::new(61, 61, 50, 41);
        assert_eq!(
            evaluate_triggers(&state, TriggerSource::GigOutcome),
            vec![
                Candidate::new(PresetKey::RivalryEruption, 15.0),
                Candidate::new(PresetKey::JealousyIncident, 20.0),
                Candidate::new(PresetKey::UnityMoment, 12.0),
            ]
        );
        let quiet = ChemistryState::new(60, 60, 50, 40);
        assert!(evaluate_triggers(&quiet, TriggerSource::GigOutcome).is_empty());
    }

    #[test]
    fn test_songwriting_session_candidates() {
        let stuck = ChemistryState::new(50, 0, 39, 0);
        assert_eq!(
            evaluate_triggers(&stuck, TriggerSource::SongwritingSession),
            vec![Candidate::new(PresetKey::SongwritingDispute, 25.0)]
        );
        let inspired = ChemistryState::new(50, 0, 71, 0);
        assert_eq!(
            evaluate_triggers(&inspired, TriggerSource::SongwritingSession),
            vec![Candidate::new(PresetKey::CreativeBreakthrough, 20.0)]
        );
        let neutral = ChemistryState::new(50, 0, 55, 0);
        assert!(evaluate_triggers(&neutral, TriggerSource::SongwritingSession).is_empty());
    }

    #[test]
    fn test_unknown_source_name_yields_nothing() {
        let state = ChemistryState::new(10, 90, 10, 90);
        assert!(evaluate_triggers_by_name(&state, "album_release").is_empty());
        assert!(evaluate_triggers_by_name(&state, "").is_empty());
        assert_eq!(
            evaluate_triggers_by_name(&state, "public_scandal"),
            evaluate_triggers(&state, TriggerSource::PublicScandal)
        );
    }

    #[test]
    fn test_evaluation_is_deterministic() {
        let state = ChemistryState::new(33, 77, 22, 88);
        for source in TriggerSource::ALL {
            assert_eq!(evaluate_triggers(&state, source), evaluate_triggers(&state, source));
        }
    }
}
