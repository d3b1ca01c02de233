//! Trigger Sources and Candidates
//!
//! A trigger source is the reason the engine is being consulted; a candidate
//! is a preset the evaluator proposes together with its chance of firing.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::preset::PresetKey;

/// Situational tag describing why drama is being evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerSource {
    /// Two members ended a relationship
    RomanticBreakup,
    /// A rivalry between members flared up
    Rivalry,
    /// The band argued about its direction
    CreativeDisagreement,
    /// A member was caught in a public scandal
    PublicScandal,
    /// Scheduled ambient pass
    WeeklyCheck,
    /// A gig finished
    GigOutcome,
    /// The band spent time writing together
    SongwritingSession,
}

impl TriggerSource {
    /// Every trigger source.
    pub const ALL: [TriggerSource; 7] = [
        TriggerSource::RomanticBreakup,
        TriggerSource::Rivalry,
        TriggerSource::CreativeDisagreement,
        TriggerSource::PublicScandal,
        TriggerSource::WeeklyCheck,
        TriggerSource::GigOutcome,
        TriggerSource::SongwritingSession,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TriggerSource::RomanticBreakup => "romantic_breakup",
            TriggerSource::Rivalry => "rivalry",
            TriggerSource::CreativeDisagreement => "creative_disagreement",
            TriggerSource::PublicScandal => "public_scandal",
            TriggerSource::WeeklyCheck => "weekly_check",
            TriggerSource::GigOutcome => "gig_outcome",
            TriggerSource::SongwritingSession => "songwriting_session",
        }
    }
}

impl fmt::Display for TriggerSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TriggerSource {
    type Err = ParseTriggerSourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TriggerSource::ALL
            .iter()
            .copied()
            .find(|source| source.as_str() == s)
            .ok_or_else(|| ParseTriggerSourceError(s.to_string()))
    }
}

/// Error returned for an unrecognized trigger tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTriggerSourceError(pub String);

impl fmt::Display for ParseTriggerSourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown trigger source: '{}'", self.0)
    }
}

impl std::error::Error for ParseTriggerSourceError {}

/// A preset proposed by the trigger evaluator, not yet rolled.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub preset: PresetKey,
    /// Chance of firing, in percent
    pub probability: f64,
}

impl Candidate {
    pub fn new(preset: PresetKey, probability: f64) -> Self {
        Self {
            preset,
            probability,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trigger_source_round_trips_through_str() {
        for source in TriggerSource::ALL {
            assert_eq!(source.as_str().parse::<TriggerSource>(), Ok(source));
            let json = serde_json::to_string(&source).unwrap();
            assert_eq!(json, format!("\"{}\"", source));
        }
    }

    #[test]
    fn test_unknown_trigger_source() {
        let err = "album_release".parse::<TriggerSource>().unwrap_err();
        assert_eq!(err.to_string(), "unknown trigger source: 'album_release'");
    }
}
