//! Drama Preset Types
//!
//! Keys and definitions for catalog-defined drama events. The catalog table
//! itself lives in `band-chemistry`; this module only holds the shapes so
//! that history records can reference presets without pulling in the engine.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::state::ChemistryDelta;

/// How badly a drama event shakes the band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Minor,
    Moderate,
    Major,
    Critical,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Minor => write!(f, "minor"),
            Severity::Moderate => write!(f, "moderate"),
            Severity::Major => write!(f, "major"),
            Severity::Critical => write!(f, "critical"),
        }
    }
}

/// Conceptual grouping of presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DramaCategory {
    /// Entanglements between members
    Romantic,
    /// Disputes over the music itself
    Creative,
    /// Ego and status competition
    Rivalry,
    /// Events visible to press and fans
    Public,
    /// Situations that put the lineup at risk
    Escalation,
    /// Reconciliation and unity moments
    Positive,
}

impl fmt::Display for DramaCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DramaCategory::Romantic => write!(f, "romantic"),
            DramaCategory::Creative => write!(f, "creative"),
            DramaCategory::Rivalry => write!(f, "rivalry"),
            DramaCategory::Public => write!(f, "public"),
            DramaCategory::Escalation => write!(f, "escalation"),
            DramaCategory::Positive => write!(f, "positive"),
        }
    }
}

/// Identifier of a catalog preset.
///
/// Serializes to the snake_case keys used in persisted history rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PresetKey {
    // Romantic
    RomanticTensionRise,
    SecretRomance,
    LoveTriangle,
    RomanticBreakup,
    // Creative
    CreativeClash,
    GenreDisagreement,
    SongwritingDispute,
    CreditDispute,
    // Rivalry
    RivalryEruption,
    JealousyIncident,
    SpotlightBattle,
    // Public
    PublicScandal,
    MediaFallout,
    FanBacklash,
    SocialMediaFeud,
    // Escalation
    MemberThreatLeave,
    OnstageFight,
    Ultimatum,
    // Positive
    UnityMoment,
    CreativeBreakthrough,
    Reconciliation,
    BondingTrip,
}

impl PresetKey {
    /// Every preset key, in catalog order.
    pub const ALL: [PresetKey; 22] = [
        PresetKey::RomanticTensionRise,
        PresetKey::SecretRomance,
        PresetKey::LoveTriangle,
        PresetKey::RomanticBreakup,
        PresetKey::CreativeClash,
        PresetKey::GenreDisagreement,
        PresetKey::SongwritingDispute,
        PresetKey::CreditDispute,
        PresetKey::RivalryEruption,
        PresetKey::JealousyIncident,
        PresetKey::SpotlightBattle,
        PresetKey::PublicScandal,
        PresetKey::MediaFallout,
        PresetKey::FanBacklash,
        PresetKey::SocialMediaFeud,
        PresetKey::MemberThreatLeave,
        PresetKey::OnstageFight,
        PresetKey::Ultimatum,
        PresetKey::UnityMoment,
        PresetKey::CreativeBreakthrough,
        PresetKey::Reconciliation,
        PresetKey::BondingTrip,
    ];

    /// The persisted string form of this key.
    pub fn as_str(self) -> &'static str {
        match self {
            PresetKey::RomanticTensionRise => "romantic_tension_rise",
            PresetKey::SecretRomance => "secret_romance",
            PresetKey::LoveTriangle => "love_triangle",
            PresetKey::RomanticBreakup => "romantic_breakup",
            PresetKey::CreativeClash => "creative_clash",
            PresetKey::GenreDisagreement => "genre_disagreement",
            PresetKey::SongwritingDispute => "songwriting_dispute",
            PresetKey::CreditDispute => "credit_dispute",
            PresetKey::RivalryEruption => "rivalry_eruption",
            PresetKey::JealousyIncident => "jealousy_incident",
            PresetKey::SpotlightBattle => "spotlight_battle",
            PresetKey::PublicScandal => "public_scandal",
            PresetKey::MediaFallout => "media_fallout",
            PresetKey::FanBacklash => "fan_backlash",
            PresetKey::SocialMediaFeud => "social_media_feud",
            PresetKey::MemberThreatLeave => "member_threat_leave",
            PresetKey::OnstageFight => "onstage_fight",
            PresetKey::Ultimatum => "ultimatum",
            PresetKey::UnityMoment => "unity_moment",
            PresetKey::CreativeBreakthrough => "creative_breakthrough",
            PresetKey::Reconciliation => "reconciliation",
            PresetKey::BondingTrip => "bonding_trip",
        }
    }
}

impl fmt::Display for PresetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PresetKey {
    type Err = ParsePresetKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PresetKey::ALL
            .iter()
            .copied()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| ParsePresetKeyError(s.to_string()))
    }
}

/// Error returned when a string names no catalog preset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePresetKeyError(pub String);

impl fmt::Display for ParsePresetKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown drama preset: '{}'", self.0)
    }
}

impl std::error::Error for ParsePresetKeyError {}

/// Immutable catalog entry describing one kind of drama event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DramaEventPreset {
    pub key: PresetKey,
    pub category: DramaCategory,
    pub label: &'static str,
    pub severity: Severity,
    /// Applied to the band's state when the preset fires
    pub deltas: ChemistryDelta,
    /// Percentage points added to each member's chance of leaving
    pub leave_risk: u8,
    /// Whether the event is visible outside the band
    pub is_public: bool,
    pub description: &'static str,
}

impl DramaEventPreset {
    /// Returns true for reconciliation and unity presets.
    pub fn is_healing(&self) -> bool {
        self.category == DramaCategory::Positive
    }
}
