//! Drama Event History Records
//!
//! One `BandDramaEvent` is appended per fired preset. Records are never
//! deleted; a separate resolution workflow only marks them resolved.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::preset::{DramaEventPreset, PresetKey, Severity};
use crate::state::ChemistryDelta;
use crate::timestamp::GameWeek;

/// Identifier of a band.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BandId(pub String);

impl BandId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for BandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a band member.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberId(pub String);

impl MemberId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Resolution state of a drama event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub resolved: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolution_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolved_at: Option<GameWeek>,
}

/// Caller-supplied facts attached to every event fired in one invocation.
///
/// Choosing the instigator and target is the caller's business.
#[derive(Debug, Clone, PartialEq)]
pub struct EventContext {
    pub band_id: BandId,
    pub week: GameWeek,
    pub instigator: Option<MemberId>,
    pub target: Option<MemberId>,
    pub metadata: serde_json::Map<String, serde_json::Value>,
}

impl EventContext {
    pub fn new(band_id: BandId, week: GameWeek) -> Self {
        Self {
            band_id,
            week,
            instigator: None,
            target: None,
            metadata: serde_json::Map::new(),
        }
    }

    pub fn with_instigator(mut self, member: MemberId) -> Self {
        self.instigator = Some(member);
        self
    }

    pub fn with_target(mut self, member: MemberId) -> Self {
        self.target = Some(member);
        self
    }

    /// Adds a metadata entry copied onto every produced event.
    pub fn with_metadata(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }
}

/// A fired drama event as stored in a band's history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BandDramaEvent {
    pub event_id: Uuid,
    pub band_id: BandId,
    pub preset: PresetKey,
    pub severity: Severity,
    /// Deltas the preset requested, before clamping
    pub deltas: ChemistryDelta,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instigator: Option<MemberId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<MemberId>,
    pub leave_risk: u8,
    #[serde(default)]
    pub resolution: Resolution,
    pub description: String,
    pub is_public: bool,
    pub media_coverage: bool,
    #[serde(default, skip_serializing_if = "serde_json::Map::is_empty")]
    pub metadata: serde_json::Map<String, serde_json::Value>,
    pub created_at: GameWeek,
}

impl BandDramaEvent {
    /// Builds an unresolved history record for a preset that just fired.
    ///
    /// Public presets of major severity or worse draw media coverage.
    pub fn from_preset(preset: &DramaEventPreset, ctx: &EventContext) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            band_id: ctx.band_id.clone(),
            preset: preset.key,
            severity: preset.severity,
            deltas: preset.deltas,
            instigator: ctx.instigator.clone(),
            target: ctx.target.clone(),
            leave_risk: preset.leave_risk,
            resolution: Resolution::default(),
            description: preset.description.to_string(),
            is_public: preset.is_public,
            media_coverage: preset.is_public && preset.severity >= Severity::Major,
            metadata: ctx.metadata.clone(),
            created_at: ctx.week,
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.resolution.resolved
    }

    /// Marks the event resolved. Returns false if it already was.
    pub fn resolve(&mut self, resolution_type: impl Into<String>, week: GameWeek) -> bool {
        if self.resolution.resolved {
            return false;
        }
        self.resolution = Resolution {
            resolved: true,
            resolution_type: Some(resolution_type.into()),
            resolved_at: Some(week),
        };
        true
    }

    /// Serializes the event to a single JSON line.
    pub fn to_jsonl(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserializes an event from a JSON line.
    pub fn from_jsonl(line: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preset::DramaCategory;

    fn scandal() -> DramaEventPreset {
        DramaEventPreset {
            key: PresetKey::PublicScandal,
            category: DramaCategory::Public,
            label: "Public Scandal",
            severity: Severity::Major,
            deltas: ChemistryDelta::new(-12, 5, -5, 15),
            leave_risk: 10,
            is_public: true,
            description: "A member's private life hits the headlines.",
        }
    }

    #[test]
    fn test_from_preset_copies_preset_and_context() {
        let ctx = EventContext::new(BandId::new("band_1"), GameWeek(7))
            .with_instigator(MemberId::new("drummer"))
            .with_metadata("venue", serde_json::json!("The Roxy"));
        let event = BandDramaEvent::from_preset(&scandal(), &ctx);

        assert_eq!(event.band_id, BandId::new("band_1"));
        assert_eq!(event.preset, PresetKey::PublicScandal);
        assert_eq!(event.deltas, ChemistryDelta::new(-12, 5, -5, 15));
        assert_eq!(event.instigator, Some(MemberId::new("drummer")));
        assert_eq!(event.target, None);
        assert_eq!(event.leave_risk, 10);
        assert!(event.is_public);
        assert!(event.media_coverage);
        assert!(!event.is_resolved());
        assert_eq!(event.created_at, GameWeek(7));
        assert_eq!(event.metadata.get("venue"), Some(&serde_json::json!("The Roxy")));
    }

    #[test]
    fn test_private_event_gets_no_media_coverage() {
        let mut preset = scandal();
        preset.is_public = false;
        let event = BandDramaEvent::from_preset(&preset, &EventContext::new(BandId::new("b"), GameWeek(0)));
        assert!(!event.media_coverage);
    }

    #[test]
    fn test_minor_public_event_gets_no_media_coverage() {
        let mut preset = scandal();
        preset.severity = Severity::Moderate;
        let event = BandDramaEvent::from_preset(&preset, &EventContext::new(BandId::new("b"), GameWeek(0)));
        assert!(event.is_public);
        assert!(!event.media_coverage);
    }

    #[test]
    fn test_resolve_only_once() {
        let mut event =
            BandDramaEvent::from_preset(&scandal(), &EventContext::new(BandId::new("b"), GameWeek(1)));

        assert!(event.resolve("apology_tour", GameWeek(3)));
        assert!(event.is_resolved());
        assert_eq!(event.resolution.resolution_type.as_deref(), Some("apology_tour"));
        assert_eq!(event.resolution.resolved_at, Some(GameWeek(3)));

        assert!(!event.resolve("ignored", GameWeek(4)));
        assert_eq!(event.resolution.resolved_at, Some(GameWeek(3)));
    }

    #[test]
    fn test_jsonl_round_trip() {
        let event =
            BandDramaEvent::from_preset(&scandal(), &EventContext::new(BandId::new("b"), GameWeek(2)));
        let line = event.to_jsonl().unwrap();
        assert!(!line.contains('\n'));
        assert!(line.contains(r#""preset":"public_scandal""#));
        assert_eq!(BandDramaEvent::from_jsonl(&line).unwrap(), event);
    }
}
