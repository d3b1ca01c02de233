//! Drama Preset Catalog
//!
//! The fixed table of drama events shipped with the engine. Entries are laid
//! out in `PresetKey::ALL` order so a key indexes its own entry; balance edits
//! are edits to the literals below.

use band_events::{ChemistryDelta, DramaCategory, DramaEventPreset, PresetKey, Severity};

use crate::error::ChemistryError;

static PRESETS: [DramaEventPreset; 22] = [
    // Romantic
    DramaEventPreset {
        key: PresetKey::RomanticTensionRise,
        category: DramaCategory::Romantic,
        label: "Romantic Tension Rises",
        severity: Severity::Minor,
        deltas: ChemistryDelta::new(-3, 12, 0, 4),
        leave_risk: 2,
        is_public: false,
        description: "Lingering looks and late-night talks leave the rest of the band uneasy.",
    },
    DramaEventPreset {
        key: PresetKey::SecretRomance,
        category: DramaCategory::Romantic,
        label: "Secret Romance",
        severity: Severity::Moderate,
        deltas: ChemistryDelta::new(-5, 18, -2, 5),
        leave_risk: 4,
        is_public: false,
        description: "Two members start seeing each other and try to keep it quiet.",
    },
    DramaEventPreset {
        key: PresetKey::LoveTriangle,
        category: DramaCategory::Romantic,
        label: "Love Triangle",
        severity: Severity::Major,
        deltas: ChemistryDelta::new(-12, 25, -5, 15),
        leave_risk: 12,
        is_public: false,
        description: "A third member gets caught up in an existing relationship.",
    },
    DramaEventPreset {
        key: PresetKey::RomanticBreakup,
        category: DramaCategory::Romantic,
        label: "Romantic Breakup",
        severity: Severity::Major,
        deltas: ChemistryDelta::new(-15, 30, -10, 20),
        leave_risk: 15,
        is_public: false,
        description: "Two members end their relationship and the fallout spills into rehearsals.",
    },
    // Creative
    DramaEventPreset {
        key: PresetKey::CreativeClash,
        category: DramaCategory::Creative,
        label: "Creative Clash",
        severity: Severity::Moderate,
        deltas: ChemistryDelta::new(-6, 0, -12, 10),
        leave_risk: 5,
        is_public: false,
        description: "Arrangements get torn apart as members pull the sound in different directions.",
    },
    DramaEventPreset {
        key: PresetKey::GenreDisagreement,
        category: DramaCategory::Creative,
        label: "Genre Disagreement",
        severity: Severity::Moderate,
        deltas: ChemistryDelta::new(-4, 0, -15, 6),
        leave_risk: 6,
        is_public: false,
        description: "Half the band wants to chase a new style; the other half refuses.",
    },
    DramaEventPreset {
        key: PresetKey::SongwritingDispute,
        category: DramaCategory::Creative,
        label: "Songwriting Dispute",
        severity: Severity::Minor,
        deltas: ChemistryDelta::new(-3, 0, -8, 6),
        leave_risk: 3,
        is_public: false,
        description: "A writing session stalls over whose idea makes the cut.",
    },
    DramaEventPreset {
        key: PresetKey::CreditDispute,
        category: DramaCategory::Creative,
        label: "Credit Dispute",
        severity: Severity::Major,
        deltas: ChemistryDelta::new(-10, 0, -10, 15),
        leave_risk: 10,
        is_public: false,
        description: "Members fight over songwriting credits and the royalties that follow.",
    },
    // Rivalry
    DramaEventPreset {
        key: PresetKey::RivalryEruption,
        category: DramaCategory::Rivalry,
        label: "Rivalry Erupts",
        severity: Severity::Major,
        deltas: ChemistryDelta::new(-12, 5, -5, 18),
        leave_risk: 10,
        is_public: false,
        description: "A long-simmering rivalry boils over into open hostility.",
    },
    DramaEventPreset {
        key: PresetKey::JealousyIncident,
        category: DramaCategory::Rivalry,
        label: "Jealousy Incident",
        severity: Severity::Moderate,
        deltas: ChemistryDelta::new(-6, 10, 0, 8),
        leave_risk: 5,
        is_public: false,
        description: "One member resents the attention another is getting.",
    },
    DramaEventPreset {
        key: PresetKey::SpotlightBattle,
        category: DramaCategory::Rivalry,
        label: "Spotlight Battle",
        severity: Severity::Moderate,
        deltas: ChemistryDelta::new(-5, 0, -4, 10),
        leave_risk: 6,
        is_public: true,
        description: "Members compete for the front of the stage in full view of the crowd.",
    },
    // Public
    DramaEventPreset {
        key: PresetKey::PublicScandal,
        category: DramaCategory::Public,
        label: "Public Scandal",
        severity: Severity::Major,
        deltas: ChemistryDelta::new(-12, 5, -5, 15),
        leave_risk: 10,
        is_public: true,
        description: "A member's private life hits the headlines.",
    },
    DramaEventPreset {
        key: PresetKey::MediaFallout,
        category: DramaCategory::Public,
        label: "Media Fallout",
        severity: Severity::Major,
        deltas: ChemistryDelta::new(-8, 0, -3, 12),
        leave_risk: 8,
        is_public: true,
        description: "Press coverage turns members against each other over who talked.",
    },
    DramaEventPreset {
        key: PresetKey::FanBacklash,
        category: DramaCategory::Public,
        label: "Fan Backlash",
        severity: Severity::Moderate,
        deltas: ChemistryDelta::new(-5, 0, -2, 8),
        leave_risk: 5,
        is_public: true,
        description: "Fans turn on the band and members argue over who is to blame.",
    },
    DramaEventPreset {
        key: PresetKey::SocialMediaFeud,
        category: DramaCategory::Public,
        label: "Social Media Feud",
        severity: Severity::Moderate,
        deltas: ChemistryDelta::new(-8, 3, 0, 12),
        leave_risk: 7,
        is_public: true,
        description: "Members air their grievances online for everyone to see.",
    },
    // Escalation
    DramaEventPreset {
        key: PresetKey::MemberThreatLeave,
        category: DramaCategory::Escalation,
        label: "Member Threatens to Leave",
        severity: Severity::Critical,
        deltas: ChemistryDelta::new(-20, 5, -10, 15),
        leave_risk: 25,
        is_public: false,
        description: "A member announces they are done unless something changes.",
    },
    DramaEventPreset {
        key: PresetKey::OnstageFight,
        category: DramaCategory::Escalation,
        label: "Onstage Fight",
        severity: Severity::Critical,
        deltas: ChemistryDelta::new(-18, 5, -5, 20),
        leave_risk: 20,
        is_public: true,
        description: "A backstage argument carries on in front of the audience.",
    },
    DramaEventPreset {
        key: PresetKey::Ultimatum,
        category: DramaCategory::Escalation,
        label: "Ultimatum",
        severity: Severity::Major,
        deltas: ChemistryDelta::new(-15, 8, -8, 12),
        leave_risk: 18,
        is_public: false,
        description: "A member demands the band choose between them and someone else.",
    },
    // Positive
    DramaEventPreset {
        key: PresetKey::UnityMoment,
        category: DramaCategory::Positive,
        label: "Unity Moment",
        severity: Severity::Minor,
        deltas: ChemistryDelta::new(10, -5, 5, -10),
        leave_risk: 0,
        is_public: false,
        description: "A shared moment reminds everyone why they started the band.",
    },
    DramaEventPreset {
        key: PresetKey::CreativeBreakthrough,
        category: DramaCategory::Positive,
        label: "Creative Breakthrough",
        severity: Severity::Moderate,
        deltas: ChemistryDelta::new(8, 0, 15, -5),
        leave_risk: 0,
        is_public: false,
        description: "An argument turns into the best song the band has written.",
    },
    DramaEventPreset {
        key: PresetKey::Reconciliation,
        category: DramaCategory::Positive,
        label: "Reconciliation",
        severity: Severity::Moderate,
        deltas: ChemistryDelta::new(12, -10, 5, -15),
        leave_risk: 0,
        is_public: false,
        description: "Estranged members sit down and clear the air.",
    },
    DramaEventPreset {
        key: PresetKey::BondingTrip,
        category: DramaCategory::Positive,
        label: "Bonding Trip",
        severity: Severity::Minor,
        deltas: ChemistryDelta::new(8, -3, 3, -6),
        leave_risk: 0,
        is_public: false,
        description: "Time away from the studio brings the band closer together.",
    },
];

/// Returns the catalog entry for a key.
pub fn preset(key: PresetKey) -> &'static DramaEventPreset {
    &PRESETS[key as usize]
}

/// All catalog entries, in key order.
pub fn all_presets() -> &'static [DramaEventPreset] {
    &PRESETS
}

/// Looks up a preset by its persisted string key.
pub fn lookup(key: &str) -> Result<&'static DramaEventPreset, ChemistryError> {
    let key: PresetKey = key.parse()?;
    Ok(preset(key))
}

/// Entries belonging to one category.
pub fn presets_in_category(
    category: DramaCategory,
) -> impl Iterator<Item = &'static DramaEventPreset> {
    PRESETS.iter().filter(move |p| p.category == category)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_is_indexed_by_key() {
        for key in PresetKey::ALL {
            assert_eq!(preset(key).key, key);
        }
        assert_eq!(all_presets().len(), PresetKey::ALL.len());
    }

    #[test]
    fn test_romantic_breakup_literal_deltas() {
        let breakup = preset(PresetKey::RomanticBreakup);
        assert_eq!(breakup.deltas, ChemistryDelta::new(-15, 30, -10, 20));
        assert_eq!(breakup.severity, Severity::Major);
        assert_eq!(breakup.category, DramaCategory::Romantic);
    }

    #[test]
    fn test_positive_presets_heal() {
        let healing: Vec<_> = presets_in_category(DramaCategory::Positive).collect();
        assert_eq!(healing.len(), 4);
        for p in healing {
            assert!(p.is_healing());
            assert!(p.deltas.chemistry > 0, "{} should raise chemistry", p.key);
            assert!(p.deltas.creative_alignment > 0, "{} should raise alignment", p.key);
            assert!(p.deltas.conflict < 0, "{} should lower conflict", p.key);
            assert!(p.deltas.romantic_tension <= 0, "{} should not add tension", p.key);
            assert_eq!(p.leave_risk, 0);
        }
    }

    #[test]
    fn test_negative_presets_never_heal_conflict() {
        for p in all_presets().iter().filter(|p| !p.is_healing()) {
            assert!(p.deltas.conflict > 0, "{} should raise conflict", p.key);
            assert!(p.deltas.chemistry < 0, "{} should lower chemistry", p.key);
        }
    }

    #[test]
    fn test_every_category_is_populated() {
        for category in [
            DramaCategory::Romantic,
            DramaCategory::Creative,
            DramaCategory::Rivalry,
            DramaCategory::Public,
            DramaCategory::Escalation,
            DramaCategory::Positive,
        ] {
            assert!(presets_in_category(category).count() >= 3, "{} too small", category);
        }
    }

    #[test]
    fn test_public_category_is_visible() {
        assert!(presets_in_category(DramaCategory::Public).all(|p| p.is_public));
    }

    #[test]
    fn test_lookup_by_string() {
        assert_eq!(lookup("unity_moment").unwrap().key, PresetKey::UnityMoment);
        assert!(matches!(
            lookup("stage_dive"),
            Err(ChemistryError::UnknownPreset(ref key)) if key == "stage_dive"
        ));
    }

    #[test]
    fn test_leave_risk_is_a_percentage() {
        assert!(all_presets().iter().all(|p| p.leave_risk <= 100));
        assert_eq!(preset(PresetKey::MemberThreatLeave).leave_risk, 25);
    }
}
