//! Ski resort model

use std::fmt;

/// Skier ability a resort is suited to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
    AllLevels,
}

impl SkillLevel {
    /// Every level, in the order the search form offers them
    pub const ALL: [SkillLevel; 4] = [
        SkillLevel::Beginner,
        SkillLevel::Intermediate,
        SkillLevel::Advanced,
        SkillLevel::AllLevels,
    ];

    /// Human-readable label, also the value submitted by the form
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            SkillLevel::Beginner => "Beginner",
            SkillLevel::Intermediate => "Intermediate",
            SkillLevel::Advanced => "Advanced",
            SkillLevel::AllLevels => "All Levels",
        }
    }

    /// Exact label match; anything else is unrecognized
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.label() == label)
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Static catalog entry for a ski resort
#[derive(Debug, Clone, PartialEq)]
pub struct Resort {
    pub name: &'static str,
    pub country: &'static str,
    pub skill_level: SkillLevel,
    /// Estimated cost of a trip in pounds
    pub cost_per_trip: u32,
    pub vibe: &'static str,
}

impl Resort {
    /// Whether the requested skill appears in this resort's skill label
    #[must_use]
    pub fn suits_skill(&self, skill: &str) -> bool {
        self.skill_level.label().contains(skill)
    }

    #[must_use]
    pub fn within_budget(&self, budget: i64) -> bool {
        i64::from(self.cost_per_trip) <= budget
    }
}
