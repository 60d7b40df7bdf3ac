use tracing::{debug, info};

use crate::models::{Resort, SkillLevel};

static RESORTS: [Resort; 5] = [
    Resort {
        name: "Chamonix",
        country: "France",
        skill_level: SkillLevel::Advanced,
        cost_per_trip: 850,
        vibe: "Extreme off-piste with Mont Blanc views",
    },
    Resort {
        name: "Courchevel",
        country: "France",
        skill_level: SkillLevel::Intermediate,
        cost_per_trip: 1200,
        vibe: "Luxury slopes and fine dining",
    },
    Resort {
        name: "Val Thorens",
        country: "France",
        skill_level: SkillLevel::AllLevels,
        cost_per_trip: 950,
        vibe: "Europe's highest resort, snow-sure all season",
    },
    Resort {
        name: "St Anton",
        country: "Austria",
        skill_level: SkillLevel::Advanced,
        cost_per_trip: 780,
        vibe: "Legendary après-ski and challenging terrain",
    },
    Resort {
        name: "Zermatt",
        country: "Switzerland",
        skill_level: SkillLevel::Intermediate,
        cost_per_trip: 1400,
        vibe: "Car-free village with Matterhorn magic",
    },
];

/// Ski resort catalog
pub struct ResortCatalog;

impl ResortCatalog {
    /// All resorts in catalog order
    #[must_use]
    pub fn all() -> &'static [Resort] {
        &RESORTS
    }

    /// Resorts whose skill label contains `skill` and whose trip cost fits
    /// `budget`, in catalog order
    #[must_use]
    pub fn find_matches(skill: &str, budget: i64) -> Vec<&'static Resort> {
        let matches: Vec<&'static Resort> = RESORTS
            .iter()
            .filter(|resort| resort.suits_skill(skill) && resort.within_budget(budget))
            .collect();

        if matches.is_empty() {
            info!("No resorts found for skill '{}' within budget {}", skill, budget);
        } else {
            debug!(
                "Resorts matching skill '{}' within budget {}: {:?}",
                skill,
                budget,
                matches.iter().map(|r| r.name).collect::<Vec<_>>()
            );
        }

        matches
    }

    /// The resort used for the itinerary: first match in catalog order
    #[must_use]
    pub fn best_match(skill: &str, budget: i64) -> Option<&'static Resort> {
        Self::find_matches(skill, budget).into_iter().next()
    }
}
