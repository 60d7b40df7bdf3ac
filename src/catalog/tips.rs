use crate::models::SkillLevel;

const GENERIC_TIP: &str = "Enjoy the snow and stay safe!";
const NO_MATCH_TIP: &str = "No resorts found. Try adjusting your budget or skill level.";

/// Rule-based recommendation text
pub struct TipAdvisor;

impl TipAdvisor {
    /// Tip for a skier of `skill` visiting `resort`
    #[must_use]
    pub fn tip_for(skill: &str, resort: &str) -> String {
        match SkillLevel::from_label(skill) {
            Some(SkillLevel::Advanced) => format!(
                "For {skill} skiers, {resort} has world-class off-piste — rent a guide for safety!"
            ),
            Some(SkillLevel::Intermediate) => format!(
                "{resort} is ideal for {skill} skiers with perfect blue/red runs and progression areas."
            ),
            Some(SkillLevel::Beginner) => format!(
                "Great for {skill} skiers! {resort} has gentle nursery slopes and English-speaking instructors."
            ),
            Some(SkillLevel::AllLevels) | None => GENERIC_TIP.to_string(),
        }
    }

    /// Tip shown when no resort matched the search
    #[must_use]
    pub fn no_match_tip() -> String {
        NO_MATCH_TIP.to_string()
    }
}
