//! Sub-scores for one (profile, career) pair.
//!
//! Every sub-score lies in [0, 1]. Text matching is case-insensitive substring
//! containment, except the personality rules which compare exact English
//! keywords. A blank needle never matches.

use serde::{Deserialize, Serialize};

use crate::models::career::CareerDefinition;
use crate::models::profile::{PersonalityProfile, UserProfile, WorkPreferences};

// ────────────────────────────────────────────────────────────────────────────
// Weights
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub interest: f64,
    pub skill: f64,
    pub personality: f64,
    pub environment: f64,
    pub location: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            interest: 0.30,
            skill: 0.25,
            personality: 0.20,
            environment: 0.15,
            location: 0.10,
        }
    }
}

/// The five sub-scores behind one match score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SubScores {
    pub interest: f64,
    pub skill: f64,
    pub personality: f64,
    pub environment: f64,
    pub location: f64,
}

impl SubScores {
    pub fn weighted(&self, weights: &ScoringWeights) -> f64 {
        weights.interest * self.interest
            + weights.skill * self.skill
            + weights.personality * self.personality
            + weights.environment * self.environment
            + weights.location * self.location
    }
}

pub fn score_career(profile: &UserProfile, career: &CareerDefinition) -> SubScores {
    SubScores {
        interest: interest_score(&profile.interests, career),
        skill: skill_score(&profile.strengths, &career.required_skills),
        personality: personality_score(&profile.personality_profile, &career.title),
        environment: environment_score(&profile.work_preferences, career),
        location: location_score(&profile.personal_details.location, &career.key_locations),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Text matching
// ────────────────────────────────────────────────────────────────────────────

/// `haystack` contains `needle`, ignoring case. Blank needles never match.
pub(crate) fn contains_ci(haystack: &str, needle: &str) -> bool {
    if needle.trim().is_empty() {
        return false;
    }
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Either string contains the other, ignoring case.
pub(crate) fn matches_either(a: &str, b: &str) -> bool {
    if a.trim().is_empty() || b.trim().is_empty() {
        return false;
    }
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    a.contains(&b) || b.contains(&a)
}

// ────────────────────────────────────────────────────────────────────────────
// Interest / skill
// ────────────────────────────────────────────────────────────────────────────

pub fn interest_score(interests: &[String], career: &CareerDefinition) -> f64 {
    if interests.is_empty() {
        return 0.0;
    }

    let haystack = std::iter::once(career.title.as_str())
        .chain(std::iter::once(career.description.as_str()))
        .chain(career.required_skills.iter().map(String::as_str))
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ");

    let matches = interests
        .iter()
        .filter(|interest| contains_ci(&haystack, interest))
        .count();

    matches as f64 / interests.len() as f64
}

/// Strengths that hit at least one required skill, over the number of
/// required skills. Each strength counts at most once.
pub fn skill_score(strengths: &[String], required_skills: &[String]) -> f64 {
    if required_skills.is_empty() {
        return 0.0;
    }

    let matches = strengths
        .iter()
        .filter(|strength| {
            required_skills
                .iter()
                .any(|skill| matches_either(strength, skill))
        })
        .count();

    // Several strengths may hit the same skill; keep the ratio a sub-score.
    (matches as f64 / required_skills.len() as f64).min(1.0)
}

/// Required skills no strength covers, in catalog order.
pub fn skill_gaps(strengths: &[String], required_skills: &[String]) -> Vec<String> {
    required_skills
        .iter()
        .filter(|skill| !strengths.iter().any(|s| matches_either(s, skill)))
        .cloned()
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Personality
// ────────────────────────────────────────────────────────────────────────────

const PERSONALITY_BASELINE: f64 = 0.5;
const TRAIT_BONUS: f64 = 0.3;
const STYLE_BONUS: f64 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleField {
    Communication,
    Work,
}

/// Title keyword → trait bonus mapping.
#[derive(Debug, Clone, Copy)]
pub struct PersonalityRule {
    pub title_keywords: &'static [&'static str],
    pub primary_trait: &'static str,
    pub style_field: StyleField,
    pub style_keyword: &'static str,
}

pub const PERSONALITY_RULES: &[PersonalityRule] = &[
    PersonalityRule {
        title_keywords: &["Manager", "Lead"],
        primary_trait: "Leadership-oriented",
        style_field: StyleField::Communication,
        style_keyword: "presenter",
    },
    PersonalityRule {
        title_keywords: &["Developer", "Engineer"],
        primary_trait: "Analytical",
        style_field: StyleField::Work,
        style_keyword: "thorough",
    },
    PersonalityRule {
        title_keywords: &["Designer", "Creative"],
        primary_trait: "Innovative",
        style_field: StyleField::Communication,
        style_keyword: "Visual",
    },
];

impl PersonalityRule {
    fn applies_to(&self, title: &str) -> bool {
        self.title_keywords.iter().any(|kw| title.contains(kw))
    }

    fn bonus(&self, personality: &PersonalityProfile) -> f64 {
        let mut bonus = 0.0;
        if personality
            .primary_traits
            .iter()
            .any(|t| t == self.primary_trait)
        {
            bonus += TRAIT_BONUS;
        }
        let style = match self.style_field {
            StyleField::Communication => &personality.communication_style,
            StyleField::Work => &personality.work_style,
        };
        if style.contains(self.style_keyword) {
            bonus += STYLE_BONUS;
        }
        bonus
    }
}

pub fn personality_score(personality: &PersonalityProfile, title: &str) -> f64 {
    let score = PERSONALITY_RULES
        .iter()
        .filter(|rule| rule.applies_to(title))
        .fold(PERSONALITY_BASELINE, |acc, rule| acc + rule.bonus(personality));
    score.min(1.0)
}

// ────────────────────────────────────────────────────────────────────────────
// Environment / location
// ────────────────────────────────────────────────────────────────────────────

/// Careers carry no environment metadata yet, so every pair gets the same value.
pub const ENVIRONMENT_SCORE: f64 = 0.7;

pub fn environment_score(_preferences: &WorkPreferences, _career: &CareerDefinition) -> f64 {
    ENVIRONMENT_SCORE
}

pub const MAJOR_CITIES: [&str; 7] = [
    "Bangalore",
    "Mumbai",
    "Delhi",
    "Chennai",
    "Pune",
    "Hyderabad",
    "Kolkata",
];

const LOCATION_EXACT: f64 = 1.0;
const LOCATION_MAJOR_CITY: f64 = 0.8;
const LOCATION_OTHER: f64 = 0.4;

pub fn location_score(location: &str, key_locations: &[String]) -> f64 {
    if key_locations.iter().any(|loc| matches_either(location, loc)) {
        return LOCATION_EXACT;
    }
    if MAJOR_CITIES.iter().any(|city| contains_ci(location, city)) {
        return LOCATION_MAJOR_CITY;
    }
    LOCATION_OTHER
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::test_career;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn personality(traits: &[&str], work: &str, communication: &str) -> PersonalityProfile {
        PersonalityProfile {
            primary_traits: strings(traits),
            work_style: work.to_string(),
            communication_style: communication.to_string(),
        }
    }

    #[test]
    fn test_weights_sum_to_one() {
        let w = ScoringWeights::default();
        let sum = w.interest + w.skill + w.personality + w.environment + w.location;
        assert!((sum - 1.0).abs() < 1e-12, "sum was {sum}");
    }

    #[test]
    fn test_interest_score_empty_interests_is_zero() {
        let career = test_career("Chef", &["Cooking"], &[]);
        assert_eq!(interest_score(&[], &career), 0.0);
    }

    #[test]
    fn test_interest_score_matches_title_description_and_skills() {
        let career = test_career("Pastry Chef", &["Baking", "Plating"], &[]);
        let interests = strings(&["pastry", "BAKING", "welding", "work as"]);
        // pastry (title), baking (skill), "work as" (description); welding misses
        assert!((interest_score(&interests, &career) - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_interest_phrase_must_be_contiguous() {
        let career = test_career("Software Developer", &["Programming"], &[]);
        let interests = strings(&["Technology & Programming"]);
        assert_eq!(interest_score(&interests, &career), 0.0);
    }

    #[test]
    fn test_skill_score_counts_each_strength_once() {
        let required = strings(&[
            "Programming",
            "Problem Solving",
            "Database Management",
            "Version Control",
        ]);
        // "Management" hits only "Database Management"; "Program" hits "Programming"
        let strengths = strings(&["program", "Management", "Cooking"]);
        assert!((skill_score(&strengths, &required) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_skill_score_superstring_matches() {
        let required = strings(&["SEO"]);
        let strengths = strings(&["Advanced SEO audits"]);
        assert_eq!(skill_score(&strengths, &required), 1.0);
    }

    #[test]
    fn test_skill_score_no_required_skills_is_zero() {
        assert_eq!(skill_score(&strings(&["Writing"]), &[]), 0.0);
    }

    #[test]
    fn test_skill_score_never_exceeds_one() {
        let required = strings(&["Analytics"]);
        let strengths = strings(&["Analytics", "analytics", "Data Analytics"]);
        assert_eq!(skill_score(&strengths, &required), 1.0);
    }

    #[test]
    fn test_blank_strength_matches_nothing() {
        let required = strings(&["Writing"]);
        assert_eq!(skill_score(&strings(&["", "   "]), &required), 0.0);
        assert_eq!(skill_gaps(&strings(&[""]), &required), required);
    }

    #[test]
    fn test_skill_gaps_keep_catalog_order() {
        let required = strings(&[
            "Programming",
            "Problem Solving",
            "Database Management",
            "Version Control",
        ]);
        let strengths = strings(&["Programming", "Problem Solving"]);
        assert_eq!(
            skill_gaps(&strengths, &required),
            strings(&["Database Management", "Version Control"])
        );
    }

    #[test]
    fn test_personality_baseline_without_rules() {
        let p = personality(&["Analytical"], "thorough", "Visual presenter");
        assert_eq!(personality_score(&p, "Medical Doctor"), 0.5);
    }

    #[test]
    fn test_personality_manager_full_bonus() {
        let p = personality(&["Leadership-oriented"], "", "Confident presenter");
        assert!((personality_score(&p, "Product Manager") - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_personality_bonuses_are_independent() {
        let p = personality(&[], "Careful and thorough", "");
        assert!((personality_score(&p, "DevOps Engineer") - 0.7).abs() < 1e-12);
        let p = personality(&["Analytical"], "", "");
        assert!((personality_score(&p, "Software Developer") - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_personality_keywords_are_case_sensitive() {
        let p = personality(&["analytical"], "Thorough", "");
        assert_eq!(personality_score(&p, "Software Developer"), 0.5);
        let p = personality(&["Innovative"], "", "visual");
        assert!((personality_score(&p, "UI/UX Designer") - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_personality_clamped_when_rules_overlap() {
        let p = personality(
            &["Leadership-oriented", "Innovative"],
            "",
            "Visual presenter",
        );
        assert_eq!(personality_score(&p, "Creative Lead"), 1.0);
    }

    #[test]
    fn test_environment_score_is_fixed_placeholder() {
        let career = test_career("Chef", &[], &[]);
        let prefs = WorkPreferences {
            environment: "Remote".to_string(),
            work_life_balance: "Flexible".to_string(),
        };
        assert_eq!(environment_score(&prefs, &career), 0.7);
        assert_eq!(environment_score(&WorkPreferences::default(), &career), 0.7);
    }

    #[test]
    fn test_location_listed_city_scores_one() {
        let locations = strings(&["Bangalore", "Pune"]);
        assert_eq!(location_score("bangalore", &locations), 1.0);
        assert_eq!(location_score("Pune, Maharashtra", &locations), 1.0);
    }

    #[test]
    fn test_location_unlisted_major_city_scores_point_eight() {
        let locations = strings(&["Bangalore"]);
        assert_eq!(location_score("New Delhi", &locations), 0.8);
    }

    #[test]
    fn test_location_unknown_town_scores_point_four() {
        let locations = strings(&["Bangalore"]);
        assert_eq!(location_score("Unknown Town", &locations), 0.4);
        assert_eq!(location_score("", &locations), 0.4);
    }

    #[test]
    fn test_weighted_sum() {
        let sub = SubScores {
            interest: 1.0,
            skill: 0.5,
            personality: 0.5,
            environment: 0.7,
            location: 1.0,
        };
        // 0.3 + 0.125 + 0.1 + 0.105 + 0.1
        assert!((sub.weighted(&ScoringWeights::default()) - 0.73).abs() < 1e-9);
    }
}
