use crate::matching::scoring::{contains_ci, matches_either};
use crate::models::career::CareerDefinition;
use crate::models::profile::UserProfile;

/// Builds the human-readable explanation shown next to a recommendation.
///
/// Sentences are joined with ". " and the result always ends with ".". The
/// growth/salary sentence is always present.
pub fn build_reasoning(profile: &UserProfile, career: &CareerDefinition) -> String {
    let mut reasons = Vec::new();

    let interests: Vec<&str> = profile
        .interests
        .iter()
        .filter(|i| contains_ci(&career.title, i) || contains_ci(&career.description, i))
        .map(String::as_str)
        .collect();
    if !interests.is_empty() {
        reasons.push(format!(
            "Your interests in {} align well with this role",
            interests.join(", ")
        ));
    }

    let strengths: Vec<&str> = profile
        .strengths
        .iter()
        .filter(|s| career.required_skills.iter().any(|skill| matches_either(s, skill)))
        .map(String::as_str)
        .collect();
    if !strengths.is_empty() {
        reasons.push(format!(
            "Your strengths in {} are valuable for this career",
            strengths.join(", ")
        ));
    }

    let location = &profile.personal_details.location;
    if career
        .key_locations
        .iter()
        .any(|loc| contains_ci(loc, location))
    {
        reasons.push(format!("Strong job market in your location ({location})"));
    }

    reasons.push(format!(
        "{} expected growth rate with competitive salary range of {}",
        career.growth_rate, career.salary_range
    ));

    format!("{}.", reasons.join(". "))
}
