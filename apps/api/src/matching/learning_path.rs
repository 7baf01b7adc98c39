use serde::{Deserialize, Serialize};

use crate::models::career::CareerDefinition;

/// Gap skills turned into short-term course suggestions.
const SHORT_TERM_GAP_LIMIT: usize = 2;

/// Three-phase plan: immediate (1–3 months), short term (3–12 months),
/// long term (1–3 years).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LearningPath {
    pub immediate: Vec<String>,
    pub short_term: Vec<String>,
    pub long_term: Vec<String>,
}

pub fn build_learning_path(
    career: &CareerDefinition,
    skill_gaps: &[String],
    current_stage: &str,
) -> LearningPath {
    let immediate = vec![
        format!("Research {} role and responsibilities", career.title),
        "Complete online courses in basic skills".to_string(),
        "Join relevant communities and forums".to_string(),
    ];

    let short_term = if skill_gaps.is_empty() {
        Vec::new()
    } else {
        skill_gaps
            .iter()
            .take(SHORT_TERM_GAP_LIMIT)
            .map(|skill| format!("Learn {skill} through online courses"))
            .chain([
                "Build a portfolio or project showcase".to_string(),
                "Connect with professionals in the field".to_string(),
            ])
            .collect()
    };

    let long_term = if is_school_stage(current_stage) {
        let education = career
            .education_paths
            .first()
            .map(String::as_str)
            .unwrap_or("relevant");
        vec![
            format!("Pursue {education} education"),
            "Gain internship experience".to_string(),
            "Develop leadership and communication skills".to_string(),
        ]
    } else {
        vec![
            "Gain professional experience through internships or entry-level positions"
                .to_string(),
            "Pursue advanced certifications or specializations".to_string(),
            "Build a professional network in the industry".to_string(),
        ]
    };

    LearningPath {
        immediate,
        short_term,
        long_term,
    }
}

/// Still finishing school: after 10th or 12th standard.
fn is_school_stage(current_stage: &str) -> bool {
    current_stage.contains("10th") || current_stage.contains("12th")
}
