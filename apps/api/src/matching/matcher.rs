//! Career Matcher — pluggable, trait-based recommender over the career catalog.
//!
//! Default: `RuleBasedMatcher` (pure, synchronous, deterministic).
//!
//! `AppState` holds an `Arc<dyn CareerMatcher>`.

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::catalog::CareerCatalog;
use crate::matching::learning_path::{build_learning_path, LearningPath};
use crate::matching::reasoning::build_reasoning;
use crate::matching::scoring::{score_career, skill_gaps, ScoringWeights};
use crate::models::career::CareerDefinition;
use crate::models::profile::UserProfile;

/// Careers must score strictly above this to be recommended.
pub const MIN_MATCH_SCORE: f64 = 0.3;
pub const MAX_RECOMMENDATIONS: usize = 5;

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub career: CareerDefinition,
    pub match_score: f64,
    pub reasoning: String,
    pub skill_gaps: Vec<String>,
    pub learning_path: LearningPath,
}

/// Implement this to swap recommendation backends without touching handlers.
pub trait CareerMatcher: Send + Sync {
    /// Ranked recommendations, best first.
    fn recommend(&self, profile: &UserProfile) -> Vec<MatchResult>;
}

pub struct RuleBasedMatcher {
    catalog: Arc<CareerCatalog>,
    weights: ScoringWeights,
}

impl RuleBasedMatcher {
    pub fn new(catalog: Arc<CareerCatalog>) -> Self {
        Self {
            catalog,
            weights: ScoringWeights::default(),
        }
    }

    pub fn match_score(&self, profile: &UserProfile, career: &CareerDefinition) -> f64 {
        score_career(profile, career).weighted(&self.weights)
    }
}

impl CareerMatcher for RuleBasedMatcher {
    fn recommend(&self, profile: &UserProfile) -> Vec<MatchResult> {
        let mut results: Vec<MatchResult> = self
            .catalog
            .careers()
            .filter_map(|career| {
                let match_score = self.match_score(profile, career);
                if match_score <= MIN_MATCH_SCORE {
                    return None;
                }

                let skill_gaps = skill_gaps(&profile.strengths, &career.required_skills);
                let learning_path = build_learning_path(
                    career,
                    &skill_gaps,
                    &profile.personal_details.current_stage,
                );

                Some(MatchResult {
                    career: career.clone(),
                    match_score,
                    reasoning: build_reasoning(profile, career),
                    skill_gaps,
                    learning_path,
                })
            })
            .collect();

        let qualifying = results.len();

        // Stable: equal scores keep catalog order.
        results.sort_by(|a, b| b.match_score.total_cmp(&a.match_score));
        results.truncate(MAX_RECOMMENDATIONS);

        debug!(
            qualifying,
            returned = results.len(),
            "Computed career recommendations"
        );

        results
    }
}
