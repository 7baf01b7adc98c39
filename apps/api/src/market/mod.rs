//! Job market trends per career.
//!
//! Trends are derived from catalog data. The job-opening count is a
//! placeholder figure drawn from an `OpeningsSource`, so the endpoint is only
//! deterministic when a seeded or fixed source is injected.

pub mod handlers;

use std::sync::{Arc, Mutex};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::catalog::CareerCatalog;

const OPENINGS_MIN: u32 = 100;
const OPENINGS_SPAN: u32 = 1000;

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Trends {
    pub demand_level: String,
    pub salary_trend: String,
    pub top_skills_in_demand: Vec<String>,
    pub emerging_technologies: Vec<String>,
    pub job_openings: u32,
    pub top_companies: Vec<String>,
}

impl Default for Trends {
    fn default() -> Self {
        Self {
            demand_level: "High".to_string(),
            salary_trend: "Increasing".to_string(),
            top_skills_in_demand: Vec::new(),
            emerging_technologies: Vec::new(),
            job_openings: 0,
            top_companies: Vec::new(),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Openings sources
// ────────────────────────────────────────────────────────────────────────────

/// Produces the job-opening count reported for a known career.
pub trait OpeningsSource: Send + Sync {
    fn job_openings(&self) -> u32;
}

/// Unseeded, per-call random counts in [100, 1100).
pub struct RandomOpenings;

impl OpeningsSource for RandomOpenings {
    fn job_openings(&self) -> u32 {
        OPENINGS_MIN + rand::thread_rng().gen_range(0..OPENINGS_SPAN)
    }
}

/// Reproducible sequence of counts in [100, 1100).
pub struct SeededOpenings {
    rng: Mutex<StdRng>,
}

impl SeededOpenings {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl OpeningsSource for SeededOpenings {
    fn job_openings(&self) -> u32 {
        // A poisoned lock still holds a usable RNG.
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        OPENINGS_MIN + rng.gen_range(0..OPENINGS_SPAN)
    }
}

#[cfg(test)]
pub struct FixedOpenings(pub u32);

#[cfg(test)]
impl OpeningsSource for FixedOpenings {
    fn job_openings(&self) -> u32 {
        self.0
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Emerging technologies
// ────────────────────────────────────────────────────────────────────────────

struct EmergingRule {
    title_keywords: &'static [&'static str],
    technologies: &'static [&'static str],
}

/// Evaluated in order; the last matching rule wins.
const EMERGING_RULES: &[EmergingRule] = &[
    EmergingRule {
        title_keywords: &["Data", "AI"],
        technologies: &["AI/ML", "Big Data", "Cloud Computing"],
    },
    EmergingRule {
        title_keywords: &["Digital", "Software"],
        technologies: &["Cloud Native", "DevOps", "Microservices"],
    },
];

fn emerging_technologies(title: &str) -> Vec<String> {
    EMERGING_RULES
        .iter()
        .rev()
        .find(|rule| rule.title_keywords.iter().any(|kw| title.contains(kw)))
        .map(|rule| rule.technologies.iter().map(|t| t.to_string()).collect())
        .unwrap_or_default()
}

// ────────────────────────────────────────────────────────────────────────────
// Service
// ────────────────────────────────────────────────────────────────────────────

pub struct JobMarket {
    catalog: Arc<CareerCatalog>,
    openings: Arc<dyn OpeningsSource>,
}

impl JobMarket {
    pub fn new(catalog: Arc<CareerCatalog>, openings: Arc<dyn OpeningsSource>) -> Self {
        Self { catalog, openings }
    }

    /// Trends for `career_title`; the default placeholder when unknown.
    pub fn trends(&self, career_title: &str) -> Trends {
        let Some(career) = self.catalog.find_by_title(career_title) else {
            return Trends::default();
        };

        Trends {
            top_skills_in_demand: career.required_skills.clone(),
            emerging_technologies: emerging_technologies(&career.title),
            job_openings: self.openings.job_openings(),
            top_companies: career.top_employers.clone(),
            ..Trends::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn market(openings: Arc<dyn OpeningsSource>) -> JobMarket {
        JobMarket::new(Arc::new(CareerCatalog::embedded().unwrap()), openings)
    }

    #[test]
    fn test_unknown_title_returns_default() {
        let trends = market(Arc::new(FixedOpenings(500))).trends("Astronaut");
        assert_eq!(trends, Trends::default());
        assert_eq!(trends.demand_level, "High");
        assert_eq!(trends.salary_trend, "Increasing");
        assert_eq!(trends.job_openings, 0);
        assert!(trends.top_companies.is_empty());
    }

    #[test]
    fn test_known_title_uses_catalog_data() {
        let trends = market(Arc::new(FixedOpenings(512))).trends("product manager");
        assert_eq!(
            trends.top_skills_in_demand,
            vec!["Strategy", "Analytics", "User Research", "Project Management"]
        );
        assert_eq!(trends.top_companies[0], "Flipkart");
        assert_eq!(trends.job_openings, 512);
        assert!(trends.emerging_technologies.is_empty());
    }

    #[test]
    fn test_emerging_technologies_by_title() {
        let m = market(Arc::new(FixedOpenings(1)));
        assert_eq!(
            m.trends("Data Scientist").emerging_technologies,
            vec!["AI/ML", "Big Data", "Cloud Computing"]
        );
        assert_eq!(
            m.trends("Software Developer").emerging_technologies,
            vec!["Cloud Native", "DevOps", "Microservices"]
        );
        assert_eq!(
            m.trends("Digital Marketing Manager").emerging_technologies,
            vec!["Cloud Native", "DevOps", "Microservices"]
        );
    }

    #[test]
    fn test_later_emerging_rule_wins() {
        assert_eq!(
            emerging_technologies("Digital Data Lead"),
            vec!["Cloud Native", "DevOps", "Microservices"]
        );
    }

    #[test]
    fn test_random_openings_in_range() {
        let source = RandomOpenings;
        for _ in 0..200 {
            let n = source.job_openings();
            assert!((100..1100).contains(&n), "got {n}");
        }
    }

    #[test]
    fn test_seeded_openings_are_reproducible() {
        let a = SeededOpenings::new(42);
        let b = SeededOpenings::new(42);
        let seq_a: Vec<u32> = (0..10).map(|_| a.job_openings()).collect();
        let seq_b: Vec<u32> = (0..10).map(|_| b.job_openings()).collect();
        assert_eq!(seq_a, seq_b);
        assert!(seq_a.iter().all(|n| (100..1100).contains(n)));
    }
}
