use serde::{Deserialize, Serialize};

/// One entry of the static career catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CareerDefinition {
    pub title: String,
    pub description: String,
    /// Ordered by display priority.
    pub required_skills: Vec<String>,
    pub education_paths: Vec<String>,
    pub salary_range: String,
    pub growth_rate: String,
    pub top_employers: Vec<String>,
    pub key_locations: Vec<String>,
}

/// A named group of careers. Only the catalog's storage layout uses it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CareerCategory {
    pub key: String,
    pub careers: Vec<CareerDefinition>,
}
