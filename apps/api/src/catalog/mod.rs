//! Career Catalog — static reference data loaded once at startup.
//!
//! The default catalog is embedded in the binary; `CATALOG_PATH` swaps in a
//! file with the same JSON layout. Loading validates titles and category keys
//! so every later lookup can assume they are unique.

pub mod handlers;

use std::collections::HashSet;
use std::path::Path;

use thiserror::Error;
use tracing::info;

use crate::models::career::{CareerCategory, CareerDefinition};

const EMBEDDED_CATALOG: &str = include_str!("../../data/careers.json");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("catalog contains no careers")]
    Empty,

    #[error("duplicate career title '{0}'")]
    DuplicateTitle(String),

    #[error("duplicate category key '{0}'")]
    DuplicateCategory(String),
}

/// Immutable, validated set of career categories.
#[derive(Debug, Clone)]
pub struct CareerCatalog {
    categories: Vec<CareerCategory>,
}

impl CareerCatalog {
    /// Builds a catalog, rejecting duplicate titles or category keys.
    pub fn new(categories: Vec<CareerCategory>) -> Result<Self, CatalogError> {
        validate(&categories)?;
        Ok(Self { categories })
    }

    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let categories: Vec<CareerCategory> = serde_json::from_str(raw)?;
        Self::new(categories)
    }

    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_json(EMBEDDED_CATALOG)
    }

    /// Loads from `path` when given, the embedded asset otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self, CatalogError> {
        let catalog = match path {
            Some(path) => {
                info!("Loading career catalog from {}", path.display());
                Self::from_json(&std::fs::read_to_string(path)?)?
            }
            None => Self::embedded()?,
        };
        info!(
            "Career catalog ready: {} categories, {} careers",
            catalog.categories.len(),
            catalog.careers().count()
        );
        Ok(catalog)
    }

    pub fn list_categories(&self) -> &[CareerCategory] {
        &self.categories
    }

    /// All careers, categories concatenated in catalog order.
    pub fn careers(&self) -> impl Iterator<Item = &CareerDefinition> {
        self.categories.iter().flat_map(|c| c.careers.iter())
    }

    /// Exact title match, ignoring case.
    pub fn find_by_title(&self, title: &str) -> Option<&CareerDefinition> {
        let wanted = title.to_lowercase();
        self.careers().find(|c| c.title.to_lowercase() == wanted)
    }
}

fn validate(categories: &[CareerCategory]) -> Result<(), CatalogError> {
    let mut keys = HashSet::new();
    let mut titles = HashSet::new();

    for category in categories {
        if !keys.insert(category.key.as_str()) {
            return Err(CatalogError::DuplicateCategory(category.key.clone()));
        }
        for career in &category.careers {
            if !titles.insert(career.title.as_str()) {
                return Err(CatalogError::DuplicateTitle(career.title.clone()));
            }
        }
    }

    if titles.is_empty() {
        return Err(CatalogError::Empty);
    }
    Ok(())
}

#[cfg(test)]
pub(crate) fn test_career(title: &str, skills: &[&str], locations: &[&str]) -> CareerDefinition {
    CareerDefinition {
        title: title.to_string(),
        description: format!("Work as a {title}"),
        required_skills: skills.iter().map(|s| s.to_string()).collect(),
        education_paths: vec!["General Studies".to_string()],
        salary_range: "₹3-10 LPA".to_string(),
        growth_rate: "10%".to_string(),
        top_employers: vec!["Acme".to_string()],
        key_locations: locations.iter().map(|s| s.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_catalog_loads() {
        let catalog = CareerCatalog::embedded().unwrap();
        let keys: Vec<&str> = catalog
            .list_categories()
            .iter()
            .map(|c| c.key.as_str())
            .collect();
        assert_eq!(keys, vec!["technology", "healthcare", "business", "creative"]);
        assert_eq!(catalog.careers().count(), 9);
    }

    #[test]
    fn test_careers_flatten_in_catalog_order() {
        let catalog = CareerCatalog::embedded().unwrap();
        let titles: Vec<&str> = catalog.careers().map(|c| c.title.as_str()).collect();
        assert_eq!(titles.first(), Some(&"Software Developer"));
        assert_eq!(titles.last(), Some(&"Content Writer"));
        assert_eq!(titles[3], "Medical Doctor");
    }

    #[test]
    fn test_find_by_title_ignores_case() {
        let catalog = CareerCatalog::embedded().unwrap();
        let career = catalog.find_by_title("data SCIENTIST").unwrap();
        assert_eq!(career.title, "Data Scientist");
        assert!(catalog.find_by_title("Data").is_none());
    }

    #[test]
    fn test_duplicate_title_rejected() {
        let categories = vec![
            CareerCategory {
                key: "a".to_string(),
                careers: vec![test_career("Chef", &["Cooking"], &["Pune"])],
            },
            CareerCategory {
                key: "b".to_string(),
                careers: vec![test_career("Chef", &["Baking"], &["Delhi"])],
            },
        ];
        assert!(matches!(
            CareerCatalog::new(categories),
            Err(CatalogError::DuplicateTitle(t)) if t == "Chef"
        ));
    }

    #[test]
    fn test_duplicate_category_rejected() {
        let categories = vec![
            CareerCategory {
                key: "a".to_string(),
                careers: vec![test_career("Chef", &[], &[])],
            },
            CareerCategory {
                key: "a".to_string(),
                careers: vec![test_career("Baker", &[], &[])],
            },
        ];
        assert!(matches!(
            CareerCatalog::new(categories),
            Err(CatalogError::DuplicateCategory(_))
        ));
    }

    #[test]
    fn test_empty_catalog_rejected() {
        assert!(matches!(
            CareerCatalog::from_json("[]"),
            Err(CatalogError::Empty)
        ));
    }

    #[test]
    fn test_malformed_json_rejected() {
        assert!(matches!(
            CareerCatalog::from_json("{not json"),
            Err(CatalogError::Parse(_))
        ));
    }
}
