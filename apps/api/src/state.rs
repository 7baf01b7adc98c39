use std::sync::Arc;

use tracing::info;

use crate::catalog::CareerCatalog;
use crate::config::Config;
use crate::market::{JobMarket, OpeningsSource, RandomOpenings, SeededOpenings};
use crate::matching::{CareerMatcher, RuleBasedMatcher};
use crate::profiles::{InMemoryProfileRepository, ProfileRepository};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Read-only after startup; shared by the matcher and job market.
    pub catalog: Arc<CareerCatalog>,
    /// Pluggable recommender. Default: RuleBasedMatcher.
    pub matcher: Arc<dyn CareerMatcher>,
    pub job_market: Arc<JobMarket>,
    /// Profile storage. Default: InMemoryProfileRepository.
    pub profiles: Arc<dyn ProfileRepository>,
}

impl AppState {
    /// Default backends over `catalog`; `JOB_MARKET_SEED` selects seeded openings.
    pub fn new(config: &Config, catalog: CareerCatalog) -> Self {
        let openings: Arc<dyn OpeningsSource> = match config.job_market_seed {
            Some(seed) => {
                info!("Job openings seeded with {seed}");
                Arc::new(SeededOpenings::new(seed))
            }
            None => Arc::new(RandomOpenings),
        };
        Self::with_openings(catalog, openings)
    }

    pub fn with_openings(catalog: CareerCatalog, openings: Arc<dyn OpeningsSource>) -> Self {
        let catalog = Arc::new(catalog);
        Self {
            matcher: Arc::new(RuleBasedMatcher::new(catalog.clone())),
            job_market: Arc::new(JobMarket::new(catalog.clone(), openings)),
            profiles: Arc::new(InMemoryProfileRepository::new()),
            catalog,
        }
    }
}
