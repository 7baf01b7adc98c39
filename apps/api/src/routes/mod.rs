pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::assessment::handlers as assessment;
use crate::catalog::handlers as catalog;
use crate::market::handlers as market;
use crate::matching::handlers as matching;
use crate::profiles::handlers as profiles;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Recommendation API
        .route(
            "/api/recommendations",
            post(matching::handle_recommendations),
        )
        .route(
            "/api/skills-assessment/:domain",
            get(assessment::handle_skills_assessment),
        )
        .route(
            "/api/job-market/:career_title",
            get(market::handle_job_market),
        )
        .route(
            "/api/career-categories",
            get(catalog::handle_list_categories),
        )
        // Profile API
        .route("/api/user/profile", post(profiles::handle_create_profile))
        .route(
            "/api/user/profile/:id",
            get(profiles::handle_get_profile).put(profiles::handle_update_profile),
        )
        .with_state(state)
}
