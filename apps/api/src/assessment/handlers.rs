use axum::{extract::Path, Json};

use crate::assessment::{skills_assessment_questions, Question};

/// GET /api/skills-assessment/:domain
pub async fn handle_skills_assessment(Path(domain): Path<String>) -> Json<&'static [Question]> {
    Json(skills_assessment_questions(&domain))
}
