use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalDetails {
    pub full_name: String,
    /// e.g. "after-10th", "undergraduate", "working-professional"
    pub current_stage: String,
    pub location: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkPreferences {
    pub environment: String,
    pub work_life_balance: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalityProfile {
    pub primary_traits: Vec<String>,
    pub work_style: String,
    pub communication_style: String,
}

/// Onboarding answers the matcher scores against the catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub personal_details: PersonalDetails,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub strengths: Vec<String>,
    /// Collected for display; never scored.
    #[serde(default)]
    pub motivations: Vec<String>,
    #[serde(default)]
    pub work_preferences: WorkPreferences,
    #[serde(default)]
    pub personality_profile: PersonalityProfile,
}

/// Request body for endpoints that accept a profile.
///
/// `personal_details` is optional here so a missing or null value surfaces as
/// a validation error instead of a generic JSON rejection.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfilePayload {
    pub personal_details: Option<PersonalDetails>,
    pub interests: Vec<String>,
    pub strengths: Vec<String>,
    pub motivations: Vec<String>,
    pub work_preferences: WorkPreferences,
    pub personality_profile: PersonalityProfile,
}

impl TryFrom<ProfilePayload> for UserProfile {
    type Error = AppError;

    fn try_from(payload: ProfilePayload) -> Result<Self, Self::Error> {
        let personal_details = payload
            .personal_details
            .ok_or_else(|| AppError::Validation("User profile data is required".to_string()))?;

        Ok(UserProfile {
            personal_details,
            interests: payload.interests,
            strengths: payload.strengths,
            motivations: payload.motivations,
            work_preferences: payload.work_preferences,
            personality_profile: payload.personality_profile,
        })
    }
}

/// A profile held by a `ProfileRepository`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredProfile {
    pub id: Uuid,
    pub profile: UserProfile,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
