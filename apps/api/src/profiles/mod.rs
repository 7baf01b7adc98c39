//! Profile repository — storage boundary for submitted onboarding profiles.
//!
//! Handlers only see `Arc<dyn ProfileRepository>`; `InMemoryProfileRepository`
//! is the default backend and loses everything on restart.

pub mod handlers;

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::profile::{StoredProfile, UserProfile};

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn create(&self, profile: UserProfile) -> Result<StoredProfile, AppError>;

    async fn get(&self, id: Uuid) -> Result<Option<StoredProfile>, AppError>;

    /// Replaces the stored profile; `NotFound` for an unknown id.
    async fn update(&self, id: Uuid, profile: UserProfile) -> Result<StoredProfile, AppError>;
}

#[derive(Default)]
pub struct InMemoryProfileRepository {
    profiles: RwLock<HashMap<Uuid, StoredProfile>>,
}

impl InMemoryProfileRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    async fn create(&self, profile: UserProfile) -> Result<StoredProfile, AppError> {
        let now = Utc::now();
        let stored = StoredProfile {
            id: Uuid::new_v4(),
            profile,
            created_at: now,
            updated_at: now,
        };
        self.profiles.write().await.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn get(&self, id: Uuid) -> Result<Option<StoredProfile>, AppError> {
        Ok(self.profiles.read().await.get(&id).cloned())
    }

    async fn update(&self, id: Uuid, profile: UserProfile) -> Result<StoredProfile, AppError> {
        let mut profiles = self.profiles.write().await;
        let stored = profiles
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("Profile {id} not found")))?;
        stored.profile = profile;
        stored.updated_at = Utc::now();
        Ok(stored.clone())
    }
}
