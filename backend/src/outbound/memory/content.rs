use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::Mutex;

use crate::domain::ports::{
    ActivityRepository, ActivityRepositoryError, GalleryRepository, GalleryRepositoryError,
};
use crate::domain::{Activity, ActivityId, ActivityPatch, GalleryItem, GalleryItemId};

#[derive(Debug, Default)]
pub struct InMemoryActivityRepository {
    activities: Mutex<Vec<Activity>>,
}

impl InMemoryActivityRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ActivityRepository for InMemoryActivityRepository {
    async fn insert(&self, activity: &Activity) -> Result<(), ActivityRepositoryError> {
        self.activities.lock().await.push(activity.clone());
        Ok(())
    }

    async fn list_by_date(&self) -> Result<Vec<Activity>, ActivityRepositoryError> {
        let mut listed = self.activities.lock().await.clone();
        listed.sort_by_key(|a| (a.date, a.created_at));
        Ok(listed)
    }

    async fn apply_patch(
        &self,
        id: ActivityId,
        patch: ActivityPatch,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<Activity>, ActivityRepositoryError> {
        let mut activities = self.activities.lock().await;
        let Some(slot) = activities.iter_mut().find(|a| a.id == id) else {
            return Ok(None);
        };
        *slot = slot.clone().patched(patch, updated_at);
        Ok(Some(slot.clone()))
    }

    async fn delete(&self, id: ActivityId) -> Result<bool, ActivityRepositoryError> {
        let mut activities = self.activities.lock().await;
        let before = activities.len();
        activities.retain(|a| a.id != id);
        Ok(activities.len() < before)
    }
}

#[derive(Debug, Default)]
pub struct InMemoryGalleryRepository {
    items: Mutex<Vec<GalleryItem>>,
}

impl InMemoryGalleryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl GalleryRepository for InMemoryGalleryRepository {
    async fn insert(&self, item: &GalleryItem) -> Result<(), GalleryRepositoryError> {
        self.items.lock().await.push(item.clone());
        Ok(())
    }

    async fn list_newest_first(&self) -> Result<Vec<GalleryItem>, GalleryRepositoryError> {
        let mut listed = self.items.lock().await.clone();
        listed.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(listed)
    }

    async fn delete(&self, id: GalleryItemId) -> Result<bool, GalleryRepositoryError> {
        let mut items = self.items.lock().await;
        let before = items.len();
        items.retain(|item| item.id != id);
        Ok(items.len() < before)
    }
}
