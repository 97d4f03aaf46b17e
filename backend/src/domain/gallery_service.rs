//! Gallery administration and the public listing.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::info;

use crate::domain::ports::{GalleryCommand, GalleryQuery, GalleryRepository, GalleryRepositoryError};
use crate::domain::validation::{invalid_field, required_text};
use crate::domain::{
    Error, GalleryCategory, GalleryItem, GalleryItemId, GallerySubmission, MessageKey, Messages,
    infrastructure_error,
};

/// Detail code for a category outside the fixed set.
pub const INVALID_CATEGORY: &str = "invalid_category";

/// Gallery service implementing [`GalleryCommand`] and [`GalleryQuery`].
#[derive(Clone)]
pub struct GalleryService<R> {
    items: Arc<R>,
    clock: Arc<dyn Clock>,
    messages: Messages,
}

impl<R> GalleryService<R> {
    pub fn new(items: Arc<R>, clock: Arc<dyn Clock>, messages: Messages) -> Self {
        Self {
            items,
            clock,
            messages,
        }
    }

    fn map_repository_error(&self, error: GalleryRepositoryError, fallback: MessageKey) -> Error {
        infrastructure_error(self.messages, error.failure(), fallback, &error)
    }
}

#[async_trait]
impl<R> GalleryCommand for GalleryService<R>
where
    R: GalleryRepository,
{
    async fn create(&self, submission: GallerySubmission) -> Result<GalleryItem, Error> {
        let messages = self.messages;
        let title = required_text(messages, "title", submission.title)?;
        let description = required_text(messages, "description", submission.description)?;
        let image_url = required_text(messages, "imageUrl", submission.image_url)?;
        let category = required_text(messages, "category", submission.category)?
            .parse::<GalleryCategory>()
            .map_err(|_| {
                invalid_field(messages, "category", MessageKey::InvalidCategory, INVALID_CATEGORY)
            })?;

        let now = self.clock.utc();
        let item = GalleryItem {
            id: GalleryItemId::random(),
            title,
            description,
            image_url,
            category,
            created_at: now,
            updated_at: now,
        };
        self.items
            .insert(&item)
            .await
            .map_err(|err| self.map_repository_error(err, MessageKey::SaveFailed))?;

        info!(item_id = %item.id, category = %item.category, "gallery item created");
        Ok(item)
    }

    async fn delete(&self, id: GalleryItemId) -> Result<(), Error> {
        let removed = self
            .items
            .delete(id)
            .await
            .map_err(|err| self.map_repository_error(err, MessageKey::DeleteFailed))?;
        if !removed {
            return Err(Error::not_found(self.messages.text(MessageKey::ImageNotFound)));
        }
        info!(item_id = %id, "gallery item deleted");
        Ok(())
    }
}

#[async_trait]
impl<R> GalleryQuery for GalleryService<R>
where
    R: GalleryRepository,
{
    async fn list(&self) -> Result<Vec<GalleryItem>, Error> {
        self.items
            .list_newest_first()
            .await
            .map_err(|err| self.map_repository_error(err, MessageKey::FetchFailed))
    }
}
