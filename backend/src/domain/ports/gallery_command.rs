//! Driving port for gallery administration.

use async_trait::async_trait;

use crate::domain::{Error, GalleryItem, GalleryItemId, GallerySubmission};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GalleryCommand: Send + Sync {
    async fn create(&self, submission: GallerySubmission) -> Result<GalleryItem, Error>;

    async fn delete(&self, id: GalleryItemId) -> Result<(), Error>;
}
