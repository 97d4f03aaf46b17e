//! Driving port for the public gallery.

use async_trait::async_trait;

use crate::domain::{Error, GalleryItem};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GalleryQuery: Send + Sync {
    /// All items, newest first.
    async fn list(&self) -> Result<Vec<GalleryItem>, Error>;
}
