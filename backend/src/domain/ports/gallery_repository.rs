//! Port for gallery persistence.

use async_trait::async_trait;

use crate::domain::{GalleryItem, GalleryItemId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by gallery repository adapters.
    pub enum GalleryRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "gallery repository connection failed: {message}"; unavailable,
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "gallery repository query failed: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GalleryRepository: Send + Sync {
    async fn insert(&self, item: &GalleryItem) -> Result<(), GalleryRepositoryError>;

    /// Items newest `created_at` first.
    async fn list_newest_first(&self) -> Result<Vec<GalleryItem>, GalleryRepositoryError>;

    /// Remove the item, reporting whether a row existed.
    async fn delete(&self, id: GalleryItemId) -> Result<bool, GalleryRepositoryError>;
}
