//! PostgreSQL-backed `GalleryRepository`.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{GalleryRepository, GalleryRepositoryError};
use crate::domain::{GalleryItem, GalleryItemId};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{GalleryItemRow, NewGalleryItemRow};
use super::pool::{DbPool, PoolError};
use super::schema::gallery_items;

#[derive(Clone)]
pub struct DieselGalleryRepository {
    pool: DbPool,
}

impl DieselGalleryRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(err: PoolError) -> GalleryRepositoryError {
    map_basic_pool_error(err, GalleryRepositoryError::connection)
}

fn map_diesel_error(err: diesel::result::Error) -> GalleryRepositoryError {
    map_basic_diesel_error(
        err,
        GalleryRepositoryError::query,
        GalleryRepositoryError::connection,
    )
}

#[async_trait]
impl GalleryRepository for DieselGalleryRepository {
    async fn insert(&self, item: &GalleryItem) -> Result<(), GalleryRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::insert_into(gallery_items::table)
            .values(NewGalleryItemRow::from(item))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn list_newest_first(&self) -> Result<Vec<GalleryItem>, GalleryRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<GalleryItemRow> = gallery_items::table
            .select(GalleryItemRow::as_select())
            .order_by(gallery_items::created_at.desc())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter()
            .map(|row| GalleryItem::try_from(row).map_err(GalleryRepositoryError::query))
            .collect()
    }

    async fn delete(&self, id: GalleryItemId) -> Result<bool, GalleryRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let deleted = diesel::delete(gallery_items::table.find(*id.as_uuid()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(deleted > 0)
    }
}
