//! PostgreSQL-backed `ActivityRepository`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{ActivityRepository, ActivityRepositoryError};
use crate::domain::{Activity, ActivityId, ActivityPatch};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{ActivityChanges, ActivityRow, NewActivityRow};
use super::pool::{DbPool, PoolError};
use super::schema::activities;

#[derive(Clone)]
pub struct DieselActivityRepository {
    pool: DbPool,
}

impl DieselActivityRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(err: PoolError) -> ActivityRepositoryError {
    map_basic_pool_error(err, ActivityRepositoryError::connection)
}

fn map_diesel_error(err: diesel::result::Error) -> ActivityRepositoryError {
    map_basic_diesel_error(
        err,
        ActivityRepositoryError::query,
        ActivityRepositoryError::connection,
    )
}

fn row_to_activity(row: ActivityRow) -> Result<Activity, ActivityRepositoryError> {
    Activity::try_from(row).map_err(ActivityRepositoryError::query)
}

#[async_trait]
impl ActivityRepository for DieselActivityRepository {
    async fn insert(&self, activity: &Activity) -> Result<(), ActivityRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::insert_into(activities::table)
            .values(NewActivityRow::from(activity))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn list_by_date(&self) -> Result<Vec<Activity>, ActivityRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<ActivityRow> = activities::table
            .select(ActivityRow::as_select())
            .order_by((activities::date.asc(), activities::created_at.asc()))
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_activity).collect()
    }

    async fn apply_patch(
        &self,
        id: ActivityId,
        patch: ActivityPatch,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<Activity>, ActivityRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<ActivityRow> = diesel::update(activities::table.find(*id.as_uuid()))
            .set(ActivityChanges::new(patch, updated_at))
            .returning(ActivityRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_activity).transpose()
    }

    async fn delete(&self, id: ActivityId) -> Result<bool, ActivityRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let deleted = diesel::delete(activities::table.find(*id.as_uuid()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(deleted > 0)
    }
}
