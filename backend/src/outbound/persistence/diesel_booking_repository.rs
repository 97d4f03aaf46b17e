//! PostgreSQL-backed `BookingRepository`.
//!
//! Creation takes `SHARE ROW EXCLUSIVE` on `bookings` for the length of its
//! transaction. That mode conflicts with itself, so two creations never run
//! their overlap check concurrently, while plain reads stay unblocked.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use diesel_async::AsyncConnection as _;
use diesel_async::RunQueryDsl;
use diesel_async::scoped_futures::ScopedFutureExt as _;
use tracing::debug;
use uuid::Uuid;

use crate::domain::ports::{BookingInsertOutcome, BookingRepository, BookingRepositoryError};
use crate::domain::{Booking, BookingId, BookingStatus, NewBooking};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{BookingRow, NewBookingRow};
use super::pool::{DbPool, PoolError};
use super::schema::bookings;

const LOCK_BOOKINGS_SQL: &str = "LOCK TABLE bookings IN SHARE ROW EXCLUSIVE MODE";

#[derive(Clone)]
pub struct DieselBookingRepository {
    pool: DbPool,
}

impl DieselBookingRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(err: PoolError) -> BookingRepositoryError {
    map_basic_pool_error(err, BookingRepositoryError::connection)
}

fn map_diesel_error(err: diesel::result::Error) -> BookingRepositoryError {
    map_basic_diesel_error(
        err,
        BookingRepositoryError::query,
        BookingRepositoryError::connection,
    )
}

fn row_to_booking(row: BookingRow) -> Result<Booking, BookingRepositoryError> {
    Booking::try_from(row).map_err(BookingRepositoryError::query)
}

#[async_trait]
impl BookingRepository for DieselBookingRepository {
    async fn create_unless_overlapping(
        &self,
        booking: NewBooking,
    ) -> Result<BookingInsertOutcome, BookingRepositoryError> {
        let new_row = NewBookingRow::try_from(&booking).map_err(BookingRepositoryError::query)?;
        let created = booking.clone().into_booking();
        let start = booking.period.start();
        let end = booking.period.end();
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let conflicting: Option<Uuid> = conn
            .transaction(|conn| {
                async move {
                    diesel::sql_query(LOCK_BOOKINGS_SQL).execute(conn).await?;

                    let conflicting: Option<Uuid> = bookings::table
                        .filter(bookings::status.eq(BookingStatus::Approved.as_str()))
                        .filter(bookings::start_date.le(end))
                        .filter(bookings::end_date.ge(start))
                        .select(bookings::id)
                        .first(conn)
                        .await
                        .optional()?;

                    if conflicting.is_none() {
                        diesel::insert_into(bookings::table)
                            .values(&new_row)
                            .execute(conn)
                            .await?;
                    }
                    Ok::<_, diesel::result::Error>(conflicting)
                }
                .scope_boxed()
            })
            .await
            .map_err(map_diesel_error)?;

        match conflicting {
            Some(id) => {
                debug!(conflicting = %id, "approved booking overlaps requested period");
                Ok(BookingInsertOutcome::Overlaps {
                    conflicting: BookingId::from_uuid(id),
                })
            }
            None => Ok(BookingInsertOutcome::Created(created)),
        }
    }

    async fn list_newest_first(&self) -> Result<Vec<Booking>, BookingRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<BookingRow> = bookings::table
            .select(BookingRow::as_select())
            .order_by(bookings::created_at.desc())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_booking).collect()
    }

    async fn update_status(
        &self,
        id: BookingId,
        status: BookingStatus,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<Booking>, BookingRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<BookingRow> = diesel::update(bookings::table.find(*id.as_uuid()))
            .set((
                bookings::status.eq(status.as_str()),
                bookings::updated_at.eq(updated_at),
            ))
            .returning(BookingRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_booking).transpose()
    }
}
