//! PostgreSQL-backed `UserRepository`.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{Email, User, UserRole, Username};

use super::diesel_basic_error_mapping::{
    map_basic_diesel_error, map_basic_pool_error, unique_violation_column,
};
use super::models::{NewUserRow, UserRow};
use super::pool::{DbPool, PoolError};
use super::schema::users;

/// Diesel adapter for the credential store.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(err: PoolError) -> UserPersistenceError {
    map_basic_pool_error(err, UserPersistenceError::connection)
}

fn map_diesel_error(err: diesel::result::Error) -> UserPersistenceError {
    map_basic_diesel_error(
        err,
        UserPersistenceError::query,
        UserPersistenceError::connection,
    )
}

fn row_to_user(row: UserRow) -> Result<User, UserPersistenceError> {
    User::try_from(row).map_err(UserPersistenceError::query)
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn find_by_login(&self, identifier: &str) -> Result<Option<User>, UserPersistenceError> {
        let identifier = identifier.trim();
        let email = identifier.to_lowercase();
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<UserRow> = users::table
            .filter(users::username.eq(identifier).or(users::email.eq(&email)))
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_user).transpose()
    }

    async fn is_taken(
        &self,
        username: &Username,
        email: &Email,
    ) -> Result<bool, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::select(diesel::dsl::exists(
            users::table.filter(
                users::username
                    .eq(username.as_str())
                    .or(users::email.eq(email.as_str())),
            ),
        ))
        .get_result(&mut conn)
        .await
        .map_err(map_diesel_error)
    }

    async fn insert(&self, user: &User) -> Result<(), UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        match diesel::insert_into(users::table)
            .values(NewUserRow::from(user))
            .execute(&mut conn)
            .await
        {
            Ok(_) => Ok(()),
            Err(err) => match unique_violation_column(&err) {
                Some(field) => Err(UserPersistenceError::duplicate(field)),
                None => Err(map_diesel_error(err)),
            },
        }
    }

    async fn set_role(
        &self,
        identifier: &str,
        role: UserRole,
    ) -> Result<Option<User>, UserPersistenceError> {
        let identifier = identifier.trim();
        let email = identifier.to_lowercase();
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<UserRow> = diesel::update(
            users::table.filter(users::username.eq(identifier).or(users::email.eq(&email))),
        )
        .set(users::role.eq(role.as_str()))
        .returning(UserRow::as_returning())
        .get_result(&mut conn)
        .await
        .optional()
        .map_err(map_diesel_error)?;

        row.map(row_to_user).transpose()
    }
}
