//! Diesel and pool error mapping shared by every repository.
//!
//! Each repository passes its own port-error constructors, so the classification
//! rules live in one place: checkout failures and closed connections become
//! `connection`, everything else becomes `query`.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::{debug, error};

use super::pool::PoolError;

/// Map a pool failure with the repository's connection constructor.
pub(crate) fn map_basic_pool_error<E>(err: PoolError, connection: impl FnOnce(String) -> E) -> E {
    let message = err.into_message();
    error!(%message, "database pool checkout failed");
    connection(message)
}

/// Map a Diesel failure onto query/connection constructors.
///
/// Driver text is logged at `debug!` and replaced by a fixed message, so
/// nothing from the database reaches a response body.
pub(crate) fn map_basic_diesel_error<E>(
    err: DieselError,
    query: impl FnOnce(&'static str) -> E,
    connection: impl FnOnce(&'static str) -> E,
) -> E {
    match &err {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        other => debug!(error = %other, "diesel operation failed"),
    }

    match err {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            connection("database connection error")
        }
        DieselError::NotFound => query("record not found"),
        DieselError::QueryBuilderError(_) => query("database query error"),
        _ => query("database error"),
    }
}

/// Column named by a `users` unique-index violation, if `err` is one.
pub(crate) fn unique_violation_column(err: &DieselError) -> Option<&'static str> {
    let DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) = err else {
        return None;
    };
    let constraint = info.constraint_name().unwrap_or_default();
    if constraint.contains("email") {
        Some("email")
    } else {
        Some("username")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::BookingRepositoryError;
    use rstest::rstest;

    #[derive(Debug)]
    struct Info(Option<&'static str>);

    impl diesel::result::DatabaseErrorInformation for Info {
        fn message(&self) -> &str {
            "duplicate key value violates unique constraint"
        }
        fn details(&self) -> Option<&str> {
            None
        }
        fn hint(&self) -> Option<&str> {
            None
        }
        fn table_name(&self) -> Option<&str> {
            Some("users")
        }
        fn column_name(&self) -> Option<&str> {
            None
        }
        fn constraint_name(&self) -> Option<&str> {
            self.0
        }
        fn statement_position(&self) -> Option<i32> {
            None
        }
    }

    fn database_error(kind: DatabaseErrorKind, constraint: Option<&'static str>) -> DieselError {
        DieselError::DatabaseError(kind, Box::new(Info(constraint)))
    }

    fn map(err: DieselError) -> BookingRepositoryError {
        map_basic_diesel_error(
            err,
            BookingRepositoryError::query,
            BookingRepositoryError::connection,
        )
    }

    #[rstest]
    fn closed_connections_are_connection_failures() {
        let mapped = map(database_error(DatabaseErrorKind::ClosedConnection, None));
        assert_eq!(
            mapped,
            BookingRepositoryError::connection("database connection error")
        );
    }

    #[rstest]
    #[case(DieselError::NotFound, "record not found")]
    #[case(DieselError::RollbackTransaction, "database error")]
    fn other_failures_are_query_failures(#[case] err: DieselError, #[case] message: &str) {
        assert_eq!(map(err), BookingRepositoryError::query(message));
    }

    #[rstest]
    fn pool_failures_keep_their_message() {
        let mapped = map_basic_pool_error(
            PoolError::checkout("timed out"),
            BookingRepositoryError::connection,
        );
        assert_eq!(mapped, BookingRepositoryError::connection("timed out"));
    }

    #[rstest]
    #[case(Some("users_email_key"), Some("email"))]
    #[case(Some("users_username_key"), Some("username"))]
    #[case(None, Some("username"))]
    fn unique_violations_name_their_column(
        #[case] constraint: Option<&'static str>,
        #[case] column: Option<&str>,
    ) {
        let err = database_error(DatabaseErrorKind::UniqueViolation, constraint);
        assert_eq!(unique_violation_column(&err), column);
    }

    #[rstest]
    fn non_unique_errors_have_no_column() {
        assert_eq!(unique_violation_column(&DieselError::NotFound), None);
    }
}
