//! User lookup and registration.

use crate::error::{LightbnbDbError, Result};
use crate::executor::QueryExecutor;
use crate::models::{NewUser, User};
use crate::query_builder::{InsertBuilder, Predicate, SelectBuilder};
use crate::query_utils::fetch_optional;

/// Look a user up by exact email.
///
/// # Errors
/// Returns the (already logged) storage error if the query fails.
pub async fn get_user_with_email<E>(db: &E, email: &str) -> Result<Option<User>>
where
    E: QueryExecutor + ?Sized,
{
    let statement = SelectBuilder::new("*", "users")
        .filter(Predicate::compare("email", "=", email))
        .build();
    fetch_optional(db, "get_user_with_email", &statement).await
}

/// Look a user up by id.
///
/// # Errors
/// Returns the (already logged) storage error if the query fails.
pub async fn get_user_with_id<E>(db: &E, id: i32) -> Result<Option<User>>
where
    E: QueryExecutor + ?Sized,
{
    let statement = SelectBuilder::new("*", "users")
        .filter(Predicate::compare("id", "=", id))
        .build();
    fetch_optional(db, "get_user_with_id", &statement).await
}

/// Insert a user and return the stored row with its generated id.
///
/// # Errors
/// `ConstraintViolation` when the email is already taken, `NotFound` if the
/// insert returned no row, or any other storage error. All are logged.
pub async fn add_user<E>(db: &E, user: &NewUser) -> Result<User>
where
    E: QueryExecutor + ?Sized,
{
    let statement = InsertBuilder::into_table("users")
        .value("name", user.name.as_str())
        .value("email", user.email.as_str())
        .value("password", user.password.as_str())
        .returning("*")
        .build();

    match fetch_optional(db, "add_user", &statement).await? {
        Some(created) => Ok(created),
        None => {
            tracing::error!(operation = "add_user", "insert returned no row");
            Err(LightbnbDbError::NotFound(
                "INSERT INTO users returned no row".to_string(),
            ))
        }
    }
}
