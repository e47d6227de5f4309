mod common;

use common::{RecordingExecutor, USER_COLUMNS, user_row};
use lightbnb_data::prelude::*;

#[tokio::test]
async fn user_with_email_returns_the_stored_record() -> Result<(), LightbnbDbError> {
    let db = RecordingExecutor::returning(Ok(ResultSet::from_rows(
        &USER_COLUMNS,
        vec![user_row(3, "Dominic Parks", "victoriablackwell@outlook.com")],
    )));

    let user = get_user_with_email(&db, "victoriablackwell@outlook.com")
        .await?
        .expect("user should be found");
    assert_eq!(user.id, 3);
    assert_eq!(user.name, "Dominic Parks");
    assert_eq!(user.email, "victoriablackwell@outlook.com");

    let call = db.only_call();
    assert_eq!(call.query, "SELECT *\nFROM users\nWHERE email = $1");
    assert_eq!(
        call.params,
        vec![RowValues::Text("victoriablackwell@outlook.com".into())]
    );
    Ok(())
}

#[tokio::test]
async fn absent_email_is_none_not_an_error() -> Result<(), LightbnbDbError> {
    let db = RecordingExecutor::returning(Ok(ResultSet::from_rows(&USER_COLUMNS, vec![])));
    assert_eq!(get_user_with_email(&db, "nobody@example.com").await?, None);
    Ok(())
}

#[tokio::test]
async fn user_with_id_binds_the_id() -> Result<(), LightbnbDbError> {
    let db = RecordingExecutor::returning(Ok(ResultSet::from_rows(
        &USER_COLUMNS,
        vec![user_row(2, "Louisa Meyer", "jacksonrose@hotmail.com")],
    )));

    let user = get_user_with_id(&db, 2).await?.expect("user should be found");
    assert_eq!(user.name, "Louisa Meyer");

    let call = db.only_call();
    assert_eq!(call.query, "SELECT *\nFROM users\nWHERE id = $1");
    assert_eq!(call.params, vec![RowValues::Int(2)]);
    Ok(())
}

#[tokio::test]
async fn add_user_inserts_and_returns_the_generated_id() -> Result<(), LightbnbDbError> {
    let db = RecordingExecutor::returning(Ok(ResultSet::from_rows(
        &USER_COLUMNS,
        vec![user_row(4, "Ada", "ada@example.com")],
    )));
    let new_user = NewUser {
        name: "Ada".into(),
        email: "ada@example.com".into(),
        password: "$2a$10$hash".into(),
    };

    let created = add_user(&db, &new_user).await?;
    assert_eq!(created.id, 4);
    assert_eq!(created.name, new_user.name);
    assert_eq!(created.email, new_user.email);
    assert_eq!(created.password, new_user.password);

    let call = db.only_call();
    assert_eq!(
        call.query,
        "INSERT INTO users (name, email, password)\nVALUES ($1, $2, $3)\nRETURNING *"
    );
    assert_eq!(
        call.params,
        vec![
            RowValues::Text("Ada".into()),
            RowValues::Text("ada@example.com".into()),
            RowValues::Text("$2a$10$hash".into()),
        ]
    );
    Ok(())
}

#[tokio::test]
async fn add_user_without_returned_row_is_not_found() {
    let db = RecordingExecutor::returning(Ok(ResultSet::from_rows(&USER_COLUMNS, vec![])));
    let new_user = NewUser {
        name: "Ada".into(),
        email: "ada@example.com".into(),
        password: "x".into(),
    };

    let err = add_user(&db, &new_user).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn storage_failures_are_returned_typed() {
    let db = RecordingExecutor::returning(Err(LightbnbDbError::ConstraintViolation {
        constraint: "users_email_key".into(),
        message: "duplicate key value violates unique constraint".into(),
    }));
    let new_user = NewUser {
        name: "Eva".into(),
        email: "sebastianguerra@ymail.com".into(),
        password: "x".into(),
    };
    let err = add_user(&db, &new_user).await.unwrap_err();
    assert!(err.is_constraint_violation());

    let db = RecordingExecutor::returning(Err(LightbnbDbError::ConnectionError(
        "connection refused".into(),
    )));
    let err = get_user_with_id(&db, 1).await.unwrap_err();
    assert!(err.is_connection_failure());
}

#[tokio::test]
async fn malformed_row_is_an_execution_error() {
    let db = RecordingExecutor::returning(Ok(ResultSet::from_rows(
        &["id", "name"],
        vec![vec![RowValues::Int(1), RowValues::Text("Ada".into())]],
    )));
    let err = get_user_with_id(&db, 1).await.unwrap_err();
    assert!(matches!(err, LightbnbDbError::ExecutionError(_)));
}
