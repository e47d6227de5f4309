mod common;

use chrono::NaiveDate;
use common::{PROPERTY_COLUMNS, RecordingExecutor, property_row};
use lightbnb_data::prelude::*;

fn reservation_columns() -> Vec<&'static str> {
    let mut columns = vec!["reservation_id", "guest_id", "start_date", "end_date"];
    columns.extend(PROPERTY_COLUMNS);
    columns.push("average_rating");
    columns
}

fn reservation_row(id: i64, property_id: i64, start: NaiveDate, end: NaiveDate) -> Vec<RowValues> {
    let mut row = vec![
        RowValues::Int(id),
        RowValues::Int(3),
        RowValues::Date(start),
        RowValues::Date(end),
    ];
    row.extend(property_row(property_id, "Vancouver", 9300));
    row.push(RowValues::Float(4.5));
    row
}

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[tokio::test]
async fn past_reservations_query_shape() -> Result<(), LightbnbDbError> {
    let db = RecordingExecutor::returning(Ok(ResultSet::from_rows(
        &reservation_columns(),
        vec![
            reservation_row(1, 1, ymd(2018, 9, 11), ymd(2018, 9, 26)),
            reservation_row(2, 2, ymd(2019, 1, 4), ymd(2019, 2, 1)),
        ],
    )));

    let listings = get_all_reservations(&db, 3, DEFAULT_LIMIT).await?;
    assert_eq!(listings.len(), 2);
    assert_eq!(listings[0].reservation.id, 1);
    assert_eq!(listings[0].reservation.guest_id, 3);
    assert_eq!(listings[0].reservation.property_id, 1);
    assert_eq!(listings[1].property.id, 2);
    assert_eq!(listings[1].reservation.start_date, ymd(2019, 1, 4));

    let call = db.only_call();
    assert_eq!(
        call.query,
        "SELECT reservations.id AS reservation_id, reservations.guest_id, \
         reservations.start_date, reservations.end_date, properties.*, \
         avg(property_reviews.rating)::float8 AS average_rating\n\
         FROM reservations\n\
         JOIN properties ON reservations.property_id = properties.id\n\
         JOIN property_reviews ON properties.id = property_reviews.property_id\n\
         WHERE reservations.guest_id = $1 AND reservations.end_date < now()::date\n\
         GROUP BY properties.id, reservations.id\n\
         ORDER BY reservations.start_date\n\
         LIMIT $2"
    );
    assert_eq!(call.params, vec![RowValues::Int(3), RowValues::Int(10)]);
    Ok(())
}

#[tokio::test]
async fn limit_is_bound_as_given() -> Result<(), LightbnbDbError> {
    let db = RecordingExecutor::default();
    let listings = get_all_reservations(&db, 1, 2).await?;
    assert!(listings.is_empty());
    assert_eq!(db.only_call().params[1], RowValues::Int(2));
    Ok(())
}

#[tokio::test]
async fn failure_is_returned_not_swallowed() {
    let db = RecordingExecutor::returning(Err(LightbnbDbError::ConnectionError(
        "pool closed".into(),
    )));
    let err = get_all_reservations(&db, 1, DEFAULT_LIMIT).await.unwrap_err();
    assert!(err.is_connection_failure());
}
