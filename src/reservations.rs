//! A guest's reservation history.

use crate::error::Result;
use crate::executor::QueryExecutor;
use crate::models::ReservationListing;
use crate::query_builder::{Predicate, SelectBuilder};
use crate::query_utils::fetch_all;

const RESERVATION_COLUMNS: &str = "reservations.id AS reservation_id, reservations.guest_id, \
     reservations.start_date, reservations.end_date, properties.*, \
     avg(property_reviews.rating)::float8 AS average_rating";

/// Reservations of `guest_id` that ended before today, oldest stay first, with
/// each property's average review rating. At most `limit` rows.
///
/// Only properties that have at least one review are included.
///
/// # Errors
/// Returns the (already logged) storage error if the query fails.
pub async fn get_all_reservations<E>(
    db: &E,
    guest_id: i32,
    limit: i64,
) -> Result<Vec<ReservationListing>>
where
    E: QueryExecutor + ?Sized,
{
    let statement = SelectBuilder::new(RESERVATION_COLUMNS, "reservations")
        .join("JOIN properties ON reservations.property_id = properties.id")
        .join("JOIN property_reviews ON properties.id = property_reviews.property_id")
        .filter(Predicate::compare("reservations.guest_id", "=", guest_id))
        .filter(Predicate::sql("reservations.end_date < now()::date"))
        .group_by("properties.id")
        .group_by("reservations.id")
        .order_by("reservations.start_date")
        .limit(limit)
        .build();

    fetch_all(db, "get_all_reservations", &statement).await
}
