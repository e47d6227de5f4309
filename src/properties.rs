//! Property search and listing creation.

use crate::error::Result;
use crate::executor::QueryExecutor;
use crate::models::{NewProperty, Property, PropertyListing, PropertySearch};
use crate::query_builder::{InsertBuilder, Predicate, SelectBuilder};
use crate::query_utils::fetch_all;
use crate::types::QueryAndParams;

/// Build the search statement for `search`.
///
/// Exposed so callers (and tests) can inspect the SQL and its parameters
/// without a database.
#[must_use]
pub fn property_search_query(search: &PropertySearch, limit: i64) -> QueryAndParams {
    SelectBuilder::new(
        "properties.*, avg(property_reviews.rating)::float8 AS average_rating",
        "properties",
    )
    .join("JOIN property_reviews ON properties.id = property_reviews.property_id")
    .filter_opt(
        search
            .city()
            .map(|city| Predicate::compare("properties.city", "LIKE", format!("%{city}%"))),
    )
    .filter_opt(
        search
            .owner_id()
            .map(|owner| Predicate::compare("properties.owner_id", "=", owner)),
    )
    .filter_opt(
        search
            .minimum_price_cents()
            .map(|cents| Predicate::compare("properties.cost_per_night", ">", cents)),
    )
    .filter_opt(
        search
            .maximum_price_cents()
            .map(|cents| Predicate::compare("properties.cost_per_night", "<", cents)),
    )
    .group_by("properties.id")
    .having_opt(search.minimum_rating().map(|rating| {
        Predicate::compare("avg(property_reviews.rating)::float8", ">=", rating)
    }))
    .order_by("properties.cost_per_night")
    .limit(limit)
    .build()
}

/// Search properties with the filters in `search`, cheapest first, at most `limit` rows.
///
/// Only properties with at least one review are returned.
///
/// # Errors
/// Returns the (already logged) storage error if the query fails.
pub async fn get_all_properties<E>(
    db: &E,
    search: &PropertySearch,
    limit: i64,
) -> Result<Vec<PropertyListing>>
where
    E: QueryExecutor + ?Sized,
{
    let statement = property_search_query(search, limit);
    fetch_all(db, "get_all_properties", &statement).await
}

/// Build the insert statement for `property`; columns and `$1..$14` follow the field order.
#[must_use]
pub fn property_insert_query(property: &NewProperty) -> QueryAndParams {
    InsertBuilder::into_table("properties")
        .value("owner_id", property.owner_id)
        .value("title", property.title.clone())
        .value("description", property.description.clone())
        .value("thumbnail_photo_url", property.thumbnail_photo_url.clone())
        .value("cover_photo_url", property.cover_photo_url.clone())
        .value("cost_per_night", property.cost_per_night)
        .value("street", property.street.clone())
        .value("city", property.city.clone())
        .value("province", property.province.clone())
        .value("post_code", property.post_code.clone())
        .value("country", property.country.clone())
        .value("parking_spaces", property.parking_spaces)
        .value("number_of_bathrooms", property.number_of_bathrooms)
        .value("number_of_bedrooms", property.number_of_bedrooms)
        .returning("*")
        .build()
}

/// Insert a property and return every row of the `RETURNING` set.
///
/// Missing fields are bound as NULL, so a missing required field comes back
/// as a `ConstraintViolation` from the table rather than a default.
///
/// # Errors
/// Returns the (already logged) storage error if the insert fails.
pub async fn add_property<E>(db: &E, property: &NewProperty) -> Result<Vec<Property>>
where
    E: QueryExecutor + ?Sized,
{
    let statement = property_insert_query(property);
    fetch_all(db, "add_property", &statement).await
}
