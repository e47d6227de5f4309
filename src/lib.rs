//! Async PostgreSQL data access for the LightBnB rental app.
//!
//! Every accessor takes the executor it should run on (usually a
//! [`ConfigAndPool`]) and issues exactly one statement:
//!
//! ```rust,no_run
//! use lightbnb_data::prelude::*;
//!
//! # async fn demo() -> Result<(), LightbnbDbError> {
//! let mut cfg = deadpool_postgres::Config::new();
//! cfg.host = Some("localhost".into());
//! cfg.port = Some(5432);
//! cfg.dbname = Some("lightbnb".into());
//! cfg.user = Some("labber".into());
//! cfg.password = Some("labber".into());
//! let db = ConfigAndPool::new_postgres(cfg).await?;
//!
//! let search = PropertySearch {
//!     city: Some("Vancouver".into()),
//!     maximum_price_per_night: Some(150.0),
//!     ..PropertySearch::default()
//! };
//! for listing in get_all_properties(&db, &search, DEFAULT_LIMIT).await? {
//!     println!("{} ({:.1})", listing.property.title, listing.average_rating);
//! }
//! # Ok(()) }
//! ```

pub mod error;
pub mod executor;
pub mod models;
pub mod postgres;
pub mod prelude;
pub mod properties;
pub mod query_builder;
mod query_utils;
pub mod reservations;
pub mod results;
pub mod types;
pub mod users;

#[cfg(feature = "test-utils")]
pub mod test_utils;

/// Row cap applied by the list accessors when the caller has no preference.
pub const DEFAULT_LIMIT: i64 = 10;

pub use error::LightbnbDbError;
pub use executor::QueryExecutor;
pub use models::{
    FromDbRow, NewProperty, NewUser, Property, PropertyListing, PropertySearch, Reservation,
    ReservationListing, User,
};
pub use postgres::ConfigAndPool;
pub use properties::{add_property, get_all_properties};
pub use reservations::get_all_reservations;
pub use results::{CustomDbRow, ResultSet};
pub use types::{QueryAndParams, RowValues};
pub use users::{add_user, get_user_with_email, get_user_with_id};
