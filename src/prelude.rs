//! Convenient imports for common functionality.

pub use crate::DEFAULT_LIMIT;
pub use crate::error::LightbnbDbError;
pub use crate::executor::QueryExecutor;
pub use crate::models::{
    NewProperty, NewUser, Property, PropertyListing, PropertySearch, Reservation,
    ReservationListing, User,
};
pub use crate::postgres::ConfigAndPool;
pub use crate::properties::{add_property, get_all_properties};
pub use crate::reservations::get_all_reservations;
pub use crate::results::{CustomDbRow, ResultSet};
pub use crate::types::{QueryAndParams, RowValues};
pub use crate::users::{add_user, get_user_with_email, get_user_with_id};
