//! Typed rows returned by the accessors and the inputs they accept.
//!
//! Money is stored as integer cents (`cost_per_night`); search filters take
//! dollars and are converted when the query is built.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::LightbnbDbError;
use crate::results::CustomDbRow;

/// Decode a model from a result row by column name.
pub trait FromDbRow: Sized {
    /// # Errors
    /// Returns `ExecutionError` when a required column is missing or has the wrong type.
    fn from_row(row: &CustomDbRow) -> Result<Self, LightbnbDbError>;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    /// Password hash, stored as given.
    pub password: String,
}

impl FromDbRow for User {
    fn from_row(row: &CustomDbRow) -> Result<Self, LightbnbDbError> {
        Ok(Self {
            id: row.try_i32("id")?,
            name: row.try_text("name")?,
            email: row.try_text("email")?,
            password: row.try_text("password")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: i32,
    pub owner_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub thumbnail_photo_url: String,
    pub cover_photo_url: String,
    /// Price in cents.
    pub cost_per_night: i32,
    pub street: String,
    pub city: String,
    pub province: String,
    pub post_code: String,
    pub country: String,
    pub parking_spaces: i32,
    pub number_of_bathrooms: i32,
    pub number_of_bedrooms: i32,
}

impl FromDbRow for Property {
    fn from_row(row: &CustomDbRow) -> Result<Self, LightbnbDbError> {
        Ok(Self {
            id: row.try_i32("id")?,
            owner_id: row.try_i32("owner_id")?,
            title: row.try_text("title")?,
            description: row.try_opt_text("description")?,
            thumbnail_photo_url: row.try_text("thumbnail_photo_url")?,
            cover_photo_url: row.try_text("cover_photo_url")?,
            cost_per_night: row.try_i32("cost_per_night")?,
            street: row.try_text("street")?,
            city: row.try_text("city")?,
            province: row.try_text("province")?,
            post_code: row.try_text("post_code")?,
            country: row.try_text("country")?,
            parking_spaces: row.try_i32("parking_spaces")?,
            number_of_bathrooms: row.try_i32("number_of_bathrooms")?,
            number_of_bedrooms: row.try_i32("number_of_bedrooms")?,
        })
    }
}

/// A property together with its average review rating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyListing {
    #[serde(flatten)]
    pub property: Property,
    pub average_rating: f64,
}

impl FromDbRow for PropertyListing {
    fn from_row(row: &CustomDbRow) -> Result<Self, LightbnbDbError> {
        Ok(Self {
            property: Property::from_row(row)?,
            average_rating: row.try_float("average_rating")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: i32,
    pub guest_id: i32,
    pub property_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// A past reservation joined with the reserved property and its average rating.
///
/// Decoded from rows where the reservation id is aliased to `reservation_id`
/// so it does not collide with the property's `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReservationListing {
    pub reservation: Reservation,
    pub property: Property,
    pub average_rating: f64,
}

impl FromDbRow for ReservationListing {
    fn from_row(row: &CustomDbRow) -> Result<Self, LightbnbDbError> {
        let property = Property::from_row(row)?;
        Ok(Self {
            reservation: Reservation {
                id: row.try_i32("reservation_id")?,
                guest_id: row.try_i32("guest_id")?,
                property_id: property.id,
                start_date: row.try_date("start_date")?,
                end_date: row.try_date("end_date")?,
            },
            property,
            average_rating: row.try_float("average_rating")?,
        })
    }
}

/// Fields for a new property listing, in insertion order.
///
/// Every field is optional so a partially filled form can be submitted as-is;
/// the table's `NOT NULL` constraints decide what is actually required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewProperty {
    pub owner_id: Option<i32>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub thumbnail_photo_url: Option<String>,
    pub cover_photo_url: Option<String>,
    /// Price in cents.
    pub cost_per_night: Option<i32>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub province: Option<String>,
    pub post_code: Option<String>,
    pub country: Option<String>,
    pub parking_spaces: Option<i32>,
    pub number_of_bathrooms: Option<i32>,
    pub number_of_bedrooms: Option<i32>,
}

/// Optional filters for the property search. Every filter that is set is ANDed in.
///
/// Unset, empty and zero values add no clause.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropertySearch {
    /// Case-sensitive substring of the city name.
    pub city: Option<String>,
    pub owner_id: Option<i32>,
    /// Dollars, exclusive.
    pub minimum_price_per_night: Option<f64>,
    /// Dollars, exclusive.
    pub maximum_price_per_night: Option<f64>,
    /// Inclusive lower bound on the average review rating.
    pub minimum_rating: Option<f64>,
}

impl PropertySearch {
    #[must_use]
    pub fn city(&self) -> Option<&str> {
        self.city.as_deref().filter(|c| !c.is_empty())
    }

    #[must_use]
    pub fn owner_id(&self) -> Option<i32> {
        self.owner_id.filter(|id| *id != 0)
    }

    /// Lower bound in cents, rounded down so `cost_per_night > bound` keeps
    /// every whole-cent price above the dollar amount.
    #[must_use]
    pub fn minimum_price_cents(&self) -> Option<i64> {
        self.minimum_price_per_night
            .and_then(|dollars| dollars_to_cents(dollars, f64::floor))
    }

    /// Upper bound in cents, rounded up so `cost_per_night < bound` keeps
    /// every whole-cent price below the dollar amount.
    #[must_use]
    pub fn maximum_price_cents(&self) -> Option<i64> {
        self.maximum_price_per_night
            .and_then(|dollars| dollars_to_cents(dollars, f64::ceil))
    }

    #[must_use]
    pub fn minimum_rating(&self) -> Option<f64> {
        self.minimum_rating.filter(|r| *r != 0.0 && !r.is_nan())
    }
}

/// Zero and NaN count as "no filter". Whole-cent amounts are snapped first so
/// float noise (`19.99 * 100.0 == 1998.999...`) does not shift the bound.
#[allow(clippy::cast_possible_truncation)]
fn dollars_to_cents(dollars: f64, to_whole: fn(f64) -> f64) -> Option<i64> {
    if dollars == 0.0 || dollars.is_nan() {
        return None;
    }
    let cents = dollars * 100.0;
    let nearest = cents.round();
    let whole = if (cents - nearest).abs() < 1e-6 {
        nearest
    } else {
        to_whole(cents)
    };
    Some(whole as i64)
}
