use chrono::{NaiveDate, NaiveDateTime};

/// A single cell or bound parameter.
///
/// The same enum travels in both directions:
/// ```rust
/// use lightbnb_data::RowValues;
///
/// let params = vec![
///     RowValues::Int(1),
///     RowValues::Text("%vancouver%".into()),
///     RowValues::Float(4.0),
/// ];
/// # let _ = params;
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum RowValues {
    /// Any integer column (`int2`, `int4`, `int8`), widened.
    Int(i64),
    Float(f64),
    Text(String),
    Bool(bool),
    Date(NaiveDate),
    Timestamp(NaiveDateTime),
    Null,
}

impl RowValues {
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            RowValues::Int(value) => Some(*value),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            RowValues::Text(value) => Some(value),
            _ => None,
        }
    }

    /// Dates, the date part of a timestamp, or `YYYY-MM-DD` text.
    #[must_use]
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            RowValues::Date(value) => Some(*value),
            RowValues::Timestamp(value) => Some(value.date()),
            RowValues::Text(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d").ok(),
            _ => None,
        }
    }

    /// Integers widen, so an average over an integer column still reads as a float.
    #[must_use]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            RowValues::Float(value) => Some(*value),
            #[allow(clippy::cast_precision_loss)]
            RowValues::Int(value) => Some(*value as f64),
            _ => None,
        }
    }
}

impl From<i64> for RowValues {
    fn from(value: i64) -> Self {
        RowValues::Int(value)
    }
}

impl From<i32> for RowValues {
    fn from(value: i32) -> Self {
        RowValues::Int(i64::from(value))
    }
}

impl From<f64> for RowValues {
    fn from(value: f64) -> Self {
        RowValues::Float(value)
    }
}

impl From<&str> for RowValues {
    fn from(value: &str) -> Self {
        RowValues::Text(value.to_owned())
    }
}

impl From<String> for RowValues {
    fn from(value: String) -> Self {
        RowValues::Text(value)
    }
}

/// `None` binds as SQL `NULL`.
impl<T: Into<RowValues>> From<Option<T>> for RowValues {
    fn from(value: Option<T>) -> Self {
        value.map_or(RowValues::Null, Into::into)
    }
}

/// A rendered statement: `params[k - 1]` is bound to `$k` in `query`.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryAndParams {
    pub query: String,
    pub params: Vec<RowValues>,
}

impl QueryAndParams {
    pub fn new(query: impl Into<String>, params: Vec<RowValues>) -> Self {
        Self {
            query: query.into(),
            params,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_values_bind_as_null() {
        assert_eq!(RowValues::from(None::<i32>), RowValues::Null);
        assert_eq!(RowValues::from(Some("Calgary")), RowValues::Text("Calgary".into()));
        assert_eq!(RowValues::from(Some(7_i32)), RowValues::Int(7));
    }

    #[test]
    fn dates_read_from_text_and_timestamps() {
        let day = NaiveDate::from_ymd_opt(2019, 1, 4).unwrap();
        assert_eq!(RowValues::Text("2019-01-04".into()).as_date(), Some(day));
        let ts = day.and_hms_opt(12, 0, 0).unwrap();
        assert_eq!(RowValues::Timestamp(ts).as_date(), Some(day));
        assert_eq!(RowValues::Int(3).as_date(), None);
    }
}
