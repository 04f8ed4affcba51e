use serde::Deserialize;
use serde::Serialize;

/// Inbound body of `POST /add`.
///
/// `title` and `price` are deliberately optional: absent fields are passed
/// through to the database as NULLs and fail there on the NOT NULL
/// constraints, instead of being validated at the HTTP boundary.
#[derive(Debug, Deserialize)]
pub struct CreateItem {
    pub title: Option<String>,
    pub price: Option<f64>,
    /// Timestamp in `YYYY-MM-DD HH:MM:SS` format.
    /// Defaults to the current UTC time when not supplied.
    pub date: Option<String>,
}

/// A persisted item, as rendered in responses.
/// `date` stays a string in the canonical `YYYY-MM-DD HH:MM:SS` form.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct Item {
    pub id: i64,
    pub title: String,
    pub price: f64,
    pub date: String,
}
