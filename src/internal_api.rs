use crate::api_model::CreateItem;
use crate::api_model::Item;
use crate::constants::DATE_FORMAT;
use crate::error::Error;
use crate::error::ErrorContext;
use crate::error::Result;
use chrono::NaiveDateTime;
use chrono::Utc;
use log::debug;
use rusqlite::named_params;
use rusqlite::Connection;
use rusqlite::Row;
use warp::http::status::StatusCode;

/// Get project version as seen by Cargo.
pub fn get_project_version() -> &'static str {
    debug!("Returning API version...");
    env!("CARGO_PKG_VERSION")
}

/// Parse the optional `date` of an inbound item.
/// Only `YYYY-MM-DD HH:MM:SS` is accepted; a missing date means "now" in UTC.
fn parse_date(date: Option<&str>) -> Result<NaiveDateTime> {
    match date {
        Some(date) => NaiveDateTime::parse_from_str(date, DATE_FORMAT).map_err(|_| Error {
            code: StatusCode::BAD_REQUEST,
            msg: "Invalid date format. Use YYYY-MM-DD HH:MM:SS".to_string(),
        }),
        None => Ok(Utc::now().naive_utc()),
    }
}

fn item_from_row(row: &Row) -> rusqlite::Result<Item> {
    Ok(Item {
        id: row.get(0)?,
        title: row.get(1)?,
        price: row.get(2)?,
        date: row.get(3)?,
    })
}

/// Get a single item by its `id`, `None` if no such row exists.
/// Not exposed over HTTP, used to read an item back right after inserting it.
pub fn get_item(conn: &Connection, id: i64) -> Result<Option<Item>> {
    let mut stmt = conn.prepare_cached("SELECT id, title, price, date FROM items WHERE id = :id;")?;
    let mut rows = stmt.query(named_params! { ":id": id })?;
    match rows.next()? {
        Some(row) => Ok(Some(item_from_row(row)?)),
        None => Ok(None),
    }
}

/// Get all persisted items, in whatever order the database returns them.
pub fn get_all_items(conn: &Connection) -> Result<Vec<Item>> {
    let mut stmt = conn
        .prepare_cached("SELECT id, title, price, date FROM items;")
        .context_str("Failed to prepare SQL get_all_items query")?;
    let mut rows = stmt.query([])?;
    let mut result = Vec::new();
    while let Some(row) = rows.next()? {
        result.push(item_from_row(row)?);
    }
    Ok(result)
}

/// Create a single item and return it as persisted, with its generated `id`.
/// The date is parsed (or defaulted) before anything is written,
/// so a malformed date never leaves a row behind.
pub fn create_item(conn: &Connection, body: CreateItem) -> Result<Item> {
    debug!("Creating item {:?}", body);
    let date = parse_date(body.date.as_deref())?;
    let date = date.format(DATE_FORMAT).to_string();
    let mut stmt = conn.prepare_cached(
        "INSERT INTO items (title, price, date) VALUES (:title, :price, :date);",
    )?;
    stmt.execute(named_params! {
        ":title": body.title,
        ":price": body.price,
        ":date": date,
    })
    .context_str("Failed to insert item")?;
    let id = conn.last_insert_rowid();
    get_item(conn, id)?.ok_or_else(|| Error {
        code: StatusCode::INTERNAL_SERVER_ERROR,
        msg: format!("Item {} not found right after inserting", id),
    })
}
