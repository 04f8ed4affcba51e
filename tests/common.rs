extern crate itemstore;

use itemstore::database_migrate_refinery;
use r2d2::ManageConnection;
use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::OpenFlags;
use std::path::PathBuf;

/// Create a migrated connection pool over a named shared-cache in-memory
/// database. Each test passes its own name, so tests never see each other's
/// rows. The pool's idle connections keep the in-memory database alive.
pub fn test_pool(name: &str) -> Pool<SqliteConnectionManager> {
    let uri = format!("file:{}?mode=memory&cache=shared", name);
    let sqlite = SqliteConnectionManager::file(PathBuf::from(uri))
        .with_flags(OpenFlags::SQLITE_OPEN_URI | OpenFlags::SQLITE_OPEN_READ_WRITE);

    // Cannot re-use the pool for refinery migrations,
    // refinery wants a plain connection with an exclusive borrow
    let mut refinery_connection = sqlite
        .connect()
        .expect("Failed to open a connection for refinery database migrations");
    database_migrate_refinery::migrate(&mut refinery_connection)
        .expect("Failed to run refinery migrations");

    Pool::new(sqlite).expect("Failed to create r2d2 SQLite connection pool")
}
