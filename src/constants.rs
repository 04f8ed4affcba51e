// Constants used in the project. These are "convention over configuration" for now.

pub const DATABASE_DIR: &str = "./data/db";
pub const DATABASE_FILE: &str = "./data/db/itemstore.sqlite";

/// The one timestamp format accepted on input and produced on output.
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
