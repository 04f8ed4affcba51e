use chrono::Utc;
use env_logger::Env;
use itemstore::command_line_interface::CliOptions;
use itemstore::database_migrate_refinery;
use itemstore::warp_api;
use log::error;
use r2d2::ManageConnection;
use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use std::io::Write;
use std::path::Path;
use structopt::StructOpt;

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(Env::default().filter_or("RUST_LOG", "info"))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] - {}",
                Utc::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .init();

    let cli_options = CliOptions::from_args();

    if let Some(parent) = Path::new(&cli_options.database_file).parent() {
        std::fs::create_dir_all(parent).unwrap_or_else(|err| {
            error!("Failed to create database directory {:?}, {}", parent, err);
            std::process::exit(1);
        });
    }

    let sqlite = SqliteConnectionManager::file(&cli_options.database_file);

    // Ensure the items table exists before the server accepts connections.
    let mut refinery_connection = sqlite.connect().unwrap_or_else(|err| {
        error!("Failed to open database connection for migrations, {}", err);
        std::process::exit(1);
    });
    database_migrate_refinery::migrate(&mut refinery_connection).unwrap_or_else(|err| {
        error!("Failed to migrate database, {}", err);
        std::process::exit(1);
    });

    let sqlite_pool: Pool<SqliteConnectionManager> = Pool::new(sqlite).unwrap_or_else(|err| {
        error!("Failed to create r2d2 SQLite connection pool, {}", err);
        std::process::exit(1);
    });

    // Start web framework
    warp_api::run_server(cli_options, sqlite_pool).await;
}
