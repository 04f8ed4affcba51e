use structopt::clap::AppSettings;
use structopt::StructOpt;

#[derive(StructOpt, Debug, Clone)]
#[structopt(
    name = "Itemstore, a small HTTP service for priced, dated item records.",
    setting = AppSettings::DeriveDisplayOrder,
    setting = AppSettings::UnifiedHelpMessage,
)]
pub struct CliOptions {
    /// Port to listen to.
    #[structopt(short, long, default_value = "3030", env = "ITEMSTORE_PORT")]
    pub port: u16,

    /// SQLite database file to store items in.
    /// The parent directory is created on startup if it does not exist yet.
    #[structopt(
        short,
        long,
        default_value = crate::constants::DATABASE_FILE,
        name = "DATABASE_FILE",
        env = "ITEMSTORE_DATABASE_FILE"
    )]
    pub database_file: String,
}

#[cfg(test)]
pub mod tests {
    use super::CliOptions;

    /// Example test CLI. Purely for convenience,
    /// you can instantiate your own / unrelated ones as well.
    pub fn test_cli() -> CliOptions {
        CliOptions {
            port: 3030,
            database_file: "file:itemstore_test?mode=memory&cache=shared".to_string(),
        }
    }
}
