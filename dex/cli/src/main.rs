mod config;
mod schema;

use {
    crate::{config::Config, schema::SchemaCmd},
    clap::Parser,
    config_parser::{parse_config, parse_env},
    dex_schema::{SchemaManager, connect_db_with_url},
    std::path::PathBuf,
    tracing::metadata::LevelFilter,
};

#[derive(Parser)]
#[command(author, version, about, next_display_order = None)]
struct Cli {
    /// TOML config file; without it every setting comes from the environment
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: SchemaCmd,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments.
    let cli = Cli::parse();

    // Parse the config file, if any.
    let cfg: Config = match &cli.config {
        Some(path) => parse_config(path)?,
        None => parse_env()?,
    };

    // Set up tracing.
    tracing_subscriber::fmt()
        .with_max_level(cfg.log_level.parse::<LevelFilter>()?)
        .init();

    let db = connect_db_with_url(&cfg.database.url, cfg.database.max_connections).await?;

    let manager = SchemaManager::builder(db)
        .with_log_schema(cfg.schema.log_variant)
        .build();

    cli.command.run(manager).await
}
