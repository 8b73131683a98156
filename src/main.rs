use anyhow::{Context, Result};
use bookseed::config::Config;
use bookseed::seeder::Seeder;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Respect RUST_LOG if set; logs go to stderr so stdout only carries the report
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("bookseed=info,bookseed_db=info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(db_path = %config.db_path.display(), "starting seeder");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    Seeder::new(config)
        .run(&mut out)
        .context("Seeding failed")?;

    Ok(())
}
