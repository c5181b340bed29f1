use clap::Parser;
use std::path::PathBuf;
use ufind_core::config::Config;

#[derive(Parser)]
#[command(name = "ufind", about = "Filter a JSON list of users by name, age, or email")]
struct Cli {
    /// User document to load (overrides `data.path` from the config file).
    #[arg(long)]
    data: Option<PathBuf>,

    /// Config file to read instead of ~/.config/ufind/config.toml.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Answer the "filter by" prompt: name, age, or email.
    #[arg(long)]
    by: Option<String>,

    /// Answer the query prompt.
    #[arg(long)]
    query: Option<String>,

    /// Write debug logs to /tmp/ufind-debug.log (tail -f to inspect).
    #[arg(long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/ufind-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("ufind debug log started — tail -f /tmp/ufind-debug.log");
    }

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let path = cli.data.unwrap_or_else(|| config.data.path.clone());
    let users = ufind_core::load_users(&path)?;

    let outcome = ufind_shell::run(&users, &config, cli.by, cli.query)?;
    tracing::info!(?outcome, "ufind finished");
    Ok(())
}
