//! Navigation assistant replay binary

use advisory::{Locale, NavigationSession};
use clap::Parser;
use navigator::{init_logging, load_config, replay};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::BufReader;
use tracing::info;

#[derive(Parser)]
#[command(name = "navassist")]
#[command(about = "Replay detector output and emit navigation advisories as JSON lines")]
struct Args {
    /// Configuration file path (TOML, JSON or YAML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// JSON-lines input; stdin when omitted
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output language: en or ar
    #[arg(long)]
    locale: Option<Locale>,

    /// Advisory cooldown in seconds
    #[arg(long)]
    cooldown: Option<u64>,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Log as JSON
    #[arg(long)]
    log_json: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging(args.verbose, args.log_json)?;

    info!("=== NavAssist v{} ===", env!("CARGO_PKG_VERSION"));

    let mut config = load_config(args.config.as_deref())?;
    if let Some(locale) = args.locale {
        config.locale = locale;
    }
    if let Some(cooldown) = args.cooldown {
        config.cooldown_seconds = cooldown;
    }

    let session = Arc::new(NavigationSession::new(config)?);
    let output = tokio::io::stdout();

    let summary = match args.input {
        Some(path) => {
            info!("Replaying {}", path.display());
            let file = tokio::fs::File::open(&path).await?;
            replay(session, BufReader::new(file), output).await?
        }
        None => replay(session, BufReader::new(tokio::io::stdin()), output).await?,
    };

    info!(
        "Processed {} frames, issued {} advisories",
        summary.frames, summary.advisories
    );
    Ok(())
}
