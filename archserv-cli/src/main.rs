//! Point d'entrée CLI pour archserv

use anyhow::Result;
use clap::Parser;
use tracing::{debug, Level};
use tracing_subscriber::{fmt, EnvFilter};

use archserv_cli::cli::{self, Commands};
use archserv_cli::Config;

// Charger .env au démarrage
fn load_env() {
    // Chercher .env dans le répertoire courant ou parent
    if dotenvy::dotenv().is_err() {
        // Essayer depuis le répertoire du binaire
        if let Ok(exe) = std::env::current_exe() {
            if let Some(dir) = exe.parent() {
                let _ = dotenvy::from_path(dir.join(".env"));
            }
        }
    }
}

/// Lire des relevés ArchServ: stations, points codés et features
#[derive(Parser)]
#[command(name = "archserv")]
#[command(author, version)]
#[command(about = "Lire des relevés ArchServ: stations, points codés et features")]
struct Cli {
    /// Augmenter la verbosité (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Mode silencieux
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Layer config preset (default) or path to a JSON config
    #[arg(long, default_value = "default", global = true)]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    // Charger .env avant tout
    load_env();

    let cli = Cli::parse();

    // Configurer le logging
    init_logging(cli.verbose, cli.quiet);

    let config = Config::resolve(&cli.config)?;
    debug!(config = %cli.config, layers = config.layers.len(), "Configuration chargée");

    match cli.command {
        Commands::Info { path, report } => cli::cmd_info(&path, &config, report.as_deref())?,
        Commands::Stations { path } => cli::cmd_stations(&path)?,
        Commands::Points { path } => cli::cmd_points(&path)?,
        Commands::Features { path } => cli::cmd_features(&path, &config)?,
    }

    Ok(())
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => Level::WARN,
        (_, 0) => Level::INFO,
        (_, 1) => Level::DEBUG,
        (_, _) => Level::TRACE,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .init();
}
