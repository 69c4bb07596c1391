//! CLI command definitions, routing, and tracing setup.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;
use industrykb_core::pipeline::{SynthesizeConfig, synthesize};
use industrykb_shared::{AppConfig, init_config, load_config};
use tracing::info;

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// IndustryKB — synthesize the website knowledge base for AI grounding.
#[derive(Parser)]
#[command(
    name = "industrykb",
    version,
    about = "Merge the curated industry taxonomy with indexed website content into AI-ready artifacts.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Log format: text (default) or json.
    #[arg(long, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand; running with no arguments performs an extract.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

/// Top-level CLI subcommands.
#[derive(Subcommand)]
pub(crate) enum Command {
    /// Build the knowledge base from the content index and write both artifacts.
    Extract {
        /// Path to the content-index database (overrides config).
        #[arg(long)]
        db: Option<PathBuf>,

        /// Output directory for the artifacts (overrides config).
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Configuration management.
    Config {
        /// Config subcommand.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommands.
#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Initialize config file with defaults.
    Init,
    /// Show resolved configuration.
    Show,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "industrykb=info",
        1 => "industrykb=debug",
        _ => "industrykb=trace",
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .init();
        }
        LogFormat::Json => {
            fmt().json().with_env_filter(env_filter).init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

/// Run the CLI command. No subcommand means a default extract.
pub(crate) async fn run(cli: Cli) -> Result<()> {
    let command = cli
        .command
        .unwrap_or(Command::Extract { db: None, out: None });

    match command {
        Command::Extract { db, out } => cmd_extract(db, out).await,
        Command::Config { action } => match action {
            ConfigAction::Init => cmd_config_init().await,
            ConfigAction::Show => cmd_config_show().await,
        },
    }
}

// ---------------------------------------------------------------------------
// Command handlers
// ---------------------------------------------------------------------------

async fn cmd_extract(db: Option<PathBuf>, out: Option<PathBuf>) -> Result<()> {
    let config = load_config()?;

    // CLI flags override config file values.
    let db_path = db.unwrap_or_else(|| PathBuf::from(&config.defaults.db_path));
    let output_dir = out.unwrap_or_else(|| PathBuf::from(&config.defaults.output_dir));

    info!(
        db = %db_path.display(),
        out = %output_dir.display(),
        "extracting website knowledge base"
    );

    let synth_config = SynthesizeConfig {
        db_path,
        output_dir,
    };
    let result = synthesize(&synth_config).await?;

    // Print summary
    println!();
    println!("  Knowledge base created!");
    println!("  Industries: {}", result.stats.industries);
    println!("  Modules:    {}", result.stats.modules);
    println!("  Pages:      {}", result.stats.pages);
    println!("  JSON:       {}", result.report.json_path.display());
    println!("  Summary:    {}", result.report.summary_path.display());
    println!("  Time:       {:.1}s", result.elapsed.as_secs_f64());
    println!();

    Ok(())
}

async fn cmd_config_init() -> Result<()> {
    let path = init_config()?;
    println!("Config initialized at: {}", path.display());
    Ok(())
}

async fn cmd_config_show() -> Result<()> {
    let config: AppConfig = load_config()?;
    let toml_str = toml::to_string_pretty(&config)?;
    println!("{toml_str}");
    Ok(())
}
