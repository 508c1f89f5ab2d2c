//! empscrape CLI
//!
//! Extracts interviews or reviews from a page and prints them as JSON.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use empscrape::{
    error::Result,
    models::Config,
    pipeline::{self, Section, Source},
};

/// empscrape - Employer Review Extractor
#[derive(Parser, Debug)]
#[command(
    name = "empscrape",
    version,
    about = "Extract interviews and reviews from employer review pages"
)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Extract records from a page and print them as JSON
    Extract {
        /// Type of section to parse
        #[arg(value_enum)]
        section: Section,

        #[command(flatten)]
        source: SourceArgs,

        /// Request timeout in seconds
        #[arg(long)]
        timeout: Option<u64>,

        /// User agent to send
        #[arg(long)]
        user_agent: Option<String>,

        /// Print JSON on a single line
        #[arg(long)]
        compact: bool,
    },

    /// Validate the configuration file
    Validate,
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct SourceArgs {
    /// URL of the page to parse
    #[arg(long)]
    url: Option<String>,

    /// Local HTML file to parse instead of fetching
    #[arg(long)]
    file: Option<PathBuf>,
}

impl SourceArgs {
    fn into_source(self) -> Option<Source> {
        match (self.url, self.file) {
            (Some(url), _) => Some(Source::Url(url)),
            (None, Some(path)) => Some(Source::File(path)),
            (None, None) => None,
        }
    }
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = Config::load_or_default(&cli.config);

    match cli.command {
        Command::Extract {
            section,
            source,
            timeout,
            user_agent,
            compact,
        } => {
            if let Some(secs) = timeout {
                config.fetch.timeout_secs = secs;
            }
            if let Some(agent) = user_agent {
                config.fetch.user_agent = agent;
            }
            if compact {
                config.output.pretty = false;
            }
            config.validate()?;

            let source = source.into_source().ok_or_else(|| {
                empscrape::AppError::config("one of --url or --file is required")
            })?;

            let records = pipeline::run_extract(&config, section, &source).await?;
            println!("{}", pipeline::to_json(&records, config.output.pretty)?);
        }

        Command::Validate => pipeline::run_validate(&config)?,
    }

    Ok(())
}
