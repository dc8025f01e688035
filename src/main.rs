use std::io;
use std::path::PathBuf;

use clap::Parser;
use simfin_names::generate::{self, GenerateConfig, Source};
use simfin_names::io::fetch::DEFAULT_INFO_BASE_URL;
use simfin_names::{Result, ToolError, report};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    if let Err(error) = run(cli) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    init_tracing(cli.verbose)?;

    let config = cli.into_config();
    let summary = generate::generate(&config)?;
    info!(
        records = summary.record_count,
        groups = summary.group_count,
        output = %summary.output.display(),
        "generation finished"
    );

    report::write_report(&mut io::stderr().lock(), &summary.duplicates)
}

fn init_tracing(verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|err| ToolError::Logging(err.to_string()))
}

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Generate the names module from the SimFin column definitions."
)]
struct Cli {
    /// Full URL of the columns document.
    #[arg(long, env = "SIMFIN_COLUMNS_URL")]
    url: Option<String>,

    /// Base URL of the info endpoints; the columns resource is appended.
    #[arg(long, env = "SIMFIN_INFO_URL", default_value = DEFAULT_INFO_BASE_URL)]
    base_url: String,

    /// Read the columns document from a local JSON file instead of fetching it.
    /// Takes precedence over `--url`.
    #[arg(long)]
    input: Option<PathBuf>,

    /// Output file path.
    #[arg(long, default_value = "names.py")]
    output: PathBuf,

    /// File whose contents replace the default header banner.
    #[arg(long)]
    header: Option<PathBuf>,

    /// Fail when a shortcut is defined by more than one record.
    #[arg(long)]
    deny_duplicate_shortcuts: bool,

    /// Log at debug level, ignoring RUST_LOG.
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn into_config(self) -> GenerateConfig {
        let source = match (self.input, self.url) {
            (Some(path), _) => Source::File(path),
            (None, Some(url)) => Source::Url(url),
            (None, None) => Source::columns(&self.base_url),
        };

        GenerateConfig {
            header: self.header,
            deny_duplicate_shortcuts: self.deny_duplicate_shortcuts,
            ..GenerateConfig::new(source, self.output)
        }
    }
}
