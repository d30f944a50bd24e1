pub mod config;
pub mod error;

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use natsort::{Record, hierarchical_sort};
use tracing_subscriber::EnvFilter;

pub use config::{LevelsConfig, SortConfig};
pub use error::{CliError, Result};

/// Natural-order, multi-level sort of delimited text.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "natsort", version)]
pub struct Args {
    /// Input file; stdin when omitted or `-`.
    pub input: Option<PathBuf>,

    /// Sort levels, e.g. `4:0,4:1,1:3` or `2,0`.
    #[arg(short = 'k', long = "key")]
    pub key: Option<String>,

    /// Input field delimiter.
    #[arg(short = 't', long)]
    pub delimiter: Option<char>,

    /// Output field delimiter (defaults to the input delimiter).
    #[arg(long)]
    pub output_delimiter: Option<char>,

    /// Treat the first line as a header.
    #[arg(short = 'H', long)]
    pub header: bool,

    /// Trim whitespace around fields.
    #[arg(long)]
    pub trim: bool,

    /// TOML config file; flags override its values.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write here instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Exit with an error when the sort is rejected.
    #[arg(long)]
    pub strict: bool,

    /// Log filter, e.g. `debug` or `natsort=trace`.
    #[arg(long)]
    pub log_level: Option<String>,
}

impl Args {
    /// Config file values with command-line flags applied on top.
    pub fn resolve_config(&self) -> SortConfig {
        let mut config = SortConfig::load_or_default(self.config.as_deref());
        if let Some(key) = &self.key {
            config.levels = LevelsConfig::Text(key.clone());
        }
        if let Some(delimiter) = self.delimiter {
            config.delimiter = delimiter;
        }
        if self.output_delimiter.is_some() {
            config.output_delimiter = self.output_delimiter;
        }
        config.has_header |= self.header;
        config.trim_fields |= self.trim;
        config
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSummary {
    pub rows: usize,
    pub sorted: bool,
}

/// Reads lines from `input`, sorts them, and writes the result to `output`.
///
/// A rejected sort still writes the input unchanged; with `strict` it is then
/// reported as [`CliError::Rejected`].
pub fn sort_stream<R: BufRead, W: Write>(
    input: R,
    mut output: W,
    config: &SortConfig,
    strict: bool,
) -> Result<SortSummary> {
    let mut lines = Vec::new();
    for line in input.lines() {
        let line = line?;
        lines.push(line.trim_end_matches('\r').to_string());
    }
    while lines.last().is_some_and(|l| l.trim().is_empty()) {
        lines.pop();
    }

    let rows = lines.len();
    let entries = config.levels.entries()?;
    let options = config.to_options();
    let records: Vec<Record> = lines.into_iter().map(Record::Line).collect();

    let outcome = hierarchical_sort(records, &entries, &options);
    let reason = outcome.reason().cloned();
    let sorted = outcome.is_sorted();

    for line in outcome.into_lines(options.output_delimiter()) {
        writeln!(output, "{line}")?;
    }
    output.flush()?;

    match reason {
        Some(reason) if strict => Err(CliError::Rejected(reason)),
        _ => Ok(SortSummary { rows, sorted }),
    }
}

/// Directives used when neither `--log-level` nor `RUST_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "natsort=info,natsort_cli=info";

/// Log filter for the binary. `--log-level` wins over `RUST_LOG`, which wins
/// over [`DEFAULT_LOG_FILTER`].
pub fn log_filter(log_level: Option<&str>, rust_log: Option<&str>) -> anyhow::Result<EnvFilter> {
    let directives = log_level
        .or(rust_log.filter(|s| !s.trim().is_empty()))
        .unwrap_or(DEFAULT_LOG_FILTER);
    EnvFilter::try_new(directives)
        .with_context(|| format!("invalid log filter {directives:?}"))
}

pub fn run(args: &Args) -> anyhow::Result<()> {
    let config = args.resolve_config();
    tracing::debug!(?config, "resolved sort config");

    // A bad key must not truncate the output file.
    config.levels.entries()?;

    let input: Box<dyn BufRead> = match &args.input {
        Some(path) if path.as_os_str() != "-" => {
            let file = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            Box::new(BufReader::new(file))
        }
        _ => Box::new(BufReader::new(io::stdin().lock())),
    };

    let output: Box<dyn Write> = match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    let summary = sort_stream(input, output, &config, args.strict)?;
    tracing::info!(rows = summary.rows, sorted = summary.sorted, "done");
    Ok(())
}
