//! Indentation conversion entrypoint.

use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use textbatch::{config::normalize_tab_size, convert_file, Config, IndentationMode};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "textbatch",
    about = "Convert leading indentation between tabs and spaces",
    version
)]
struct Cli {
    /// File to convert
    file: PathBuf,

    /// Target indentation: `spaces` or `tabs` (default from TEXTBATCH_INSERT_SPACES)
    #[arg(long)]
    to: Option<IndentationMode>,

    /// Indentation size, 1-8 (default from TEXTBATCH_TAB_SIZE)
    #[arg(short = 't', long)]
    tab_size: Option<usize>,

    /// Rewrite the file instead of printing the result
    #[arg(short, long)]
    in_place: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "textbatch=info,textbatch_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = Config::from_env();
    let mode = cli.to.unwrap_or_else(|| config.indentation_mode());
    let tab_size = cli
        .tab_size
        .map(normalize_tab_size)
        .unwrap_or(config.tab_size);

    let report = convert_file(&cli.file, mode, tab_size, cli.in_place)?;

    if !cli.in_place {
        std::io::stdout().write_all(report.output.as_bytes())?;
    }
    match report.cursor {
        Some(cursor) => eprintln!(
            "{}: {} edit(s) to {} (tab size {}), cursor at {}",
            report.path.display(),
            report.edits,
            report.mode,
            report.tab_size,
            cursor
        ),
        None => eprintln!(
            "{}: indentation already uses {}",
            report.path.display(),
            report.mode
        ),
    }
    Ok(())
}
