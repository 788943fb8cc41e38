mod cli;

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use newwords_core::emit;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let thresholds = cli.thresholds();

    let input = File::open(&cli.file)
        .with_context(|| format!("failed to open {}", cli.file.display()))?;
    let words = newwords_core::discover(BufReader::new(input), &thresholds)
        .with_context(|| format!("failed to process {}", cli.file.display()))?;

    let out_path = output_path(&cli.file);
    let out_file = File::create(&out_path)
        .with_context(|| format!("failed to write {}", out_path.display()))?;
    emit::write_report(out_file, &words)
        .with_context(|| format!("failed to write {}", out_path.display()))?;

    tracing::info!(path = %out_path.display(), "results written");
    Ok(())
}

/// `<stem>_out.txt`, where `<stem>` is `path` with its last `.`-suffix
/// removed (or the full path if there is none).
fn output_path(path: &Path) -> PathBuf {
    let path_str = path.to_string_lossy();
    let stem = match path_str.rfind('.') {
        Some(dot) => &path_str[..dot],
        None => &path_str[..],
    };
    PathBuf::from(format!("{stem}_out.txt"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_path_strips_last_suffix() {
        assert_eq!(
            output_path(Path::new("corpus.txt")),
            PathBuf::from("corpus_out.txt")
        );
    }

    #[test]
    fn output_path_keeps_full_path_without_suffix() {
        assert_eq!(
            output_path(Path::new("corpus")),
            PathBuf::from("corpus_out.txt")
        );
    }

    #[test]
    fn output_path_only_strips_last_dot() {
        assert_eq!(
            output_path(Path::new("data/v1.2.corpus.txt")),
            PathBuf::from("data/v1.2.corpus_out.txt")
        );
    }
}
