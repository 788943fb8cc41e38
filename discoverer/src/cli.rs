//! Command-line surface: argument parsing only. Everything else is handled
//! by `newwords_core` or `main`.

use std::path::PathBuf;

use clap::Parser;
use newwords_core::Thresholds;

/// Discover candidate multi-character words in an unsegmented corpus.
#[derive(Parser, Debug)]
#[command(name = "newwords-discoverer", version, about)]
pub struct Cli {
    /// The file to process.
    #[arg(short, long)]
    pub file: PathBuf,

    /// Minimum frequency for a candidate to survive.
    #[arg(long, default_value_t = 3)]
    pub freq: u64,

    /// Minimum cohesion (firmness) score.
    #[arg(long, default_value_t = 350.0)]
    pub firm: f64,

    /// Minimum degree of freedom (neighbor entropy).
    #[arg(long, default_value_t = 2.0)]
    pub df: f64,

    /// Maximum candidate length, in characters.
    #[arg(short = 'l', long = "wordlen", default_value_t = 4)]
    pub wordlen: usize,

    /// Increase log verbosity (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn thresholds(&self) -> Thresholds {
        Thresholds {
            freq_thr: self.freq,
            firmness_thr: self.firm,
            df_thr: self.df,
            max_word_len: self.wordlen,
        }
    }
}
