//! newwords-core
//!
//! Statistical discovery of likely multi-character words in an unsegmented
//! corpus: candidate enumeration with adjacency collection, a PMI-style
//! cohesion score, a contextual-entropy (degree of freedom) score, and the
//! concurrent pipeline tying the three together.
//!
//! Callers (typically a CLI) open the corpus file and pass a buffered reader
//! in; this crate never touches the filesystem itself. See
//! [`discover`] for the single entry point.

pub mod cohesion;
pub mod emit;
pub mod error;
pub mod filter;
pub mod freedom;
pub mod ngram;
pub mod pipeline;
pub mod segment;
pub mod table;
pub mod thresholds;

pub use emit::RankedWord;
pub use error::{Error, Result};
pub use table::{CandidateRecord, CounterTable};
pub use thresholds::Thresholds;

/// Run the full pipeline over `reader` and return the surviving candidates,
/// ranked by ascending frequency.
///
/// Stages run in the fixed order required by the counter table's phase
/// sequence (`SPEC_FULL.md` section 4.8): counting, cohesion, frequency and
/// length filtering, freedom filtering, ranking. Each stage is preceded by a
/// `tracing` event at `info` level so a CLI front-end gets the same
/// progress narration as the original tool.
pub fn discover<R: std::io::BufRead>(
    reader: R,
    thresholds: &Thresholds,
) -> Result<Vec<RankedWord>> {
    tracing::info!("processing file...");
    let table = pipeline::run_counting(reader, thresholds.max_word_len)?;
    tracing::info!(candidates = table.len(), "done counting");

    let n_total = table.n_total();
    let mut entries = table.into_entries();

    tracing::info!("calculating firmness...");
    cohesion::compute_cohesion_parallel(&mut entries, n_total);
    filter::remove_by_cohesion(&mut entries, thresholds.firmness_thr);
    filter::remove_by_freq_and_length(&mut entries, thresholds.freq_thr);
    tracing::info!(survivors = entries.len(), "done");

    tracing::info!("calculating degree of freedom...");
    freedom::remove_by_freedom(&mut entries, thresholds.df_thr);
    tracing::info!(survivors = entries.len(), "done");

    Ok(emit::rank(entries))
}
