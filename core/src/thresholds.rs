//! Run configuration shared by every stage of the pipeline.

/// The four thresholds a run is judged against. Immutable once a run starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    /// Minimum frequency for a candidate to survive the length/frequency filter.
    pub freq_thr: u64,
    /// Minimum cohesion (firmness) score for a candidate to survive the cohesion pass.
    pub firmness_thr: f64,
    /// Minimum degree of freedom (neighbor entropy) for a candidate to survive the freedom pass.
    pub df_thr: f64,
    /// Maximum candidate length, in characters.
    pub max_word_len: usize,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            freq_thr: 3,
            firmness_thr: 350.0,
            df_thr: 2.0,
            max_word_len: 4,
        }
    }
}
