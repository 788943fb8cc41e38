//! Frequency-and-length and cohesion filter passes: remove-only operations
//! over the table materialized as a `Vec`.

use crate::table::CandidateRecord;

/// Remove every multi-character entry whose cohesion fell below
/// `firmness_thr`. Single-character entries are untouched here; they exist
/// only to support the cohesion formula and are dropped by
/// [`remove_by_freq_and_length`].
pub fn remove_by_cohesion(entries: &mut Vec<(String, CandidateRecord)>, firmness_thr: f64) {
    entries.retain(|(key, record)| {
        if key.chars().count() < 2 {
            return true;
        }
        record
            .cohesion
            .is_some_and(|cohesion| cohesion >= firmness_thr)
    });
}

/// Remove every entry shorter than 2 characters, or with frequency below
/// `freq_thr`.
pub fn remove_by_freq_and_length(entries: &mut Vec<(String, CandidateRecord)>, freq_thr: u64) {
    entries.retain(|(key, record)| key.chars().count() >= 2 && record.frequency >= freq_thr);
}
