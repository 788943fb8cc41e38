//! Freedom Pass: contextual (neighbor) entropy and the final survivorship
//! filter.

use ahash::AHashMap;

use crate::table::CandidateRecord;

/// Shannon entropy, base 2, of a character -> count distribution. An empty
/// map has `T = 0` and entropy is defined as `0`.
pub fn entropy(counts: &AHashMap<char, u64>) -> f64 {
    let total: u64 = counts.values().sum();
    if total == 0 {
        return 0.0;
    }
    let total = total as f64;
    -counts
        .values()
        .map(|&count| {
            let p = count as f64 / total;
            p * p.log2()
        })
        .sum::<f64>()
}

/// Degree of freedom: the minimum of the left- and right-neighbor entropies.
pub fn degree_of_freedom(record: &CandidateRecord) -> f64 {
    entropy(&record.left_neighbors).min(entropy(&record.right_neighbors))
}

/// Remove every entry whose degree of freedom is below `df_thr`.
pub fn remove_by_freedom(entries: &mut Vec<(String, CandidateRecord)>, df_thr: f64) {
    entries.retain(|(_, record)| degree_of_freedom(record) >= df_thr);
}
