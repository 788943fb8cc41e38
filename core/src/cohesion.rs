//! Cohesion Pass: the PMI-style internal-association score, computed for
//! every multi-character candidate across four (or fewer) worker threads
//! that each own a disjoint slice of the candidate table.

use ahash::AHashMap;

use crate::table::CandidateRecord;

fn cohesion_for_chunk(
    chunk: &mut [(String, CandidateRecord)],
    freq_snapshot: &AHashMap<String, u64>,
    n_total: u64,
) {
    for (key, record) in chunk.iter_mut() {
        let chars: Vec<char> = key.chars().collect();
        if chars.len() < 2 {
            continue;
        }
        let freq_w = record.frequency as f64;
        let mut min_firmness = f64::MAX;
        for split in 1..chars.len() {
            let prefix: String = chars[..split].iter().collect();
            let suffix: String = chars[split..].iter().collect();
            let freq_prefix = *freq_snapshot
                .get(&prefix)
                .expect("prefix must have been counted alongside its superstring") as f64;
            let freq_suffix = *freq_snapshot
                .get(&suffix)
                .expect("suffix must have been counted alongside its superstring") as f64;
            let ratio = (freq_w * n_total as f64) / (freq_prefix * freq_suffix);
            if ratio < min_firmness {
                min_firmness = ratio;
            }
        }
        record.cohesion = Some(min_firmness);
    }
}

/// Compute up to 4 mutable, disjoint slices covering all of `entries`,
/// running each on its own thread via a scoped barrier. Below 4 entries, a
/// single slice (single thread) is used.
fn partition(entries: &mut [(String, CandidateRecord)]) -> Vec<&mut [(String, CandidateRecord)]> {
    let n = entries.len();
    let worker_count = if n >= 4 { 4 } else { 1 };
    let step = n / worker_count;

    let mut sizes = vec![step; worker_count.saturating_sub(1)];
    sizes.push(n - step * sizes.len());

    let mut slices = Vec::with_capacity(worker_count);
    let mut rest = entries;
    for size in sizes {
        let (left, right) = rest.split_at_mut(size);
        slices.push(left);
        rest = right;
    }
    slices
}

/// Split `entries` into up to four contiguous, non-overlapping chunks and
/// compute `cohesion` for every key of length >= 2 in each chunk, one
/// worker thread per chunk. Reads of `frequency` (for arbitrary
/// prefixes/suffixes, which may live in another worker's chunk) go through a
/// read-only snapshot built before partitioning, so no record is ever read
/// and written by different threads at once.
pub fn compute_cohesion_parallel(entries: &mut [(String, CandidateRecord)], n_total: u64) {
    if entries.is_empty() {
        return;
    }

    let freq_snapshot: AHashMap<String, u64> = entries
        .iter()
        .map(|(key, record)| (key.clone(), record.frequency))
        .collect();
    let freq_snapshot = &freq_snapshot;

    std::thread::scope(|scope| {
        for chunk in partition(entries) {
            scope.spawn(move || cohesion_for_chunk(chunk, freq_snapshot, n_total));
        }
    });
}
