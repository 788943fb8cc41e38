//! Ranker/Emitter: sorts survivors by frequency and renders the output
//! artifact.

use std::io::Write;

use crate::error::{Error, Result};
use crate::table::CandidateRecord;

/// A surviving candidate and its frequency, ready for output.
pub type RankedWord = (String, u64);

/// Sort surviving entries by frequency, ascending. Ties among
/// equal-frequency entries are broken by whatever order `entries` arrived
/// in; the set and frequencies are what matter for determinism, not the
/// relative order of ties (see `SPEC_FULL.md` section 8, property 6).
pub fn rank(entries: Vec<(String, CandidateRecord)>) -> Vec<RankedWord> {
    let mut words: Vec<RankedWord> = entries
        .into_iter()
        .map(|(word, record)| (word, record.frequency))
        .collect();
    words.sort_by_key(|(_, frequency)| *frequency);
    words
}

/// Render the ranked word list into the output artifact's text format.
pub fn format_report(words: &[RankedWord]) -> String {
    let mut out = String::new();
    out.push_str(&format!("Total words: {}\n", words.len()));
    for (word, frequency) in words {
        out.push_str(&format!("{word} {frequency}\n"));
    }
    out
}

/// Write the ranked word list to `writer` in the output artifact's format.
pub fn write_report<W: Write>(mut writer: W, words: &[RankedWord]) -> Result<()> {
    writer
        .write_all(format_report(words).as_bytes())
        .map_err(|source| Error::Write { source })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(word: &str, frequency: u64) -> (String, CandidateRecord) {
        (
            word.to_string(),
            CandidateRecord {
                frequency,
                ..Default::default()
            },
        )
    }

    #[test]
    fn ranks_ascending_by_frequency() {
        let ranked = rank(vec![entry("A", 9), entry("B", 1), entry("C", 5)]);
        let freqs: Vec<u64> = ranked.iter().map(|(_, f)| *f).collect();
        assert_eq!(freqs, vec![1, 5, 9]);
    }

    #[test]
    fn empty_report_has_zero_total_and_no_entries() {
        let report = format_report(&[]);
        assert_eq!(report, "Total words: 0\n");
    }

    #[test]
    fn report_lists_one_line_per_word() {
        let ranked = rank(vec![entry("葡萄", 3)]);
        let report = format_report(&ranked);
        assert_eq!(report, "Total words: 1\n葡萄 3\n");
    }

    #[test]
    fn write_report_is_idempotent() {
        let ranked = rank(vec![entry("葡萄", 3), entry("甲乙", 7)]);
        let mut first = Vec::new();
        let mut second = Vec::new();
        write_report(&mut first, &ranked).unwrap();
        write_report(&mut second, &ranked).unwrap();
        assert_eq!(first, second);
    }
}
