//! N-gram Enumerator: slides windows of every length up to `max_word_len`
//! over one sentence, updating the Counter Table for each substring.

use crate::table::CounterTable;

/// Enumerate every candidate substring of `sentence` (lengths `1..=min(max_word_len, len)`)
/// and record its occurrence, together with its left/right adjacent character, in `table`.
///
/// `sentence` is a slice of characters rather than a `&str` so that windows
/// can be sliced by character offset in constant time.
pub fn enumerate_sentence(table: &mut CounterTable, sentence: &[char], max_word_len: usize) {
    if sentence.is_empty() {
        return;
    }
    let len = sentence.len();
    for word_len in 1..=max_word_len.min(len) {
        for j in 0..=(len - word_len) {
            let word: String = sentence[j..j + word_len].iter().collect();
            let left = if j > 0 { Some(sentence[j - 1]) } else { None };
            let right = if j + word_len < len {
                Some(sentence[j + word_len])
            } else {
                None
            };
            table.record_occurrence(&word, left, right);
        }
    }
}
