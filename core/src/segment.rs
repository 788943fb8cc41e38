//! Sentence Segmenter: turns one paragraph into an ordered list of short,
//! punctuation-free sentences of contiguous ideographic text.

use std::sync::LazyLock;

use regex::Regex;

/// Full-width Chinese punctuation that always splits a paragraph, regardless
/// of what the non-ideographic-run regex below would otherwise do.
const HARD_BREAK: &[char] = &[
    '【', '】', '，', '。', '？', '《', '》', '！', '、', '（', '）', '…', '；', '：', '\u{201c}',
    '\u{201d}', '\u{2018}', '\u{2019}',
];

static SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\W+|[a-zA-Z0-9]+|\s+").expect("static regex is valid"));

/// Split one paragraph into sentences, in original order, trimmed and with
/// empty results discarded.
pub fn segment_paragraph(paragraph: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    for hard_segment in paragraph.split(HARD_BREAK) {
        if hard_segment.is_empty() {
            continue;
        }
        for piece in SEPARATOR.split(hard_segment) {
            let trimmed = piece.trim();
            if !trimmed.is_empty() {
                sentences.push(trimmed.to_string());
            }
        }
    }
    sentences
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_curly_quotes() {
        let sentences = segment_paragraph("甲乙\u{201c}丙丁\u{201d}戊己");
        assert_eq!(sentences, vec!["甲乙", "丙丁", "戊己"]);
    }

    #[test]
    fn splits_on_hard_break_punctuation() {
        // Pure-ASCII runs are themselves stripped by the non-ideographic-run
        // regex (see the second stage below), so this uses ideographic text
        // to exercise the hard-break punctuation split in isolation.
        let sentences = segment_paragraph("甲乙丙，甲乙丙。甲乙丙");
        assert_eq!(sentences, vec!["甲乙丙", "甲乙丙", "甲乙丙"]);
    }

    #[test]
    fn discards_ascii_and_whitespace_runs() {
        let sentences = segment_paragraph("你好 world 你好123你好");
        assert_eq!(sentences, vec!["你好", "你好", "你好"]);
    }

    #[test]
    fn empty_paragraph_has_no_sentences() {
        assert!(segment_paragraph("").is_empty());
        assert!(segment_paragraph("   ").is_empty());
        assert!(segment_paragraph("，。！").is_empty());
    }

    #[test]
    fn preserves_paragraph_order() {
        let sentences = segment_paragraph("第一句。第二句！第三句");
        assert_eq!(sentences, vec!["第一句", "第二句", "第三句"]);
    }
}
