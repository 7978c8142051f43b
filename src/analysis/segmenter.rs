//! Sentence segmentation
//!
//! Lines are split first, with a bare `\r` counted as a line break. Within
//! a line, a sentence ends at `.`, `!`, `?` or `。` followed by whitespace.
//! The terminal punctuation stays with its sentence.

/// Fragments shorter than this (in characters) are captions or headers
pub const MIN_SENTENCE_CHARS: usize = 10;

const TERMINALS: [char; 4] = ['.', '!', '?', '。'];

/// Every non-empty fragment, in order
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let text = text.replace("\r\n", "\n").replace('\r', "\n");

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let mut start = 0;
        let mut chars = line.char_indices().peekable();
        while let Some((i, c)) = chars.next() {
            if !TERMINALS.contains(&c) {
                continue;
            }
            let end = i + c.len_utf8();
            if chars.peek().is_some_and(|(_, next)| next.is_whitespace()) {
                push_fragment(&mut sentences, &line[start..end]);
                // Skip the separating whitespace
                while chars.peek().is_some_and(|(_, next)| next.is_whitespace()) {
                    chars.next();
                }
                start = chars.peek().map_or(line.len(), |(j, _)| *j);
            }
        }
        push_fragment(&mut sentences, &line[start..]);
    }

    sentences
}

fn push_fragment(out: &mut Vec<String>, fragment: &str) {
    let fragment = fragment.trim();
    if !fragment.is_empty() {
        out.push(fragment.to_string());
    }
}

/// Sentences worth analysing, with their index in [`split_sentences`] output
pub fn segment(text: &str) -> Vec<(usize, String)> {
    split_sentences(text)
        .into_iter()
        .enumerate()
        .filter(|(_, s)| s.chars().count() >= MIN_SENTENCE_CHARS)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_terminals() {
        let sentences = split_sentences("Sentence one here. Sentence two here! Sentence three here?");
        assert_eq!(
            sentences,
            vec!["Sentence one here.", "Sentence two here!", "Sentence three here?"]
        );
    }

    #[test]
    fn test_no_split_without_following_whitespace() {
        let sentences = split_sentences("Emissions fell 3.5% in 2023.Next year too.");
        assert_eq!(sentences, vec!["Emissions fell 3.5% in 2023.Next year too."]);
    }

    #[test]
    fn test_lines_and_full_width_period() {
        let text = "  First line sentence.  \n\n기후 시나리오를 분석했다。 그 결과를 공개한다.\n";
        let sentences = split_sentences(text);
        assert_eq!(
            sentences,
            vec!["First line sentence.", "기후 시나리오를 분석했다。", "그 결과를 공개한다."]
        );
    }

    #[test]
    fn test_bare_carriage_return_ends_line() {
        let text = "Transition plan overview\rWe will retire coal assets by 2035";
        assert_eq!(
            split_sentences(text),
            vec!["Transition plan overview", "We will retire coal assets by 2035"]
        );
    }

    #[test]
    fn test_short_fragments_dropped_but_indices_kept() {
        let segmented = segment("Figure 1.\nOur board oversees climate risk. Ok. Targets are set for 2030.");
        assert_eq!(
            segmented,
            vec![
                (1, "Our board oversees climate risk.".to_string()),
                (3, "Targets are set for 2030.".to_string()),
            ]
        );
    }

    #[test]
    fn test_korean_length_counts_characters() {
        // 8 characters but far more bytes
        let segmented = segment("기후리스크관리.");
        assert!(segmented.is_empty());
        let segmented = segment("기후리스크관리체계구축.");
        assert_eq!(segmented.len(), 1);
    }
}
