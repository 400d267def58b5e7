//! Sentence-aligned chunking for texts above the backend's request limit.

use unicode_segmentation::UnicodeSegmentation;

/// Maximum number of characters the backend accepts per request.
pub const MAX_CHUNK_CHARS: usize = 5000;

// Destination languages whose scripts do not put spaces between sentences.
const UNSPACED_LANGUAGES: &[&str] = &["ja", "km", "lo", "my", "th", "zh-cn", "zh-tw"];

fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Splits `text` into chunks of at most `max_len` characters.
///
/// Text within the limit is returned as a single, untouched chunk. Longer
/// text is cut at Unicode sentence boundaries and sentences are packed
/// greedily, joined by a single space. A sentence that alone exceeds the
/// limit is broken on whitespace, or on character boundaries as a last resort.
pub fn split_text(text: &str, max_len: usize) -> Vec<String> {
    let max_len = max_len.max(1);

    if char_len(text) <= max_len {
        return vec![text.to_string()];
    }

    crate::info!("split text into sentences (limit: {max_len} characters)");

    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    let pieces = text
        .split_sentence_bounds()
        .map(str::trim)
        .filter(|sentence| !sentence.is_empty())
        .flat_map(|sentence| fit_sentence(sentence, max_len));

    for piece in pieces {
        let piece_len = char_len(&piece);

        if current.is_empty() {
            current = piece;
            current_len = piece_len;
        } else if current_len + 1 + piece_len <= max_len {
            current.push(' ');
            current.push_str(&piece);
            current_len += 1 + piece_len;
        } else {
            chunks.push(std::mem::replace(&mut current, piece));
            current_len = piece_len;
        }
    }

    if !current.is_empty() {
        chunks.push(current);
    }

    chunks
}

/// Breaks a single sentence into pieces no longer than `max_len`.
fn fit_sentence(sentence: &str, max_len: usize) -> Vec<String> {
    if char_len(sentence) <= max_len {
        return vec![sentence.to_string()];
    }

    let mut pieces = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in sentence.split_whitespace() {
        let word_len = char_len(word);

        if word_len > max_len {
            if !current.is_empty() {
                pieces.push(std::mem::take(&mut current));
                current_len = 0;
            }
            pieces.extend(split_chars(word, max_len));
        } else if current.is_empty() {
            current.push_str(word);
            current_len = word_len;
        } else if current_len + 1 + word_len <= max_len {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
        } else {
            pieces.push(std::mem::replace(&mut current, word.to_string()));
            current_len = word_len;
        }
    }

    if !current.is_empty() {
        pieces.push(current);
    }

    pieces
}

fn split_chars(word: &str, max_len: usize) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    chars
        .chunks(max_len)
        .map(|chunk| chunk.iter().collect())
        .collect()
}

/// Joins translated chunks back into one text for the destination language.
///
/// Intentionally not a plain concatenation: chunks of space-separated scripts
/// get back the single space the splitter dropped between sentences.
pub fn join_translations(pieces: &[String], dest: &str) -> String {
    let separator = if UNSPACED_LANGUAGES.contains(&dest) {
        ""
    } else {
        " "
    };
    pieces.join(separator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_is_untouched() {
        let text = "  Hello world.\n\nSecond paragraph.  ";
        assert_eq!(split_text(text, 100), vec![text.to_string()]);
    }

    #[test]
    fn test_text_at_limit_is_single_chunk() {
        let text = "a".repeat(50);
        assert_eq!(split_text(&text, 50), vec![text]);
    }

    #[test]
    fn test_limit_counts_characters_not_bytes() {
        // 10 chars, 30 bytes
        let text = "你好世界你好世界你好";
        assert_eq!(split_text(text, 10).len(), 1);
    }

    #[test]
    fn test_long_text_packs_sentences_greedily() {
        let text = "One two three. Four five six. Seven eight nine. Ten.";
        let chunks = split_text(text, 30);

        assert_eq!(
            chunks,
            vec![
                "One two three. Four five six.".to_string(),
                "Seven eight nine. Ten.".to_string(),
            ]
        );
    }

    #[test]
    fn test_chunks_respect_limit_and_keep_order() {
        let sentences: Vec<String> = (0..200)
            .map(|i| format!("This is sentence number {i}."))
            .collect();
        let text = sentences.join(" ");

        let chunks = split_text(&text, 120);

        assert!(chunks.len() > 1);
        assert!(chunks.iter().all(|c| c.chars().count() <= 120));
        assert_eq!(chunks.join(" "), text);
    }

    #[test]
    fn test_newlines_become_sentence_breaks() {
        let text = "First line without stop\nSecond line without stop\nThird";
        let chunks = split_text(text, 30);

        assert_eq!(
            chunks,
            vec![
                "First line without stop".to_string(),
                "Second line without stop Third".to_string(),
            ]
        );
    }

    #[test]
    fn test_oversized_sentence_is_split_on_whitespace() {
        let text = "alpha beta gamma delta epsilon zeta eta theta iota kappa.";
        let chunks = split_text(text, 20);

        assert!(chunks.iter().all(|c| c.chars().count() <= 20));
        assert_eq!(chunks.join(" "), text);
    }

    #[test]
    fn test_oversized_word_is_split_on_chars() {
        let text = "x".repeat(25);
        let chunks = split_text(&text, 10);

        assert_eq!(chunks, vec!["x".repeat(10), "x".repeat(10), "x".repeat(5)]);
    }

    #[test]
    fn test_zero_limit_does_not_loop() {
        let chunks = split_text("ab", 0);
        assert_eq!(chunks, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_join_translations_spaced_language() {
        let pieces = vec!["Bonjour.".to_string(), "Ça va ?".to_string()];
        assert_eq!(join_translations(&pieces, "fr"), "Bonjour. Ça va ?");
    }

    #[test]
    fn test_join_translations_unspaced_language() {
        let pieces = vec!["你好。".to_string(), "世界。".to_string()];
        assert_eq!(join_translations(&pieces, "zh-cn"), "你好。世界。");
        assert_eq!(join_translations(&pieces, "ja"), "你好。世界。");
    }

    #[test]
    fn test_join_single_piece() {
        let pieces = vec!["only".to_string()];
        assert_eq!(join_translations(&pieces, "en"), "only");
    }
}
