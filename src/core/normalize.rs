/// Sentence splitting and word normalization for raw message text.

/// Characters that end a sentence fragment. Each one splits on its own.
const SENTENCE_DELIMITERS: &[char] = &['(', ')', ';', '!', '?', '.'];

/// Split a message into sentences, and each sentence into lowercase,
/// punctuation-free word tokens.
///
/// Fragments that are blank, or that contain nothing but punctuation,
/// produce no sentence at all rather than an empty one.
pub fn normalize(text: &str) -> Vec<Vec<String>> {
    text.split(SENTENCE_DELIMITERS)
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .map(normalize_fragment)
        .filter(|words| !words.is_empty())
        .collect()
}

/// Lowercase, strip ASCII punctuation, and split on whitespace.
fn normalize_fragment(fragment: &str) -> Vec<String> {
    let cleaned: String = fragment
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_ascii_punctuation())
        .collect();

    cleaned.split_whitespace().map(str::to_string).collect()
}
