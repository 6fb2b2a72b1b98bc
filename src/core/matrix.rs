/// First-order word transition counts.

use rustc_hash::FxHashMap;
use tracing::info;

/// Successor counts for one word, in first-seen order.
type Successors = Vec<(String, u32)>;

/// Mapping from a word to how often each other word directly followed it.
///
/// Built once from the full corpus and read-only afterwards.
///
/// ## Invariants
/// - A word is present only if at least one successor was observed
/// - Every successor count is at least 1
/// - Words and successors keep the order they were first seen in, so
///   iteration and tie-breaking are reproducible
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransitionMatrix {
    /// Word → position in `rows`.
    index: FxHashMap<String, usize>,
    rows: Vec<(String, Successors)>,
    pair_count: usize,
}

impl TransitionMatrix {
    /// Count every adjacent word pair across all sentences.
    ///
    /// A sentence of `n` words contributes `n - 1` pairs; empty and
    /// single-word sentences contribute nothing.
    pub fn build(sentences: &[Vec<String>]) -> Self {
        let mut matrix = Self::default();
        for sentence in sentences {
            for pair in sentence.windows(2) {
                matrix.add_transition(&pair[0], &pair[1]);
            }
        }

        info!(pairs = matrix.pair_count, words = matrix.len(), "total pairs: {}", matrix.pair_count);
        matrix
    }

    fn add_transition(&mut self, left: &str, right: &str) {
        let row = match self.index.get(left) {
            Some(&row) => row,
            None => {
                self.rows.push((left.to_string(), Vec::new()));
                self.index.insert(left.to_string(), self.rows.len() - 1);
                self.rows.len() - 1
            }
        };

        let successors = &mut self.rows[row].1;
        if let Some(entry) = successors.iter_mut().find(|(word, _)| word == right) {
            entry.1 += 1;
        } else {
            successors.push((right.to_string(), 1));
        }
        self.pair_count += 1;
    }

    /// Number of distinct words that have at least one successor.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Total pair observations, duplicates included.
    pub fn pair_count(&self) -> usize {
        self.pair_count
    }

    /// Number of distinct `(word, successor)` pairs.
    pub fn transition_count(&self) -> usize {
        self.rows.iter().map(|(_, successors)| successors.len()).sum()
    }

    /// All known words, in first-seen order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|(word, _)| word.as_str())
    }

    /// The word at `position` in first-seen order.
    pub(crate) fn word_at(&self, position: usize) -> Option<&str> {
        self.rows.get(position).map(|(word, _)| word.as_str())
    }

    /// Raw successor counts for `word`, or `None` if it never had one.
    pub fn successors(&self, word: &str) -> Option<&[(String, u32)]> {
        let &row = self.index.get(word)?;
        Some(&self.rows[row].1)
    }

    /// How many times `right` directly followed `left`.
    pub fn count(&self, left: &str, right: &str) -> u32 {
        self.successors(left)
            .and_then(|successors| successors.iter().find(|(word, _)| word == right))
            .map_or(0, |(_, count)| *count)
    }

    /// Successors of `word` ranked by descending count, cut to the first
    /// `limit` entries when a limit is given.
    ///
    /// Equal counts keep first-seen order, so the cutoff is stable.
    /// Unknown words rank nothing.
    pub fn most_common(&self, word: &str, limit: Option<usize>) -> Vec<(&str, u32)> {
        let mut ranked: Vec<(&str, u32)> = match self.successors(word) {
            Some(successors) => successors
                .iter()
                .map(|(next, count)| (next.as_str(), *count))
                .collect(),
            None => return Vec::new(),
        };

        // sort_by is stable
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        if let Some(limit) = limit {
            ranked.truncate(limit);
        }
        ranked
    }
}

/// Build a transition matrix from normalized sentences.
pub fn build_matrix(sentences: &[Vec<String>]) -> TransitionMatrix {
    TransitionMatrix::build(sentences)
}
