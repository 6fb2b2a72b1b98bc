/// Random sentence synthesis from a trained transition matrix.

use rand::Rng;
use thiserror::Error;

use crate::core::matrix::TransitionMatrix;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SampleError {
    #[error("cannot sample from an empty transition matrix (no word pairs were learned)")]
    EmptyModel,
}

/// Source of randomness for sampling: picks one of `count` candidates
/// uniformly.
///
/// Every `rand::Rng` is a picker, so callers pass a seeded `StdRng` for
/// reproducible output or `thread_rng()` for fresh output.
pub trait CandidatePicker {
    /// Return an index in `0..count`. Callers guarantee `count >= 1`.
    fn pick(&mut self, count: usize) -> usize;
}

impl<R: Rng> CandidatePicker for R {
    fn pick(&mut self, count: usize) -> usize {
        self.gen_range(0..count)
    }
}

/// Generate one sentence of up to `length + 1` words.
///
/// The first word is drawn uniformly from every word in the matrix. Each of
/// the `length` steps then ranks the current word's successors by count,
/// keeps the `top_k` best (all of them when `top_k` is `None`), and appends
/// one of those uniformly. Counts only decide who makes the cut, not how
/// likely each candidate is.
///
/// A word with no successors stalls the sentence: that step appends
/// nothing and the next step asks about the same word again, so a stalled
/// sentence stays stalled. `top_k == Some(0)` stalls every step.
pub fn sample_sentence<P>(
    matrix: &TransitionMatrix,
    length: usize,
    top_k: Option<usize>,
    picker: &mut P,
) -> Result<String, SampleError>
where
    P: CandidatePicker + ?Sized,
{
    if matrix.is_empty() {
        return Err(SampleError::EmptyModel);
    }

    let seed = matrix
        .word_at(picker.pick(matrix.len()))
        .ok_or(SampleError::EmptyModel)?;
    let mut sentence: Vec<&str> = vec![seed];

    for _ in 0..length {
        let last = sentence[sentence.len() - 1];
        let candidates = matrix.most_common(last, top_k);
        if candidates.is_empty() {
            continue;
        }
        let (next, _) = candidates[picker.pick(candidates.len())];
        sentence.push(next);
    }

    Ok(sentence.join(" "))
}
