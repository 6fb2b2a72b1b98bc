/// The babble pipeline: exports → sentences → transition matrix → new sentences.

use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;
use tracing::info;

use crate::config::{Config, ConfigError};
use crate::core::loader::{load_messages, LoadError, LoadStats};
use crate::core::matrix::TransitionMatrix;
use crate::core::sampler::{sample_sentence, CandidatePicker, SampleError};

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("load error: {0}")]
    Load(#[from] LoadError),
    #[error("sampling error: {0}")]
    Sample(#[from] SampleError),
}

/// Everything one run produced.
#[derive(Debug, Clone)]
pub struct Babble {
    pub stats: LoadStats,
    /// Pair observations the matrix was trained on.
    pub pair_count: usize,
    /// Words with at least one known successor.
    pub vocabulary: usize,
    pub sentences: Vec<String>,
}

/// A validated run configuration, ready to train and sample.
#[derive(Debug, Clone)]
pub struct Pipeline {
    config: Config,
}

impl Pipeline {
    pub fn new(config: Config) -> Result<Self, PipelineError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Load the target's messages and build the transition matrix.
    pub fn train(&self) -> Result<(LoadStats, TransitionMatrix), PipelineError> {
        let corpus = load_messages(&self.config.target_identity, &self.config.source_dir)?;
        let matrix = TransitionMatrix::build(&corpus.sentences);
        Ok((corpus.stats, matrix))
    }

    /// Train, then sample `sentence_count` sentences. Uses the configured
    /// seed if there is one, otherwise a fresh entropy-seeded RNG.
    pub fn run(&self) -> Result<Babble, PipelineError> {
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        self.run_with(&mut rng)
    }

    /// Train, then sample with the given picker.
    pub fn run_with<P>(&self, picker: &mut P) -> Result<Babble, PipelineError>
    where
        P: CandidatePicker + ?Sized,
    {
        let (stats, matrix) = self.train()?;
        info!(
            words = matrix.len(),
            transitions = matrix.transition_count(),
            "transition matrix ready"
        );

        let sentences = generate(
            &matrix,
            self.config.sentence_count,
            self.config.sentence_length,
            self.config.top_k,
            picker,
        )?;

        Ok(Babble {
            stats,
            pair_count: matrix.pair_count(),
            vocabulary: matrix.len(),
            sentences,
        })
    }
}

/// Sample `count` independent sentences from one matrix.
pub fn generate<P>(
    matrix: &TransitionMatrix,
    count: usize,
    length: usize,
    top_k: Option<usize>,
    picker: &mut P,
) -> Result<Vec<String>, SampleError>
where
    P: CandidatePicker + ?Sized,
{
    (0..count)
        .map(|_| sample_sentence(matrix, length, top_k, &mut *picker))
        .collect()
}
