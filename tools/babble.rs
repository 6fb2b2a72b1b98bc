/// Babble — learn how someone writes from chat exports, then imitate them.
///
/// Usage: babble --target <from_id> [--dir <telegram_dumps>] [--count <n>]
///               [--length <n>] [--top-k <n>] [--seed <n>] [--config <file.ron>]
///
/// Progress goes to stderr (tune with RUST_LOG); sentences go to stdout.
use std::path::PathBuf;
use std::process;

use chat_babble::config::Config;
use chat_babble::core::pipeline::Pipeline;
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "babble",
    about = "Generate sentences from a first-order Markov chain over one author's chat messages"
)]
struct Cli {
    /// RON config file; flags below override its fields
    #[arg(long)]
    config: Option<PathBuf>,
    /// `from_id` of the author to imitate
    #[arg(long)]
    target: Option<String>,
    /// Directory holding the *.json exports
    #[arg(long)]
    dir: Option<PathBuf>,
    /// Number of sentences to print
    #[arg(long)]
    count: Option<usize>,
    /// Words sampled after the seed word
    #[arg(long)]
    length: Option<usize>,
    /// Only pick among the K most frequent successors
    #[arg(long = "top-k")]
    top_k: Option<usize>,
    /// RNG seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,
}

impl Cli {
    fn into_config(self) -> Result<Config, String> {
        let mut config = match &self.config {
            Some(path) => Config::load_from_ron(path)
                .map_err(|e| format!("Error loading config '{}': {}", path.display(), e))?,
            None => Config::default(),
        };

        if let Some(target) = self.target {
            config.target_identity = target;
        }
        if let Some(dir) = self.dir {
            config.source_dir = dir;
        }
        if let Some(count) = self.count {
            config.sentence_count = count;
        }
        if let Some(length) = self.length {
            config.sentence_length = length;
        }
        if self.top_k.is_some() {
            config.top_k = self.top_k;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        Ok(config)
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Cli::parse().into_config().unwrap_or_else(|e| {
        eprintln!("{}", e);
        process::exit(1);
    });

    let pipeline = Pipeline::new(config).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        process::exit(1);
    });

    let babble = pipeline.run().unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        process::exit(1);
    });

    for sentence in &babble.sentences {
        println!("{}", sentence);
    }
}
