/// Message loading — reads chat export dumps and extracts one author's sentences.

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

use crate::core::normalize::normalize;
use crate::schema::message::{ExportDocument, Message};

/// Extension of export files picked up from the source directory.
const EXPORT_EXTENSION: &str = "json";

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("IO error reading '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse export '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Counters reported while loading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    /// Export files parsed.
    pub files: usize,
    /// Messages across all files, before filtering.
    pub messages: usize,
    /// Messages from the target author with a plain text body.
    pub retained: usize,
    /// Messages from the target author skipped for having a rich body.
    pub skipped_rich: usize,
    /// Sentences produced by the retained messages.
    pub sentences: usize,
}

/// The normalized sentences of one author, ready for training.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    pub sentences: Vec<Vec<String>>,
    pub stats: LoadStats,
}

/// Load every export in `source_dir` and return the normalized sentences
/// written by `target_identity`.
///
/// Messages from other authors, or with no author, are filtered out.
/// Messages with a rich (list) body are skipped. A missing directory is
/// an empty corpus; a file that is not a valid export aborts the load.
pub fn load_messages(target_identity: &str, source_dir: &Path) -> Result<Corpus, LoadError> {
    let mut stats = LoadStats::default();
    let mut all_messages: Vec<Message> = Vec::new();

    for path in list_export_files(source_dir)? {
        let document = read_export(&path)?;
        debug!(path = %path.display(), messages = document.messages.len(), "read export");
        all_messages.extend(document.messages);
        stats.files += 1;
    }
    stats.messages = all_messages.len();

    info!(files = stats.files, "processed files: {}", stats.files);
    info!(messages = stats.messages, "total messages: {}", stats.messages);

    let mut sentences = Vec::new();
    for message in all_messages.iter().filter(|m| m.is_from(target_identity)) {
        let Some(text) = message.plain_text() else {
            debug!("skipping message with rich text body");
            stats.skipped_rich += 1;
            continue;
        };
        sentences.extend(normalize(text));
        stats.retained += 1;
    }
    stats.sentences = sentences.len();

    info!(
        retained = stats.retained,
        skipped_rich = stats.skipped_rich,
        "processed messages: {}",
        stats.retained
    );

    Ok(Corpus { sentences, stats })
}

/// Parse one export file.
pub fn read_export(path: &Path) -> Result<ExportDocument, LoadError> {
    let contents = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// List `*.json` files directly inside `dir`, sorted by path.
///
/// Subdirectories are not searched. A directory that does not exist
/// lists nothing.
fn list_export_files(dir: &Path) -> Result<Vec<PathBuf>, LoadError> {
    if !dir.exists() {
        debug!(dir = %dir.display(), "source directory does not exist");
        return Ok(Vec::new());
    }

    let io_err = |source: std::io::Error| LoadError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        if path.is_file() && path.extension().and_then(|s| s.to_str()) == Some(EXPORT_EXTENSION) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
