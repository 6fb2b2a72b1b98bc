use serde::{Deserialize, Serialize};

/// One chat export file: a named conversation and its message list.
///
/// Only `messages` is required. Every other field in the export
/// (chat type, id, and so on) is ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExportDocument {
    #[serde(default)]
    pub name: Option<String>,
    pub messages: Vec<Message>,
}

/// A single message record from an export.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Message {
    /// Author identifier, e.g. `"user71398848"`. Service messages have none.
    #[serde(default)]
    pub from_id: Option<String>,
    #[serde(default)]
    pub text: MessageBody,
}

/// Message body as it appears in the export.
///
/// Messages with links, mentions or formatting are exported as a list
/// mixing plain strings with entity objects. Those are kept opaque and
/// never tokenized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageBody {
    Plain(String),
    Rich(serde_json::Value),
}

impl Default for MessageBody {
    fn default() -> Self {
        Self::Plain(String::new())
    }
}

impl Message {
    /// Whether this message was written by `author`. A missing `from_id`
    /// never matches.
    pub fn is_from(&self, author: &str) -> bool {
        self.from_id.as_deref() == Some(author)
    }

    /// The plain text body, or `None` for a rich body.
    pub fn plain_text(&self) -> Option<&str> {
        match &self.text {
            MessageBody::Plain(text) => Some(text),
            MessageBody::Rich(_) => None,
        }
    }
}
