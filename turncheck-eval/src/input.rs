//! Input documents: the conversation under evaluation and its retrieved
//! context passages.
//!
//! The types here are the validated schema for the two JSON inputs. Loaders
//! check the shape once at the boundary so the evaluator never performs
//! ad-hoc field lookups.

use crate::evaluator::EvalError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading input documents.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum InputError {
    /// Failed to read an input file
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input is not valid JSON or does not match the expected shape
    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Conversation does not contain a question and a response
    #[error("Conversation in {} has {count} message(s), need at least 2", .path.display())]
    TooFewMessages { path: PathBuf, count: usize },
}

/// A single chat message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Speaker role, e.g. `user` or `assistant`
    pub role: String,
    /// Message text
    pub content: String,
}

impl Message {
    /// Create a message.
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }
}

/// An ordered conversation whose final two messages are the question and the
/// model's response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationRecord {
    /// Messages in chronological order
    pub messages: Vec<Message>,
}

impl ConversationRecord {
    /// Create a conversation from messages.
    pub fn new(messages: Vec<Message>) -> Self {
        Self { messages }
    }

    /// Build the common two-message case: one user question, one assistant
    /// answer.
    pub fn single_turn(question: impl Into<String>, response: impl Into<String>) -> Self {
        Self::new(vec![
            Message::new("user", question),
            Message::new("assistant", response),
        ])
    }

    /// The `(question, response)` pair: the contents of the second-to-last
    /// and last messages.
    pub fn last_exchange(&self) -> Result<(&str, &str), EvalError> {
        match self.messages.as_slice() {
            [.., question, response] => {
                Ok((question.content.as_str(), response.content.as_str()))
            }
            _ => Err(EvalError::TooFewMessages(self.messages.len())),
        }
    }
}

/// A retrieved reference passage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextPassage {
    /// Passage text
    pub text: String,
}

impl ContextPassage {
    /// Create a passage.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Accepted shapes of a context document.
#[derive(Deserialize)]
#[serde(untagged)]
enum ContextDocument {
    Wrapped { contexts: Vec<ContextPassage> },
    Bare(Vec<ContextPassage>),
}

impl ContextDocument {
    fn into_passages(self) -> Vec<ContextPassage> {
        match self {
            ContextDocument::Wrapped { contexts } => contexts,
            ContextDocument::Bare(contexts) => contexts,
        }
    }
}

/// Load and validate a conversation file.
pub fn load_conversation(path: &Path) -> Result<ConversationRecord, InputError> {
    let content = read(path)?;
    let conversation = conversation_from_str(&content, path)?;
    log::info!(
        "Loaded conversation with {} messages from {}",
        conversation.messages.len(),
        path.display()
    );
    Ok(conversation)
}

/// Parse and validate a conversation document.
///
/// `origin` names the source in error messages.
pub fn conversation_from_str(json: &str, origin: &Path) -> Result<ConversationRecord, InputError> {
    let conversation: ConversationRecord =
        serde_json::from_str(json).map_err(|source| InputError::Parse {
            path: origin.to_path_buf(),
            source,
        })?;

    if conversation.messages.len() < 2 {
        return Err(InputError::TooFewMessages {
            path: origin.to_path_buf(),
            count: conversation.messages.len(),
        });
    }

    Ok(conversation)
}

/// Load a context file.
///
/// Accepts either `{"contexts": [...]}` or a bare array of passages.
pub fn load_contexts(path: &Path) -> Result<Vec<ContextPassage>, InputError> {
    let content = read(path)?;
    let contexts = contexts_from_str(&content, path)?;
    log::info!(
        "Loaded {} context passages from {}",
        contexts.len(),
        path.display()
    );
    Ok(contexts)
}

/// Parse a context document in either accepted shape.
///
/// `origin` names the source in error messages.
pub fn contexts_from_str(json: &str, origin: &Path) -> Result<Vec<ContextPassage>, InputError> {
    serde_json::from_str::<ContextDocument>(json)
        .map(ContextDocument::into_passages)
        .map_err(|source| InputError::Parse {
            path: origin.to_path_buf(),
            source,
        })
}

fn read(path: &Path) -> Result<String, InputError> {
    std::fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })
}
