//! Chat protocol request and result types.
//!
//! These are the externally observable shapes of the chat participant
//! surface: what the host hands the handler on every user turn, and what
//! the handler hands back.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Reference kind identifier for file attachments.
pub const FILE_REFERENCE_ID: &str = "file";

/// Inbound request for one user turn.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Optional command selecting a sub-behavior
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,

    /// Free-form text typed by the user
    pub prompt: String,

    /// Ordered typed attachments
    #[serde(default)]
    pub references: Vec<ChatReference>,
}

impl ChatRequest {
    /// Create a request carrying only free text.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            command: None,
            prompt: prompt.into(),
            references: Vec::new(),
        }
    }
}

/// A typed attachment within a chat request.
///
/// `range` marks the character span of the request's `prompt` the
/// reference was substituted for; references and free text are not
/// disjoint in meaning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatReference {
    /// Kind discriminator (e.g. [`FILE_REFERENCE_ID`])
    pub id: String,

    /// Display name
    pub name: String,

    /// Character span `[start, end)` within the prompt
    pub range: [usize; 2],

    /// Kind-specific value; a filesystem path for file references
    pub value: String,
}

impl ChatReference {
    /// Create a file reference.
    pub fn file(name: impl Into<String>, range: [usize; 2], path: &std::path::Path) -> Self {
        Self {
            id: FILE_REFERENCE_ID.to_string(),
            name: name.into(),
            range,
            value: path.to_string_lossy().into_owned(),
        }
    }

    /// The filesystem path of a file reference, `None` for other kinds.
    pub fn file_path(&self) -> Option<PathBuf> {
        if self.id == FILE_REFERENCE_ID {
            Some(PathBuf::from(&self.value))
        } else {
            None
        }
    }
}

/// Outbound result for one user turn.
///
/// The handler never fails outright; failures are carried in `error`
/// so the host can render a failure state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatResult {
    /// Diagnostic or response text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,

    /// Failure message, present only on failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ChatResult {
    /// An empty success result.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A success result carrying diagnostic text.
    pub fn with_details(details: impl Into<String>) -> Self {
        Self {
            details: Some(details.into()),
            error: None,
        }
    }

    /// A failure-shaped result.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            details: None,
            error: Some(message.into()),
        }
    }

    /// A result for a turn abandoned due to cancellation.
    pub fn cancelled() -> Self {
        Self::failure("Request cancelled")
    }

    /// Whether this result carries a failure.
    pub fn is_failure(&self) -> bool {
        self.error.is_some()
    }
}

/// One completed request/result pair from earlier in the conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTurn {
    pub request: ChatRequest,
    pub result: ChatResult,
}
