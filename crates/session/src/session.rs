use carmatch_catalog::DimensionVector;
use carmatch_engine::MatchResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque session identifier, unique per completed questionnaire
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    pub(crate) fn new(raw: String) -> Self {
        Self(raw)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Who produced a conversation turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One timestamped conversation turn
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatTurn {
    pub role: Role,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

/// One user's evolving context. Mutated only through [`crate::SessionStore`],
/// which serializes access per session.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Session {
    pub id: SessionId,

    /// Lifestyle profile from the completed questionnaire
    pub profile: DimensionVector,

    /// `None` means unconstrained
    pub budget: Option<u64>,

    /// Conversation turns in arrival order
    pub history: Vec<ChatTurn>,

    /// Current ranked results; empty before the first scoring
    pub results: Vec<MatchResult>,

    /// Bumped on every mutation, so callers can detect stale snapshots
    pub revision: u64,
}

impl Session {
    pub(crate) fn new(id: SessionId, profile: DimensionVector) -> Self {
        Self {
            id,
            profile,
            budget: None,
            history: Vec::new(),
            results: Vec::new(),
            revision: 0,
        }
    }
}
