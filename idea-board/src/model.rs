//! Records exchanged with the ideas API.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single submitted idea.
///
/// Ideas are created by the service; the client only ever reads them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Idea {
    pub id: IdeaId,
    pub content: String,
    pub created_at: CreatedAt,
}

/// Server-assigned identifier.
///
/// The service decides the representation, so any JSON number (including
/// ones outside `i64` or with a fraction) or string is accepted and neither
/// is interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IdeaId {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for IdeaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdeaId::Number(n) => write!(f, "{n}"),
            IdeaId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for IdeaId {
    fn from(n: i64) -> Self {
        IdeaId::Number(n.into())
    }
}

impl From<&str> for IdeaId {
    fn from(s: &str) -> Self {
        IdeaId::Text(s.to_owned())
    }
}

/// Creation time exactly as the service reported it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CreatedAt(String);

impl CreatedAt {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse the timestamp for display.
    ///
    /// Accepts RFC 3339 (with offset) and naive ISO-8601 date-times, which
    /// are taken to be UTC. Returns `None` for anything else.
    pub fn parse(&self) -> Option<DateTime<Utc>> {
        let raw = self.0.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.with_timezone(&Utc));
        }
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
            .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
            .ok()
            .map(|naive| naive.and_utc())
    }
}

impl fmt::Display for CreatedAt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Body of a create request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewIdea {
    pub content: String,
}
