//! Per-browser conversation history.
//!
//! Sessions live only in memory. Each one is created on first contact,
//! emptied by an explicit clear and dropped after `ttl` of inactivity, either
//! lazily on the next access or by the periodic purge task.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{
    collections::{HashMap, VecDeque},
    fmt,
    str::FromStr,
    sync::Arc,
    time::{Duration, Instant},
};
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    User,
    Agent,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversationTurn {
    pub role: Role,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl ConversationTurn {
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Role::User, text)
    }

    pub fn agent(text: impl Into<String>) -> Self {
        Self::new(Role::Agent, text)
    }

    fn new(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Opaque session key carried in the session cookie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(Uuid);

impl SessionId {
    fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for SessionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

#[derive(Debug)]
struct Session {
    history: VecDeque<ConversationTurn>,
    last_seen: Instant,
}

impl Session {
    fn new() -> Self {
        Self {
            history: VecDeque::new(),
            last_seen: Instant::now(),
        }
    }

    fn is_expired(&self, ttl: Duration) -> bool {
        self.last_seen.elapsed() > ttl
    }
}

#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<SessionId, Session>>>,
    ttl: Duration,
    max_history: usize,
}

impl SessionStore {
    pub fn new(ttl: Duration, max_history: usize) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            ttl,
            max_history,
        }
    }

    /// Resolve the caller's session, creating a fresh one when `id` is
    /// missing, unknown or expired. The flag is `true` for a new session.
    pub async fn resolve(&self, id: Option<SessionId>) -> (SessionId, bool) {
        let mut sessions = self.sessions.write().await;

        if let Some(id) = id {
            match sessions.get_mut(&id) {
                Some(session) if !session.is_expired(self.ttl) => {
                    session.last_seen = Instant::now();
                    return (id, false);
                }
                Some(_) => {
                    tracing::debug!(session = %id, "Session expired");
                    sessions.remove(&id);
                }
                None => {}
            }
        }

        let id = SessionId::generate();
        sessions.insert(id, Session::new());
        tracing::debug!(session = %id, "Session created");
        (id, true)
    }

    /// Append turns in order, dropping the oldest beyond `max_history`.
    pub async fn append(&self, id: SessionId, turns: impl IntoIterator<Item = ConversationTurn>) {
        let mut sessions = self.sessions.write().await;
        let session = sessions.entry(id).or_insert_with(Session::new);

        session.history.extend(turns);
        while session.history.len() > self.max_history {
            session.history.pop_front();
        }
        session.last_seen = Instant::now();
    }

    pub async fn history(&self, id: SessionId) -> Vec<ConversationTurn> {
        let sessions = self.sessions.read().await;
        sessions
            .get(&id)
            .map(|session| session.history.iter().cloned().collect())
            .unwrap_or_default()
    }

    pub async fn clear(&self, id: SessionId) {
        if let Some(session) = self.sessions.write().await.get_mut(&id) {
            session.history.clear();
            session.last_seen = Instant::now();
        }
    }

    /// Drop every expired session, returning how many were removed.
    pub async fn purge_expired(&self) -> usize {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, session| !session.is_expired(self.ttl));
        before - sessions.len()
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}
