//! Process-wide session store.
//!
//! Keyed by session id; different sessions never interfere. Concurrent calls
//! against the same session are last-write-wins, which is acceptable for a
//! best-effort chat log.

use std::collections::HashMap;
use std::sync::RwLock;

use super::conversation::{ChatTurn, Conversation};

/// A session keeps at most this many turns; older ones are dropped.
pub const MAX_SESSION_TURNS: usize = 10;

/// In-memory mapping from session id to bounded conversation history.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<String, Conversation>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a turn, creating the session on demand and trimming the history
    /// to the most recent [`MAX_SESSION_TURNS`].
    pub fn append(&self, session_id: &str, turn: ChatTurn) {
        let mut sessions = self.sessions.write().expect("session lock poisoned");
        let convo = sessions.entry(session_id.to_string()).or_default();
        convo.push(turn);
        convo.truncate_to_last(MAX_SESSION_TURNS);
    }

    /// A read-only copy of the session's recent history (at most
    /// [`MAX_SESSION_TURNS`] turns), empty for unknown sessions.
    pub fn recent(&self, session_id: &str) -> Vec<ChatTurn> {
        self.sessions
            .read()
            .expect("session lock poisoned")
            .get(session_id)
            .map(|c| c.turns().to_vec())
            .unwrap_or_default()
    }

    /// Drop a session's history. Idempotent: clearing an unknown session is a
    /// no-op, not an error.
    pub fn clear(&self, session_id: &str) {
        self.sessions
            .write()
            .expect("session lock poisoned")
            .remove(session_id);
    }

    /// Number of live sessions.
    pub fn len(&self) -> usize {
        self.sessions.read().expect("session lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
