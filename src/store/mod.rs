// Session store - in-memory, process-wide quiz state

use std::{collections::HashMap, sync::Arc};

use tokio::sync::{Mutex, RwLock};

pub mod models;
pub use models::*;

mod session;

type SessionCell = Arc<Mutex<QuizSession>>;

/// Sessions keyed by normalized email.
///
/// The map lock is held only to look up or insert a session; every state
/// transition runs under that session's own mutex.
#[derive(Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<String, SessionCell>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    async fn cell(&self, email: &str) -> Option<SessionCell> {
        self.sessions.read().await.get(email).cloned()
    }

    /// Run `f` against the session for `email` while holding its lock.
    /// Returns `None` when no such session exists.
    pub async fn transact<T>(
        &self,
        email: &str,
        f: impl FnOnce(&mut QuizSession) -> T,
    ) -> Option<T> {
        let cell = self.cell(email).await?;
        let mut session = cell.lock().await;
        Some(f(&mut session))
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}
