use std::{collections::hash_map::Entry, sync::Arc};

use tokio::sync::Mutex;

use super::models::{AnswerRecord, QuizSession, Slot};
use super::SessionStore;

impl SessionStore {
    /// Insert a fresh session. Returns `false` if `email` already has one.
    pub async fn create_session(&self, email: &str) -> bool {
        let mut sessions = self.sessions.write().await;
        match sessions.entry(email.to_string()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(Arc::new(Mutex::new(QuizSession::new(email))));
                tracing::info!("session created for {email}");
                true
            }
        }
    }

    pub async fn session_exists(&self, email: &str) -> bool {
        self.sessions.read().await.contains_key(email)
    }

    pub async fn take_next_question(&self, email: &str, total: usize) -> Option<Slot> {
        self.transact(email, |session| session.serve_next(total)).await
    }

    pub async fn record_answer(
        &self,
        email: &str,
        question_idx: usize,
        correct: bool,
        total: usize,
    ) -> Option<AnswerRecord> {
        self.transact(email, |session| {
            session.record_answer(question_idx, correct, total)
        })
        .await
    }

    pub async fn score(&self, email: &str) -> Option<usize> {
        self.transact(email, |session| session.score()).await
    }

    pub async fn reset_session(&self, email: &str) -> bool {
        self.transact(email, QuizSession::reset).await.is_some()
    }

    #[cfg(test)]
    pub async fn snapshot(&self, email: &str) -> Option<QuizSession> {
        self.transact(email, |session| session.clone()).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const TOTAL: usize = 5;

    #[tokio::test]
    async fn create_session_rejects_duplicates() {
        let store = SessionStore::new();
        assert!(store.create_session("a@b.com").await);
        assert!(!store.create_session("a@b.com").await);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn operations_on_unknown_email_return_none() {
        let store = SessionStore::new();
        assert_eq!(store.len().await, 0);
        assert!(!store.session_exists("ghost@b.com").await);
        assert_eq!(store.take_next_question("ghost@b.com", TOTAL).await, None);
        assert_eq!(store.record_answer("ghost@b.com", 0, true, TOTAL).await, None);
        assert_eq!(store.score("ghost@b.com").await, None);
        assert!(!store.reset_session("ghost@b.com").await);
    }

    #[tokio::test]
    async fn transitions_persist_between_calls() {
        let store = SessionStore::new();
        store.create_session("a@b.com").await;

        assert_eq!(
            store.take_next_question("a@b.com", TOTAL).await,
            Some(Slot::Question(0))
        );
        store.record_answer("a@b.com", 2, true, TOTAL).await.unwrap();
        assert_eq!(store.score("a@b.com").await, Some(1));

        let snapshot = store.snapshot("a@b.com").await.unwrap();
        assert_eq!(snapshot.cursor(), 3);
        assert!(snapshot.is_credited(2));

        assert!(store.reset_session("a@b.com").await);
        assert_eq!(store.score("a@b.com").await, Some(0));
        assert!(store.session_exists("a@b.com").await);
    }

    #[tokio::test]
    async fn sessions_are_independent() {
        let store = SessionStore::new();
        store.create_session("a@b.com").await;
        store.create_session("c@d.com").await;

        store.record_answer("a@b.com", 0, true, TOTAL).await;
        assert_eq!(store.score("a@b.com").await, Some(1));
        assert_eq!(store.score("c@d.com").await, Some(0));
    }
}
