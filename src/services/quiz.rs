use std::sync::Arc;

use color_eyre::{eyre::bail, Result};

use crate::bank::{BankQuestion, QuestionBank};
use crate::email;
use crate::store::{AnswerRecord, SessionStore, Slot};

// ---------------------------------------------------------------------------
// SessionRepository trait (the service owns the abstraction it consumes)
// ---------------------------------------------------------------------------

/// Session storage as seen by [`QuizService`]. Every method is one atomic
/// transaction on a single session; `None`/`false` means no session exists.
#[cfg_attr(test, mockall::automock)]
pub trait SessionRepository: Send + Sync {
    /// Returns `false` when the email already has a session.
    fn create_session(&self, email: &str)
        -> impl std::future::Future<Output = Result<bool>> + Send;

    fn session_exists(&self, email: &str)
        -> impl std::future::Future<Output = Result<bool>> + Send;

    fn take_next_question(
        &self,
        email: &str,
        total: usize,
    ) -> impl std::future::Future<Output = Result<Option<Slot>>> + Send;

    fn record_answer(
        &self,
        email: &str,
        question_idx: usize,
        correct: bool,
        total: usize,
    ) -> impl std::future::Future<Output = Result<Option<AnswerRecord>>> + Send;

    fn score(&self, email: &str)
        -> impl std::future::Future<Output = Result<Option<usize>>> + Send;

    fn reset_session(&self, email: &str)
        -> impl std::future::Future<Output = Result<bool>> + Send;
}

impl SessionRepository for SessionStore {
    async fn create_session(&self, email: &str) -> Result<bool> {
        Ok(SessionStore::create_session(self, email).await)
    }

    async fn session_exists(&self, email: &str) -> Result<bool> {
        Ok(SessionStore::session_exists(self, email).await)
    }

    async fn take_next_question(&self, email: &str, total: usize) -> Result<Option<Slot>> {
        Ok(SessionStore::take_next_question(self, email, total).await)
    }

    async fn record_answer(
        &self,
        email: &str,
        question_idx: usize,
        correct: bool,
        total: usize,
    ) -> Result<Option<AnswerRecord>> {
        Ok(SessionStore::record_answer(self, email, question_idx, correct, total).await)
    }

    async fn score(&self, email: &str) -> Result<Option<usize>> {
        Ok(SessionStore::score(self, email).await)
    }

    async fn reset_session(&self, email: &str) -> Result<bool> {
        Ok(SessionStore::reset_session(self, email).await)
    }
}

// ---------------------------------------------------------------------------
// Outcome enums
// ---------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    LoggedIn,
    AlreadyLoggedIn,
}

#[derive(Debug)]
pub enum QuestionOutcome {
    Question(BankQuestion),
    NoMoreQuestions,
    NotLoggedIn,
}

#[derive(Debug, PartialEq, Eq)]
pub enum AnswerOutcome {
    Correct {
        /// False when the question had already been credited.
        credited: bool,
        score: usize,
    },
    Incorrect,
    OutOfBounds {
        id: i64,
        len: usize,
    },
    NotLoggedIn,
}

// ---------------------------------------------------------------------------
// QuizService
// ---------------------------------------------------------------------------

pub struct QuizService<R: SessionRepository = SessionStore> {
    repo: R,
    bank: Arc<QuestionBank>,
}

impl<R: SessionRepository + Clone> Clone for QuizService<R> {
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
            bank: Arc::clone(&self.bank),
        }
    }
}

impl<R: SessionRepository> QuizService<R> {
    pub fn new(repo: R, bank: QuestionBank) -> Self {
        Self {
            repo,
            bank: Arc::new(bank),
        }
    }

    /// Create sessions for addresses that count as logged in from startup.
    /// Fails on the first address that is not a valid email.
    pub async fn preregister(&self, emails: &[String]) -> Result<usize> {
        let mut created = 0;
        for address in emails {
            if !email::is_valid(address) {
                bail!("cannot preregister invalid email address '{address}'");
            }
            if self.repo.create_session(&email::normalize(address)).await? {
                created += 1;
            }
        }
        tracing::info!("preregistered {created} of {} users", emails.len());
        Ok(created)
    }

    pub async fn login(&self, email: &str) -> Result<LoginOutcome> {
        if self.repo.create_session(email).await? {
            tracing::info!("{email} logged in");
            Ok(LoginOutcome::LoggedIn)
        } else {
            Ok(LoginOutcome::AlreadyLoggedIn)
        }
    }

    pub fn total_questions(&self) -> usize {
        self.bank.len()
    }

    pub async fn is_logged_in(&self, email: &str) -> Result<bool> {
        self.repo.session_exists(email).await
    }

    pub async fn next_question(&self, email: &str) -> Result<QuestionOutcome> {
        let slot = self
            .repo
            .take_next_question(email, self.bank.len())
            .await?;

        match slot {
            None => Ok(QuestionOutcome::NotLoggedIn),
            Some(Slot::Exhausted) => Ok(QuestionOutcome::NoMoreQuestions),
            Some(Slot::Question(idx)) => {
                let Some(question) = self.bank.get(idx) else {
                    bail!("session cursor {idx} is outside the question bank");
                };
                tracing::debug!("serving question {idx} to {email}");
                Ok(QuestionOutcome::Question(question.clone()))
            }
        }
    }

    /// Check `answer` against question `question_id`. Only a correct answer
    /// to a question not yet credited raises the score.
    pub async fn answer(
        &self,
        email: &str,
        question_id: i64,
        answer: &str,
    ) -> Result<AnswerOutcome> {
        let len = self.bank.len();
        let question = usize::try_from(question_id)
            .ok()
            .and_then(|idx| self.bank.get(idx));
        let Some(question) = question else {
            return Ok(AnswerOutcome::OutOfBounds { id: question_id, len });
        };

        let correct = question.is_correct(answer);
        let Some(record) = self
            .repo
            .record_answer(email, question.id, correct, len)
            .await?
        else {
            return Ok(AnswerOutcome::NotLoggedIn);
        };

        tracing::debug!(
            "{email} answered question {}: correct={correct}, credited={}, score={}",
            question.id,
            record.credited,
            record.score
        );

        if record.correct {
            Ok(AnswerOutcome::Correct {
                credited: record.credited,
                score: record.score,
            })
        } else {
            Ok(AnswerOutcome::Incorrect)
        }
    }

    pub async fn score(&self, email: &str) -> Result<Option<usize>> {
        self.repo.score(email).await
    }

    pub async fn reset(&self, email: &str) -> Result<bool> {
        let reset = self.repo.reset_session(email).await?;
        if reset {
            tracing::info!("{email} reset their progress");
        }
        Ok(reset)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
