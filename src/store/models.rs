// Session state and its transitions

use std::collections::BTreeSet;

/// What the `question` action hands out next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Question(usize),
    Exhausted,
}

/// Outcome of recording one answer against a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerRecord {
    pub correct: bool,
    /// True only when this answer added a point.
    pub credited: bool,
    pub score: usize,
}

/// Per-user quiz progress. The score is the number of credited questions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizSession {
    pub email: String,
    cursor: usize,
    answered_correctly: BTreeSet<usize>,
}

impl QuizSession {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            ..Default::default()
        }
    }

    #[cfg(test)]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn score(&self) -> usize {
        self.answered_correctly.len()
    }

    #[cfg(test)]
    pub fn is_credited(&self, question_idx: usize) -> bool {
        self.answered_correctly.contains(&question_idx)
    }

    /// Serve the slot at the cursor and consume it.
    pub fn serve_next(&mut self, total: usize) -> Slot {
        if self.cursor >= total {
            return Slot::Exhausted;
        }
        let idx = self.cursor;
        self.cursor += 1;
        Slot::Question(idx)
    }

    /// Credit a correct answer at most once and move the cursor past the
    /// answered question. `question_idx` must be below `total`.
    pub fn record_answer(
        &mut self,
        question_idx: usize,
        correct: bool,
        total: usize,
    ) -> AnswerRecord {
        let credited = correct && self.answered_correctly.insert(question_idx);
        self.cursor = self.cursor.max(question_idx + 1).min(total);
        AnswerRecord {
            correct,
            credited,
            score: self.score(),
        }
    }

    pub fn reset(&mut self) {
        self.cursor = 0;
        self.answered_correctly.clear();
    }
}
