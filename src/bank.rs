use std::path::Path;

use color_eyre::{eyre::bail, eyre::WrapErr, Result};

use crate::{matcher::AnswerMatcher, models::Questions};

/// A question as served to players, with its position in the bank.
#[derive(Debug, Clone)]
pub struct BankQuestion {
    pub id: usize,
    pub text: String,
    pub answer: String,
    matcher: AnswerMatcher,
}

impl BankQuestion {
    pub fn is_correct(&self, submitted: &str) -> bool {
        self.matcher.matches(submitted)
    }

    /// Plain-text rendering returned by the `question` action.
    pub fn render(&self) -> String {
        format!(
            "Id: {}\nQuestion: {}\nAnswer: {}",
            self.id, self.text, self.answer
        )
    }
}

/// Immutable, ordered question catalog.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    questions: Vec<BankQuestion>,
}

impl QuestionBank {
    pub fn new(questions: Questions) -> Result<Self> {
        let questions = questions
            .into_iter()
            .enumerate()
            .map(|(id, q)| {
                if q.question.trim().is_empty() {
                    bail!("question {id} has no text");
                }
                if q.answer.trim().is_empty() {
                    bail!("question {id} has no answer");
                }
                Ok(BankQuestion {
                    id,
                    matcher: AnswerMatcher::new(&q.answer, &q.synonyms),
                    text: q.question,
                    answer: q.answer,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let bank = Self { questions };
        if bank.is_empty() {
            bail!("question bank is empty");
        }
        Ok(bank)
    }

    /// Load a bank from a JSON array of questions.
    pub fn from_json(json: &str) -> Result<Self> {
        let questions: Questions =
            serde_json::from_str(json).wrap_err("could not parse question bank")?;
        Self::new(questions)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("could not read question bank {}", path.display()))?;
        Self::from_json(&json)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, id: usize) -> Option<&BankQuestion> {
        self.questions.get(id)
    }
}

impl Default for QuestionBank {
    fn default() -> Self {
        let questions = [
            (
                "Why did the QA engineer go to the bar?",
                "To test the bartender's skills",
            ),
            (
                "How many QA engineers does it take to change a light bulb?",
                "42",
            ),
            ("Did the QA engineer enjoy their last bug hunt?", "true"),
            (
                "Why did the QA engineer drown in the pool?",
                "Because they didn't receive the 'float' property!",
            ),
            (
                "Is it possible for a QA engineer to have too much coffee?",
                "false",
            ),
        ];

        let questions = questions
            .into_iter()
            .enumerate()
            .map(|(id, (text, answer))| BankQuestion {
                id,
                text: text.to_string(),
                answer: answer.to_string(),
                matcher: AnswerMatcher::new(answer, &[]),
            })
            .collect();

        Self { questions }
    }
}
