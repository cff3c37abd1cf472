use axum::{
    extract::{FromRequest, Query, Request},
    http::header,
    Form,
};
use crate::{
    action::Action,
    email,
    rejections::{AppError, Param},
};

/// Raw protocol parameters, gathered from the query string and, for
/// form-encoded requests, the body. Body values take precedence; within one
/// source the first occurrence of a key wins.
#[derive(Debug, Default, Clone)]
pub struct QuizParams {
    pub email: Option<String>,
    pub action: Option<String>,
    pub question_id: Option<String>,
    pub answer: Option<String>,
}

/// A question id that passed syntax checks.
#[derive(Debug, PartialEq, Eq)]
pub enum QuestionId<'a> {
    Index(i64),
    /// All digits, but too wide for `i64`. Never a valid index; the literal
    /// text is kept for the error body.
    Overflow(&'a str),
}

impl QuizParams {
    fn from_pairs(pairs: Vec<(String, String)>) -> QuizParams {
        let mut params = QuizParams::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "email" => &mut params.email,
                "action" => &mut params.action,
                "question_id" => &mut params.question_id,
                "answer" => &mut params.answer,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        params
    }

    fn or(self, fallback: QuizParams) -> QuizParams {
        QuizParams {
            email: self.email.or(fallback.email),
            action: self.action.or(fallback.action),
            question_id: self.question_id.or(fallback.question_id),
            answer: self.answer.or(fallback.answer),
        }
    }

    /// The validated, normalized session key.
    pub fn email(&self) -> Result<String, AppError> {
        let raw = self
            .email
            .as_deref()
            .ok_or(AppError::MissingParameter(Param::Email))?;
        if !email::is_valid(raw) {
            return Err(AppError::InvalidEmail);
        }
        Ok(email::normalize(raw))
    }

    pub fn action(&self) -> Result<Action, AppError> {
        self.action
            .as_deref()
            .ok_or(AppError::MissingParameter(Param::Action))?
            .parse()
            .map_err(|_| AppError::InvalidAction)
    }

    /// Question id and answer for the `answer` action. A blank value counts
    /// as missing; the id is parsed only once both are present.
    pub fn answer_args(&self) -> Result<(QuestionId<'_>, &str), AppError> {
        let question_id = non_blank(self.question_id.as_deref())
            .ok_or(AppError::MissingParameter(Param::QuestionId))?
            .trim();
        let answer = non_blank(self.answer.as_deref())
            .ok_or(AppError::MissingParameter(Param::Answer))?;
        let question_id = match question_id.parse::<i64>() {
            Ok(id) => QuestionId::Index(id),
            Err(_) if is_integer_literal(question_id) => QuestionId::Overflow(question_id),
            Err(_) => return Err(AppError::InvalidQuestionId),
        };
        Ok((question_id, answer))
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn is_integer_literal(value: &str) -> bool {
    let digits = value.strip_prefix(&['+', '-'][..]).unwrap_or(value);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn is_form(req: &Request) -> bool {
    req.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("application/x-www-form-urlencoded"))
}

impl<S: Send + Sync> FromRequest<S> for QuizParams {
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::try_from_uri(req.uri()).map_err(|e| {
            tracing::warn!("malformed query string: {e}");
            AppError::MalformedRequest
        })?;
        let query = QuizParams::from_pairs(pairs);

        if !is_form(&req) {
            return Ok(query);
        }

        let Form(pairs) = Form::<Vec<(String, String)>>::from_request(req, state)
            .await
            .map_err(|e| {
                tracing::warn!("malformed form body: {e}");
                AppError::MalformedRequest
            })?;
        Ok(QuizParams::from_pairs(pairs).or(query))
    }
}
