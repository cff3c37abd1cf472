use std::fmt;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::names;

/// A required request parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Param {
    Email,
    Action,
    QuestionId,
    Answer,
}

impl Param {
    fn missing_message(self) -> &'static str {
        match self {
            Param::Email => names::MISSING_EMAIL,
            Param::Action => names::MISSING_ACTION,
            Param::QuestionId => names::MISSING_QUESTION_ID,
            Param::Answer => names::MISSING_ANSWER,
        }
    }
}

/// Every way a request can fail, rendered as status + plain-text body.
#[derive(Debug, PartialEq, Eq)]
pub enum AppError {
    MissingParameter(Param),
    InvalidEmail,
    InvalidAction,
    AlreadyLoggedIn,
    Unauthorized,
    InvalidQuestionId,
    /// `id` is the literal the client sent.
    QuestionIndexOutOfBounds { id: String, len: usize },
    MalformedRequest,
    Internal(&'static str),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }

    pub fn message(&self) -> String {
        match self {
            AppError::MissingParameter(param) => param.missing_message().to_string(),
            AppError::InvalidEmail => names::INVALID_EMAIL.to_string(),
            AppError::InvalidAction => names::INVALID_ACTION.to_string(),
            AppError::AlreadyLoggedIn => names::ALREADY_LOGGED.to_string(),
            AppError::Unauthorized => names::NOT_LOGGED.to_string(),
            AppError::InvalidQuestionId => names::INVALID_QUESTION_ID.to_string(),
            AppError::QuestionIndexOutOfBounds { id, len } => names::out_of_bounds(id, *len),
            AppError::MalformedRequest => names::MALFORMED_REQUEST.to_string(),
            AppError::Internal(_) => names::INTERNAL_ERROR.to_string(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Internal(context) => write!(f, "internal error: {context}"),
            other => f.write_str(&other.message()),
        }
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("{self}");
        } else {
            tracing::warn!("rejected request: {status} {self}");
        }
        (status, self.message()).into_response()
    }
}

/// Turn unexpected failures into a logged [`AppError::Internal`].
pub trait ResultExt<T> {
    fn reject(self, context: &'static str) -> Result<T, AppError>;
}

impl<T, E: fmt::Display> ResultExt<T> for Result<T, E> {
    fn reject(self, context: &'static str) -> Result<T, AppError> {
        self.map_err(|e| {
            tracing::error!("{context}: {e}");
            AppError::Internal(context)
        })
    }
}
