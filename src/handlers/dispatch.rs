use axum::{extract::State, routing::post, Router};

use crate::{
    action::Action,
    extractors::{QuestionId, QuizParams},
    names,
    rejections::{AppError, ResultExt},
    services::quiz::{AnswerOutcome, LoginOutcome, QuestionOutcome},
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new().route(names::DISPATCH_URL, post(dispatch))
}

/// Single entry point for the quiz protocol.
///
/// Checks run in a fixed order and stop at the first failure: email
/// presence, email syntax, action presence, action name, session state,
/// then the parameters specific to the action.
async fn dispatch(
    State(state): State<AppState>,
    params: QuizParams,
) -> Result<String, AppError> {
    let email = params.email()?;
    let action = params.action()?;
    tracing::debug!("dispatching {action} for {email}");

    if action.requires_session()
        && !state
            .quiz
            .is_logged_in(&email)
            .await
            .reject("could not look up session")?
    {
        return Err(AppError::Unauthorized);
    }

    match action {
        Action::Login => login(&state, &email).await,
        Action::Question => question(&state, &email).await,
        Action::Answer => {
            match params.answer_args()? {
                (QuestionId::Index(id), answer) => submit_answer(&state, &email, id, answer).await,
                (QuestionId::Overflow(literal), _) => Err(AppError::QuestionIndexOutOfBounds {
                    id: literal.to_string(),
                    len: state.quiz.total_questions(),
                }),
            }
        }
        Action::Score => score(&state, &email).await,
        Action::Reset => reset(&state, &email).await,
    }
}

async fn login(state: &AppState, email: &str) -> Result<String, AppError> {
    match state.quiz.login(email).await.reject("could not log in")? {
        LoginOutcome::LoggedIn => Ok(names::SUCCESS_LOGGED.to_string()),
        LoginOutcome::AlreadyLoggedIn => Err(AppError::AlreadyLoggedIn),
    }
}

async fn question(state: &AppState, email: &str) -> Result<String, AppError> {
    match state
        .quiz
        .next_question(email)
        .await
        .reject("could not serve question")?
    {
        QuestionOutcome::Question(question) => Ok(question.render()),
        QuestionOutcome::NoMoreQuestions => Ok(names::NO_MORE_QUESTIONS.to_string()),
        QuestionOutcome::NotLoggedIn => Err(AppError::Unauthorized),
    }
}

async fn submit_answer(
    state: &AppState,
    email: &str,
    question_id: i64,
    answer: &str,
) -> Result<String, AppError> {
    match state
        .quiz
        .answer(email, question_id, answer)
        .await
        .reject("could not record answer")?
    {
        AnswerOutcome::Correct { .. } => Ok(names::CORRECT_ANSWER.to_string()),
        AnswerOutcome::Incorrect => Ok(names::INCORRECT_ANSWER.to_string()),
        AnswerOutcome::OutOfBounds { id, len } => {
            Err(AppError::QuestionIndexOutOfBounds {
                id: id.to_string(),
                len,
            })
        }
        AnswerOutcome::NotLoggedIn => Err(AppError::Unauthorized),
    }
}

async fn score(state: &AppState, email: &str) -> Result<String, AppError> {
    state
        .quiz
        .score(email)
        .await
        .reject("could not read score")?
        .map(names::current_score)
        .ok_or(AppError::Unauthorized)
}

async fn reset(state: &AppState, email: &str) -> Result<String, AppError> {
    if state
        .quiz
        .reset(email)
        .await
        .reject("could not reset session")?
    {
        Ok(names::RESET_DONE.to_string())
    } else {
        Err(AppError::Unauthorized)
    }
}
