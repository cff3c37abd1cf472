pub const DISPATCH_URL: &str = "/";
pub const HEALTH_URL: &str = "/health";

// Response bodies
pub const SUCCESS_LOGGED: &str = "You have successfully logged in";
pub const NO_MORE_QUESTIONS: &str = "No more questions available";
pub const CORRECT_ANSWER: &str = "Correct answer";
pub const INCORRECT_ANSWER: &str = "Incorrect answer";
pub const CURRENT_SCORE_PREFIX: &str = "Current score: ";
pub const RESET_DONE: &str = "User state has been reset";

pub const MISSING_EMAIL: &str = "Error: Email parameter is missing";
pub const INVALID_EMAIL: &str = "Error: Invalid email address";
pub const MISSING_ACTION: &str = "Error: Action parameter is missing";
pub const INVALID_ACTION: &str = "Error: Invalid action";
pub const ALREADY_LOGGED: &str = "Error: User is already logged in";
pub const NOT_LOGGED: &str = "Error: User is not logged in";
pub const MISSING_QUESTION_ID: &str = "Error: Question ID parameter is missing";
pub const INVALID_QUESTION_ID: &str = "Error: Invalid question ID";
pub const MISSING_ANSWER: &str = "Error: Answer parameter is missing";
pub const MALFORMED_REQUEST: &str = "Error: Malformed request";
pub const INTERNAL_ERROR: &str = "Error: Internal server error";

pub fn current_score(score: usize) -> String {
    format!("{CURRENT_SCORE_PREFIX}{score}")
}

pub fn out_of_bounds(id: impl std::fmt::Display, len: usize) -> String {
    format!("Index {id} out of bounds for length {len}")
}

// Email limits
pub const MAX_EMAIL_LENGTH: usize = 254;

// Server defaults
pub const DEFAULT_ADDRESS: &str = "127.0.0.1:1414";
pub const DEFAULT_LOG_FILTER: &str = "tracing=info,axum=debug,trivia_endpoint=debug";
