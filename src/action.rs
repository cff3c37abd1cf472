use std::{fmt, str::FromStr};

/// The operations a request can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Login,
    Question,
    Answer,
    Score,
    Reset,
}

#[derive(Debug, PartialEq, Eq)]
pub struct UnknownAction;

impl FromStr for Action {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "login" => Ok(Action::Login),
            "question" => Ok(Action::Question),
            "answer" => Ok(Action::Answer),
            "score" => Ok(Action::Score),
            "reset" => Ok(Action::Reset),
            _ => Err(UnknownAction),
        }
    }
}

impl Action {
    pub fn as_str(self) -> &'static str {
        match self {
            Action::Login => "login",
            Action::Question => "question",
            Action::Answer => "answer",
            Action::Score => "score",
            Action::Reset => "reset",
        }
    }

    /// Everything except login operates on an existing session.
    pub fn requires_session(self) -> bool {
        !matches!(self, Action::Login)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
