use crate::evaluate::EvaluationError;
use core::fmt::{self, Display};

/// Failures a session may run into. None of them terminate the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The provider could not supply the quiz. Carries the provider's message.
    FetchFailure(Box<str>),
    /// The submitted answer is not part of the active quiz.
    UnknownAnswer,
    /// An answer was submitted while no quiz is on display.
    NoActiveQuiz,
}

impl From<EvaluationError> for Error {
    fn from(err: EvaluationError) -> Self {
        match err {
            EvaluationError::UnknownAnswer => Self::UnknownAnswer,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::FetchFailure(message) => &**message,
            Self::UnknownAnswer => "unknown answer",
            Self::NoActiveQuiz => "no active quiz",
        })
    }
}

pub type Result<T> = core::result::Result<T, Error>;
