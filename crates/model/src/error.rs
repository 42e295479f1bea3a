use core::fmt::{self, Display};

/// Reasons for rejecting a [`RawQuiz`](crate::RawQuiz).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Invalid {
    /// The quiz has no answers to choose from.
    NoAnswers,
    /// None of the answers is marked as right.
    NoRightAnswer,
    /// More than one answer is marked as right.
    ManyRightAnswers,
    /// Two answers share the same identifier.
    DuplicateAnswer(u32),
}

impl Display for Invalid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoAnswers => f.write_str("Quiz has no answers."),
            Self::NoRightAnswer => f.write_str("Quiz has no right answer."),
            Self::ManyRightAnswers => f.write_str("Quiz has more than one right answer."),
            Self::DuplicateAnswer(id) => write!(f, "Answer {id} appears more than once."),
        }
    }
}

pub type Result<T> = core::result::Result<T, Invalid>;
