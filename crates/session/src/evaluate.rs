use core::fmt::{self, Display};
use provider::model::Quiz;

/// Correctness of a submitted answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    pub is_correct: bool,
    pub chosen_answer_id: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvaluationError {
    /// No answer of the quiz carries the submitted identifier.
    UnknownAnswer,
}

impl Display for EvaluationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::UnknownAnswer => "unknown answer",
        })
    }
}

pub fn evaluate(quiz: &Quiz, chosen_answer_id: u32) -> Result<Verdict, EvaluationError> {
    let chosen = quiz.answer(chosen_answer_id).ok_or(EvaluationError::UnknownAnswer)?;
    Ok(Verdict { is_correct: chosen.is_right, chosen_answer_id })
}
