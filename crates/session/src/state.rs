use crate::evaluate::{evaluate, Verdict};
use provider::model::{Answer, Quiz};
use std::sync::Arc;

/// Mutually exclusive stages of a quiz session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Phase {
    /// No quiz has been loaded yet.
    #[default]
    Idle,
    /// The quiz is on display and awaits an answer.
    Question(Arc<Quiz>),
    /// An answer was submitted. Both the right and the chosen answer are revealed.
    Results {
        quiz: Arc<Quiz>,
        chosen_answer_id: u32,
    },
    /// Loading or answering the quiz failed.
    Failed(Box<str>),
}

/// The externally observable snapshot of a session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub phase: Phase,
}

impl From<Phase> for SessionState {
    fn from(phase: Phase) -> Self {
        Self { phase }
    }
}

impl SessionState {
    /// The quiz currently on display, if any.
    pub fn quiz(&self) -> Option<&Quiz> {
        match &self.phase {
            Phase::Question(quiz) | Phase::Results { quiz, .. } => Some(Arc::as_ref(quiz)),
            Phase::Idle | Phase::Failed(_) => None,
        }
    }

    pub fn right_answer(&self) -> Option<&Answer> {
        self.quiz().map(Quiz::right_answer)
    }

    /// The submitted answer. Only available in [`Phase::Results`].
    pub fn chosen_answer(&self) -> Option<&Answer> {
        match &self.phase {
            Phase::Results { quiz, chosen_answer_id } => quiz.answer(*chosen_answer_id),
            _ => None,
        }
    }

    /// The verdict on the submitted answer. Only available in [`Phase::Results`].
    pub fn verdict(&self) -> Option<Verdict> {
        match &self.phase {
            Phase::Results { quiz, chosen_answer_id } => evaluate(quiz, *chosen_answer_id).ok(),
            _ => None,
        }
    }

    pub fn is_correct(&self) -> Option<bool> {
        self.verdict().map(|verdict| verdict.is_correct)
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            Phase::Failed(message) => Some(&**message),
            _ => None,
        }
    }
}

/// Discrete intents coming from the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Load the quiz with the given identifier.
    RequestQuiz(u64),
    /// Submit the answer with the given identifier.
    SubmitAnswer(u32),
    /// Leave the quiz.
    RequestClose,
}
