use crate::{
    effect::Effect,
    error::Error,
    evaluate::evaluate,
    state::{Action, Phase, SessionState},
};
use provider::model::Quiz;
use std::sync::Arc;

/// Inputs of the reducer: user actions and quiz fetch completions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Action(Action),
    /// The quiz fetch resolved, either with the quiz or with the provider's message.
    Fetched(Result<Arc<Quiz>, Box<str>>),
}

impl From<Action> for Event {
    fn from(action: Action) -> Self {
        Self::Action(action)
    }
}

/// Result of reducing one [`Event`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: SessionState,
    pub effect: Option<Effect>,
}

impl Transition {
    fn to(phase: Phase) -> Self {
        Self { state: phase.into(), effect: None }
    }

    fn stay(state: &SessionState) -> Self {
        Self { state: state.clone(), effect: None }
    }

    fn fail(err: Error) -> Self {
        let message: Box<str> = err.to_string().into();
        Self { state: Phase::Failed(message.clone()).into(), effect: Some(Effect::ErrorOccurred(message)) }
    }
}

/// Computes the state following `event`. Total over every phase and event, and
/// free of side effects.
pub fn reduce(state: &SessionState, event: Event) -> Transition {
    let action = match event {
        Event::Fetched(Ok(quiz)) => return Transition::to(Phase::Question(quiz)),
        Event::Fetched(Err(message)) => return Transition::fail(Error::FetchFailure(message)),
        Event::Action(action) => action,
    };

    match action {
        // Fetching is up to the controller.
        Action::RequestQuiz(_) => Transition::stay(state),
        Action::RequestClose => Transition { state: state.clone(), effect: Some(Effect::CloseRequested) },
        Action::SubmitAnswer(answer_id) => match &state.phase {
            Phase::Question(quiz) => match evaluate(quiz, answer_id) {
                Ok(verdict) => Transition::to(Phase::Results {
                    quiz: Arc::clone(quiz),
                    chosen_answer_id: verdict.chosen_answer_id,
                }),
                Err(err) => Transition::fail(err.into()),
            },
            // Already resolved, or nothing to answer yet.
            Phase::Results { .. } | Phase::Idle | Phase::Failed(_) => Transition::stay(state),
        },
    }
}
