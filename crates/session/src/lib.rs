//! Controller for a single interactive quiz session.
//!
//! The [`SessionController`] owns the [`SessionState`] of one session, reduces
//! incoming [`Action`]s against it, and publishes two independent outputs: a
//! stream of state snapshots and a stream of one-shot [`Effect`]s.

pub mod controller;
pub mod effect;
pub mod error;
pub mod evaluate;
pub mod reduce;
pub mod state;

#[cfg(test)]
mod testing;

pub use controller::SessionController;
pub use effect::{Effect, EffectChannel};
pub use evaluate::{evaluate, EvaluationError, Verdict};
pub use provider::{
    model::{Answer, Quiz},
    QuizProvider,
};
pub use reduce::{reduce, Event, Transition};
pub use state::{Action, Phase, SessionState};
