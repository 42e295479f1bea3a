pub mod catalogue;
pub mod error;

mod validator;

pub use catalogue::Catalogue;
pub use model;

use core::{fmt::Display, future::Future};
use model::Quiz;
use std::sync::Arc;

/// Source of quizzes for a session.
///
/// Any failure is reported through the [`Display`] text of the error, which is
/// what the session ultimately shows to the user.
pub trait QuizProvider: Send + Sync + 'static {
    type Error: Display + Send;

    fn fetch(&self, id: u64) -> impl Future<Output = Result<Quiz, Self::Error>> + Send;
}

impl<P: QuizProvider> QuizProvider for Arc<P> {
    type Error = P::Error;

    fn fetch(&self, id: u64) -> impl Future<Output = Result<Quiz, Self::Error>> + Send {
        P::fetch(self, id)
    }
}
