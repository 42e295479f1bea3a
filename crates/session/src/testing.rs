use crate::{Quiz, QuizProvider};
use core::future::Future;
use parking_lot::Mutex;
use provider::model::{Answer, RawQuiz};
use std::{
    collections::VecDeque,
    sync::atomic::{AtomicUsize, Ordering},
};

fn quiz(id: u64, answers: &[(u32, &str, bool)]) -> Quiz {
    let answers = answers
        .iter()
        .map(|&(answer_id, text, is_right)| Answer { answer_id, text: text.into(), is_right })
        .collect();
    let raw = RawQuiz {
        id,
        question: "Who wrote The Overcoat?".into(),
        image: "https://example.com/overcoat.jpg".into(),
        description: "Published in 1842.".into(),
        answers,
    };
    Quiz::try_from(raw).unwrap()
}

/// Quiz 42 with a wrong answer 1 and a right answer 2.
pub fn sample_quiz() -> Quiz {
    quiz(42, &[(1, "x", false), (2, "y", true)])
}

pub fn four_way_quiz() -> Quiz {
    quiz(7, &[(1, "Pushkin", false), (2, "Tolstoy", false), (3, "Gogol", true), (4, "Chekhov", false)])
}

/// Provider that replays a fixed script of outcomes. Fetches past the end of
/// the script never complete.
#[derive(Default)]
pub struct ScriptedProvider {
    script: Mutex<VecDeque<Result<Quiz, &'static str>>>,
    calls: AtomicUsize,
}

impl ScriptedProvider {
    pub fn new(script: impl IntoIterator<Item = Result<Quiz, &'static str>>) -> Self {
        Self { script: Mutex::new(script.into_iter().collect()), calls: AtomicUsize::new(0) }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl QuizProvider for ScriptedProvider {
    type Error = &'static str;

    fn fetch(&self, _: u64) -> impl Future<Output = Result<Quiz, Self::Error>> + Send {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let outcome = self.script.lock().pop_front();
        async move {
            match outcome {
                Some(outcome) => outcome,
                None => core::future::pending().await,
            }
        }
    }
}
