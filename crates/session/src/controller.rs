use crate::{
    effect::{Effect, EffectChannel},
    error::Error,
    reduce::{reduce, Event, Transition},
    state::{Action, Phase, SessionState},
};
use futures_util::stream::{self, BoxStream, StreamExt};
use parking_lot::Mutex;
use provider::{model::Quiz, QuizProvider};
use std::sync::Arc;
use tokio::{sync::watch, task::JoinHandle};

/// The quiz fetch currently in flight.
struct Fetch {
    quiz: u64,
    /// Distinguishes this fetch from superseded ones.
    generation: u64,
    task: JoinHandle<()>,
}

/// Everything guarded by the session's single sequencing lock.
struct Core {
    state: SessionState,
    /// Taken on teardown, which ends every state stream.
    publisher: Option<watch::Sender<SessionState>>,
    effects: EffectChannel,
    fetch: Option<Fetch>,
    generation: u64,
}

struct Shared<P> {
    provider: P,
    core: Mutex<Core>,
}

/// Owner of one quiz session.
///
/// All mutations of the session state go through one lock, so concurrent calls
/// to [`dispatch`](Self::dispatch) are applied one at a time in the order they
/// acquire it. Dropping the controller tears the session down.
pub struct SessionController<P> {
    inner: Arc<Shared<P>>,
}

impl<P: QuizProvider> SessionController<P> {
    pub fn new(provider: P) -> Self {
        let state = SessionState::default();
        let (publisher, _) = watch::channel(state.clone());
        let core = Core {
            state,
            publisher: Some(publisher),
            effects: EffectChannel::default(),
            fetch: None,
            generation: 0,
        };
        Self { inner: Arc::new(Shared { provider, core: Mutex::new(core) }) }
    }

    /// Begins loading the quiz unless one is already on display. Repeated calls
    /// while the same quiz is being fetched share that fetch.
    ///
    /// # Panics
    /// Panics when called outside of a Tokio runtime.
    pub fn start(&self, quiz: u64) {
        let mut core = self.inner.core.lock();
        self.inner.start(&mut core, quiz);
    }

    /// Reduces the action against the current state, publishes the new state,
    /// and enqueues the resulting effect. Never waits.
    pub fn dispatch(&self, action: Action) {
        let mut core = self.inner.core.lock();
        if core.is_closed() {
            log::debug!("Ignoring {action:?} on a closed session.");
            return;
        }

        if let (Action::SubmitAnswer(_), Phase::Idle | Phase::Failed(_)) = (action, &core.state.phase) {
            log::debug!("Ignoring {action:?}: {}.", Error::NoActiveQuiz);
        }

        let transition = reduce(&core.state, action.into());
        core.apply(transition);

        if let Action::RequestQuiz(quiz) = action {
            self.inner.start(&mut core, quiz);
        }
    }

    /// The current snapshot.
    pub fn state(&self) -> SessionState {
        self.inner.core.lock().state.clone()
    }

    /// Stream of snapshots. The current snapshot comes first, followed by every
    /// subsequent change. Slow subscribers only observe the latest snapshot.
    /// The stream ends when the session is torn down.
    pub fn state_stream(&self) -> BoxStream<'static, SessionState> {
        let core = self.inner.core.lock();
        let receiver = match &core.publisher {
            Some(publisher) => publisher.subscribe(),
            // Torn down: yield the final snapshot once.
            None => watch::channel(core.state.clone()).1,
        };
        drop(core);

        stream::unfold((receiver, true), |(mut receiver, first)| async move {
            if !first && receiver.changed().await.is_err() {
                return None;
            }
            let snapshot = receiver.borrow_and_update().clone();
            Some((snapshot, (receiver, false)))
        })
        .boxed()
    }

    /// Stream of effects. Each effect reaches exactly one live subscription;
    /// effects raised while nobody subscribes are lost. The stream ends when the
    /// session is torn down.
    pub fn effect_stream(&self) -> BoxStream<'static, Effect> {
        let receiver = self.inner.core.lock().effects.subscribe();
        stream::unfold(receiver, |mut receiver| async move {
            let effect = receiver.recv().await?;
            Some((effect, receiver))
        })
        .boxed()
    }

    /// Tears the session down: cancels any in-flight fetch and ends both
    /// streams. Later calls have no effect.
    pub fn close(&self) {
        let mut core = self.inner.core.lock();
        if !core.is_closed() {
            core.teardown();
            log::info!("Session closed.");
        }
    }

    pub fn is_closed(&self) -> bool {
        self.inner.core.lock().is_closed()
    }
}

impl<P> Drop for SessionController<P> {
    fn drop(&mut self) {
        self.inner.core.lock().teardown();
    }
}

impl Core {
    fn is_closed(&self) -> bool {
        self.effects.is_closed()
    }

    fn teardown(&mut self) {
        if let Some(Fetch { quiz, task, .. }) = self.fetch.take() {
            log::debug!("Cancelling fetch of quiz {quiz}.");
            task.abort();
        }
        self.publisher = None;
        self.effects.close();
    }

    fn apply(&mut self, Transition { state, effect }: Transition) {
        if state != self.state {
            log::debug!("Session moves to {:?}.", state.phase);
            self.state = state;
            if let Some(publisher) = &self.publisher {
                publisher.send_replace(self.state.clone());
            }
        }

        if let Some(effect) = effect {
            self.effects.push(effect);
        }
    }
}

impl<P: QuizProvider> Shared<P> {
    fn start(self: &Arc<Self>, core: &mut Core, quiz: u64) {
        if core.is_closed() {
            log::warn!("Refusing to fetch quiz {quiz} on a closed session.");
            return;
        }

        if !matches!(core.state.phase, Phase::Idle | Phase::Failed(_)) {
            log::debug!("Quiz already loaded. Ignoring request for quiz {quiz}.");
            return;
        }

        if let Some(fetch) = core.fetch.take() {
            if fetch.quiz == quiz {
                log::debug!("Fetch of quiz {quiz} already in flight.");
                core.fetch = Some(fetch);
                return;
            }
            log::info!("Fetch of quiz {} superseded by quiz {quiz}.", fetch.quiz);
            fetch.task.abort();
        }

        core.generation += 1;
        let generation = core.generation;
        let shared = Arc::clone(self);
        log::info!("Fetching quiz {quiz}.");
        let task = tokio::spawn(async move {
            let outcome = match shared.provider.fetch(quiz).await {
                Ok(quiz) => Ok(Arc::new(quiz)),
                Err(err) => Err(err.to_string().into_boxed_str()),
            };
            shared.complete(generation, outcome);
        });
        core.fetch = Some(Fetch { quiz, generation, task });
    }

    fn complete(&self, generation: u64, outcome: Result<Arc<Quiz>, Box<str>>) {
        let mut core = self.core.lock();
        if core.fetch.as_ref().map(|fetch| fetch.generation) != Some(generation) {
            log::debug!("Discarding outcome of a cancelled fetch.");
            return;
        }
        core.fetch = None;

        if let Err(message) = &outcome {
            log::error!("Failed to fetch quiz: {message}");
        }

        let transition = reduce(&core.state, Event::Fetched(outcome));
        core.apply(transition);
    }
}
