use std::collections::VecDeque;
use tokio::sync::mpsc::{self, error::SendError};

/// One-shot instructions for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Leave the quiz flow.
    CloseRequested,
    /// Display the given message once.
    ErrorOccurred(Box<str>),
}

type Subscriber = mpsc::UnboundedSender<Effect>;

/// Ordered delivery of effects to live subscribers. Each effect reaches exactly
/// one subscriber, the oldest one still listening. Effects pushed while nobody
/// listens are dropped, never buffered for later subscribers.
#[derive(Debug, Default)]
pub struct EffectChannel {
    subscribers: VecDeque<Subscriber>,
    closed: bool,
}

impl EffectChannel {
    /// Registers a new subscriber. A closed channel hands out receivers that
    /// immediately report the end of the stream.
    pub fn subscribe(&mut self) -> mpsc::UnboundedReceiver<Effect> {
        let (tx, rx) = mpsc::unbounded_channel();
        if !self.closed {
            self.subscribers.push_back(tx);
        }
        rx
    }

    /// Delivers the effect. Returns whether some subscriber received it.
    pub fn push(&mut self, mut effect: Effect) -> bool {
        while let Some(tx) = self.subscribers.front() {
            match tx.send(effect) {
                Ok(()) => return true,
                Err(SendError(rejected)) => {
                    effect = rejected;
                    self.subscribers.pop_front();
                }
            }
        }

        log::debug!("Dropping {effect:?} for lack of subscribers.");
        false
    }

    /// Ends every subscription. Subsequent effects are dropped.
    pub fn close(&mut self) {
        self.closed = true;
        self.subscribers.clear();
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_effects_without_subscribers() {
        let mut channel = EffectChannel::default();
        assert!(!channel.push(Effect::CloseRequested));

        // Late subscribers do not see earlier effects.
        let mut rx = channel.subscribe();
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn delivers_in_order_exactly_once() {
        let mut channel = EffectChannel::default();
        let mut rx = channel.subscribe();
        assert!(channel.push(Effect::CloseRequested));
        assert!(channel.push(Effect::ErrorOccurred("unknown answer".into())));

        assert_eq!(rx.try_recv(), Ok(Effect::CloseRequested));
        assert_eq!(rx.try_recv(), Ok(Effect::ErrorOccurred("unknown answer".into())));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn delivers_to_single_subscriber() {
        let mut channel = EffectChannel::default();
        let mut first = channel.subscribe();
        let mut second = channel.subscribe();
        assert!(channel.push(Effect::CloseRequested));
        assert_eq!(first.try_recv(), Ok(Effect::CloseRequested));
        assert!(second.try_recv().is_err());
    }

    #[test]
    fn skips_departed_subscribers() {
        let mut channel = EffectChannel::default();
        let first = channel.subscribe();
        let mut second = channel.subscribe();
        drop(first);

        assert!(channel.push(Effect::CloseRequested));
        assert_eq!(second.try_recv(), Ok(Effect::CloseRequested));

        drop(second);
        assert!(!channel.push(Effect::CloseRequested));
    }

    #[test]
    fn closing_ends_subscriptions() {
        let mut channel = EffectChannel::default();
        let mut rx = channel.subscribe();
        channel.close();
        assert!(channel.is_closed());
        assert!(!channel.push(Effect::CloseRequested));
        assert_eq!(rx.try_recv(), Err(mpsc::error::TryRecvError::Disconnected));

        let mut late = channel.subscribe();
        assert_eq!(late.try_recv(), Err(mpsc::error::TryRecvError::Disconnected));
    }
}
