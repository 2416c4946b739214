//! Delayed delivery of replies to simulate the assistant "thinking".
//!
//! There is no cancellation. Every scheduled reply is delivered after the same
//! delay, so replies arrive in submission order.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::events::AppEvent;
use crate::session::PendingReply;

/// Sends finished replies back to the UI loop after a fixed delay
#[derive(Clone)]
pub struct Responder {
    delay: Duration,
    tx: mpsc::UnboundedSender<AppEvent>,
}

impl Responder {
    /// Create a responder and the receiver the UI loop drains
    pub fn new(delay: Duration) -> (Self, mpsc::UnboundedReceiver<AppEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { delay, tx }, rx)
    }

    /// Deliver `reply` once the delay has elapsed. Must run inside a tokio runtime.
    pub fn schedule(&self, reply: PendingReply) -> JoinHandle<()> {
        let tx = self.tx.clone();
        let delay = self.delay;

        tokio::spawn(async move {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            // The UI may already be gone; nothing to do then
            let _ = tx.send(AppEvent::BotReply { reply });
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::selector::ResponseSelector;
    use crate::session::ChatSession;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::time::Instant;

    fn session() -> ChatSession {
        ChatSession::with_parts(
            ResponseSelector::builtin(),
            StdRng::seed_from_u64(11),
            &catalog::LANGUAGES[0],
        )
    }

    #[tokio::test]
    async fn reply_arrives_after_delay() {
        let mut chat = session();
        let (responder, mut rx) = Responder::new(Duration::from_millis(30));

        let started = Instant::now();
        responder.schedule(chat.submit("hello").unwrap());

        match rx.recv().await {
            Some(AppEvent::BotReply { reply }) => {
                assert!(started.elapsed() >= Duration::from_millis(30));
                chat.deliver(reply);
            }
            other => panic!("unexpected event {other:?}"),
        }
        assert_eq!(chat.log().len(), 2);
        assert!(!chat.is_typing());
    }

    #[tokio::test]
    async fn replies_keep_submission_order() {
        let mut chat = session();
        let (responder, mut rx) = Responder::new(Duration::from_millis(5));

        let first = chat.submit("monsoon").unwrap();
        let second = chat.submit("repo rate").unwrap();
        let (first_id, second_id) = (first.in_reply_to.clone(), second.in_reply_to.clone());
        responder.schedule(first).await.unwrap();
        responder.schedule(second).await.unwrap();

        let mut order = Vec::new();
        while order.len() < 2 {
            if let Some(AppEvent::BotReply { reply }) = rx.recv().await {
                order.push(reply.in_reply_to);
            }
        }
        assert_eq!(order, vec![first_id, second_id]);
    }
}
