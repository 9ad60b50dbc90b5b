//! Chat assistant with canned, keyword-matched replies.
//!
//! Replies are produced locally after a short delay so the panel behaves
//! like a live assistant. The pending reply task is aborted whenever the
//! panel closes or a new question arrives, so stale replies never land.

pub mod replies;

use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

pub use replies::{reply_for, tip_for_step, GREETING};

/// Who wrote a chat line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Author {
    User,
    Assistant,
}

/// One line in the chat transcript.
#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub author: Author,
    pub text: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            author: Author::User,
            text: text.into(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            author: Author::Assistant,
            text: text.into(),
        }
    }
}

/// Produces delayed replies on a channel the app polls each tick.
pub struct Responder {
    reply_tx: mpsc::UnboundedSender<String>,
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Responder {
    pub fn new(reply_tx: mpsc::UnboundedSender<String>, delay_ms: u64) -> Self {
        Self {
            reply_tx,
            delay: Duration::from_millis(delay_ms),
            pending: None,
        }
    }

    /// Schedule a reply to `question`, replacing any reply still pending.
    pub fn ask(&mut self, question: &str) {
        self.cancel();
        let reply = reply_for(question);
        let tx = self.reply_tx.clone();
        let delay = self.delay;
        debug!(question, "scheduling assistant reply");
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Receiver dropped means the app is shutting down.
            let _ = tx.send(reply);
        }));
    }

    /// Whether a reply is still in flight.
    pub fn is_thinking(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Drop any in-flight reply.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    /// Mark the in-flight reply as delivered.
    pub fn reply_landed(&mut self) {
        self.pending = None;
    }
}

impl Drop for Responder {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_reply_arrives_after_delay() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut responder = Responder::new(tx, 10);
        responder.ask("tell me about surveys");
        assert!(responder.is_thinking());

        let reply = rx.recv().await.unwrap();
        assert!(reply.contains("response rate"));
        responder.reply_landed();
        assert!(!responder.is_thinking());
    }

    #[tokio::test]
    async fn test_cancel_suppresses_pending_reply() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut responder = Responder::new(tx, 50);
        responder.ask("scorecard basics");
        responder.cancel();

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_new_question_replaces_pending_reply() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut responder = Responder::new(tx, 30);
        responder.ask("is it secure?");
        responder.ask("swot advice");

        let reply = rx.recv().await.unwrap();
        assert!(reply.contains("SWOT"));
        tokio::time::sleep(Duration::from_millis(60)).await;
        assert!(rx.try_recv().is_err());
    }
}
