//! Chat session: transcript ownership and the typing-delay reveal.
//!
//! The responder itself is a pure, synchronous function; this module wraps
//! it with the presentation concerns around it. A [`ChatSession`] owns the
//! ordered transcript, seeds it with the assistant's welcome message, and
//! reveals each computed reply only after a short randomized delay that
//! simulates typing. The pending reveal is a cancellable task: closing or
//! dropping the session aborts it, so a dismissed chat surface never
//! updates a discarded transcript.

use std::sync::{Arc, Mutex};

use rand::Rng;
use tokio::task::JoinHandle;
use tokio::time::{sleep, Duration};

use crate::chat::{respond, welcome_message};
use crate::config::ChatConfig;
use crate::models::{ChatMessage, ChatRole};
use crate::repository::ContentRepository;

/// An in-memory chat conversation against one content repository.
///
/// Requires a tokio runtime; [`ChatSession::send`] spawns the deferred
/// reveal task on the current runtime.
pub struct ChatSession {
    repo: Arc<dyn ContentRepository>,
    config: ChatConfig,
    transcript: Arc<Mutex<Vec<ChatMessage>>>,
    pending: Option<JoinHandle<()>>,
}

impl ChatSession {
    /// Open a session, seeding the transcript with the welcome message.
    pub fn new(repo: Arc<dyn ContentRepository>, config: ChatConfig) -> Self {
        let welcome = ChatMessage::new(ChatRole::Assistant, welcome_message(repo.about()));
        Self {
            repo,
            config,
            transcript: Arc::new(Mutex::new(vec![welcome])),
            pending: None,
        }
    }

    /// A snapshot of the transcript in order.
    pub fn transcript(&self) -> Vec<ChatMessage> {
        self.transcript.lock().unwrap().clone()
    }

    /// True while a reply has been computed but not yet revealed.
    pub fn is_typing(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Submit one user message.
    ///
    /// Blank input is ignored, as is input submitted while a reveal is
    /// still pending (the chat surface disables its input field during the
    /// typing animation). Otherwise the user message is appended
    /// immediately, the reply is computed synchronously, and a deferred
    /// task appends it after the configured delay.
    pub fn send(&mut self, text: &str) {
        if text.trim().is_empty() || self.is_typing() {
            return;
        }

        self.transcript
            .lock()
            .unwrap()
            .push(ChatMessage::new(ChatRole::User, text));

        let reply = respond(self.repo.as_ref(), text);
        let delay = self.reveal_delay();
        let transcript = Arc::clone(&self.transcript);

        self.pending = Some(tokio::spawn(async move {
            sleep(delay).await;
            transcript
                .lock()
                .unwrap()
                .push(ChatMessage::new(ChatRole::Assistant, reply));
        }));
    }

    /// Wait for the pending reveal, if any.
    ///
    /// The deterministic path for tests and for callers that do not render
    /// a typing animation.
    pub async fn flush(&mut self) {
        if let Some(handle) = self.pending.take() {
            let _ = handle.await;
        }
    }

    /// Clear the transcript and start over with a fresh welcome message.
    /// Any pending reveal is cancelled.
    pub fn reset(&mut self) {
        self.cancel_pending();
        let mut transcript = self.transcript.lock().unwrap();
        transcript.clear();
        transcript.push(ChatMessage::new(
            ChatRole::Assistant,
            welcome_message(self.repo.about()),
        ));
    }

    /// Cancel any pending reveal. Called when the chat surface goes away;
    /// also runs on drop.
    pub fn close(&mut self) {
        self.cancel_pending();
    }

    fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    fn reveal_delay(&self) -> Duration {
        let min = self.config.typing_delay_min_ms;
        let max = self.config.typing_delay_max_ms.max(min);
        Duration::from_millis(rand::rng().random_range(min..=max))
    }
}

impl Drop for ChatSession {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentSet;
    use crate::repository::InMemoryRepository;

    fn instant_config() -> ChatConfig {
        ChatConfig {
            typing_delay_min_ms: 0,
            typing_delay_max_ms: 0,
        }
    }

    fn session_with(config: ChatConfig) -> ChatSession {
        let mut content = ContentSet::default();
        content.about.name = "Jane Doe".to_string();
        content.about.contact_email = "jane@example.com".to_string();
        ChatSession::new(Arc::new(InMemoryRepository::new(content)), config)
    }

    #[tokio::test]
    async fn test_session_opens_with_welcome_message() {
        let session = session_with(instant_config());
        let transcript = session.transcript();
        assert_eq!(transcript.len(), 1);
        assert_eq!(transcript[0].role, ChatRole::Assistant);
        assert!(transcript[0].content.contains("Jane Doe"));
    }

    #[tokio::test]
    async fn test_send_appends_user_then_assistant() {
        let mut session = session_with(instant_config());
        session.send("How do I contact you?");
        session.flush().await;

        let transcript = session.transcript();
        assert_eq!(transcript.len(), 3);
        assert_eq!(transcript[1].role, ChatRole::User);
        assert_eq!(transcript[1].content, "How do I contact you?");
        assert_eq!(transcript[2].role, ChatRole::Assistant);
        assert!(transcript[2].content.contains("jane@example.com"));
    }

    #[tokio::test]
    async fn test_blank_input_is_ignored() {
        let mut session = session_with(instant_config());
        session.send("   ");
        session.flush().await;
        assert_eq!(session.transcript().len(), 1);
    }

    #[tokio::test]
    async fn test_input_ignored_while_typing() {
        let config = ChatConfig {
            typing_delay_min_ms: 60_000,
            typing_delay_max_ms: 60_000,
        };
        let mut session = session_with(config);
        session.send("first");
        session.send("second");

        let transcript = session.transcript();
        // Welcome plus the first user message only; the second send was
        // dropped while the reveal was pending.
        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript[1].content, "first");
        session.close();
    }

    #[tokio::test]
    async fn test_close_cancels_pending_reveal() {
        let config = ChatConfig {
            typing_delay_min_ms: 60_000,
            typing_delay_max_ms: 60_000,
        };
        let mut session = session_with(config);
        session.send("hello there");
        assert!(session.is_typing());

        session.close();
        assert!(!session.is_typing());

        // The aborted task must not append after cancellation.
        sleep(Duration::from_millis(20)).await;
        let transcript = session.transcript();
        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript[1].role, ChatRole::User);
    }

    #[tokio::test]
    async fn test_reset_reseeds_welcome() {
        let mut session = session_with(instant_config());
        session.send("skills");
        session.flush().await;
        assert_eq!(session.transcript().len(), 3);

        session.reset();
        let transcript = session.transcript();
        assert_eq!(transcript.len(), 1);
        assert_eq!(transcript[0].role, ChatRole::Assistant);
    }

    #[tokio::test]
    async fn test_transcript_order_and_timestamps_monotonic() {
        let mut session = session_with(instant_config());
        session.send("projects");
        session.flush().await;
        session.send("contact");
        session.flush().await;

        let transcript = session.transcript();
        assert_eq!(transcript.len(), 5);
        for pair in transcript.windows(2) {
            assert!(pair[0].timestamp <= pair[1].timestamp);
        }
    }
}
