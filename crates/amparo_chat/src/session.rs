//! One conversation session: durable transcript plus the responder,
//! with the simulated-typing delay between a user message and the reply.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use amparo_core::{ChatMessage, Storage, TRANSCRIPT_KEY};
use amparo_store::{HistoryStore, InsertOrder, StoreError};

use crate::responder::Responder;

/// The companion's opening message, shown when no transcript exists yet.
pub const WELCOME_TEXT: &str = "Olá! Sou sua companheira de bem-estar. Sinta-se à vontade para compartilhar o que estiver em sua mente.";

const WELCOME_ID: &str = "welcome-1";

/// Conversation starters offered by the home screen.
pub const SUGGESTIONS: [&str; 3] = [
    "Quero desabafar",
    "Preciso de dicas",
    "Estou ansioso(a)",
];

/// A completed user → companion exchange.
#[derive(Debug, Clone)]
pub struct Exchange {
    pub user: ChatMessage,
    pub bot: ChatMessage,
}

pub struct ChatSession {
    transcript: HistoryStore<ChatMessage>,
    responder: Responder,
    typing_delay: Duration,
    typing: Arc<AtomicBool>,
}

impl ChatSession {
    /// Open a session: load the persisted transcript (fail-soft) and seed
    /// the welcome message when nothing was stored. Seeding stays
    /// in-memory until the first real exchange persists it.
    pub async fn open(
        storage: Arc<dyn Storage>,
        responder: Responder,
        typing_delay: Duration,
    ) -> Self {
        let mut transcript = HistoryStore::new(storage, TRANSCRIPT_KEY, InsertOrder::Append);
        transcript.load().await;
        transcript.seed_if_empty(vec![ChatMessage::with_id(WELCOME_ID, WELCOME_TEXT, false)]);

        Self {
            transcript,
            responder,
            typing_delay,
            typing: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Send user text and wait for the companion reply.
    ///
    /// Empty or whitespace-only input is suppressed here, before any
    /// mutation — `Ok(None)`. Otherwise the user message is appended and
    /// persisted, the typing delay elapses, and the reply is appended.
    /// Dropping the returned future mid-delay just abandons the pending
    /// reply; the user message stays persisted.
    pub async fn send(&mut self, text: &str) -> Result<Option<Exchange>, StoreError> {
        if text.trim().is_empty() {
            return Ok(None);
        }

        let user = ChatMessage::user(text);
        self.transcript.append(user.clone()).await?;

        self.typing.store(true, Ordering::Relaxed);
        tokio::time::sleep(self.typing_delay).await;

        let reply = self.responder.respond(text);
        let bot = ChatMessage::bot(reply);
        self.typing.store(false, Ordering::Relaxed);
        self.transcript.append(bot.clone()).await?;

        tracing::debug!("Exchange complete, transcript now {} messages", self.transcript.len());
        Ok(Some(Exchange { user, bot }))
    }

    /// Whether a reply is pending (the typing indicator state).
    pub fn is_typing(&self) -> bool {
        self.typing.load(Ordering::Relaxed)
    }

    pub fn messages(&self) -> &[ChatMessage] {
        self.transcript.entries()
    }
}
