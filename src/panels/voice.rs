//! Voice assistant panel.
//!
//! DESIGN
//! ======
//! The conversation is append-only for the whole session: messages are
//! pushed in the order they happen and never edited or removed. A query is
//! answered in the language selected when it was asked, even if the user
//! switches language while the reply is pending.
//!
//! Audio playback is simulated by a fixed suspension. Only one playback can
//! run at a time; a request while one is running is ignored, not queued.

use std::sync::{Arc, Mutex};

use serde::Serialize;
use time::OffsetDateTime;
use tracing::{debug, info};
use uuid::Uuid;

use super::lock;
use crate::config::DashboardConfig;
use crate::data::voice::{GREETING, SAMPLE_QUERIES, SampleQuery};
use crate::engine::{AnalysisError, ResponseEngine};
use crate::listening::ListeningFlag;
use crate::locale::Language;
use crate::notify::Notifier;

#[cfg(test)]
#[path = "voice_test.rs"]
mod tests;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversationMessage {
    pub id: Uuid,
    pub role: Role,
    pub text: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    pub language: Language,
}

impl ConversationMessage {
    fn new(role: Role, text: impl Into<String>, language: Language) -> Self {
        Self { id: Uuid::new_v4(), role, text: text.into(), created_at: OffsetDateTime::now_utc(), language }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct VoiceState {
    pub messages: Vec<ConversationMessage>,
    pub language: Language,
    pub playing: bool,
    pub listening: bool,
}

struct Conversation {
    messages: Vec<ConversationMessage>,
    language: Language,
    playing: bool,
}

#[derive(Clone)]
pub struct VoicePanel {
    state: Arc<Mutex<Conversation>>,
    engine: Arc<ResponseEngine>,
    notifier: Notifier,
    listening: ListeningFlag,
    playback: std::time::Duration,
}

impl VoicePanel {
    #[must_use]
    pub fn new(
        engine: Arc<ResponseEngine>,
        notifier: Notifier,
        listening: ListeningFlag,
        config: &DashboardConfig,
    ) -> Self {
        let conversation = Conversation {
            messages: vec![ConversationMessage::new(Role::Assistant, GREETING, Language::En)],
            language: config.language,
            playing: false,
        };
        Self { state: Arc::new(Mutex::new(conversation)), engine, notifier, listening, playback: config.playback_delay }
    }

    #[must_use]
    pub fn snapshot(&self) -> VoiceState {
        let state = lock(&self.state);
        VoiceState {
            messages: state.messages.clone(),
            language: state.language,
            playing: state.playing,
            listening: self.listening.is_listening(),
        }
    }

    pub fn set_language(&self, language: Language) {
        debug!(panel = "voice", %language, "response language changed");
        lock(&self.state).language = language;
    }

    #[must_use]
    pub fn is_listening(&self) -> bool {
        self.listening.is_listening()
    }

    /// Same toggle as the header mic button.
    pub fn toggle_listening(&self) -> bool {
        self.listening.toggle()
    }

    #[must_use]
    pub fn sample_queries() -> &'static [SampleQuery] {
        SAMPLE_QUERIES
    }

    /// Ask the assistant `query` and wait for its reply.
    ///
    /// The user message is appended immediately; the assistant message is
    /// appended once the engine answers and is also returned.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InputMissing`] for an empty query, after
    /// raising a destructive alert. Nothing is appended in that case.
    pub async fn ask(&self, query: &str) -> Result<ConversationMessage, AnalysisError> {
        if query.trim().is_empty() {
            self.notifier.alert("No Question Asked", "Please type or choose a question first");
            return Err(AnalysisError::InputMissing { input: "query" });
        }

        let language = {
            let mut state = lock(&self.state);
            let language = state.language;
            state.messages.push(ConversationMessage::new(Role::User, query, language));
            language
        };
        info!(panel = "voice", %language, "voice query received");
        self.notifier.notify("Voice Query Processed", "AI is analyzing your question...");

        let reply = self.engine.answer(query, language).await?;
        let message = ConversationMessage::new(Role::Assistant, reply, language);
        lock(&self.state).messages.push(message.clone());
        Ok(message)
    }

    /// Ask the predefined phrase at `index` in the current language.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InputMissing`] if there is no such phrase.
    pub async fn ask_sample(&self, index: usize) -> Result<ConversationMessage, AnalysisError> {
        let Some(sample) = SAMPLE_QUERIES.get(index) else {
            self.notifier.alert("Unknown Sample Query", format!("There is no sample question #{index}"));
            return Err(AnalysisError::InputMissing { input: "sample query" });
        };
        let language = lock(&self.state).language;
        self.ask(sample.text(language)).await
    }

    /// Play the message `message_id` aloud.
    ///
    /// Returns `Ok(false)` without touching the playback state if something
    /// is already playing.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InputMissing`] if no message has that id.
    pub async fn play_audio(&self, message_id: Uuid) -> Result<bool, AnalysisError> {
        {
            let mut state = lock(&self.state);
            if !state.messages.iter().any(|m| m.id == message_id) {
                drop(state);
                self.notifier.alert("Message Not Found", "That message is not part of this conversation");
                return Err(AnalysisError::InputMissing { input: "message" });
            }
            if state.playing {
                debug!(panel = "voice", "playback already running; ignoring request");
                return Ok(false);
            }
            state.playing = true;
        }
        info!(panel = "voice", %message_id, "playback started");

        tokio::time::sleep(self.playback).await;

        lock(&self.state).playing = false;
        self.notifier.notify("Audio Playback", "Response played in your selected language");
        Ok(true)
    }

    /// Id of the most recent assistant message, the usual playback target.
    #[must_use]
    pub fn last_reply_id(&self) -> Option<Uuid> {
        lock(&self.state)
            .messages
            .iter()
            .rev()
            .find(|m| m.role == Role::Assistant)
            .map(|m| m.id)
    }
}
