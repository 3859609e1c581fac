//! A chat session: one transcript plus the submission rules around it.

use crate::bot::interpret;
use crate::chat::transcript::{ChatMessage, Transcript};
use crate::tasks::TaskStore;

/// One conversation with the bot. Owns the transcript; the task list
/// belongs to the caller and is only reached through the `TaskStore`
/// capabilities passed into each submission.
pub struct ChatSession {
    transcript: Transcript,
}

impl ChatSession {
    /// Start a fresh session with the bot greeting as the first entry.
    pub fn new(greeting: &str) -> Self {
        let mut transcript = Transcript::new();
        transcript.push(ChatMessage::bot(greeting));
        Self { transcript }
    }

    /// Run one submission to completion.
    ///
    /// Whitespace-only input is rejected before interpretation: no reply,
    /// no transcript entries. Anything else appends the user message as
    /// typed (original casing, untrimmed), then exactly one bot reply.
    pub fn send(&mut self, input: &str, store: &mut dyn TaskStore) -> Option<String> {
        if input.trim().is_empty() {
            return None;
        }

        self.transcript.push(ChatMessage::user(input));
        let reply = interpret(input, store);
        self.transcript.push(ChatMessage::bot(&reply));
        Some(reply)
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }
}
