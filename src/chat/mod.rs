//! Stateful chat: transcript models and the session submission rules.

pub mod session;
pub mod transcript;

pub use session::ChatSession;
pub use transcript::{ChatMessage, Sender, Transcript};
