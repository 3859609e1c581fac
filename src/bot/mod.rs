//! The keyword command interpreter behind the chat assistant.

pub mod intent;
pub mod interpreter;

pub use intent::Intent;
pub use interpreter::interpret;
