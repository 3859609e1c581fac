//! Chat assistant for a to-do list.
//!
//! Free text goes in, one canned reply comes out. Input is matched against
//! a fixed set of keyword commands and dispatched to the task list through
//! a small capability interface. The interpreter ships as a library with a
//! terminal REPL and an HTTP API wrapped around it.
pub mod api;
pub mod bot;
pub mod chat;
pub mod cli;
pub mod core;
pub mod tasks;
