//! Classify one line of free text into a task command.
//!
//! Matching is deliberately naive: case-insensitive substring containment
//! over the whole input, checked top to bottom, first rule wins. There is
//! no tokenization and no grammar. Anything the rules miss is `Unknown`.

use std::sync::OnceLock;

use regex::Regex;

fn add_keywords() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new("(?i)add task|add|task").expect("Invalid regex"))
}

fn delete_keywords() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new("(?i)delete task|remove task").expect("Invalid regex"))
}

fn reminder_keywords() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new("(?i)set reminder").expect("Invalid regex"))
}

/// Delete the first match of `keywords` from `input` and trim what is left.
/// Only the leftmost match goes; repeated keywords stay in the argument.
fn strip_keywords(input: &str, keywords: &Regex) -> Option<String> {
    let rest = keywords.replace(input, "");
    let rest = rest.trim();
    if rest.is_empty() {
        None
    } else {
        Some(rest.to_string())
    }
}

/// A classified user command.
///
/// Argument fields hold whatever text is left after stripping the command
/// keywords, `None` when nothing remains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Add a task to the list
    AddTask { task: Option<String> },
    /// Show every task
    ListTasks,
    /// Remove a task from the list
    DeleteTask { target: Option<String> },
    /// Acknowledge a reminder request
    SetReminder { about: Option<String> },
    /// Show the command summary
    Help,
    /// No rule matched
    Unknown,
}

impl Intent {
    /// Classify `input` into exactly one intent.
    ///
    /// Both the substring checks and the argument extraction run on the
    /// lowercased input, so extracted text is always lowercase. Rule order
    /// is load-bearing: an input containing "add", "delete", and "task"
    /// is an `AddTask` because the add rule is checked first.
    pub fn parse(input: &str) -> Self {
        let lowered = input.to_lowercase();

        if lowered.contains("add") && lowered.contains("task") {
            Intent::AddTask {
                task: strip_keywords(&lowered, add_keywords()),
            }
        } else if lowered.contains("show tasks") || lowered.contains("list tasks") {
            Intent::ListTasks
        } else if lowered.contains("delete") && lowered.contains("task") {
            Intent::DeleteTask {
                target: strip_keywords(&lowered, delete_keywords()),
            }
        } else if lowered.contains("set reminder") {
            Intent::SetReminder {
                about: strip_keywords(&lowered, reminder_keywords()),
            }
        } else if lowered.contains("help") || lowered.contains("commands") {
            Intent::Help
        } else {
            Intent::Unknown
        }
    }
}
