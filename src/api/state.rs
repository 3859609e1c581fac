use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::chat::ChatSession;
use crate::core::AppConfig;
use crate::tasks::TaskList;

/// A chat session held in process memory. Sessions vanish with the
/// process, nothing is written anywhere.
pub struct SessionEntry {
    pub session: ChatSession,
    pub created_at: DateTime<Utc>,
}

pub struct AppState {
    // Chat sessions keyed by session id
    pub sessions: HashMap<String, SessionEntry>,
    // The task list the bot mutates through its capabilities
    pub tasks: TaskList,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            sessions: HashMap::new(),
            tasks: TaskList::new(),
            config,
        }
    }
}
