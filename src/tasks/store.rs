//! The to-do list and the capability seam the bot reaches it through.

/// Capabilities the surrounding application hands to the bot: a snapshot
/// read plus two mutations. The bot never holds a reference to the backing
/// collection, only to this interface.
pub trait TaskStore {
    /// Read-only snapshot of the current tasks in insertion order.
    fn tasks(&self) -> Vec<String>;

    /// Append a task to the end of the list.
    fn add_task(&mut self, task: &str);

    /// Remove every task whose text equals `task` exactly.
    fn remove_task(&mut self, task: &str);
}

/// In-memory task list. Stores whatever it is given verbatim; any case
/// folding happens in the interpreter, not here.
#[derive(Default, Debug, Clone)]
pub struct TaskList {
    tasks: Vec<String>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Like `remove_task` but reports whether anything matched.
    pub fn remove(&mut self, task: &str) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t != task);
        self.tasks.len() != before
    }
}

impl TaskStore for TaskList {
    fn tasks(&self) -> Vec<String> {
        self.tasks.clone()
    }

    fn add_task(&mut self, task: &str) {
        self.tasks.push(task.to_string());
    }

    fn remove_task(&mut self, task: &str) {
        self.remove(task);
    }
}
