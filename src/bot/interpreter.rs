//! Turn one classified command into one reply, with at most one task
//! mutation along the way.

use crate::bot::intent::Intent;
use crate::tasks::TaskStore;

const HELP_REPLY: &str = "Here are some things I can help you with:\n- Add task [task]\n- Show tasks\n- Delete task [task]\n- Set reminder for [task]";

const FALLBACK_REPLY: &str =
    "Sorry, I didn't understand that. Try asking \"Help\" for a list of commands.";

/// Interpret one line of user input against the task store.
///
/// Total over all inputs: every path ends in a reply string, there is no
/// error case. Unrecognized input gets the canned fallback reply. Reminder
/// requests are acknowledged but nothing is scheduled or stored.
pub fn interpret(input: &str, store: &mut dyn TaskStore) -> String {
    let intent = Intent::parse(input);
    tracing::debug!("Classified input as {:?}", intent);

    match intent {
        Intent::AddTask { task: Some(task) } => {
            store.add_task(&task);
            format!("Task \"{}\" added!", task)
        }
        Intent::AddTask { task: None } => "Please provide a task to add.".to_string(),
        Intent::ListTasks => {
            let tasks = store.tasks();
            if tasks.is_empty() {
                "Here are your tasks:\nYou have no tasks yet.".to_string()
            } else {
                format!("Here are your tasks:\n{}", tasks.join("\n"))
            }
        }
        // The target must appear in the snapshot exactly as extracted,
        // lowercase and all, otherwise nothing is removed
        Intent::DeleteTask {
            target: Some(target),
        } if store.tasks().contains(&target) => {
            store.remove_task(&target);
            format!("Task \"{}\" deleted!", target)
        }
        Intent::DeleteTask { .. } => {
            "Could not find that task to delete. Please try again.".to_string()
        }
        Intent::SetReminder { about: Some(about) } => format!("Reminder set for: {}.", about),
        Intent::SetReminder { about: None } => {
            "Please specify what you want to be reminded about.".to_string()
        }
        Intent::Help => HELP_REPLY.to_string(),
        Intent::Unknown => FALLBACK_REPLY.to_string(),
    }
}
