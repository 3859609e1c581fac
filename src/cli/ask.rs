use anyhow::{Result, bail};

use crate::chat::ChatSession;
use crate::core::AppConfig;
use crate::tasks::TaskList;

/// One-shot chat: run a single submission through a fresh session and
/// print the reply.
pub async fn run(message: &str) -> Result<()> {
    let config = AppConfig::default();
    let mut tasks = TaskList::new();
    let mut session = ChatSession::new(&config.greeting);

    match session.send(message, &mut tasks) {
        Some(reply) => println!("{}", reply),
        None => bail!("Message must not be empty"),
    }

    Ok(())
}
