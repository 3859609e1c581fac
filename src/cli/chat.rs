use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::chat::ChatSession;
use crate::core::AppConfig;
use crate::tasks::TaskList;

pub async fn run() -> Result<()> {
    let config = AppConfig::default();
    let mut rl = DefaultEditor::new().expect("Editor failed");

    // Tasks live for the life of the REPL, nothing is persisted
    let mut tasks = TaskList::new();
    let mut session = ChatSession::new(&config.greeting);

    println!("{}", config.greeting);

    loop {
        let readline = rl.readline(">>> ");
        match readline {
            Ok(line) => {
                // Blank lines are swallowed without a reply
                if let Some(reply) = session.send(&line, &mut tasks) {
                    println!("{}", reply);
                }
            }
            Err(ReadlineError::Interrupted) => break,
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }

    Ok(())
}
