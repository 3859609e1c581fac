use anyhow::Result;
use taskbot::cli;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run().await
}
