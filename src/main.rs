use anyhow::Result;
use slotcast::cli;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run().await
}
