use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod serve;
pub mod suggest;

#[derive(Subcommand)]
enum Command {
    /// Run the API server
    Serve {
        /// Set the server host address
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Set the server port
        #[arg(long, default_value = "5000")]
        port: String,
    },
    /// Rank free slots for a request payload without running the server
    Suggest {
        /// Path to a JSON file containing the request payload
        #[arg(long)]
        input: String,

        /// Override the model weights path from the environment
        #[arg(long)]
        model: Option<String>,
    },
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

pub async fn run() -> Result<()> {
    let args = Cli::parse();

    // Handle each sub command
    match args.command {
        Some(Command::Serve { host, port }) => {
            serve::run(host, port).await;
        }
        Some(Command::Suggest { input, model }) => {
            suggest::run(&input, model.as_deref())?;
        }
        None => {}
    }

    Ok(())
}
