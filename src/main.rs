mod cli;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use gitree::fs::RealFileSystem;
use gitree::tool::TreeTool;

use crate::cli::Cli;

#[tokio::main]
async fn main() -> ExitCode {
    // warn by default; RUST_LOG=debug shows filtering decisions
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .try_init()
        .ok();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("gitree: {err:#}");
            ExitCode::from(1)
        }
    }
}

async fn run(cli: Cli) -> Result<String> {
    if cli.schema {
        let definition = serde_json::to_string_pretty(&TreeTool::definition())?;
        return Ok(format!("{definition}\n"));
    }

    let tool = TreeTool::new(cli.base_dir);
    match cli.call {
        Some(raw) => {
            let args = serde_json::from_str(&raw).context("Invalid arguments")?;
            tool.execute(&RealFileSystem, &args).await
        }
        None => tool.execute_tree_args(&RealFileSystem, &cli.tree_args).await,
    }
}
