use anyhow::Result;
use clap::Parser;

mod args;

use args::{Cli, Commands};
use cli::commands::{call, describe, list};
use cli::{load_runtime, logging};

fn main() -> Result<()> {
    logging::set_up_logging();
    let cli = Cli::parse();

    let runtime = load_runtime(cli.config.as_deref())?;
    let mut out = std::io::stdout().lock();

    match &cli.command {
        Commands::List => list::list_functions(&runtime, &mut out),
        Commands::Describe { name } => {
            describe::describe_function(&runtime, name, cli.json, &mut out)
        }
        Commands::Call { name, args } => {
            call::call_function(&runtime, name, args, cli.json, &mut out)
        }
    }
}
