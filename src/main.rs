//! orgfolders - browse an organization's folders page by page

use clap::{CommandFactory, Parser};

mod cli;
mod config;
mod error;
mod folders;
mod models;
mod output;
mod source;

use cli::{Cli, Commands, GlobalOptions, OrgCommands, TokenCommands};
use error::Result;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::List => cli::folder::list(&opts),
        Commands::Page { pagination, token } => {
            cli::folder::page(&opts, &pagination, token.as_deref())
        }
        Commands::Iterate { pagination } => cli::folder::iterate(&opts, &pagination),
        Commands::Sample { size, output } => cli::sample::run(&opts, size, output.as_deref()),
        Commands::Token(token_cmd) => match token_cmd {
            TokenCommands::Encode { offset } => cli::token::encode(&opts, offset),
            TokenCommands::Decode { token } => cli::token::decode(&opts, &token),
        },
        Commands::Org(org_cmd) => match org_cmd {
            OrgCommands::Set { org_id } => cli::org::set(&opts, org_id),
            OrgCommands::Get => cli::org::get(&opts),
        },
        Commands::Status => cli::status::run(&opts),
        Commands::Version => {
            println!("orgfolders version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Completion { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
            Ok(())
        }
    }
}

/// `RUST_LOG` wins over `--debug` when both are set.
fn init_logging(debug: bool) {
    let default_filter = if debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}
