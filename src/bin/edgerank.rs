use clap::Parser;
use colored::Colorize;
use edgerank_core::cli::{self, Cli};
use edgerank_core::exit::EdgeRankExit;
use edgerank_core::logging;

fn main() -> EdgeRankExit {
    let cli = Cli::parse();

    if let Err(e) = logging::init(&cli.log_level) {
        eprintln!("{} {}", "Error:".red(), e);
        return EdgeRankExit::InvalidInput;
    }

    let result = if let Some(cmd) = cli.command {
        cli::dispatch::execute(cmd, cli.config.as_deref())
    } else {
        use clap::CommandFactory;
        let _ = Cli::command().print_help();
        Ok(EdgeRankExit::Success)
    };

    match result {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red(), e);
            cli::dispatch::exit_for(&e)
        }
    }
}
