use clap::Parser;
use idsprep_core::cli::{setup_logging, StatCli};
use idsprep_core::stats::{self, ImstatCommand};
use log::error;
use std::process;

fn main() {
    let cli = match StatCli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            process::exit(code);
        }
    };

    setup_logging(cli.verbose);

    let root = match std::env::current_dir() {
        Ok(root) => root,
        Err(e) => {
            eprintln!("Error: cannot determine working directory: {}", e);
            process::exit(1);
        }
    };

    let command = ImstatCommand::new(cli.command);
    if let Err(e) = stats::run(&root, &command) {
        error!("{}", e);
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
