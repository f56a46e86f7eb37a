use clap::Parser;
use idsprep_core::cli::report::FetchReport;
use idsprep_core::cli::{setup_logging, FetchCli};
use idsprep_core::{selection, SelectionCriteria};
use log::error;
use std::process;

fn main() {
    let cli = match FetchCli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // wrong argument count or bad flags: usage, exit 1 (help/version exit 0)
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            process::exit(code);
        }
    };

    setup_logging(cli.verbose);

    // configuration errors are fatal before any directory work begins
    let criteria = match SelectionCriteria::parse(&cli.detector, &cli.obstype, &cli.date) {
        Ok(criteria) => criteria,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    match selection::run(&cli.source, &cli.dest, &criteria) {
        Ok(summary) => {
            println!("{}", FetchReport::new(&summary));
        }
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
