//! CLI entrypoint for bulkquiz.

use bulkquiz::cli::{init_logging, run, Args};
use clap::{CommandFactory, Parser};

fn main() {
    // No args at all: show help
    if std::env::args().len() == 1 {
        let mut cmd = Args::command();
        let _ = cmd.print_help();
        std::process::exit(0);
    }

    let args = Args::parse();
    init_logging(args.verbose);
    std::process::exit(run(args));
}
