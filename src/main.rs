use clap::Parser;

use ws_guard::cli::Cli;
use ws_guard::commands::run_check;
use ws_guard::logging;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    let exit_code = run_check(&cli);

    std::process::exit(exit_code);
}
