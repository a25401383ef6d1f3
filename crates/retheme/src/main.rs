use clap::Parser;
use console::style;

use retheme::Cli;

fn main() {
    if let Err(err) = Cli::parse().run() {
        eprintln!("{} {:#}", style("error:").red().bold(), err);
        std::process::exit(1);
    }
}
