use clap::Parser;
use std::io::{self, IsTerminal};
use std::process;

mod cli;
mod shift;

use cli::Cli;

fn main() {
    let cli = Cli::parse();
    let use_color = !cli.no_color && io::stdout().is_terminal();

    if let Err(e) = shift::handle_shift(cli, use_color) {
        eprintln!("Error: {e:#}");
        process::exit(2);
    }
}
