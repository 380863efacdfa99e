use std::process;

use clap::Parser;

use funclist::cli::Args;

fn main() {
    let _args = Args::parse();
    match funclist::run() {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e:#}");
            process::exit(1);
        }
    }
}
