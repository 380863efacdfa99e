use clap::Parser;

/// The generator is parameterless: input and output paths are fixed (see
/// the crate-root path constants). clap still provides `--help` and
/// `--version`, and rejects stray arguments.
#[derive(Parser, Debug)]
#[command(
    name = "funclist",
    version,
    about = "Generate the emcc export list and JS binding table from src/web.c"
)]
pub struct Args {}
