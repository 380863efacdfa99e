pub mod cli;
pub mod emit;
pub mod extract;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Fixed paths, relative to the project root the generator runs in.
pub const SOURCE_PATH: &str = "src/web.c";
pub const EXPORT_LIST_PATH: &str = "emcc_funclist.txt";
pub const BINDING_TABLE_PATH: &str = "js_funclist.txt";

/// Run the generator against the fixed paths. Returns the exit code:
/// 0 on success; I/O failures propagate as errors.
pub fn run() -> Result<i32> {
    generate(
        Path::new(SOURCE_PATH),
        Path::new(EXPORT_LIST_PATH),
        Path::new(BINDING_TABLE_PATH),
    )?;
    Ok(0)
}

/// Read `source`, extract the exported names, and write both artifacts.
/// Output files are created or truncated. A failure on any step aborts the
/// run with the offending path in the error chain.
pub fn generate(source: &Path, export_list: &Path, binding_table: &Path) -> Result<()> {
    let text = fs::read_to_string(source)
        .with_context(|| format!("failed to read {}", source.display()))?;
    let names = extract::exported_names(&text)?;
    fs::write(export_list, emit::export_list(&names))
        .with_context(|| format!("failed to write {}", export_list.display()))?;
    fs::write(binding_table, emit::binding_table(&names))
        .with_context(|| format!("failed to write {}", binding_table.display()))?;
    Ok(())
}
