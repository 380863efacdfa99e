//! Renderers for the two generated artifacts.

use std::fmt::Write as FmtWrite;

/// `-sEXPORTED_FUNCTIONS=` linker argument for emcc. Each name gets an
/// underscore prefix (the C symbol name on the wasm side). With zero names
/// this degenerates to a single trailing underscore, which emcc accepts.
pub fn export_list(names: &[String]) -> String {
    let mut out = String::from("-sEXPORTED_FUNCTIONS=_");
    out.push_str(&names.join(",_"));
    out.push('\n');
    out
}

/// JS binding table consumed verbatim by the loader. Every entry carries
/// the same `"number"` signature triple; the exported C entry points all
/// take and return ints.
pub fn binding_table(names: &[String]) -> String {
    let mut out = String::from("const FUNCLIST = [\n");
    for name in names {
        let _ = writeln!(out, "    [\"{name}\", \"number\", [\"number\"]],");
    }
    out.push_str("];\n");
    out
}
