//! Embeds the bundled word lists as `&[&str]` consts in `OUT_DIR`

use std::env;
use std::fmt::Write;
use std::fs;
use std::path::PathBuf;

/// A bundled list: source file, generated file, const name and doc line
struct Bundle {
    source: &'static str,
    generated: &'static str,
    name: &'static str,
    doc: &'static str,
}

const BUNDLES: [Bundle; 2] = [
    Bundle {
        source: "data/start.txt",
        generated: "start.rs",
        name: "START_WORDS",
        doc: "Candidate root words bundled with the game",
    },
    Bundle {
        source: "data/dictionary.txt",
        generated: "dictionary.rs",
        name: "DICTIONARY_WORDS",
        doc: "Bundled English dictionary",
    },
];

fn main() {
    let out_dir = PathBuf::from(env::var_os("OUT_DIR").expect("cargo sets OUT_DIR"));

    for bundle in &BUNDLES {
        println!("cargo:rerun-if-changed={}", bundle.source);

        let text = fs::read_to_string(bundle.source)
            .unwrap_or_else(|e| panic!("cannot read {}: {e}", bundle.source));
        let target = out_dir.join(bundle.generated);
        fs::write(&target, render(bundle, &text))
            .unwrap_or_else(|e| panic!("cannot write {}: {e}", target.display()));
    }
}

/// Render one list; entries are trimmed and blank lines dropped
fn render(bundle: &Bundle, text: &str) -> String {
    let entries: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let mut code = format!(
        "/// {doc}\npub const {name}: &[&str] = &[\n",
        doc = bundle.doc,
        name = bundle.name
    );
    for entry in &entries {
        let _ = writeln!(code, "    {entry:?},");
    }
    let _ = write!(
        code,
        "];\n\n/// Number of entries in `{name}`\npub const {name}_COUNT: usize = {count};\n",
        name = bundle.name,
        count = entries.len()
    );
    code
}
