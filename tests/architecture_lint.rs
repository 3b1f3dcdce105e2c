//! Architecture enforcement lint - keeps browser bindings out of the core.
//!
//! The scroll and theme behaviors are written against the `dom` and
//! `storage` traits so they run natively in `cargo test`. Only `src/web.rs`
//! may talk to `web_sys` / `wasm_bindgen`; anything else would stop the
//! crate from building for the host target.

use std::fs;
use std::path::Path;
use walkdir::WalkDir;

const BROWSER_ONLY_PATTERNS: &[&str] = &["web_sys", "wasm_bindgen", "js_sys"];

/// Files allowed to reference browser bindings
const ALLOWED_FILES: &[&str] = &["src/web.rs"];

fn rust_sources() -> Vec<String> {
    WalkDir::new("src")
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().map_or(false, |ext| ext == "rs"))
        .map(|e| e.path().to_string_lossy().replace('\\', "/"))
        .collect()
}

#[test]
fn lint_core_has_no_browser_bindings() {
    let mut violations = Vec::new();

    for path in rust_sources() {
        if ALLOWED_FILES.contains(&path.as_str()) {
            continue;
        }
        let src = fs::read_to_string(&path).expect("read source file");
        for (line_no, line) in src.lines().enumerate() {
            let code = line.split("//").next().unwrap_or("");
            for pattern in BROWSER_ONLY_PATTERNS {
                if code.contains(pattern) {
                    violations.push(format!("{}:{}: {}", path, line_no + 1, line.trim()));
                }
            }
        }
    }

    assert!(
        violations.is_empty(),
        "Browser bindings outside src/web.rs:\n{}",
        violations.join("\n")
    );
}

#[test]
fn lint_web_module_is_wasm_gated() {
    let lib = fs::read_to_string("src/lib.rs").expect("read src/lib.rs");
    let gated = lib
        .lines()
        .collect::<Vec<_>>()
        .windows(2)
        .any(|w| w[0].contains("target_arch = \"wasm32\"") && w[1].trim() == "pub mod web;");

    assert!(
        gated,
        "src/lib.rs must declare `pub mod web;` under #[cfg(target_arch = \"wasm32\")]"
    );
    assert!(Path::new("src/web.rs").exists());
}
