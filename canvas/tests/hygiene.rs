//! Hygiene: source-level rules for the canvas crate, checked at test time.
//!
//! Each rule scans production `.rs` files under `src/` (sibling `*_test.rs`
//! files are exempt) and fails when a pattern appears more often than its
//! budget allows. Budgets only ratchet down.

use std::fs;
use std::path::Path;

struct Rule {
    pattern: &'static str,
    budget: usize,
    why: &'static str,
}

const RULES: &[Rule] = &[
    // Panics.
    Rule { pattern: ".unwrap()", budget: 0, why: "propagate or handle the error" },
    Rule { pattern: ".expect(", budget: 0, why: "propagate or handle the error" },
    Rule { pattern: "panic!(", budget: 0, why: "the engine must never abort the host" },
    Rule { pattern: "unreachable!(", budget: 0, why: "restructure the match instead" },
    Rule { pattern: "todo!(", budget: 0, why: "finish the stub" },
    Rule { pattern: "unimplemented!(", budget: 0, why: "finish the stub" },
    // Silent loss.
    Rule { pattern: "let _ =", budget: 0, why: "inspect the value or log it" },
    Rule { pattern: ".ok()", budget: 0, why: "match on the error instead of dropping it" },
    Rule { pattern: "Err(_) => None", budget: 0, why: "log the error before discarding it" },
    // Output goes through tracing.
    Rule { pattern: "println!(", budget: 0, why: "use tracing" },
    Rule { pattern: "eprintln!(", budget: 0, why: "use tracing" },
    Rule { pattern: "dbg!(", budget: 0, why: "leftover debugging" },
    // Structure.
    Rule { pattern: "#[allow(dead_code)]", budget: 0, why: "delete the dead code" },
];

struct SourceFile {
    path: String,
    content: String,
}

fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
            continue;
        }
        let path_str = path.to_string_lossy().to_string();
        if !path_str.ends_with(".rs") || path_str.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path: path_str, content });
        }
    }
}

fn hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

#[test]
fn source_tree_is_found() {
    let files = source_files();
    assert!(files.iter().any(|f| f.path.ends_with("engine.rs")), "run from the canvas crate root");
}

#[test]
fn every_rule_within_budget() {
    let files = source_files();
    let mut failures = Vec::new();
    for rule in RULES {
        let found = hits(&files, rule.pattern);
        let count: usize = found.iter().map(|(_, c)| c).sum();
        if count > rule.budget {
            let detail = found.iter().map(|(path, c)| format!("    {path}: {c}")).collect::<Vec<_>>().join("\n");
            failures.push(format!("`{}`: found {count}, max {} ({})\n{detail}", rule.pattern, rule.budget, rule.why));
        }
    }
    assert!(failures.is_empty(), "hygiene budget exceeded:\n{}", failures.join("\n"));
}

#[test]
fn every_module_keeps_tests_in_a_sibling_file() {
    let files = source_files();
    let missing: Vec<&str> = files
        .iter()
        .filter(|f| !f.path.ends_with("lib.rs") && !f.path.ends_with("consts.rs"))
        .filter(|f| !f.content.contains("_test.rs\"]"))
        .map(|f| f.path.as_str())
        .collect();
    assert!(missing.is_empty(), "modules without a sibling test file: {missing:?}");
}
