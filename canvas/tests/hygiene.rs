//! Hygiene: source-level budgets for the engine crate.
//!
//! Scans `src/` (test files excluded) for constructs that crash the page or
//! swallow errors. Each pattern has a budget; the budget never grows.

use std::fs;
use std::path::Path;

struct Budget {
    label: &'static str,
    pattern: &'static str,
    max: usize,
}

// A panic inside the wasm module takes the whole view down with it.
const UNWRAP: Budget = Budget { label: ".unwrap()", pattern: ".unwrap()", max: 0 };
const EXPECT: Budget = Budget { label: ".expect()", pattern: ".expect(", max: 0 };
const PANIC: Budget = Budget { label: "panic!()", pattern: "panic!(", max: 0 };
const UNREACHABLE: Budget = Budget { label: "unreachable!()", pattern: "unreachable!(", max: 0 };
const TODO: Budget = Budget { label: "todo!()", pattern: "todo!(", max: 0 };
const UNIMPLEMENTED: Budget = Budget { label: "unimplemented!()", pattern: "unimplemented!(", max: 0 };

// Errors must be logged or returned.
const SILENT_DISCARD: Budget = Budget { label: "let _ =", pattern: "let _ =", max: 0 };
const DOT_OK: Budget = Budget { label: ".ok()", pattern: ".ok()", max: 0 };

// Output goes through the `log` facade.
const PRINTLN: Budget = Budget { label: "println!()", pattern: "println!(", max: 0 };
const EPRINTLN: Budget = Budget { label: "eprintln!()", pattern: "eprintln!(", max: 0 };

const ALLOW_DEAD_CODE: Budget = Budget { label: "#[allow(dead_code)]", pattern: "#[allow(dead_code)]", max: 0 };

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

fn check(budget: &Budget) {
    let files = source_files();
    assert!(!files.is_empty(), "no sources found under src/");

    let hits: Vec<(String, usize)> = files
        .iter()
        .map(|f| (f.path.clone(), f.content.lines().filter(|l| l.contains(budget.pattern)).count()))
        .filter(|(_, n)| *n > 0)
        .collect();
    let found: usize = hits.iter().map(|(_, n)| n).sum();
    let listing = hits.iter().map(|(p, n)| format!("  {p}: {n}")).collect::<Vec<_>>().join("\n");

    assert!(
        found <= budget.max,
        "{} budget exceeded: found {found}, max {}.\n{listing}",
        budget.label,
        budget.max
    );
}

#[test]
fn unwrap_budget() {
    check(&UNWRAP);
}

#[test]
fn expect_budget() {
    check(&EXPECT);
}

#[test]
fn panic_budget() {
    check(&PANIC);
}

#[test]
fn unreachable_budget() {
    check(&UNREACHABLE);
}

#[test]
fn todo_budget() {
    check(&TODO);
}

#[test]
fn unimplemented_budget() {
    check(&UNIMPLEMENTED);
}

#[test]
fn silent_discard_budget() {
    check(&SILENT_DISCARD);
}

#[test]
fn dot_ok_budget() {
    check(&DOT_OK);
}

#[test]
fn print_budget() {
    check(&PRINTLN);
    check(&EPRINTLN);
}

#[test]
fn allow_dead_code_budget() {
    check(&ALLOW_DEAD_CODE);
}
