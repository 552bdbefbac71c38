//! Integration tests for wordlist contents and ordering.

use assert_cmd::Command;
use similar_asserts::assert_eq;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

#[test]
fn recursive_listing_has_one_line_per_entry() {
    let fixture = TestTree::new();
    let out = TempDir::new().expect("temp out");
    let lines = run_wordlist(fixture.root(), &out, &[]);

    let unique: HashSet<&String> = lines.iter().collect();
    assert_eq!(unique.len(), lines.len());

    let mut files: Vec<&str> =
        lines.iter().filter(|l| !l.ends_with('/')).map(String::as_str).collect();
    files.sort_unstable();
    assert_eq!(
        files,
        vec!["/Cargo.toml", "/README.md", "/docs/guide.md", "/src/cli/mod.rs", "/src/lib.rs"]
    );

    let mut dirs: Vec<&str> =
        lines.iter().filter(|l| l.ends_with('/')).map(String::as_str).collect();
    dirs.sort_unstable();
    assert_eq!(dirs, vec!["/docs/", "/src/", "/src/cli/"]);
}

#[test]
fn depth_order_puts_files_before_directories() {
    let fixture = TestTree::new();
    let out = TempDir::new().expect("temp out");
    let lines = run_wordlist(fixture.root(), &out, &[]);

    assert_eq!(
        lines,
        vec![
            "/Cargo.toml".to_string(),
            "/README.md".to_string(),
            "/docs/guide.md".to_string(),
            "/src/lib.rs".to_string(),
            "/src/cli/mod.rs".to_string(),
            "/docs/".to_string(),
            "/src/".to_string(),
            "/src/cli/".to_string(),
        ]
    );
}

#[test]
fn non_recursive_lists_only_children() {
    let fixture = TestTree::new();
    let out = TempDir::new().expect("temp out");
    let lines = run_wordlist(fixture.root(), &out, &["--non-recursive"]);

    assert_eq!(
        lines,
        vec![
            "/Cargo.toml".to_string(),
            "/README.md".to_string(),
            "/docs/".to_string(),
            "/src/".to_string(),
        ]
    );
}

#[test]
fn alpha_sort_from_config_file() {
    let fixture = TestTree::new();
    let out = TempDir::new().expect("temp out");
    fs::write(out.path().join("repo-wordlist.toml"), "sort = \"alpha\"\n").expect("config");

    let lines = run_wordlist(fixture.root(), &out, &[]);
    assert_eq!(
        lines,
        vec![
            "/Cargo.toml".to_string(),
            "/README.md".to_string(),
            "/docs/guide.md".to_string(),
            "/src/cli/mod.rs".to_string(),
            "/src/lib.rs".to_string(),
            "/docs/".to_string(),
            "/src/".to_string(),
            "/src/cli/".to_string(),
        ]
    );
}

#[test]
fn cli_sort_overrides_config_file() {
    let fixture = TestTree::new();
    let out = TempDir::new().expect("temp out");
    fs::write(out.path().join("repo-wordlist.toml"), "sort = \"alpha\"\n").expect("config");

    let lines = run_wordlist(fixture.root(), &out, &["--sort", "depth"]);
    assert_eq!(lines[3], "/src/lib.rs");
    assert_eq!(lines[4], "/src/cli/mod.rs");
}

#[test]
fn output_round_trips_through_file() {
    let fixture = TestTree::new();
    let out = TempDir::new().expect("temp out");
    let lines = run_wordlist(fixture.root(), &out, &[]);

    let raw = fs::read_to_string(out.path().join("paths.txt")).expect("read output");
    let rebuilt: String = lines.iter().map(|l| format!("{l}\n")).collect();
    assert_eq!(raw, rebuilt);
}

/// Runs the binary from `out` with `-o paths.txt` and returns the written lines.
fn run_wordlist(source: &Path, out: &TempDir, extra: &[&str]) -> Vec<String> {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("repo-wordlist"));
    cmd.current_dir(out.path());
    cmd.arg(source).args(["-o", "paths.txt", "--quiet"]).args(extra);
    cmd.assert().success();

    fs::read_to_string(out.path().join("paths.txt"))
        .expect("read output")
        .lines()
        .map(str::to_string)
        .collect()
}

struct TestTree {
    dir: TempDir,
}

impl TestTree {
    fn new() -> Self {
        let dir = TempDir::new().expect("temp tree");
        let root = dir.path();
        write(root.join("Cargo.toml"), "[package]\nname = \"fixture\"\n");
        write(root.join("README.md"), "# Fixture\n");
        write(root.join("src/lib.rs"), "pub mod cli;\n");
        write(root.join("src/cli/mod.rs"), "pub fn run() {}\n");
        write(root.join("docs/guide.md"), "Guide\n");
        Self { dir }
    }

    fn root(&self) -> &Path {
        self.dir.path()
    }
}

fn write(path: PathBuf, contents: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent");
    }
    fs::write(path, contents).expect("write fixture file");
}
