use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const DIFF: &str = "diff --git a/src/lib.rs b/src/lib.rs\r
index 1111111..2222222 100644\r
--- a/src/lib.rs\r
+++ b/src/lib.rs\r
@@ -10,3 +10,3 @@ fn parse()\r
 let a = 1;\r
-let b = a.unwrap();\r
+let b = a?;\r
@@ -40,2 +40,2 @@ fn render()\r
-println!(\"debug\");\r
+tracing::debug!(\"debug\");\r
";

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_diff-filter"))
        .args(args)
        .output()
        .expect("Failed to run diff-filter")
}

fn path_str(path: &Path) -> &str {
    path.to_str().unwrap()
}

struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new(input: &str) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        fs::write(dir.path().join("in.diff"), input).unwrap();
        Self { dir }
    }

    fn input(&self) -> std::path::PathBuf {
        self.dir.path().join("in.diff")
    }

    fn output(&self) -> std::path::PathBuf {
        self.dir.path().join("out.diff")
    }

    fn filter(&self, extra: &[&str]) -> Output {
        let input = self.input();
        let output = self.output();
        let mut args = vec!["-s", path_str(&input), "-d", path_str(&output)];
        args.extend_from_slice(extra);
        run(&args)
    }
}

#[test]
fn keeps_matching_hunk() {
    let ws = Workspace::new(DIFF);
    let out = ws.filter(&["-r", r"unwrap\(\)"]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

    let written = fs::read_to_string(ws.output()).unwrap();
    insta::assert_snapshot!(written, @r"
    diff --git a/src/lib.rs b/src/lib.rs
    index 1111111..2222222 100644
    --- a/src/lib.rs
    +++ b/src/lib.rs
    @@ -10,3 +10,3 @@ fn parse()
     let a = 1;
    -let b = a.unwrap();
    +let b = a?;
    ");
    assert!(!written.contains('\r'));
}

#[test]
fn inverse_keeps_other_hunks() {
    let ws = Workspace::new(DIFF);
    let out = ws.filter(&["--regex", r"unwrap\(\)", "--inverse"]);
    assert!(out.status.success());

    let written = fs::read_to_string(ws.output()).unwrap();
    assert_eq!(written.matches("diff --git").count(), 1);
    assert!(written.contains("@@ -40,2 +40,2 @@ fn render()\n"));
    assert!(!written.contains("unwrap"));
}

#[test]
fn pattern_does_not_search_hunk_header() {
    let ws = Workspace::new(DIFF);
    let out = ws.filter(&["-r", "fn render"]);
    assert!(out.status.success());

    // Blocks exist, so the file is created even though nothing survived
    assert_eq!(fs::read_to_string(ws.output()).unwrap(), "");
}

#[test]
fn no_diff_blocks_creates_no_output() {
    let ws = Workspace::new("just some text\nwithout any file diffs\n");
    let out = ws.filter(&["-r", "."]);
    assert!(out.status.success());
    assert!(!ws.output().exists());
}

#[test]
fn invalid_pattern_fails_before_io() {
    let ws = Workspace::new(DIFF);
    let out = ws.filter(&["-r", "(unclosed"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("Invalid hunk pattern '(unclosed'"));
    assert!(!ws.output().exists());
}

#[test]
fn missing_input_fails() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("missing.diff");
    let output = dir.path().join("out.diff");
    let out = run(&["-s", path_str(&input), "-d", path_str(&output), "-r", "x"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("Failed to read"));
}

#[test]
fn missing_pattern_is_usage_error() {
    let ws = Workspace::new(DIFF);
    let out = ws.filter(&[]);
    assert!(!out.status.success());
    assert!(!ws.output().exists());
}

#[test]
fn prints_completions() {
    let out = run(&["--completions", "bash"]);
    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stdout).contains("diff-filter"));
}

#[test]
fn prints_man_page() {
    let out = run(&["--man"]);
    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stdout).contains(".TH"));
}
