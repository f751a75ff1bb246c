use predicates::prelude::*;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

fn cmd() -> assert_cmd::Command {
    assert_cmd::Command::from(Command::new(env!("CARGO_BIN_EXE_adoc-prep")))
}

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn read(root: &Path, rel: &str) -> String {
    fs::read_to_string(root.join(rel)).unwrap()
}

/// Run the tool in `root`, answering the prompt with `answer`.
fn run(root: &Path, args: &[&str], answer: &str) -> String {
    let assert = cmd()
        .current_dir(root)
        .args(args)
        .write_stdin(answer)
        .assert()
        .success();
    String::from_utf8(assert.get_output().stdout.clone()).unwrap()
}

const PROCEDURE: &str = "\
:system-module-type: PROCEDURE
[id=\"proc-install_{context}\"]
= Installing the widget

You can install the widget from the command line.

.Procedure
. Run `widget install`.

.Additional resources
* xref:about.adoc[About the widget]
";

const LIST_FIRST: &str = "\
[id=\"ref-options_{context}\"]
= Widget options

* `--fast`
* `--slow`
";

const UNTITLED: &str = "\
// Snippet without a title
The widget is blue.
";

fn sample_tree() -> TempDir {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write(root, "master.adoc", "= Guide\n\ninclude::modules/proc-install.adoc[]\n");
    write(root, "modules/proc-install.adoc", PROCEDURE);
    write(root, "modules/ref-options.adoc", LIST_FIRST);
    write(root, "snippets/untitled.adoc", UNTITLED);
    write(root, ".git/hidden.adoc", "Hidden prose.\n");
    write(root, "notes.txt", "Not a document.\n");
    dir
}

#[test]
fn cli_fixes_and_reports() {
    let dir = sample_tree();
    let root = dir.path();
    let out = run(root, &[], "Y\n");

    assert_eq!(
        read(root, "modules/proc-install.adoc"),
        "\
:_module-type: PROCEDURE
[id=\"proc-install_{context}\"]
= Installing the widget

[role=\"_abstract\"]
You can install the widget from the command line.

.Procedure
. Run `widget install`.

[role=\"_additional-resources\"]
.Additional resources
* xref:about.adoc[About the widget]
"
    );
    assert_eq!(read(root, "modules/ref-options.adoc"), LIST_FIRST);
    assert_eq!(
        read(root, "snippets/untitled.adoc"),
        "// Snippet without a title\n[role=\"_abstract\"]\nThe widget is blue.\n"
    );

    assert!(out.contains("Processing ...."), "Got: {out}");
    assert!(out.contains("Processing ./modules..."), "Got: {out}");
    assert!(!out.contains(".git"), "Got: {out}");

    let title_section = out
        .split("Files missing a title:")
        .nth(1)
        .unwrap()
        .split("Files missing an abstract:")
        .next()
        .unwrap();
    assert!(title_section.contains("untitled.adoc"), "Got: {out}");
    assert!(!title_section.contains("ref-options.adoc"), "Got: {out}");
    assert!(title_section.contains("Total: 1"), "Got: {out}");

    let abstract_section = out.split("Files missing an abstract:").nth(1).unwrap();
    assert!(abstract_section.contains("ref-options.adoc"), "Got: {out}");
    assert!(!abstract_section.contains("proc-install.adoc"), "Got: {out}");
    assert!(abstract_section.contains("Total: 1"), "Got: {out}");
}

#[test]
fn cli_reports_absolute_paths() {
    let dir = sample_tree();
    let root = fs::canonicalize(dir.path()).unwrap();
    let out = run(&root, &[], "y\n");
    let expected = root.join("modules").join("ref-options.adoc");
    assert!(
        out.contains(&format!("    {}\n", expected.display())),
        "Got: {out}"
    );
}

#[test]
fn cli_leaves_aggregator_and_hidden_dirs() {
    let dir = sample_tree();
    let root = dir.path();
    run(root, &[], "Y\n");
    assert_eq!(
        read(root, "master.adoc"),
        "= Guide\n\ninclude::modules/proc-install.adoc[]\n"
    );
    assert_eq!(read(root, ".git/hidden.adoc"), "Hidden prose.\n");
}

#[test]
fn cli_second_run_is_noop() {
    let dir = sample_tree();
    let root = dir.path();
    run(root, &[], "Y\n");
    let first = read(root, "modules/proc-install.adoc");
    let out = run(root, &[], "Y\n");
    assert_eq!(read(root, "modules/proc-install.adoc"), first);
    assert!(out.contains("Files missing an abstract:"), "Got: {out}");
}

#[test]
fn cli_dry_run_writes_nothing() {
    let dir = sample_tree();
    let root = dir.path();
    let dry = run(root, &["--no-op"], "Y\n");

    assert_eq!(read(root, "modules/proc-install.adoc"), PROCEDURE);
    assert_eq!(read(root, "modules/ref-options.adoc"), LIST_FIRST);
    assert_eq!(read(root, "snippets/untitled.adoc"), UNTITLED);

    // Same findings as a real run
    let real = run(root, &[], "Y\n");
    let report = |out: &str| out.split("Run complete.").nth(1).unwrap().to_string();
    assert_eq!(report(&dry), report(&real));
}

#[test]
fn cli_alternate_markers() {
    let dir = sample_tree();
    let root = dir.path();
    run(root, &["--alternate"], "Y\n");
    let doc = read(root, "modules/proc-install.adoc");
    assert!(doc.contains("[role=\"system__abstract\"]\nYou can install"));
    assert!(doc.contains("[role=\"system__additional-resources\"]\n.Additional resources"));
}

#[test]
fn cli_declined_prompt() {
    let dir = sample_tree();
    let root = dir.path();
    let out = run(root, &[], "N\n");
    assert!(out.contains("Proceed? (Y/N): "), "Got: {out}");
    assert!(!out.contains("Run complete."), "Got: {out}");
    assert_eq!(read(root, "modules/proc-install.adoc"), PROCEDURE);
}

#[test]
fn cli_closed_stdin() {
    let dir = sample_tree();
    let root = dir.path();
    let out = run(root, &[], "");
    assert!(!out.contains("Run complete."), "Got: {out}");
    assert_eq!(read(root, "snippets/untitled.adoc"), UNTITLED);
}

#[test]
fn cli_ignores_unknown_flags() {
    let dir = sample_tree();
    let root = dir.path();
    run(root, &["--frobnicate", "--no-op", "extra"], "Y\n");
    // --no-op after the unknown flag still applies
    assert_eq!(read(root, "modules/proc-install.adoc"), PROCEDURE);
}

#[test]
fn cli_banner() {
    let dir = TempDir::new().unwrap();
    cmd()
        .current_dir(dir.path())
        .write_stdin("N\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "==================================================\nMS3 Prep\n",
        ))
        .stdout(predicate::str::contains(
            "  4. Report all files missing a suitable abstract",
        ));
}

#[test]
fn cli_empty_tree() {
    let dir = TempDir::new().unwrap();
    let out = run(dir.path(), &[], "Y\n");
    assert!(out.contains("Files missing a title:\n\nTotal: 0"), "Got: {out}");
    assert!(out.contains("Files missing an abstract:\n\nTotal: 0"), "Got: {out}");
}

#[test]
fn cli_empty_document_not_reported_missing_abstract() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write(root, "empty.adoc", "");
    let out = run(root, &[], "Y\n");
    let abstract_section = out.split("Files missing an abstract:").nth(1).unwrap();
    assert!(!abstract_section.contains("empty.adoc"), "Got: {out}");
    assert_eq!(read(root, "empty.adoc"), "");
}

#[test]
fn cli_invalid_utf8_fails() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    fs::write(root.join("bad.adoc"), [0xff, 0xfe, b'\n']).unwrap();
    cmd()
        .current_dir(root)
        .write_stdin("Y\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"));
}
