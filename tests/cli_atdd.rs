#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const STRONG_PAGE: &str = r#"
url = "https://shop.example/red-shoes"
target_keyword = "red shoes"
semantic_keywords = ["sneakers", "heels"]
title = "Red Shoes for Every Occasion | Shop Example"
meta_description = "Find red shoes for work, weekends and weddings. Free shipping on every order over fifty dollars, free returns within thirty days."
h1 = "Red Shoes"
content = """
## Why red shoes
Red shoes pair well with sneakers and heels. Red shoes stand out. Red shoes last.
## FAQ
See [sizing](/sizing), [care](/care) and [returns](/returns). More heels and sneakers.
"""
word_count = 900
"#;

const WEAK_PAGE: &str = r#"
target_keyword = "red shoes"
semantic_keywords = ["sneakers", "heels", "boots", "flats", "pumps"]
title = "Shoes"
content = "We sell shoes."
"#;

fn seoscore(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("seoscore").expect("binary should compile");
    cmd.env("HOME", home).env_remove("RUST_LOG");
    cmd
}

fn write_page(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("page should write");
    path
}

#[test]
fn score_strong_page_exits_success_with_markdown() {
    let dir = TempDir::new().expect("temp dir should be created");
    let page = write_page(&dir, "page.toml", STRONG_PAGE);

    seoscore(dir.path())
        .arg("score")
        .arg(&page)
        .arg("--config-dir")
        .arg(dir.path())
        .assert()
        .code(0)
        .stdout(predicate::str::contains("# SEO Content Report"))
        .stdout(predicate::str::contains("Score: 100/100"));
}

#[test]
fn score_weak_page_is_blocking_below_fail_under() {
    let dir = TempDir::new().expect("temp dir should be created");
    let page = write_page(&dir, "page.toml", WEAK_PAGE);

    seoscore(dir.path())
        .arg("score")
        .arg(&page)
        .arg("--config-dir")
        .arg(dir.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("below fail_under 40"));
}

#[test]
fn score_uses_configured_thresholds_and_format() {
    let dir = TempDir::new().expect("temp dir should be created");
    let page = write_page(&dir, "page.toml", WEAK_PAGE);
    fs::write(
        dir.path().join("seoscore.toml"),
        r#"
[report]
format = "json"

[thresholds]
fail_under = 0
warn_under = 90
"#,
    )
    .expect("config should write");

    seoscore(dir.path())
        .arg("score")
        .arg(&page)
        .arg("--config-dir")
        .arg(dir.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("\"percentage\""))
        .stderr(predicate::str::contains("below warn_under 90"));
}

#[test]
fn score_sarif_reports_failing_checks() {
    let dir = TempDir::new().expect("temp dir should be created");
    let page = write_page(&dir, "page.toml", WEAK_PAGE);

    seoscore(dir.path())
        .arg("score")
        .arg(&page)
        .arg("--format")
        .arg("sarif")
        .arg("--config-dir")
        .arg(dir.path())
        .assert()
        .code(2)
        .stdout(predicate::str::contains("\"version\": \"2.1.0\""))
        .stdout(predicate::str::contains("rec.title"));
}

#[test]
fn score_reads_json_from_stdin() {
    let dir = TempDir::new().expect("temp dir should be created");

    seoscore(dir.path())
        .args(["score", "-", "--format", "json", "--config-dir"])
        .arg(dir.path())
        .write_stdin(r#"{"target_keyword": "red shoes", "content": "red shoes"}"#)
        .assert()
        .code(2)
        .stdout(predicate::str::contains("\"target_keyword\": \"red shoes\""));
}

#[test]
fn score_reports_missing_input_as_runtime_failure() {
    let dir = TempDir::new().expect("temp dir should be created");

    seoscore(dir.path())
        .arg("score")
        .arg(dir.path().join("absent.toml"))
        .assert()
        .code(3)
        .stderr(predicate::str::contains("input file not found"));
}

#[test]
fn score_rejects_blank_target_keyword() {
    let dir = TempDir::new().expect("temp dir should be created");
    let page = write_page(&dir, "page.json", r#"{"target_keyword": "  "}"#);

    seoscore(dir.path())
        .arg("score")
        .arg(&page)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("target_keyword must not be empty"));
}

#[test]
fn score_rejects_invalid_config() {
    let dir = TempDir::new().expect("temp dir should be created");
    let page = write_page(&dir, "page.toml", STRONG_PAGE);
    fs::write(
        dir.path().join("seoscore.toml"),
        "[thresholds]\nfail_under = 80\nwarn_under = 10\n",
    )
    .expect("config should write");

    seoscore(dir.path())
        .arg("score")
        .arg(&page)
        .arg("--config-dir")
        .arg(dir.path())
        .assert()
        .code(3)
        .stderr(predicate::str::contains("config parse error"));
}

#[test]
fn keywords_lists_target_first_with_status() {
    let dir = TempDir::new().expect("temp dir should be created");
    let page = write_page(&dir, "page.toml", WEAK_PAGE);

    seoscore(dir.path())
        .arg("keywords")
        .arg(&page)
        .assert()
        .code(0)
        .stdout(predicate::str::contains(
            "- red shoes (target): 0 (recommended 5-9) [missing]",
        ))
        .stdout(predicate::str::contains("covered: 0, needs work: 0, missing: 6"));
}

#[test]
fn suggest_lists_quick_wins_and_gaps() {
    let dir = TempDir::new().expect("temp dir should be created");
    let page = write_page(&dir, "page.toml", WEAK_PAGE);

    seoscore(dir.path())
        .arg("suggest")
        .arg(&page)
        .arg("--config-dir")
        .arg(dir.path())
        .assert()
        .code(0)
        .stdout(predicate::str::contains("quick wins:"))
        .stdout(predicate::str::contains("Add internal links"))
        .stdout(predicate::str::contains("gap.missing_keywords"))
        .stdout(predicate::str::contains("and 2 more"));
}

#[test]
fn suggest_min_priority_hides_lower_items() {
    let dir = TempDir::new().expect("temp dir should be created");
    let page = write_page(&dir, "page.toml", WEAK_PAGE);

    seoscore(dir.path())
        .arg("suggest")
        .arg(&page)
        .arg("--min-priority")
        .arg("high")
        .arg("--config-dir")
        .arg(dir.path())
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Expand the content"))
        .stdout(predicate::str::contains("Add internal links").not())
        .stdout(predicate::str::contains("Add an FAQ section").not());
}

#[test]
fn lint_strong_page_has_no_findings() {
    let dir = TempDir::new().expect("temp dir should be created");
    let page = write_page(&dir, "page.toml", STRONG_PAGE);

    seoscore(dir.path())
        .arg("lint")
        .arg(&page)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("lint: no findings"));
}

#[test]
fn lint_weak_page_is_blocking() {
    let dir = TempDir::new().expect("temp dir should be created");
    let page = write_page(&dir, "page.toml", WEAK_PAGE);

    seoscore(dir.path())
        .arg("lint")
        .arg(&page)
        .assert()
        .code(2)
        .stdout(predicate::str::contains("[ERROR] rec.title"))
        .stdout(predicate::str::contains("[ERROR] rec.faq"));
}

#[test]
fn lint_warnings_only_exit_one() {
    let dir = TempDir::new().expect("temp dir should be created");
    let page = write_page(
        &dir,
        "page.toml",
        &STRONG_PAGE.replace(
            "title = \"Red Shoes for Every Occasion | Shop Example\"",
            "title = \"Red Shoes\"",
        ),
    );

    seoscore(dir.path())
        .arg("lint")
        .arg(&page)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("[WARN] rec.title"));
}
