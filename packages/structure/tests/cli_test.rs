//! Command-line tests against the fixture decision.

use std::fs;
use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn test_structures_lists_catalogue() {
    let mut cmd = cargo_bin_cmd!("regelrecht-structure");
    cmd.arg("structures");

    cmd.assert().success().stdout(
        predicate::str::contains("title")
            .and(predicate::str::contains("subsection"))
            .and(predicate::str::contains("continuous"))
            .and(predicate::str::contains("say:hasPart")),
    );
}

#[test]
fn test_structures_rejects_unknown_type() {
    let mut cmd = cargo_bin_cmd!("regelrecht-structure");
    cmd.arg("structures").arg("--only").arg("paragraaf");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("paragraaf"));
}

#[test]
fn test_insert_writes_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("besluit.xml");

    let mut cmd = cargo_bin_cmd!("regelrecht-structure");
    cmd.arg("insert")
        .arg(fixture_path("besluit.xml"))
        .arg("article")
        .arg("--cursor")
        .arg("0/1/0/1/0")
        .arg("-o")
        .arg(&output);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Saved to:"));

    let written = fs::read_to_string(&output).unwrap();
    assert!(written.contains(r#"number="3""#));
    assert!(written.contains("http://data.lblod.info/articles/"));
}

#[test]
fn test_insert_without_position_changes_nothing() {
    let mut cmd = cargo_bin_cmd!("regelrecht-structure");
    cmd.arg("insert")
        .arg(fixture_path("besluit.xml"))
        .arg("subsection")
        .arg("--cursor")
        .arg("0/1/0/1/0");

    cmd.assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Nothing changed"));
}

#[test]
fn test_insert_rejects_bad_cursor() {
    let mut cmd = cargo_bin_cmd!("regelrecht-structure");
    cmd.arg("insert")
        .arg(fixture_path("besluit.xml"))
        .arg("article")
        .arg("--cursor")
        .arg("a/b");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_move_prints_document() {
    let mut cmd = cargo_bin_cmd!("regelrecht-structure");
    cmd.arg("move")
        .arg(fixture_path("besluit.xml"))
        .arg("http://data.lblod.info/articles/a1")
        .arg("down");

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("<doc>"));
}

#[test]
fn test_outline_reports_structures() {
    let mut cmd = cargo_bin_cmd!("regelrecht-structure");
    cmd.arg("outline").arg(fixture_path("besluit.xml"));

    cmd.assert().success().stdout(
        predicate::str::contains("type: chapter")
            .and(predicate::str::contains("http://data.lblod.info/articles/a2")),
    );
}

#[test]
fn test_triples_filters_by_predicate() {
    let mut cmd = cargo_bin_cmd!("regelrecht-structure");
    cmd.arg("triples")
        .arg(fixture_path("besluit.xml"))
        .arg("--predicate")
        .arg("say:hasPart");

    cmd.assert().success().stdout(
        predicate::str::contains("http://data.lblod.info/chapters/c1")
            .and(predicate::str::contains("eli/ontology#number").not()),
    );
}

#[test]
fn test_remove_unknown_resource_fails() {
    let mut cmd = cargo_bin_cmd!("regelrecht-structure");
    cmd.arg("remove")
        .arg(fixture_path("besluit.xml"))
        .arg("http://data.lblod.info/articles/onbekend");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("No node with resource"));
}
