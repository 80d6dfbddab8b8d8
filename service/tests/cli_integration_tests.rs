//! End-to-end tests for the `vocabc` binary

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

const VOCABULARY: &str = "\
@prefix rdf: <http://www.w3.org/1999/02/22-rdf-syntax-ns#> .
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
@prefix schema: <https://schema.org/> .
schema:Thing a rdfs:Class .
schema:Person a rdfs:Class ; rdfs:subClassOf schema:Thing .
schema:A a rdfs:Class ; rdfs:subClassOf schema:B .
schema:B a rdfs:Class ; rdfs:subClassOf schema:A .
schema:name a rdf:Property ; schema:domainIncludes schema:Person ; schema:rangeIncludes schema:Text .
";

fn vocabc(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_vocabc"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("binary runs")
}

fn fixture(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("vocabulary.ttl");
    fs::write(&path, VOCABULARY).expect("write fixture");
    path
}

#[test]
fn test_generate_to_stdout() {
    let dir = TempDir::new().expect("temp dir");
    let input = fixture(&dir);

    let output = vocabc(&["-q", "generate", "--input", input.to_str().expect("utf-8 path")]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).expect("utf-8 output");
    assert!(stdout.contains("export interface Person extends JsonLdNode, Thing {"));
    assert!(stdout.contains("  \"name\"?: string | Array<string>;"));
    assert!(output.stderr.is_empty());
}

#[test]
fn test_generate_manifest_to_file() {
    let dir = TempDir::new().expect("temp dir");
    let input = fixture(&dir);
    let target = dir.path().join("out").join("vocabulary.json");

    let output = vocabc(&[
        "generate",
        "--input",
        input.to_str().expect("utf-8 path"),
        "--generator",
        "manifest",
        "--output",
        target.to_str().expect("utf-8 path"),
    ]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());

    let manifest: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&target).expect("output written"))
            .expect("valid JSON");
    let names: Vec<&str> = manifest["classes"]
        .as_array()
        .expect("classes array")
        .iter()
        .filter_map(|c| c["name"].as_str())
        .collect();
    assert_eq!(names, vec!["Thing", "Person", "A", "B"]);
}

#[test]
fn test_inspect_reports_cycles_as_json() {
    let dir = TempDir::new().expect("temp dir");
    let input = fixture(&dir);

    let output = vocabc(&["-q", "inspect", "--input", input.to_str().expect("utf-8 path"), "--json"]);
    assert!(output.status.success());

    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("valid JSON report");
    assert_eq!(report["classes"], 4);
    assert_eq!(report["properties"], 1);
    assert_eq!(report["unresolved_classes"], serde_json::json!(["A", "B"]));
}

#[test]
fn test_missing_input_fails() {
    let output = vocabc(&["-q", "generate", "--input", "/definitely/not/here.ttl"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_unknown_generator_fails() {
    let dir = TempDir::new().expect("temp dir");
    let input = fixture(&dir);

    let output = vocabc(&[
        "generate",
        "--input",
        input.to_str().expect("utf-8 path"),
        "--generator",
        "python",
    ]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unknown generator 'python'"));
}

#[test]
fn test_list_generators() {
    let output = vocabc(&["generators"]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("utf-8 output");
    assert!(stdout.starts_with("manifest"));
    assert!(stdout.contains("typescript   .ts"));
}
