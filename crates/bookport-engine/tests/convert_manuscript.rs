use bookport_engine::{RuleSet, convert_manuscript};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_source(source_dir: &Path, filename: &str, content: &str) {
    fs::write(source_dir.join(filename), content).unwrap();
}

#[test]
fn converts_a_manuscript_directory_end_to_end() {
    let root = TempDir::new().unwrap();
    let source_dir = root.path().join("manuscript");
    let output_dir = root.path().join("manuscript2");
    fs::create_dir(&source_dir).unwrap();

    write_source(
        &source_dir,
        "chapter1.md",
        "# Chapter 1\n\nT> Remember this.\nMore text.\n",
    );
    write_source(&source_dir, "chapter2.md", "W> Careful.\n\nE> Failed.\n");
    write_source(&source_dir, "index.md", "I> Home page, never converted.\n");
    write_source(&source_dir, "cover.png", "not markdown");

    convert_manuscript(&source_dir, &output_dir, &RuleSet::default()).unwrap();

    // Only the eligible chapters appear in the output
    let mut outputs: Vec<String> = fs::read_dir(&output_dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    outputs.sort();
    assert_eq!(outputs, vec!["chapter1.md", "chapter2.md"]);

    let chapter1 = fs::read_to_string(output_dir.join("chapter1.md")).unwrap();
    assert_eq!(
        chapter1,
        "# Chapter 1\n\n!!! tip\n\n    Remember this.\nMore text.\n"
    );

    let chapter2 = fs::read_to_string(output_dir.join("chapter2.md")).unwrap();
    assert_eq!(chapter2, "!!! warning\n\n    Careful.\n\n!!! warning\n\n    Failed.\n");
}

#[test]
fn creates_the_output_directory_when_missing() {
    let root = TempDir::new().unwrap();
    let source_dir = root.path().join("manuscript");
    let output_dir = root.path().join("deeply").join("nested").join("out");
    fs::create_dir(&source_dir).unwrap();
    write_source(&source_dir, "chapter1.md", "I> Fact.\n");

    convert_manuscript(&source_dir, &output_dir, &RuleSet::default()).unwrap();

    assert!(output_dir.is_dir());
    assert!(output_dir.join("chapter1.md").exists());
}

#[test]
fn running_twice_produces_identical_output_files() {
    let root = TempDir::new().unwrap();
    let source_dir = root.path().join("manuscript");
    let output_dir = root.path().join("manuscript2");
    fs::create_dir(&source_dir).unwrap();
    write_source(
        &source_dir,
        "chapter1.md",
        "I> One.\nT> Two.\nQ> A question?\n",
    );

    convert_manuscript(&source_dir, &output_dir, &RuleSet::default()).unwrap();
    let first = fs::read(output_dir.join("chapter1.md")).unwrap();

    convert_manuscript(&source_dir, &output_dir, &RuleSet::default()).unwrap();
    let second = fs::read(output_dir.join("chapter1.md")).unwrap();

    assert_eq!(first, second);
}

#[test]
fn overwrites_stale_output_from_a_previous_run() {
    let root = TempDir::new().unwrap();
    let source_dir = root.path().join("manuscript");
    let output_dir = root.path().join("manuscript2");
    fs::create_dir(&source_dir).unwrap();
    fs::create_dir(&output_dir).unwrap();
    write_source(&source_dir, "chapter1.md", "T> Fresh tip.\n");
    fs::write(output_dir.join("chapter1.md"), "stale content").unwrap();

    convert_manuscript(&source_dir, &output_dir, &RuleSet::default()).unwrap();

    let chapter1 = fs::read_to_string(output_dir.join("chapter1.md")).unwrap();
    assert_eq!(chapter1, "!!! tip\n\n    Fresh tip.\n");
}

#[test]
fn missing_source_directory_aborts_the_run() {
    let root = TempDir::new().unwrap();
    let source_dir = root.path().join("does-not-exist");
    let output_dir = root.path().join("manuscript2");

    let result = convert_manuscript(&source_dir, &output_dir, &RuleSet::default());

    assert!(result.is_err());
}
