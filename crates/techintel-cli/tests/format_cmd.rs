
use std::fs;

use fixtures::techintel;
use tempfile::tempdir;

#[test]
fn test_format_file_strips_markdown() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("notes.md");
    fs::write(
        &input,
        "**Radar** tech is *hot* now\n- Item one\n\n2. Second point\n",
    )
    .unwrap();

    techintel(dir.path())
        .arg("format")
        .arg(&input)
        .assert()
        .success()
        .stdout("Radar tech is hot now\n• Item one\n\n2. Second point\n");
}

#[test]
fn test_format_reads_stdin() {
    let dir = tempdir().unwrap();

    techintel(dir.path())
        .arg("format")
        .write_stdin("+ Hypersonic glide vehicles\n3. **Scramjet** inlets")
        .assert()
        .success()
        .stdout("• Hypersonic glide vehicles\n3. Scramjet inlets\n");
}

#[test]
fn test_format_missing_file_fails() {
    let dir = tempdir().unwrap();

    techintel(dir.path())
        .args(["format", "does-not-exist.md"])
        .assert()
        .failure();
}
