use assert_cmd::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

fn repo_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .and_then(|p| p.parent())
        .expect("expected crates/<name> layout")
        .to_path_buf()
}

fn fixture(name: &str) -> PathBuf {
    let path = repo_root().join("fixtures").join("taxonomy").join(name);
    assert!(path.exists(), "fixture missing: {}", path.display());
    path
}

#[test]
fn cli_renders_png_smoke() {
    let root = repo_root();
    let input = fixture("places.json");

    let tmp = tempfile::tempdir().expect("tempdir");
    let out = tmp.path().join("out.png");

    let exe = assert_cmd::cargo_bin!("taxoviz-cli");
    Command::new(exe)
        .current_dir(&root)
        .args([
            "render",
            "--format",
            "png",
            "--width",
            "320",
            "--height",
            "240",
            "--selected",
            "food",
            "--out",
            out.to_string_lossy().as_ref(),
            input.to_string_lossy().as_ref(),
        ])
        .assert()
        .success();

    let bytes = fs::read(&out).expect("read png");
    assert!(
        bytes.starts_with(b"\x89PNG\r\n\x1a\n"),
        "output is not a PNG"
    );

    let decoder = png::Decoder::new(std::io::Cursor::new(bytes));
    let reader = decoder.read_info().expect("png header");
    let info = reader.info();
    assert_eq!((info.width, info.height), (320, 240));
}

#[test]
fn cli_renders_png_with_default_out_path_for_file_input() {
    let root = repo_root();
    let input = fixture("abc.json");

    let tmp = tempfile::tempdir().expect("tempdir");
    let tmp_input = tmp.path().join("abc.json");
    fs::copy(&input, &tmp_input).expect("copy fixture");

    let expected_out = tmp_input.with_extension("png");

    let exe = assert_cmd::cargo_bin!("taxoviz-cli");
    Command::new(exe)
        .current_dir(&root)
        .args([
            "render",
            "--format",
            "png",
            tmp_input.to_string_lossy().as_ref(),
        ])
        .assert()
        .success();

    let bytes = fs::read(&expected_out).expect("read default png");
    assert!(bytes.starts_with(b"\x89PNG\r\n\x1a\n"));
}

#[test]
fn cli_prints_svg_to_stdout_by_default() {
    let exe = assert_cmd::cargo_bin!("taxoviz-cli");
    let output = Command::new(exe)
        .args([
            "--width",
            "300",
            "--height",
            "300",
            "--selected",
            "b",
            fixture("abc.json").to_string_lossy().as_ref(),
        ])
        .output()
        .expect("run cli");
    assert!(output.status.success());

    let svg = String::from_utf8(output.stdout).expect("utf8 svg");
    assert!(svg.starts_with("<svg"));
    // hub + three nodes + two children of "b"
    assert_eq!(svg.matches("<circle").count(), 6);
    assert!(svg.contains(">B1</text>"));
}

#[test]
fn cli_layout_reads_yaml_from_stdin_with_overrides() {
    let yaml = fs::read_to_string(fixture("activities.yaml")).expect("read yaml");

    let exe = assert_cmd::cargo_bin!("taxoviz-cli");
    let output = assert_cmd::Command::new(exe)
        .args([
            "layout",
            "--input-format",
            "yaml",
            "--width",
            "600",
            "--height",
            "300",
            "--set",
            "radial.hubLabel=Activities",
            "-",
        ])
        .write_stdin(yaml)
        .output()
        .expect("run cli");
    assert!(output.status.success());

    let layout: serde_json::Value = serde_json::from_slice(&output.stdout).expect("layout json");
    assert_eq!(layout["hub"]["label"], "Activities");
    assert_eq!(layout["ring_radius"], 100.0);
    assert!(layout["nodes"].as_array().is_some_and(|n| !n.is_empty()));
    assert_eq!(layout["children"].as_array().map(Vec::len), Some(0));
}

#[test]
fn cli_layout_is_null_for_zero_sized_surface() {
    let exe = assert_cmd::cargo_bin!("taxoviz-cli");
    let output = Command::new(exe)
        .args([
            "layout",
            "--width",
            "0",
            fixture("abc.json").to_string_lossy().as_ref(),
        ])
        .output()
        .expect("run cli");
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "null");
}

#[test]
fn cli_render_writes_nothing_for_zero_sized_surface() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let out = tmp.path().join("never.svg");

    let exe = assert_cmd::cargo_bin!("taxoviz-cli");
    Command::new(exe)
        .args([
            "--height",
            "0",
            "--out",
            out.to_string_lossy().as_ref(),
            fixture("abc.json").to_string_lossy().as_ref(),
        ])
        .assert()
        .success();
    assert!(!out.exists());
}

#[test]
fn cli_reports_usage_and_input_errors() {
    let exe = assert_cmd::cargo_bin!("taxoviz-cli");
    Command::new(exe)
        .args(["--format", "gif"])
        .assert()
        .code(2);

    let tmp = tempfile::tempdir().expect("tempdir");
    let bad = tmp.path().join("bad.json");
    fs::write(&bad, "{\"children\": 5}").expect("write bad input");
    let exe = assert_cmd::cargo_bin!("taxoviz-cli");
    Command::new(exe)
        .arg(bad.to_string_lossy().as_ref())
        .assert()
        .code(1);

    let exe = assert_cmd::cargo_bin!("taxoviz-cli");
    Command::new(exe)
        .args([
            "--set",
            "radial.hubRadius=-1",
            fixture("abc.json").to_string_lossy().as_ref(),
        ])
        .assert()
        .code(1);
}
