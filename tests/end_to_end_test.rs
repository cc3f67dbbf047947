use std::fs;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run_command(args: &[&str]) -> Output {
    Command::new("cargo")
        .arg("run")
        .arg("--")
        .args(args)
        .output()
        .expect("Failed to execute command")
}

#[test]
fn test_cli_builds_a_numbered_slideshow() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    let intro = temp_dir.path().join("intro.md");
    fs::write(&intro, "# Intro\n\nWelcome to the show.").expect("Failed to write markdown");

    let body = temp_dir.path().join("body.html");
    fs::write(
        &body,
        "<html><head><title>Body</title></head><body><p>Middle slide</p></body></html>",
    )
    .expect("Failed to write html slide");

    let photo = temp_dir.path().join("photo.png");
    fs::write(&photo, "fake image bytes").expect("Failed to write image");

    let list = temp_dir.path().join("slides.txt");
    fs::write(
        &list,
        format!(
            "# demo deck\n{}\n{}\n{}\n",
            intro.display(),
            body.display(),
            photo.display()
        ),
    )
    .expect("Failed to write slide list");

    let out_dir = temp_dir.path().join("out");
    let css = temp_dir.path().join("deck.css");

    let output = run_command(&[
        "--slides",
        list.to_str().unwrap(),
        "--css",
        css.to_str().unwrap(),
        "--output-dir",
        out_dir.to_str().unwrap(),
        "--converters",
        "builtin",
        "--css-overwrite",
        "always",
    ]);

    assert!(
        output.status.success(),
        "Command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Processed 3 slides"));

    assert!(css.exists(), "Stylesheet should be written");
    for name in ["slider_001.html", "slider_002.html", "slider_003.html"] {
        assert!(out_dir.join(name).exists(), "Missing output: {}", name);
    }

    let middle = fs::read_to_string(out_dir.join("slider_002.html")).expect("Missing slide");
    assert!(middle.contains(r#"href="slider_001.html""#));
    assert!(middle.contains(r#"href="slider_003.html""#));
    assert!(middle.contains("Middle slide"));
}
