// ABOUTME: Markdown converter collaborators for the slider application
// ABOUTME: Tries external converter commands in order, with an optional in-process fallback

use comrak::{markdown_to_html, ComrakOptions};
use log::{info, warn};
use std::fs;
use std::io::Read;
use std::path::Path;
use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

/// A single markdown-to-HTML converter. External converters are invoked
/// with the source path as their sole argument and their stdout captured
/// as the HTML fragment; `Builtin` renders in-process with comrak.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Converter {
    Command(String),
    Builtin,
}

impl Converter {
    /// Parse a converter spec from the CLI or environment.
    /// `builtin` selects the in-process renderer; anything else names a
    /// command on PATH.
    pub fn from_spec(spec: &str) -> Self {
        if spec == "builtin" {
            Converter::Builtin
        } else {
            Converter::Command(spec.to_string())
        }
    }

    fn describe(&self) -> &str {
        match self {
            Converter::Command(program) => program.as_str(),
            Converter::Builtin => "builtin",
        }
    }
}

/// The default chain tries `Markdown.pl` first, then `pandoc`.
pub fn default_chain() -> Vec<Converter> {
    vec![
        Converter::Command("Markdown.pl".to_string()),
        Converter::Command("pandoc".to_string()),
    ]
}

/// Convert a markdown file to an HTML fragment using the first converter
/// in the chain that succeeds. Returns `None` when every converter fails
/// to launch, times out, or produces no output.
pub fn convert_markdown(path: &Path, chain: &[Converter], timeout_ms: u64) -> Option<String> {
    for converter in chain {
        let fragment = match converter {
            Converter::Command(program) => run_converter_command(program, path, timeout_ms),
            Converter::Builtin => convert_builtin(path),
        };
        match fragment {
            Some(html) if !html.trim().is_empty() => {
                info!(
                    "Converted {:?} with markdown converter '{}'",
                    path,
                    converter.describe()
                );
                return Some(html);
            }
            _ => {
                info!(
                    "Markdown converter '{}' failed for {:?}, trying next",
                    converter.describe(),
                    path
                );
            }
        }
    }
    None
}

/// Run one external converter with a deadline. Stdout is drained on a
/// helper thread so a converter writing more than the pipe buffer cannot
/// stall against an unread pipe.
fn run_converter_command(program: &str, path: &Path, timeout_ms: u64) -> Option<String> {
    let mut child = Command::new(program)
        .arg(path)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .ok()?;

    let mut stdout = child.stdout.take()?;
    let reader = thread::spawn(move || {
        let mut output = String::new();
        stdout.read_to_string(&mut output).map(|_| output)
    });

    let deadline = Instant::now() + Duration::from_millis(timeout_ms);
    let status = loop {
        match child.try_wait() {
            Ok(Some(status)) => break status,
            Ok(None) => {
                if Instant::now() >= deadline {
                    warn!(
                        "Markdown converter '{}' timed out after {} ms, killing it",
                        program, timeout_ms
                    );
                    let _ = child.kill();
                    let _ = child.wait();
                    return None;
                }
                thread::sleep(Duration::from_millis(10));
            }
            Err(e) => {
                warn!("Failed to wait for markdown converter '{}': {}", program, e);
                let _ = child.kill();
                return None;
            }
        }
    };

    let output = reader.join().ok()?.ok()?;
    if status.success() {
        Some(output)
    } else {
        None
    }
}

/// In-process conversion via comrak, matching the external converters'
/// contract: raw HTML in the source passes through.
fn convert_builtin(path: &Path) -> Option<String> {
    let markdown = fs::read_to_string(path).ok()?;
    let mut options = ComrakOptions::default();
    options.render.unsafe_ = true; // Allow raw HTML
    Some(markdown_to_html(&markdown, &options))
}
