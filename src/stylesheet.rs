// ABOUTME: Stylesheet asset writer for the slider application
// ABOUTME: Writes the default slideshow CSS under an explicit overwrite policy

use crate::errors::Result;
use clap::ValueEnum;
use log::info;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// What to do when the stylesheet file already exists. The transformation
/// pipeline itself never blocks on interactive input; only `Prompt` does,
/// and only here in the asset writer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OverwritePolicy {
    Always,
    Never,
    Prompt,
}

/// Default slideshow styling: dark backdrop, centered .slider column,
/// fixed prev/next glyphs at mid-height, vertically centered layout table.
pub const DEFAULT_STYLESHEET: &str = "\
body {
\tbackground: black;
\tcolor: darkgray;
\tfont-family: 'Unna', baskerville, garamond, times, 'times new roman', serif;
\ttext-align: left;
}
.slider {
\tmargin: 0px auto;
\twidth: 1000px;
}
#slider_next {
\tfloat: right;
\tposition: absolute;
\tright: 0;
\ttop: 50%;
}
#slider_prev {
\tfloat: left;
\tposition: absolute;
\tleft: 0;
\ttop: 50%;
}
#slider_next a, #slider_prev a {
\tcolor: #2f2f2f;
\tfont-size: 30pt;
\ttext-decoration: none;
}
img#slider {
\tborder: 0px solid black;
\tdisplay: block;
\tmargin-left: auto;
\tmargin-right: auto;
\twidth: 1000px;
\tbox-shadow: 4px 4px 8px #000;
}
#slider_table {
\theight: 100%;
\twidth: 100%;
}
#slider_table td {
\tvertical-align: middle;
}
";

/// Append a `.css` extension when the configured path lacks one.
pub fn ensure_css_extension(path: &Path) -> PathBuf {
    match path.extension().and_then(|e| e.to_str()) {
        Some("css") => path.to_path_buf(),
        _ => {
            let mut name = path.as_os_str().to_os_string();
            name.push(".css");
            PathBuf::from(name)
        }
    }
}

/// Write the default stylesheet to `path` per the overwrite policy.
/// Returns true if the file was written.
pub fn write_stylesheet(path: &Path, policy: OverwritePolicy) -> Result<bool> {
    if path.exists() {
        let overwrite = match policy {
            OverwritePolicy::Always => true,
            OverwritePolicy::Never => false,
            OverwritePolicy::Prompt => confirm_overwrite(path)?,
        };
        if !overwrite {
            info!("Keeping existing stylesheet: {:?}", path);
            return Ok(false);
        }
    }

    fs::write(path, DEFAULT_STYLESHEET)?;
    info!("Wrote stylesheet: {:?}", path);
    Ok(true)
}

fn confirm_overwrite(path: &Path) -> Result<bool> {
    print!(
        "The stylesheet {} already exists. Overwrite? (y/N): ",
        path.display()
    );
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    Ok(answer.trim().eq_ignore_ascii_case("y"))
}
