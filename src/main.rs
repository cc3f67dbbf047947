// ABOUTME: Main entry point for the slider program.
// ABOUTME: Provides CLI interface and executes the slideshow build from the library.

use clap::Parser;
use slider::{Config, Converter, NamingScheme, OverwritePolicy};
use std::path::PathBuf;

/// Connect images, markdown files, and html documents into a linked
/// slideshow.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Text file containing a list of slides (default: slider.txt)
    #[arg(short, long)]
    slides: Option<PathBuf>,

    /// Stylesheet for the slides (default: slider.css; .css is appended
    /// when missing)
    #[arg(short, long)]
    css: Option<PathBuf>,

    /// Name prefix for numbered slide files (default: slider - generates
    /// slider_001.html etc.)
    #[arg(short = 'n', long = "prefix")]
    prefix: Option<String>,

    /// Output naming scheme (default: numbered)
    #[arg(long, value_enum)]
    naming: Option<NamingScheme>,

    /// Directory to write the linked slides into (default: .)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Markdown converters to try in order; 'builtin' selects the
    /// in-process renderer (default: Markdown.pl,pandoc)
    #[arg(long, value_delimiter = ',')]
    converters: Option<Vec<String>>,

    /// What to do when the stylesheet file already exists
    /// (default: prompt)
    #[arg(long = "css-overwrite", value_enum)]
    css_overwrite: Option<OverwritePolicy>,

    /// Refuse to run when two slides share a file name stem
    #[arg(long)]
    require_unique_names: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let config = Config::from_env();
    let converters = cli
        .converters
        .map(|specs| specs.iter().map(|s| Converter::from_spec(s)).collect());

    let build_config = config.get_build_config(
        cli.slides,
        cli.css,
        cli.prefix,
        cli.naming,
        cli.output_dir,
        converters,
        cli.css_overwrite,
        cli.require_unique_names,
    );

    match slider::build_slideshow(&build_config) {
        Ok(report) => {
            println!(
                "Processed {} slides ({} skipped, {} failed).",
                report.processed, report.skipped, report.failed
            );
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
