// ABOUTME: Sequence orchestrator for the slider application
// ABOUTME: Drives normalize + inject + write over the ordered slide list

use crate::config::{
    DEFAULT_PREFIX, DEFAULT_SLIDE_LIST, DEFAULT_STYLESHEET_PATH, DEFAULT_TIMEOUT_MS,
};
use crate::convert::{default_chain, Converter};
use crate::dom;
use crate::errors::{Result, SliderError};
use crate::inject::{inject, InjectOutcome};
use crate::normalize::normalize;
use crate::stylesheet::{ensure_css_extension, write_stylesheet, OverwritePolicy};
use crate::utils::{
    ensure_directory_exists, ensure_parent_directory_exists, html_counterpart, identifier_stem,
    numbered_name,
};
use clap::ValueEnum;
use log::{info, warn};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// How output files (and therefore navigation targets) are named.
/// `Numbered` produces `{prefix}_001.html`, `{prefix}_002.html`, …;
/// `Basename` keeps each slide's own name with the extension rewritten
/// to `.html`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum NamingScheme {
    Numbered,
    Basename,
}

/// Configuration for one slideshow build
#[derive(Debug, Clone, PartialEq)]
pub struct BuildConfig {
    pub slide_list: PathBuf,
    pub stylesheet: PathBuf,
    pub prefix: String,
    pub naming: NamingScheme,
    pub output_dir: PathBuf,
    pub converters: Vec<Converter>,
    pub converter_timeout_ms: u64,
    pub overwrite_policy: OverwritePolicy,
    pub require_unique_names: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            slide_list: PathBuf::from(DEFAULT_SLIDE_LIST),
            stylesheet: PathBuf::from(DEFAULT_STYLESHEET_PATH),
            prefix: DEFAULT_PREFIX.to_string(),
            naming: NamingScheme::Numbered,
            output_dir: PathBuf::from("."),
            converters: default_chain(),
            converter_timeout_ms: DEFAULT_TIMEOUT_MS,
            overwrite_policy: OverwritePolicy::Prompt,
            require_unique_names: false,
        }
    }
}

/// Per-run tally, streamed back to the CLI for the closing summary.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub processed: usize,
    pub skipped: usize,
    pub failed: usize,
}

enum SlideStatus {
    Written(PathBuf),
    AlreadyLinked,
}

/// Build the slideshow described by `config`. Every slide failure is
/// logged and counted but does not stop the run; only an unreadable
/// slide list or a duplicate-name violation aborts before processing.
pub fn build_slideshow(config: &BuildConfig) -> Result<Report> {
    let slides = read_slide_list(&config.slide_list)?;
    if config.require_unique_names {
        check_unique_stems(&slides)?;
    }

    info!("Processing {} slides.", slides.len());
    ensure_directory_exists(&config.output_dir)?;

    let stylesheet_path = ensure_css_extension(&config.stylesheet);
    let stylesheet_href = stylesheet_path.display().to_string();

    let mut report = Report::default();
    for (index, slide) in slides.iter().enumerate() {
        match process_slide(&slides, index, config, &stylesheet_href) {
            Ok(SlideStatus::Written(path)) => {
                info!("Processed slide: {} -> {:?}", slide, path);
                report.processed += 1;
            }
            Ok(SlideStatus::AlreadyLinked) => {
                info!("Slide already linked, output left untouched: {}", slide);
                report.skipped += 1;
            }
            Err(e) => {
                warn!("Skipping slide {}: {}", slide, e);
                report.failed += 1;
            }
        }
    }

    write_stylesheet(&stylesheet_path, config.overwrite_policy)?;
    Ok(report)
}

fn process_slide(
    slides: &[String],
    index: usize,
    config: &BuildConfig,
    stylesheet_href: &str,
) -> Result<SlideStatus> {
    let slide = &slides[index];
    let mut doc = normalize(
        Path::new(slide),
        &config.converters,
        config.converter_timeout_ms,
    )?;

    let (prev, next) = neighbor_targets(slides, index, config);
    let outcome = inject(&mut doc, prev.as_deref(), next.as_deref(), stylesheet_href)?;
    if outcome == InjectOutcome::AlreadyLinked {
        return Ok(SlideStatus::AlreadyLinked);
    }

    let output = config.output_dir.join(output_name(slides, index, config));
    ensure_parent_directory_exists(&output)?;
    fs::write(&output, dom::to_html(&doc)?)?;
    Ok(SlideStatus::Written(output))
}

/// Read the ordered slide list: one identifier per line, trimmed; blank
/// lines and `#` comments are dropped.
pub fn read_slide_list(path: &Path) -> Result<Vec<String>> {
    if !path.is_file() {
        return Err(SliderError::SlideListNotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path)?;
    Ok(content
        .lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| line.to_string())
        .collect())
}

/// Fatal precheck, off by default: two slides sharing a file stem would
/// collide in basename naming.
fn check_unique_stems(slides: &[String]) -> Result<()> {
    let mut seen = HashSet::new();
    for slide in slides {
        if !seen.insert(identifier_stem(slide)) {
            return Err(SliderError::DuplicateIdentifier(slide.clone()));
        }
    }
    Ok(())
}

/// Navigation targets for the slide at `index`: `None` at the sequence
/// boundaries. Neighbors are addressed by their output names, so non-HTML
/// identifiers are rewritten to their `.html` counterparts.
pub fn neighbor_targets(
    slides: &[String],
    index: usize,
    config: &BuildConfig,
) -> (Option<String>, Option<String>) {
    let last = slides.len().saturating_sub(1);
    match config.naming {
        NamingScheme::Numbered => (
            (index > 0).then(|| numbered_name(&config.prefix, index - 1)),
            (index < last).then(|| numbered_name(&config.prefix, index + 1)),
        ),
        NamingScheme::Basename => (
            (index > 0).then(|| html_counterpart(&slides[index - 1])),
            (index < last).then(|| html_counterpart(&slides[index + 1])),
        ),
    }
}

/// Output file name for the slide at `index` under the configured scheme.
pub fn output_name(slides: &[String], index: usize, config: &BuildConfig) -> String {
    match config.naming {
        NamingScheme::Numbered => numbered_name(&config.prefix, index),
        NamingScheme::Basename => html_counterpart(&slides[index]),
    }
}
