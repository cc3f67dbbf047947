// ABOUTME: Content normalizer for the slider application
// ABOUTME: Classifies slide sources by extension and produces a standard XHTML document

use crate::convert::{convert_markdown, Converter};
use crate::dom::{self, Element};
use crate::errors::{Result, SliderError};
use crate::utils::validate_file_exists;
use log::info;
use quick_xml::escape::escape;
use std::fs;
use std::path::Path;

/// Slide source type, decided by filename extension.
/// Extension matching is case-sensitive: `photo.PNG` is unrecognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideKind {
    Markdown,
    Image,
    Html,
    Unrecognized,
}

/// Classify a slide source file. Precedence: markdown, then image,
/// then HTML.
pub fn classify(path: &Path) -> SlideKind {
    match path.extension().and_then(|e| e.to_str()) {
        Some("md") => SlideKind::Markdown,
        Some("jpg") | Some("jpeg") | Some("png") | Some("gif") | Some("svg") => SlideKind::Image,
        Some("htm") | Some("html") => SlideKind::Html,
        _ => SlideKind::Unrecognized,
    }
}

/// Normalize a slide source into an XHTML document with a `head` and a
/// `body`, ready for link injection. No file is written here.
pub fn normalize(path: &Path, chain: &[Converter], timeout_ms: u64) -> Result<Element> {
    validate_file_exists(path)?;

    match classify(path) {
        SlideKind::Markdown => {
            info!("Normalizing markdown slide: {:?}", path);
            let fragment = convert_markdown(path, chain, timeout_ms)
                .ok_or_else(|| SliderError::ConverterUnavailable(path.to_path_buf()))?;
            parse_boilerplate(path, &boilerplate(path, "markdown_slide", &fragment))
        }
        SlideKind::Image => {
            info!("Normalizing image slide: {:?}", path);
            let display = path.display().to_string();
            let source = escape(&display);
            let img = format!(r#"<img id="slider" src="{}"/>"#, source);
            parse_boilerplate(path, &boilerplate(path, "image_slide", &img))
        }
        SlideKind::Html => {
            info!("Normalizing html slide: {:?}", path);
            let content = fs::read_to_string(path)?;
            parse_boilerplate(path, &content)
        }
        SlideKind::Unrecognized => Err(SliderError::UnrecognizedType(path.to_path_buf())),
    }
}

/// Wrap slide content in the standard skeleton: title = source path, a
/// body class marking the slide type, and the layout table the stylesheet
/// uses for vertical centering.
fn boilerplate(path: &Path, body_class: &str, content: &str) -> String {
    let display = path.display().to_string();
    let title = escape(&display);
    format!(
        concat!(
            "<html><head><title>{title}</title></head>",
            "<body class=\"{class}\">",
            "<table id=\"slider_table\"><tr><td>{content}</td></tr></table>",
            "</body></html>"
        ),
        title = title,
        class = body_class,
        content = content,
    )
}

fn parse_boilerplate(path: &Path, markup: &str) -> Result<Element> {
    let doc = dom::parse_document(markup).map_err(|e| SliderError::MalformedMarkup {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    // The injector needs both; hand-written slides sometimes omit one.
    for required in ["head", "body"] {
        if doc.find(required).is_none() {
            return Err(SliderError::MalformedMarkup {
                path: path.to_path_buf(),
                message: format!("missing <{}> element", required),
            });
        }
    }
    Ok(doc)
}
