// ABOUTME: Link injector for the slider application
// ABOUTME: Idempotently inserts navigation nodes, a stylesheet reference, and the body wrapper

use crate::dom::Element;
use crate::errors::{Result, SliderError};
use log::debug;

pub const WRAPPER_CLASS: &str = "slider";
pub const PREV_ID: &str = "slider_prev";
pub const NEXT_ID: &str = "slider_next";

/// Result of an injection pass. `AlreadyLinked` means the document was
/// processed by an earlier run and was left untouched (detect-and-skip
/// policy: repeat runs never nest wrappers or duplicate links).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InjectOutcome {
    Linked,
    AlreadyLinked,
}

/// True if the document already carries slideshow markup: a `.slider`
/// wrapper directly under `body`, or a navigation node anywhere.
pub fn is_linked(doc: &Element) -> bool {
    if let Some(body) = doc.find("body") {
        if body
            .children
            .iter()
            .any(|c| c.name == "div" && c.attr("class") == Some(WRAPPER_CLASS))
        {
            return true;
        }
    }
    doc.has_descendant_with_attr("id", PREV_ID) || doc.has_descendant_with_attr("id", NEXT_ID)
}

/// Insert navigation links to `prev`/`next`, a stylesheet reference, and
/// the `.slider` wrapper into a normalized document. Mutates in place.
/// A `None` or empty neighbor means the slide sits at that boundary of
/// the sequence and gets no link on that side.
///
/// The normalizer guarantees `head` and `body` (rejecting their absence
/// as malformed markup, with the source path); a document arriving here
/// without them is reported as a validation error, since no source path
/// is available at this layer.
pub fn inject(
    doc: &mut Element,
    prev: Option<&str>,
    next: Option<&str>,
    stylesheet: &str,
) -> Result<InjectOutcome> {
    if is_linked(doc) {
        debug!("Document already linked, skipping injection");
        return Ok(InjectOutcome::AlreadyLinked);
    }

    let head = doc.find_mut("head").ok_or_else(|| {
        SliderError::ValidationError("document has no <head> element".to_string())
    })?;
    if !head
        .children
        .iter()
        .any(|c| c.name == "link" && c.attr("href") == Some(stylesheet))
    {
        let mut link = Element::new("link");
        link.set_attr("href", stylesheet);
        link.set_attr("rel", "stylesheet");
        link.set_attr("type", "text/css");
        head.children.push(link);
    }

    let body = doc.find_mut("body").ok_or_else(|| {
        SliderError::ValidationError("document has no <body> element".to_string())
    })?;

    if let Some(target) = prev.filter(|t| !t.is_empty()) {
        body.children.push(nav_node(PREV_ID, target, "<"));
    }
    if let Some(target) = next.filter(|t| !t.is_empty()) {
        body.children.push(nav_node(NEXT_ID, target, ">"));
    }

    // Wrap everything, navigation included, in the single .slider
    // container. Snapshot the children with mem::take so nothing is
    // removed from a list being iterated; body's leading/trailing text
    // moves onto the wrapper with them.
    let mut wrapper = Element::new("div");
    wrapper.set_attr("class", WRAPPER_CLASS);
    wrapper.children = std::mem::take(&mut body.children);
    wrapper.text = std::mem::take(&mut body.text);
    wrapper.tail = std::mem::take(&mut body.tail);
    body.children.push(wrapper);

    Ok(InjectOutcome::Linked)
}

fn nav_node(id: &str, target: &str, glyph: &str) -> Element {
    let mut div = Element::new("div");
    div.set_attr("id", id);
    let mut link = Element::new("a");
    link.set_attr("href", target);
    link.text = glyph.to_string();
    div.children.push(link);
    div
}
