// ABOUTME: Minimal mutable element tree for slide documents
// ABOUTME: Parses and serializes XHTML via quick-xml, tracking text and tail per node

use anyhow::{anyhow, bail, Result};
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};

/// One element in a slide document. `text` is the character data before the
/// first child, `tail` the character data following this element's end tag,
/// so moving a node keeps surrounding free text with it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    pub name: String,
    pub attrs: Vec<(String, String)>,
    pub text: String,
    pub tail: String,
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    /// Get an attribute value by name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Set an attribute, replacing any existing value.
    pub fn set_attr(&mut self, name: &str, value: &str) {
        if let Some(entry) = self.attrs.iter_mut().find(|(k, _)| k == name) {
            entry.1 = value.to_string();
        } else {
            self.attrs.push((name.to_string(), value.to_string()));
        }
    }

    /// Find the first direct child with the given tag name.
    pub fn find(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Mutable variant of [`Element::find`].
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Element> {
        self.children.iter_mut().find(|c| c.name == name)
    }

    /// True if this element or any descendant carries `attr="value"`.
    pub fn has_descendant_with_attr(&self, attr: &str, value: &str) -> bool {
        if self.attr(attr) == Some(value) {
            return true;
        }
        self.children
            .iter()
            .any(|c| c.has_descendant_with_attr(attr, value))
    }
}

/// Parse a well-formed XHTML document into an element tree.
/// Doctype, XML declarations, comments, and processing instructions are
/// dropped; a fresh doctype is emitted on serialization.
pub fn parse_document(input: &str) -> Result<Element> {
    let mut reader = Reader::from_str(input);
    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        match reader.read_event()? {
            Event::Start(start) => {
                stack.push(element_from_start(&start)?);
            }
            Event::Empty(start) => {
                let elem = element_from_start(&start)?;
                attach(&mut stack, &mut root, elem)?;
            }
            Event::End(_) => {
                // quick-xml has already checked the end name against the
                // open tag, so a pop always matches.
                let elem = stack
                    .pop()
                    .ok_or_else(|| anyhow!("closing tag without opening tag"))?;
                attach(&mut stack, &mut root, elem)?;
            }
            Event::Text(text) => {
                let value = text.unescape()?;
                if let Some(parent) = stack.last_mut() {
                    match parent.children.last_mut() {
                        Some(last) => last.tail.push_str(&value),
                        None => parent.text.push_str(&value),
                    }
                }
            }
            Event::CData(data) => {
                let value = String::from_utf8_lossy(&data).into_owned();
                if let Some(parent) = stack.last_mut() {
                    match parent.children.last_mut() {
                        Some(last) => last.tail.push_str(&value),
                        None => parent.text.push_str(&value),
                    }
                }
            }
            Event::Eof => break,
            // Doctype, declarations, comments, PIs carry no slide content
            _ => {}
        }
    }

    if !stack.is_empty() {
        bail!("unclosed tag: <{}>", stack[stack.len() - 1].name);
    }
    root.ok_or_else(|| anyhow!("document has no root element"))
}

fn element_from_start(start: &BytesStart<'_>) -> Result<Element> {
    let mut elem = Element::new(&String::from_utf8_lossy(start.name().as_ref()));
    for attr in start.attributes() {
        let attr = attr?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr.unescape_value()?.into_owned();
        elem.attrs.push((key, value));
    }
    Ok(elem)
}

fn attach(stack: &mut Vec<Element>, root: &mut Option<Element>, elem: Element) -> Result<()> {
    match stack.last_mut() {
        Some(parent) => parent.children.push(elem),
        None => {
            if root.is_some() {
                bail!("extra content after root element");
            }
            *root = Some(elem);
        }
    }
    Ok(())
}

/// Serialize an element tree back to an HTML document string, with a
/// doctype prefix. Childless, textless elements self-close, which keeps
/// the output valid XHTML and re-parseable by [`parse_document`].
pub fn to_html(root: &Element) -> Result<String> {
    let mut writer = Writer::new(Vec::new());
    write_element(&mut writer, root)?;
    let body = String::from_utf8(writer.into_inner())
        .map_err(|e| anyhow!("serialized document is not UTF-8: {}", e))?;
    Ok(format!("<!DOCTYPE html>\n{}\n", body))
}

fn write_element(writer: &mut Writer<Vec<u8>>, elem: &Element) -> Result<()> {
    let mut start = BytesStart::new(elem.name.as_str());
    for (key, value) in &elem.attrs {
        start.push_attribute((key.as_str(), value.as_str()));
    }

    if elem.children.is_empty() && elem.text.is_empty() {
        writer.write_event(Event::Empty(start))?;
    } else {
        writer.write_event(Event::Start(start))?;
        if !elem.text.is_empty() {
            writer.write_event(Event::Text(BytesText::new(&elem.text)))?;
        }
        for child in &elem.children {
            write_element(writer, child)?;
        }
        writer.write_event(Event::End(BytesEnd::new(elem.name.as_str())))?;
    }

    if !elem.tail.is_empty() {
        writer.write_event(Event::Text(BytesText::new(&elem.tail)))?;
    }
    Ok(())
}
