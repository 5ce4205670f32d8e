//! Minimal XML element tree for `format = xml` responses.
//!
//! Only what field access needs: element names, attributes, text and children.
//! Lookups by name return the first matching child.

use crate::utils::path::{segments, FieldSource};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use serde_json::Value;
use std::borrow::Cow;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct XmlElement {
    name: String,
    attributes: Vec<(String, String)>,
    text: String,
    children: Vec<XmlElement>,
}

impl XmlElement {
    /// Parses a document and returns its root element.
    ///
    /// On failure returns every diagnostic collected before parsing stopped.
    pub fn parse(input: &str) -> Result<Self, Vec<String>> {
        let mut reader = Reader::from_str(input);
        reader.config_mut().trim_text(true);

        let mut diagnostics = Vec::new();
        let mut stack: Vec<XmlElement> = Vec::new();
        let mut root: Option<XmlElement> = None;

        loop {
            match reader.read_event() {
                Ok(Event::Start(start)) => match Self::from_start(&start) {
                    Ok(element) => stack.push(element),
                    Err(e) => {
                        diagnostics.push(e);
                        break;
                    }
                },
                Ok(Event::Empty(start)) => match Self::from_start(&start) {
                    Ok(element) => Self::attach(element, &mut stack, &mut root, &mut diagnostics),
                    Err(e) => {
                        diagnostics.push(e);
                        break;
                    }
                },
                Ok(Event::End(_)) => {
                    if let Some(element) = stack.pop() {
                        Self::attach(element, &mut stack, &mut root, &mut diagnostics);
                    }
                }
                Ok(Event::Text(text)) => match text.unescape() {
                    Ok(t) => Self::append_text(&mut stack, &t, &mut diagnostics),
                    Err(e) => {
                        diagnostics.push(format!("invalid text content: {}", e));
                        break;
                    }
                },
                Ok(Event::CData(data)) => {
                    let t = String::from_utf8_lossy(&data.into_inner()).into_owned();
                    Self::append_text(&mut stack, &t, &mut diagnostics);
                }
                Ok(Event::Eof) => break,
                Ok(_) => {}
                Err(e) => {
                    diagnostics.push(format!(
                        "error at position {}: {}",
                        reader.error_position(),
                        e
                    ));
                    break;
                }
            }
        }

        if let Some(open) = stack.last() {
            diagnostics.push(format!("unexpected end of document inside <{}>", open.name));
        }
        match root {
            Some(root) if diagnostics.is_empty() => Ok(root),
            None if diagnostics.is_empty() => Err(vec!["document has no root element".to_string()]),
            _ => Err(diagnostics),
        }
    }

    fn from_start(start: &BytesStart<'_>) -> Result<Self, String> {
        let name = String::from_utf8_lossy(start.local_name().as_ref()).into_owned();
        let mut attributes = Vec::new();
        for attr in start.attributes() {
            let attr = attr.map_err(|e| format!("invalid attribute on <{}>: {}", name, e))?;
            let key = String::from_utf8_lossy(attr.key.local_name().as_ref()).into_owned();
            let value = attr
                .unescape_value()
                .map_err(|e| format!("invalid attribute value on <{}>: {}", name, e))?
                .into_owned();
            attributes.push((key, value));
        }
        Ok(Self {
            name,
            attributes,
            ..Self::default()
        })
    }

    fn attach(
        element: XmlElement,
        stack: &mut [XmlElement],
        root: &mut Option<XmlElement>,
        diagnostics: &mut Vec<String>,
    ) {
        if let Some(parent) = stack.last_mut() {
            parent.children.push(element);
        } else if root.is_none() {
            *root = Some(element);
        } else {
            diagnostics.push(format!("unexpected second root element <{}>", element.name));
        }
    }

    fn append_text(stack: &mut [XmlElement], text: &str, diagnostics: &mut Vec<String>) {
        match stack.last_mut() {
            Some(current) => current.text.push_str(text),
            None => diagnostics.push(format!("text outside of the root element: {:?}", text)),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn children(&self) -> &[XmlElement] {
        &self.children
    }

    /// First child element called `name`.
    pub fn child(&self, name: &str) -> Option<&XmlElement> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Element at a dotted path below this one.
    pub fn find(&self, path: &str) -> Option<&XmlElement> {
        let mut current = self;
        for part in segments(path)? {
            current = current.child(part)?;
        }
        Some(current)
    }
}

impl FieldSource for XmlElement {
    /// Text of the element at `path`. A container element (children, no text)
    /// is not a scalar and reads as absent.
    fn field(&self, path: &str) -> Option<Cow<'_, Value>> {
        self.find(path)
            .filter(|el| el.children.is_empty() || !el.text.is_empty())
            .map(|el| Cow::Owned(Value::String(el.text.clone())))
    }

    /// Text of each child element, e.g. `<borders><item>CA</item><item>MX</item></borders>`.
    fn list(&self, path: &str) -> Vec<Value> {
        self.find(path)
            .map(|el| {
                el.children
                    .iter()
                    .map(|c| Value::String(c.text.clone()))
                    .collect()
            })
            .unwrap_or_default()
    }
}
