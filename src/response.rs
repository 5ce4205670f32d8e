//! Parsed API responses.
//!
//! An [`ApiResponse`] owns the parsed payload of one successful call together
//! with the raw HTTP response it came from. The payload is parsed once, in the
//! format the client was configured with, and never modified afterwards.

pub mod fields;
pub mod xml;

pub use fields::{FieldKind, FieldSpec, FieldValue, FIELDS};
pub use xml::XmlElement;

use crate::config::ResponseFormat;
use crate::transport::RawResponse;
use crate::utils::path::FieldSource;
use crate::{Error, Result};
use serde_json::Value;
use std::borrow::Cow;
use std::sync::Arc;

/// Payload tree of a response, in the representation matching its format.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedTree {
    Json(Value),
    Xml(XmlElement),
}

impl ParsedTree {
    pub fn parse(body: &str, format: ResponseFormat) -> Result<Self> {
        match format {
            ResponseFormat::Json => serde_json::from_str(body)
                .map(ParsedTree::Json)
                .map_err(|e| Error::parse(format, e.to_string())),
            ResponseFormat::Xml => XmlElement::parse(body)
                .map(ParsedTree::Xml)
                .map_err(|diagnostics| Error::parse(format, diagnostics.join(", "))),
        }
    }

    pub fn as_json(&self) -> Option<&Value> {
        match self {
            ParsedTree::Json(v) => Some(v),
            ParsedTree::Xml(_) => None,
        }
    }

    pub fn as_xml(&self) -> Option<&XmlElement> {
        match self {
            ParsedTree::Xml(el) => Some(el),
            ParsedTree::Json(_) => None,
        }
    }

    fn source(&self) -> &dyn FieldSource {
        match self {
            ParsedTree::Json(v) => v,
            ParsedTree::Xml(el) => el,
        }
    }
}

impl FieldSource for ParsedTree {
    fn field(&self, path: &str) -> Option<Cow<'_, Value>> {
        self.source().field(path)
    }

    fn list(&self, path: &str) -> Vec<Value> {
        self.source().list(path)
    }
}

/// One successful API response.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    raw: Arc<RawResponse>,
    data: ParsedTree,
    format: ResponseFormat,
}

impl ApiResponse {
    /// Parses `raw`'s body as `format`.
    pub fn new(raw: RawResponse, format: ResponseFormat) -> Result<Self> {
        let data = ParsedTree::parse(raw.body(), format)?;
        Ok(Self {
            raw: Arc::new(raw),
            data,
            format,
        })
    }

    /// Like [`ApiResponse::new`] with the format given by name (`"json"` or `"xml"`).
    pub fn with_format_name(raw: RawResponse, format: &str) -> Result<Self> {
        Self::new(raw, format.parse()?)
    }

    /// The parsed payload, for fields without a named getter.
    pub fn data(&self) -> &ParsedTree {
        &self.data
    }

    pub fn raw_response(&self) -> &RawResponse {
        &self.raw
    }

    pub fn status(&self) -> u16 {
        self.raw.status()
    }

    pub fn format(&self) -> ResponseFormat {
        self.format
    }

    /// Value at a dotted path, e.g. `"location.country.code"`.
    ///
    /// JSON values keep their type (a JSON `null` is returned as such); XML
    /// values are the element text.
    pub fn get(&self, path: &str) -> Option<Cow<'_, Value>> {
        self.data.field(path)
    }

    pub fn get_str(&self, path: &str) -> Option<String> {
        self.get(path).and_then(|v| value_to_string(&v))
    }

    pub fn get_i64(&self, path: &str) -> Option<i64> {
        self.get(path).and_then(|v| match v.as_ref() {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        })
    }

    pub fn get_f64(&self, path: &str) -> Option<f64> {
        self.get(path).and_then(|v| match v.as_ref() {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        })
    }

    /// Flag at `path`; `false` when absent or null.
    pub fn get_bool(&self, path: &str) -> bool {
        self.get(path)
            .map(|v| match v.as_ref() {
                Value::Bool(b) => *b,
                Value::String(s) => matches!(s.trim(), "true" | "1"),
                Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
                _ => false,
            })
            .unwrap_or(false)
    }

    /// Collection at `path`; empty when absent or null.
    pub fn get_list(&self, path: &str) -> Vec<Value> {
        self.data.list(path)
    }

    /// Entries of a batch response's `results` collection, each wrapped as its
    /// own response so the named getters apply to it.
    ///
    /// The named getters on `self` keep reading the top level only.
    pub fn results(&self) -> Vec<ApiResponse> {
        let entries: Vec<ParsedTree> = match &self.data {
            ParsedTree::Json(v) => v
                .get("results")
                .and_then(Value::as_array)
                .map(|items| items.iter().cloned().map(ParsedTree::Json).collect())
                .unwrap_or_default(),
            ParsedTree::Xml(root) => root
                .child("results")
                .map(|el| el.children().iter().cloned().map(ParsedTree::Xml).collect())
                .unwrap_or_default(),
        };
        entries
            .into_iter()
            .map(|data| ApiResponse {
                raw: Arc::clone(&self.raw),
                data,
                format: self.format,
            })
            .collect()
    }
}

fn value_to_string(v: &Value) -> Option<String> {
    match v {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
