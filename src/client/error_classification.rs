//! Error classification logic

use crate::config::ResponseFormat;
use crate::error::ApiError;
use crate::error_code::ApiErrorKind;
use crate::response::ParsedTree;
use crate::transport::RawResponse;
use crate::utils::path::FieldSource;
use reqwest::Method;
use serde::Deserialize;

/// Fields of an Ipregistry error body; every one may be missing.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    code: Option<String>,
    message: Option<String>,
    resolution: Option<String>,
}

impl ErrorBody {
    /// Decodes a body as JSON first, then as XML when the client asked for XML.
    ///
    /// Bodies in neither shape (HTML error pages, empty bodies) decode to all-`None`.
    fn decode(body: &str, format: ResponseFormat) -> Self {
        if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
            return parsed;
        }
        if format == ResponseFormat::Xml {
            if let Ok(tree) = ParsedTree::parse(body, ResponseFormat::Xml) {
                let text = |name: &str| {
                    tree.field(name)
                        .and_then(|v| v.as_str().map(str::to_string))
                        .filter(|s| !s.is_empty())
                };
                return ErrorBody {
                    code: text("code"),
                    message: text("message"),
                    resolution: text("resolution"),
                };
            }
        }
        ErrorBody::default()
    }
}

/// Builds the [`ApiError`] for a non-2xx response.
///
/// Every non-2xx status goes through here, 4xx and 5xx alike. When the body
/// carries no message, the HTTP-level description is used instead.
pub(crate) fn classify_error_from_response(
    raw: &RawResponse,
    format: ResponseFormat,
    method: &Method,
    path: &str,
) -> ApiError {
    let status = raw.status();
    let body = ErrorBody::decode(raw.body(), format);
    let kind = ApiErrorKind::from_status_and_code(status, body.code.as_deref());
    let message = body.message.unwrap_or_else(|| {
        format!(
            "HTTP {} {} returned for {} {}",
            status,
            raw.reason(),
            method,
            path
        )
    });
    ApiError::new(kind, status, &message, body.code, body.resolution)
}
