use crate::config::ResponseFormat;
use crate::error_code::ApiErrorKind;
use crate::transport::TransportError;
use thiserror::Error;

/// Structured error context for better error handling and debugging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorContext {
    /// Field path or configuration key that caused the error (e.g., "base_url", "location.country")
    pub field_path: Option<String>,
    /// Additional context about the error (e.g., expected type, actual value)
    pub details: Option<String>,
    /// Source of the error (e.g., "config", "response_parser")
    pub source: Option<String>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self {
            field_path: None,
            details: None,
            source: None,
        }
    }

    pub fn with_field_path(mut self, path: impl Into<String>) -> Self {
        self.field_path = Some(path.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Unified error type for the Ipregistry client.
///
/// Exactly one of these is produced per failed call. Classified API failures
/// live under [`Error::Api`]; match on [`ApiError::kind`] to branch on them.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid argument: {message}{}", format_context(.context))]
    InvalidArgument {
        message: String,
        context: ErrorContext,
    },

    #[error("Configuration error: {message}{}", format_context(.context))]
    Configuration {
        message: String,
        context: ErrorContext,
    },

    #[error("Failed to parse {format} response: {message}{}", format_context(.context))]
    Parse {
        format: ResponseFormat,
        message: String,
        context: ErrorContext,
    },

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Api(#[from] ApiError),
}

// Helper function to format error context for display
fn format_context(ctx: &ErrorContext) -> String {
    let mut parts = Vec::new();
    if let Some(ref field) = ctx.field_path {
        parts.push(format!("field: {}", field));
    }
    if let Some(ref details) = ctx.details {
        parts.push(format!("details: {}", details));
    }
    if let Some(ref source) = ctx.source {
        parts.push(format!("source: {}", source));
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!(" ({})", parts.join(", "))
    }
}

impl Error {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::invalid_argument_with_context(msg, ErrorContext::new())
    }

    pub fn invalid_argument_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::InvalidArgument {
            message: msg.into(),
            context,
        }
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::configuration_with_context(msg, ErrorContext::new())
    }

    /// Create a new configuration error with structured context
    pub fn configuration_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Configuration {
            message: msg.into(),
            context,
        }
    }

    pub fn parse(format: ResponseFormat, msg: impl Into<String>) -> Self {
        Error::Parse {
            format,
            message: msg.into(),
            context: ErrorContext::new().with_source("response_parser"),
        }
    }

    /// Extract error context if available
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            Error::InvalidArgument { context, .. }
            | Error::Configuration { context, .. }
            | Error::Parse { context, .. } => Some(context),
            _ => None,
        }
    }

    /// The classified API failure, if the server answered with a non-2xx status.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Error::Api(err) => Some(err),
            _ => None,
        }
    }

    /// Shorthand for `self.api_error().map(ApiError::kind)`.
    pub fn api_kind(&self) -> Option<ApiErrorKind> {
        self.api_error().map(ApiError::kind)
    }

    /// HTTP status of a classified API failure. Transport and local errors have none.
    pub fn status(&self) -> Option<u16> {
        self.api_error().map(ApiError::status)
    }
}

/// A non-2xx answer from the Ipregistry API, classified into an [`ApiErrorKind`].
///
/// `message` already carries the kind's explanation prefix followed by the
/// upstream message; `error_code` and `resolution` are passed through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ApiError {
    kind: ApiErrorKind,
    status: u16,
    message: String,
    error_code: Option<String>,
    resolution: Option<String>,
}

impl ApiError {
    pub fn new(
        kind: ApiErrorKind,
        status: u16,
        upstream_message: &str,
        error_code: Option<String>,
        resolution: Option<String>,
    ) -> Self {
        Self {
            kind,
            status,
            message: format!("{}{}", kind.prefix(), upstream_message),
            error_code,
            resolution,
        }
    }

    pub fn kind(&self) -> ApiErrorKind {
        self.kind
    }

    /// HTTP status code of the response, used as the numeric error code.
    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Upstream machine-readable code such as `"INVALID_IP_ADDRESS"`.
    pub fn error_code(&self) -> Option<&str> {
        self.error_code.as_deref()
    }

    /// Upstream hint on how to resolve the failure.
    pub fn resolution(&self) -> Option<&str> {
        self.resolution.as_deref()
    }

    /// Whether sending the same request again later may succeed.
    ///
    /// The client never retries on its own; this is a signal for callers.
    pub fn is_retryable(&self) -> bool {
        match self.kind {
            ApiErrorKind::TooManyRequests => true,
            ApiErrorKind::Generic => self.status >= 500,
            _ => false,
        }
    }
}
