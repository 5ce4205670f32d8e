//! Ipregistry API error kinds.
//!
//! The API answers failed requests with an HTTP status and a JSON body carrying
//! a machine-readable `code`, a human `message` and an optional `resolution`.
//! Some statuses are overloaded (400 and 403 cover several distinct failures),
//! so the kind is selected by `(status, code)` first and by `status` alone second.
//!
//! | Status | Upstream code                         | Kind                |
//! |--------|---------------------------------------|---------------------|
//! | 400    | `INVALID_ASN`                         | `InvalidAsn`        |
//! | 400    | `INVALID_IP_ADDRESS`                  | `InvalidIpAddress`  |
//! | 400    | `RESERVED_ASN`                        | `ReservedAsn`       |
//! | 400    | `RESERVED_IP_ADDRESS`                 | `ReservedIpAddress` |
//! | 400    | `TOO_MANY_ASNS`                       | `TooManyAsns`       |
//! | 400    | `TOO_MANY_IPS`                        | `TooManyIps`        |
//! | 400    | `TOO_MANY_USER_AGENTS`                | `TooManyUserAgents` |
//! | 400    | anything else                         | `BadRequest`        |
//! | 401    | any                                   | `MissingApiKey`     |
//! | 402    | any                                   | `InsufficientCredits` |
//! | 403    | `DISABLED_API_KEY`, `INVALID_API_KEY` | `InvalidApiKey`     |
//! | 403    | `FORBIDDEN_IP`                        | `ForbiddenIp`       |
//! | 403    | `FORBIDDEN_ORIGIN`                    | `ForbiddenOrigin`   |
//! | 403    | `FORBIDDEN_IP_ORIGIN`                 | `ForbiddenIpOrigin` |
//! | 404    | any                                   | `UnknownAsn`        |
//! | 429    | any                                   | `TooManyRequests`   |
//! | 451    | any                                   | `InvalidApiKey`     |
//! | other  | any                                   | `Generic`           |
//!
//! ## Example
//!
//! ```rust
//! use ipregistry_sdk::error_code::ApiErrorKind;
//!
//! let kind = ApiErrorKind::from_status_and_code(403, Some("FORBIDDEN_IP"));
//! assert_eq!(kind, ApiErrorKind::ForbiddenIp);
//! assert_eq!(kind.name(), "forbidden_ip");
//! assert_eq!(ApiErrorKind::from_status_and_code(403, Some("SOMETHING_NEW")), ApiErrorKind::Generic);
//! ```

use std::fmt;

/// Closed set of failures the Ipregistry API can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiErrorKind {
    /// Malformed request or invalid parameters (also covers `INVALID_FILTER_SYNTAX`)
    BadRequest,
    InvalidAsn,
    InvalidIpAddress,
    ReservedAsn,
    ReservedIpAddress,
    /// Batch ASN lookup exceeded the per-request limit
    TooManyAsns,
    /// Batch IP lookup exceeded the per-request limit
    TooManyIps,
    /// Batch User-Agent parsing exceeded the per-request limit
    TooManyUserAgents,
    MissingApiKey,
    InsufficientCredits,
    /// Invalid, disabled or legally blocked API key
    InvalidApiKey,
    ForbiddenIp,
    ForbiddenOrigin,
    ForbiddenIpOrigin,
    UnknownAsn,
    /// Rate limit exceeded
    TooManyRequests,
    /// Any status/code pair without a dedicated kind; the status is kept on the error
    Generic,
}

/// `(status, upstream code, kind)`; a `None` code matches any code for that status.
const CLASSIFICATION: &[(u16, Option<&str>, ApiErrorKind)] = &[
    (400, Some("BAD_REQUEST"), ApiErrorKind::BadRequest),
    (400, Some("INVALID_ASN"), ApiErrorKind::InvalidAsn),
    (400, Some("INVALID_FILTER_SYNTAX"), ApiErrorKind::BadRequest),
    (400, Some("INVALID_IP_ADDRESS"), ApiErrorKind::InvalidIpAddress),
    (400, Some("RESERVED_ASN"), ApiErrorKind::ReservedAsn),
    (400, Some("RESERVED_IP_ADDRESS"), ApiErrorKind::ReservedIpAddress),
    (400, Some("TOO_MANY_ASNS"), ApiErrorKind::TooManyAsns),
    (400, Some("TOO_MANY_IPS"), ApiErrorKind::TooManyIps),
    (400, Some("TOO_MANY_USER_AGENTS"), ApiErrorKind::TooManyUserAgents),
    (400, None, ApiErrorKind::BadRequest),
    (401, None, ApiErrorKind::MissingApiKey),
    (402, None, ApiErrorKind::InsufficientCredits),
    (403, Some("DISABLED_API_KEY"), ApiErrorKind::InvalidApiKey),
    (403, Some("INVALID_API_KEY"), ApiErrorKind::InvalidApiKey),
    (403, Some("FORBIDDEN_IP"), ApiErrorKind::ForbiddenIp),
    (403, Some("FORBIDDEN_ORIGIN"), ApiErrorKind::ForbiddenOrigin),
    (403, Some("FORBIDDEN_IP_ORIGIN"), ApiErrorKind::ForbiddenIpOrigin),
    (404, None, ApiErrorKind::UnknownAsn),
    (429, None, ApiErrorKind::TooManyRequests),
    (451, None, ApiErrorKind::InvalidApiKey),
];

impl ApiErrorKind {
    pub const ALL: [ApiErrorKind; 17] = [
        Self::BadRequest,
        Self::InvalidAsn,
        Self::InvalidIpAddress,
        Self::ReservedAsn,
        Self::ReservedIpAddress,
        Self::TooManyAsns,
        Self::TooManyIps,
        Self::TooManyUserAgents,
        Self::MissingApiKey,
        Self::InsufficientCredits,
        Self::InvalidApiKey,
        Self::ForbiddenIp,
        Self::ForbiddenOrigin,
        Self::ForbiddenIpOrigin,
        Self::UnknownAsn,
        Self::TooManyRequests,
        Self::Generic,
    ];

    /// Selects the kind for an HTTP status and optional upstream code.
    ///
    /// Exact `(status, code)` rows win over `(status, *)` rows; statuses with
    /// no row at all map to [`ApiErrorKind::Generic`].
    pub fn from_status_and_code(status: u16, code: Option<&str>) -> Self {
        if let Some(code) = code {
            let exact = CLASSIFICATION
                .iter()
                .find(|(s, c, _)| *s == status && *c == Some(code));
            if let Some((_, _, kind)) = exact {
                return *kind;
            }
        }
        CLASSIFICATION
            .iter()
            .find(|(s, c, _)| *s == status && c.is_none())
            .map(|(_, _, kind)| *kind)
            .unwrap_or(Self::Generic)
    }

    /// Returns the stable snake_case name (e.g., `"too_many_ips"`).
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::BadRequest => "bad_request",
            Self::InvalidAsn => "invalid_asn",
            Self::InvalidIpAddress => "invalid_ip_address",
            Self::ReservedAsn => "reserved_asn",
            Self::ReservedIpAddress => "reserved_ip_address",
            Self::TooManyAsns => "too_many_asns",
            Self::TooManyIps => "too_many_ips",
            Self::TooManyUserAgents => "too_many_user_agents",
            Self::MissingApiKey => "missing_api_key",
            Self::InsufficientCredits => "insufficient_credits",
            Self::InvalidApiKey => "invalid_api_key",
            Self::ForbiddenIp => "forbidden_ip",
            Self::ForbiddenOrigin => "forbidden_origin",
            Self::ForbiddenIpOrigin => "forbidden_ip_origin",
            Self::UnknownAsn => "unknown_asn",
            Self::TooManyRequests => "too_many_requests",
            Self::Generic => "generic",
        }
    }

    /// Explanation placed in front of the upstream message.
    #[inline]
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::BadRequest => "The request was malformed or contained invalid parameters: ",
            Self::InvalidAsn => "The provided ASN is invalid: ",
            Self::InvalidIpAddress => "The provided IP address is invalid: ",
            Self::ReservedAsn => "The provided ASN is reserved and cannot be looked up: ",
            Self::ReservedIpAddress => {
                "The provided IP address is reserved and cannot be looked up: "
            }
            Self::TooManyAsns => "Too many ASNs were provided in the batch request: ",
            Self::TooManyIps => "Too many IP addresses were provided in the batch request: ",
            Self::TooManyUserAgents => "Too many User-Agents were provided in the batch request: ",
            Self::MissingApiKey => "An API key is required to make requests: ",
            Self::InsufficientCredits => "The API request failed due to insufficient credits: ",
            Self::InvalidApiKey => "The provided API key is invalid or disabled: ",
            Self::ForbiddenIp => {
                "The request was forbidden because your IP address is not allowed: "
            }
            Self::ForbiddenOrigin => "The request was forbidden because your origin is not allowed: ",
            Self::ForbiddenIpOrigin => {
                "The request was forbidden because your IP address and origin are not allowed: "
            }
            Self::UnknownAsn => "The requested ASN was not found: ",
            Self::TooManyRequests => "The API rate limit has been exceeded: ",
            Self::Generic => "",
        }
    }

    /// Upstream codes that select this kind explicitly.
    ///
    /// Kinds selected by status alone (e.g. `TooManyRequests`) return an empty slice.
    pub fn upstream_codes(&self) -> Vec<&'static str> {
        CLASSIFICATION
            .iter()
            .filter(|(_, code, kind)| kind == self && code.is_some())
            .filter_map(|(_, code, _)| *code)
            .collect()
    }
}

impl fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
