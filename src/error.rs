use serde::Serialize;
use thiserror::Error;

/// Transport-level failures raised while fetching a URL body.
///
/// Malformed URLs, connection refusal, timeout expiry, non-success HTTP
/// statuses and body-read errors all land here; the caller sees a single
/// failure category with no retry or partial result.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid url '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("request failed: {0}")]
    Client(#[from] reqwest::Error),

    #[error("failed to read response body from '{url}': {source}")]
    Read {
        url: String,
        #[source]
        source: std::io::Error,
    },
}

/// Structural failures raised while accessing record fields.
///
/// During indexing these are caught per record and surfaced through the
/// skip report rather than failing the pass; merging returns them directly.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
pub enum RecordError {
    #[error("value is not a JSON object")]
    NotAnObject,

    #[error("field '{field}' is missing")]
    MissingField { field: String },

    #[error("field '{field}' is not a string")]
    FieldNotString { field: String },
}
