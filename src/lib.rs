//! HTTP text fetching and JSON record reshaping helpers.
//!
//! The crate bundles four small conveniences that tend to travel together in
//! API-consuming code: fetching a URL's body as text with bounded timeouts,
//! draining a byte source into one string, re-indexing a list of JSON
//! records by a chosen field, and merging one JSON object into another.
//!
//! Transport failures (`FetchError`) propagate to the caller; structural
//! failures while indexing are contained per record and reported through
//! [`IndexReport::skipped`] instead of failing the whole pass.

pub mod error;
pub mod http;
pub mod index;
pub mod merge;
pub mod stream;

pub use error::{FetchError, RecordError};
pub use http::{FetchOptions, client_for, fetch_text, fetch_text_with, fetch_text_with_client};
pub use index::{IndexReport, SkippedRecord, index_record, index_records, index_values};
pub use merge::{merge_objects, merge_values};
pub use stream::read_to_text;
