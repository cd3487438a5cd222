//! Record indexing.
//!
//! Both indexing variants walk the input once and never fail as a whole:
//! a record that cannot be keyed is logged, recorded in the skip list and
//! left out of the index, while the rest of the pass continues.

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::warn;

use crate::error::RecordError;

/// Result of one indexing pass: the index built from the usable records
/// plus the records the pass had to leave out.
///
/// Callers that consider skips fatal can check `skipped.is_empty()` and
/// escalate; the index itself is unaffected by that choice.
#[derive(Debug, Clone, Default, Serialize)]
pub struct IndexReport {
    pub index: Map<String, Value>,
    pub skipped: Vec<SkippedRecord>,
}

/// A record the indexer skipped, with its position in the input and the
/// structural error that disqualified it.
#[derive(Debug, Clone, Serialize)]
pub struct SkippedRecord {
    pub position: usize,
    pub record: Value,
    pub error: RecordError,
}

/// Index `records` by the string value of `key`, mapping each key value to
/// the whole record.
///
/// Records that are not objects, lack `key`, or hold a non-string value
/// under it are skipped. Duplicate key values resolve last-write-wins: the
/// record appearing later in the slice replaces the earlier one.
pub fn index_records(records: &[Value], key: &str) -> IndexReport {
    index_with(records, key, |fields| Value::Object(fields.clone()))
}

/// Index `records` by the string value of `key`, mapping each key value to
/// the string form of `value_field`.
///
/// The key lookup follows the same skip rules as [`index_records`], and the
/// same last-write-wins policy applies on duplicates. The value lookup is
/// non-throwing: an absent or null `value_field` projects to `""`, a string
/// projects as itself and any other value projects as its JSON form.
pub fn index_values(records: &[Value], key: &str, value_field: &str) -> IndexReport {
    index_with(records, key, |fields| {
        Value::String(field_as_string(fields.get(value_field)))
    })
}

/// One-record convenience over [`index_values`].
pub fn index_record(record: &Value, key: &str, value_field: &str) -> IndexReport {
    index_values(std::slice::from_ref(record), key, value_field)
}

fn index_with<F>(records: &[Value], key: &str, project: F) -> IndexReport
where
    F: Fn(&Map<String, Value>) -> Value,
{
    let mut report = IndexReport::default();
    for (position, record) in records.iter().enumerate() {
        match string_key(record, key) {
            Ok((fields, key_value)) => {
                report.index.insert(key_value, project(fields));
            }
            Err(error) => {
                warn!(position, error = %error, "record skipped during indexing");
                report.skipped.push(SkippedRecord {
                    position,
                    record: record.clone(),
                    error,
                });
            }
        }
    }
    report
}

fn string_key<'a>(record: &'a Value, key: &str) -> Result<(&'a Map<String, Value>, String), RecordError> {
    let fields = record.as_object().ok_or(RecordError::NotAnObject)?;
    match fields.get(key) {
        Some(Value::String(value)) => Ok((fields, value.clone())),
        Some(_) => Err(RecordError::FieldNotString {
            field: key.to_owned(),
        }),
        None => Err(RecordError::MissingField {
            field: key.to_owned(),
        }),
    }
}

fn field_as_string(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}
