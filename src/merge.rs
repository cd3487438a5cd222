//! Shallow object merging.

use serde_json::{Map, Value};

use crate::error::RecordError;

/// Copy every field of `src` into `dest`, overwriting existing fields on
/// key collision. Fields are copied in `src` insertion order.
pub fn merge_objects(dest: &mut Map<String, Value>, src: &Map<String, Value>) {
    for (field, value) in src {
        dest.insert(field.clone(), value.clone());
    }
}

/// `Value`-level merge; both sides must be JSON objects.
///
/// On a structural error the destination is left untouched.
pub fn merge_values(dest: &mut Value, src: &Value) -> Result<(), RecordError> {
    let src_fields = src.as_object().ok_or(RecordError::NotAnObject)?;
    let dest_fields = dest.as_object_mut().ok_or(RecordError::NotAnObject)?;
    merge_objects(dest_fields, src_fields);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn merges_and_overwrites_on_collision() {
        let mut dest = json!({"a": 1, "b": 2});
        let src = json!({"b": 3, "c": 4});

        merge_values(&mut dest, &src).unwrap();
        assert_eq!(dest, json!({"a": 1, "b": 3, "c": 4}));
    }

    #[test]
    fn merging_an_empty_source_is_a_no_op() {
        let mut dest = json!({"a": 1});

        merge_values(&mut dest, &json!({})).unwrap();
        assert_eq!(dest, json!({"a": 1}));
    }

    #[test]
    fn non_object_source_is_a_structural_error() {
        let mut dest = json!({"a": 1});

        let result = merge_values(&mut dest, &json!([1, 2]));
        assert_eq!(result, Err(RecordError::NotAnObject));
        assert_eq!(dest, json!({"a": 1}));
    }

    #[test]
    fn non_object_destination_is_a_structural_error() {
        let mut dest = json!("scalar");

        let result = merge_values(&mut dest, &json!({"a": 1}));
        assert_eq!(result, Err(RecordError::NotAnObject));
        assert_eq!(dest, json!("scalar"));
    }

    #[test]
    fn nested_values_are_replaced_not_deep_merged() {
        let mut dest = json!({"a": {"x": 1}});
        let src = json!({"a": {"y": 2}});

        merge_values(&mut dest, &src).unwrap();
        assert_eq!(dest, json!({"a": {"y": 2}}));
    }
}
