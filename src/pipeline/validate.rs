// src/pipeline/validate.rs

//! Response shape validation.

use serde_json::Value;

use crate::error::{AppError, Result};
use crate::models::Homework;

/// Check the API response shape and extract the homework records.
///
/// The top level must be a JSON object carrying a `homeworks` array;
/// anything else fails the whole cycle. Individual array elements that are
/// not objects are logged and skipped, they do not abort the batch.
pub fn check_response(response: &Value) -> Result<Vec<Homework>> {
    let object = response.as_object().ok_or(AppError::NotAnObject)?;
    let homeworks = object.get("homeworks").ok_or(AppError::MissingHomeworks)?;
    let items = homeworks.as_array().ok_or(AppError::HomeworksNotAList)?;

    let mut records = Vec::with_capacity(items.len());
    for item in items {
        match serde_json::from_value::<Homework>(item.clone()) {
            Ok(record) => records.push(record),
            Err(error) => log::warn!("Skipping malformed homework entry: {error}"),
        }
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn extracts_homework_list() {
        let response = json!({
            "homeworks": [
                {"homework_name": "hw1", "status": "reviewing"},
                {"homework_name": "hw2", "status": "approved"},
            ]
        });
        let records = check_response(&response).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].homework_name.as_deref(), Some("hw1"));
    }

    #[test]
    fn empty_list_is_valid() {
        let records = check_response(&json!({"homeworks": []})).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn rejects_non_object_top_level() {
        let err = check_response(&json!(["hw1"])).unwrap_err();
        assert!(matches!(err, AppError::NotAnObject));

        let err = check_response(&json!("homeworks")).unwrap_err();
        assert!(matches!(err, AppError::NotAnObject));
    }

    #[test]
    fn rejects_missing_homeworks_key() {
        let err = check_response(&json!({"current_date": 0})).unwrap_err();
        assert!(matches!(err, AppError::MissingHomeworks));
    }

    #[test]
    fn rejects_non_list_homeworks() {
        let err = check_response(&json!({"homeworks": "not-a-list"})).unwrap_err();
        assert!(matches!(err, AppError::HomeworksNotAList));

        let err = check_response(&json!({"homeworks": {"hw1": "approved"}})).unwrap_err();
        assert!(matches!(err, AppError::HomeworksNotAList));
    }

    #[test]
    fn skips_non_object_elements() {
        let response = json!({
            "homeworks": [
                42,
                {"homework_name": "hw1", "status": "approved"},
            ]
        });
        let records = check_response(&response).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].homework_name.as_deref(), Some("hw1"));
    }
}
