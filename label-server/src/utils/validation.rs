//! Input validation helpers
//!
//! Text length limits and the required-field checks shared by handlers.

use serde_json::Value;
use shared::models::LabelType;

use crate::utils::{AppError, ErrorCode};

/// Template names
pub const MAX_NAME_LEN: usize = 200;

/// Take a required field out of an optional payload slot.
pub fn require<T>(value: Option<T>, field: &str) -> Result<T, AppError> {
    value.ok_or_else(|| AppError::required_field(field))
}

/// Take a required label data blob.
///
/// `null`, `""`, `0` and `false` count as missing; any other scalar is
/// rejected since label data is always a JSON object or array.
pub fn require_data(value: Option<Value>, field: &str) -> Result<Value, AppError> {
    match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => Err(AppError::required_field(field)),
        Some(Value::String(s)) if s.is_empty() => Err(AppError::required_field(field)),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => Err(AppError::required_field(field)),
        Some(data @ (Value::Object(_) | Value::Array(_))) => Ok(data),
        Some(_) => Err(AppError::with_message(
            ErrorCode::InvalidFormat,
            format!("{field} must be a JSON object"),
        )
        .with_detail("field", field)),
    }
}

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::required_field(field));
    }
    let len = value.chars().count();
    if len > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({len} chars, max {max_len})"
        )));
    }
    Ok(())
}

/// Parse a label type from its wire name (`shelf`, `bin`, `shoe`, `notice`).
pub fn parse_label_type(value: &str) -> Result<LabelType, AppError> {
    value
        .parse()
        .map_err(|_| AppError::invalid_label_type(value))
}

/// Validate a queue quantity against the configured cap.
pub fn validate_quantity(quantity: i64, max: i64) -> Result<(), AppError> {
    if !(1..=max).contains(&quantity) {
        return Err(AppError::with_message(
            ErrorCode::InvalidQuantity,
            format!("quantity must be between 1 and {max} (got {quantity})"),
        )
        .with_detail("quantity", quantity));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_require() {
        assert_eq!(require(Some(3), "data").unwrap(), 3);
        let err = require::<i32>(None, "name").unwrap_err();
        assert_eq!(err.code, ErrorCode::RequiredField);
        assert_eq!(err.message, "Missing required field: name");
    }

    #[test]
    fn test_require_data() {
        assert_eq!(require_data(Some(json!({})), "data").unwrap(), json!({}));
        assert!(require_data(Some(json!([1])), "data").is_ok());

        for falsy in [json!(null), json!(""), json!(0), json!(false)] {
            let err = require_data(Some(falsy), "data").unwrap_err();
            assert_eq!(err.code, ErrorCode::RequiredField);
        }
        assert_eq!(
            require_data(None, "data").unwrap_err().code,
            ErrorCode::RequiredField
        );

        for scalar in [json!("Scarves"), json!(3), json!(true)] {
            let err = require_data(Some(scalar), "data").unwrap_err();
            assert_eq!(err.code, ErrorCode::InvalidFormat);
            assert_eq!(err.details.unwrap().get("field").unwrap(), "data");
        }
    }

    #[test]
    fn test_required_text() {
        assert!(validate_required_text("Winter coats", "name", MAX_NAME_LEN).is_ok());
        assert_eq!(
            validate_required_text("   ", "name", MAX_NAME_LEN).unwrap_err().code,
            ErrorCode::RequiredField
        );
        assert_eq!(
            validate_required_text(&"n".repeat(201), "name", MAX_NAME_LEN)
                .unwrap_err()
                .code,
            ErrorCode::ValidationFailed
        );
        // 200 multi-byte characters is still within the limit
        assert!(validate_required_text(&"é".repeat(200), "name", MAX_NAME_LEN).is_ok());
    }

    #[test]
    fn test_parse_label_type() {
        assert_eq!(parse_label_type("shoe").unwrap(), LabelType::Shoe);
        assert_eq!(
            parse_label_type("sticker").unwrap_err().code,
            ErrorCode::InvalidLabelType
        );
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1, 20).is_ok());
        assert!(validate_quantity(20, 20).is_ok());
        assert_eq!(validate_quantity(0, 20).unwrap_err().code, ErrorCode::InvalidQuantity);
        assert_eq!(validate_quantity(21, 20).unwrap_err().code, ErrorCode::InvalidQuantity);
    }
}
