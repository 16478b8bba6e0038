//! 고객 커맨드/쿼리 DTO
//!
//! HTTP 요청 본문 또는 경로에서 만들어져 파이프라인으로 디스패치되는 요청 객체입니다.
//! 한 번 디스패치되면 핸들러가 소비하며 저장되지 않습니다.

use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// 이름 최소 길이 (문자 수 기준, 공백 포함)
pub const NAME_MIN_LENGTH: usize = 3;

/// 새 고객 생성 커맨드
///
/// 필드 이름은 camelCase로 직렬화되며, PascalCase 키(`Name`, `Email`)도 허용합니다.
///
/// # JSON 예제
///
/// ```json
/// { "name": "John Doe", "email": "john.doe@example.com" }
/// ```
///
/// # 검증 규칙
///
/// - `name`: 비어 있지 않아야 하며 최소 3자 (trim 하지 않음)
/// - `email`: 비어 있지 않아야 하며 이메일 형식이어야 함
///
/// 규칙은 서로 독립적으로 누적되며, 한 필드가 실패해도 다른 필드를 계속 검사합니다.
/// 본문에서 빠졌거나 `null`인 필드는 빈 문자열로 받아 검증 단계에서 필드별로 보고됩니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomerCommand {
    #[serde(alias = "Name", default, deserialize_with = "null_as_empty")]
    #[validate(length(min = 1, message = "'Name' must not be empty."))]
    #[validate(custom(function = "validate_name_length"))]
    pub name: String,

    #[serde(alias = "Email", default, deserialize_with = "null_as_empty")]
    #[validate(length(min = 1, message = "'Email' must not be empty."))]
    #[validate(email(message = "'Email' is not a valid email address."))]
    pub email: String,
}

impl CreateCustomerCommand {
    /// 검증 실패를 보고하는 필드 순서 (선언 순서)
    pub const FIELD_ORDER: [&'static str; 2] = ["name", "email"];

    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn validate_name_length(name: &str) -> Result<(), ValidationError> {
    let length = name.chars().count();
    if length < NAME_MIN_LENGTH {
        return Err(ValidationError::new("min_length").with_message(
            format!(
                "The length of 'Name' must be at least {} characters. You entered {} characters.",
                NAME_MIN_LENGTH, length
            )
            .into(),
        ));
    }
    Ok(())
}

/// 식별자로 고객을 조회하는 쿼리
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetCustomerByIdQuery {
    pub id: Uuid,
}

impl GetCustomerByIdQuery {
    pub fn new(id: Uuid) -> Self {
        Self { id }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_camel_case_and_pascal_case_keys() {
        let camel: CreateCustomerCommand =
            serde_json::from_str(r#"{"name":"John Doe","email":"john.doe@example.com"}"#).unwrap();
        let pascal: CreateCustomerCommand =
            serde_json::from_str(r#"{"Name":"John Doe","Email":"john.doe@example.com"}"#).unwrap();

        assert_eq!(camel, CreateCustomerCommand::new("John Doe", "john.doe@example.com"));
        assert_eq!(camel, pascal);
    }

    #[test]
    fn test_missing_or_null_fields_deserialize_as_empty() {
        let missing: CreateCustomerCommand =
            serde_json::from_str(r#"{"name":"John Doe"}"#).unwrap();
        let null: CreateCustomerCommand =
            serde_json::from_str(r#"{"name":null,"email":null}"#).unwrap();

        assert_eq!(missing, CreateCustomerCommand::new("John Doe", ""));
        assert_eq!(null, CreateCustomerCommand::new("", ""));
    }

    #[test]
    fn test_non_string_field_is_still_rejected() {
        let result: Result<CreateCustomerCommand, _> =
            serde_json::from_str(r#"{"name":42,"email":"john.doe@example.com"}"#);

        assert!(result.is_err());
    }

    #[test]
    fn test_name_length_counts_characters_without_trimming() {
        assert!(validate_name_length("   ").is_ok());
        assert!(validate_name_length("김철수").is_ok());
        assert!(validate_name_length("ab").is_err());
    }

    #[test]
    fn test_empty_command_reports_every_rule() {
        let errors = CreateCustomerCommand::new("", "").validate().unwrap_err();
        let fields = errors.field_errors();

        assert_eq!(fields.len(), 2);
        assert_eq!(fields.values().map(|errs| errs.len()).sum::<usize>(), 4);
    }
}
