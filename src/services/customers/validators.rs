//! 고객 커맨드 검증기

use validator::Validate;

use crate::core::behaviors::{collect_failures, RequestValidator};
use crate::core::errors::ValidationFailure;
use crate::domain::dto::CreateCustomerCommand;

/// [`CreateCustomerCommand`]에 선언된 `#[validate]` 규칙을 실행합니다.
#[derive(Debug, Clone, Copy, Default)]
pub struct CreateCustomerValidator;

impl RequestValidator<CreateCustomerCommand> for CreateCustomerValidator {
    fn validate(&self, request: &CreateCustomerCommand) -> Vec<ValidationFailure> {
        match request.validate() {
            Ok(()) => Vec::new(),
            Err(errors) => collect_failures(&errors, &CreateCustomerCommand::FIELD_ORDER),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failures(name: &str, email: &str) -> Vec<ValidationFailure> {
        CreateCustomerValidator.validate(&CreateCustomerCommand::new(name, email))
    }

    fn fields(failures: &[ValidationFailure]) -> Vec<&str> {
        let mut fields: Vec<&str> = failures.iter().map(|f| f.field_name.as_str()).collect();
        fields.dedup();
        fields
    }

    #[test]
    fn test_valid_command_has_no_failures() {
        assert!(failures("John Doe", "john.doe@example.com").is_empty());
    }

    #[test]
    fn test_accepts_common_email_shapes() {
        for email in ["test@example.com", "user.name@domain.co.uk", "test123@test123.com"] {
            assert!(failures("John Doe", email).is_empty(), "{} 는 유효해야 함", email);
        }
    }

    #[test]
    fn test_whitespace_name_of_three_characters_passes() {
        assert!(failures("   ", "john.doe@example.com").is_empty());
    }

    #[test]
    fn test_empty_name_fails_both_name_rules() {
        let failures = failures("", "john.doe@example.com");

        assert_eq!(failures.len(), 2);
        assert_eq!(fields(&failures), vec!["Name"]);
        let messages: Vec<&str> = failures.iter().map(|f| f.message.as_str()).collect();
        assert!(messages.contains(&"'Name' must not be empty."));
        assert!(messages.contains(
            &"The length of 'Name' must be at least 3 characters. You entered 0 characters."
        ));
    }

    #[test]
    fn test_short_name_fails_length_rule() {
        let failures = failures("Jo", "john.doe@example.com");

        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].field_name, "Name");
    }

    #[test]
    fn test_malformed_emails_fail_on_email_field() {
        for email in [
            "invalid-email",
            "@example.com",
            "test@",
            "test.example.com",
            "test@.com",
            "test@domain.",
        ] {
            let failures = failures("John Doe", email);
            assert_eq!(fields(&failures), vec!["Email"], "{} 는 거부되어야 함", email);
        }
    }

    #[test]
    fn test_both_fields_are_checked_independently() {
        let failures = failures("", "");

        assert_eq!(failures.len(), 4);
        assert_eq!(fields(&failures), vec!["Name", "Email"]);
    }
}
