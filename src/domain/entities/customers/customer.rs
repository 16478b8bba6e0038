//! Customer Entity Implementation

use uuid::Uuid;

/// 고객 엔티티
///
/// 식별자는 생성 시점에 부여되며 이후 변경되지 않습니다.
/// 이름과 이메일에 대한 규칙은 엔티티가 아니라 커맨드 검증기가 담당하므로,
/// 엔티티 자체는 빈 문자열도 그대로 받아들입니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    id: Uuid,
    name: String,
    email: String,
}

impl Customer {
    /// 로그와 에러 메시지에 사용하는 엔티티 이름
    pub const ENTITY_NAME: &'static str = "Customer";

    /// 새 고객을 생성합니다. 새 UUID v4 식별자가 부여됩니다.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), name, email)
    }

    /// 이미 식별자가 정해진 고객을 재구성합니다.
    ///
    /// 저장소 구현이나 테스트에서 특정 식별자를 가진 엔티티를 시드할 때 사용합니다.
    pub fn with_id(id: Uuid, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_customer_gets_non_nil_id() {
        let customer = Customer::new("John Doe", "john.doe@example.com");

        assert!(!customer.id().is_nil());
        assert_eq!(customer.name(), "John Doe");
        assert_eq!(customer.email(), "john.doe@example.com");
    }

    #[test]
    fn test_each_customer_gets_unique_id() {
        let first = Customer::new("John Doe", "john.doe@example.com");
        let second = Customer::new("John Doe", "john.doe@example.com");

        assert_ne!(first.id(), second.id());
    }

    #[test]
    fn test_entity_accepts_empty_fields() {
        let customer = Customer::new("", "");

        assert_eq!(customer.name(), "");
        assert_eq!(customer.email(), "");
    }

    #[test]
    fn test_with_id_keeps_given_identifier() {
        let id = Uuid::new_v4();
        let customer = Customer::with_id(id, "Jane Doe", "jane@example.com");

        assert_eq!(customer.id(), id);
        assert_eq!(customer.name(), "Jane Doe");
    }
}
