//! 고객 응답 DTO

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::Customer;

/// 고객 조회 결과
///
/// 엔티티의 세 필드를 그대로 투영한 읽기 모델이며, 쿼리마다 새로 만들어집니다.
///
/// ```json
/// { "id": "6f1c...", "name": "John Doe", "email": "john.doe@example.com" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDto {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

impl From<&Customer> for CustomerDto {
    fn from(customer: &Customer) -> Self {
        Self {
            id: customer.id(),
            name: customer.name().to_string(),
            email: customer.email().to_string(),
        }
    }
}

impl From<Customer> for CustomerDto {
    fn from(customer: Customer) -> Self {
        Self::from(&customer)
    }
}
