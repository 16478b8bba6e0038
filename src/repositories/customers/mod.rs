//! 고객 저장소

pub mod customer_repo;

use async_trait::async_trait;
use uuid::Uuid;

use crate::core::errors::AppResult;
use crate::domain::entities::Customer;

pub use customer_repo::InMemoryCustomerRepository;

/// 고객 저장소 계약
///
/// 여러 요청이 동시에 호출해도 안전해야 합니다.
/// 식별자는 항상 생성되므로 중복 키 삽입은 발생하지 않습니다.
/// 수정과 삭제는 제공하지 않습니다.
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// 고객을 저장합니다. 프로세스가 살아있는 동안 유지됩니다.
    async fn add(&self, customer: Customer) -> AppResult<()>;

    /// 식별자로 고객을 조회합니다. 없으면 `None`을 반환합니다.
    async fn get_by_id(&self, id: Uuid) -> AppResult<Option<Customer>>;
}
