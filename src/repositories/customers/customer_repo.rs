//! 인메모리 고객 저장소
//!
//! `RwLock<HashMap>` 기반의 동시성 안전한 저장소입니다.
//! 조회는 읽기 잠금을 공유하고, 저장만 쓰기 잠금을 잡습니다.
//! 잠금이 오염(poison)된 경우 `AppError::Internal`로 전파합니다.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use log::debug;
use uuid::Uuid;

use super::CustomerRepository;
use crate::core::errors::{AppResult, ErrorContext};
use crate::domain::entities::Customer;

#[derive(Debug, Default)]
pub struct InMemoryCustomerRepository {
    customers: RwLock<HashMap<Uuid, Customer>>,
}

impl InMemoryCustomerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 완성된 엔티티를 그대로 저장합니다.
    ///
    /// 특정 식별자를 가진 고객을 미리 넣어두는 테스트 시드 용도입니다.
    ///
    /// # 예제
    ///
    /// ```rust,ignore
    /// let repository = InMemoryCustomerRepository::new();
    /// repository.seed(Customer::with_id(id, "John Doe", "john.doe@example.com"))?;
    /// ```
    pub fn seed(&self, customer: Customer) -> AppResult<()> {
        let mut customers = self
            .customers
            .write()
            .context("고객 저장소 쓰기 잠금 실패")?;
        customers.insert(customer.id(), customer);
        Ok(())
    }

    /// 저장된 모든 고객을 반환합니다. 순서는 보장하지 않습니다.
    pub fn all(&self) -> AppResult<Vec<Customer>> {
        let customers = self
            .customers
            .read()
            .context("고객 저장소 읽기 잠금 실패")?;
        Ok(customers.values().cloned().collect())
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn add(&self, customer: Customer) -> AppResult<()> {
        debug!("💾 고객 저장: {}", customer.id());
        self.seed(customer)
    }

    async fn get_by_id(&self, id: Uuid) -> AppResult<Option<Customer>> {
        let customers = self
            .customers
            .read()
            .context("고객 저장소 읽기 잠금 실패")?;
        Ok(customers.get(&id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::AppError;
    use std::sync::Arc;

    #[actix_web::test]
    async fn test_add_then_get_returns_same_customer() {
        let repository = InMemoryCustomerRepository::new();
        let customer = Customer::new("John Doe", "john.doe@example.com");
        let id = customer.id();

        repository.add(customer.clone()).await.unwrap();

        assert_eq!(repository.get_by_id(id).await.unwrap(), Some(customer));
    }

    #[actix_web::test]
    async fn test_get_unknown_id_returns_none() {
        let repository = InMemoryCustomerRepository::new();

        assert_eq!(repository.get_by_id(Uuid::new_v4()).await.unwrap(), None);
    }

    #[actix_web::test]
    async fn test_seed_is_visible_through_all_and_get() {
        let repository = InMemoryCustomerRepository::new();
        let id = Uuid::new_v4();
        repository
            .seed(Customer::with_id(id, "Seeded", "seeded@example.com"))
            .unwrap();

        let all = repository.all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id(), id);
        assert_eq!(repository.get_by_id(id).await.unwrap(), Some(all[0].clone()));
    }

    #[actix_web::test]
    async fn test_concurrent_adds_are_all_visible() {
        let repository = Arc::new(InMemoryCustomerRepository::new());

        let handles: Vec<_> = (0..16)
            .map(|i| {
                let repository = Arc::clone(&repository);
                std::thread::spawn(move || {
                    repository
                        .seed(Customer::new(format!("Customer {}", i), "c@example.com"))
                        .unwrap();
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(repository.all().unwrap().len(), 16);
    }

    #[test]
    fn test_poisoned_lock_surfaces_as_internal_error() {
        let repository = Arc::new(InMemoryCustomerRepository::new());
        let poisoner = Arc::clone(&repository);
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.customers.write().unwrap();
            panic!("잠금을 잡은 채로 패닉");
        })
        .join();

        assert!(matches!(repository.all(), Err(AppError::Internal(_))));
    }
}
