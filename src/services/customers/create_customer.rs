//! 고객 생성 커맨드 핸들러

use std::sync::Arc;

use async_trait::async_trait;
use log::info;
use uuid::Uuid;

use crate::core::errors::AppResult;
use crate::core::pipeline::{Request, RequestHandler};
use crate::domain::dto::CreateCustomerCommand;
use crate::domain::entities::Customer;
use crate::repositories::CustomerRepository;

impl Request for CreateCustomerCommand {
    type Response = Uuid;
    const NAME: &'static str = "CreateCustomerCommand";
}

/// 검증을 통과한 커맨드로 고객을 만들고 저장한 뒤 새 식별자를 반환합니다.
///
/// 자체 실패 경로는 없으며, 저장소 에러는 그대로 전파됩니다.
pub struct CreateCustomerHandler {
    repository: Arc<dyn CustomerRepository>,
}

impl CreateCustomerHandler {
    pub fn new(repository: Arc<dyn CustomerRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl RequestHandler<CreateCustomerCommand> for CreateCustomerHandler {
    async fn handle(&self, request: CreateCustomerCommand) -> AppResult<Uuid> {
        let customer = Customer::new(request.name, request.email);
        let id = customer.id();

        self.repository.add(customer).await?;

        info!("✅ 고객 생성 완료: {}", id);
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::AppError;
    use crate::repositories::InMemoryCustomerRepository;

    struct UnavailableRepository;

    #[async_trait]
    impl CustomerRepository for UnavailableRepository {
        async fn add(&self, _customer: Customer) -> AppResult<()> {
            Err(AppError::Internal("storage unavailable".into()))
        }

        async fn get_by_id(&self, _id: Uuid) -> AppResult<Option<Customer>> {
            Ok(None)
        }
    }

    #[actix_web::test]
    async fn test_adds_customer_with_command_fields() {
        let repository = Arc::new(InMemoryCustomerRepository::new());
        let handler = CreateCustomerHandler::new(repository.clone());

        let id = handler
            .handle(CreateCustomerCommand::new("John Doe", "john.doe@example.com"))
            .await
            .unwrap();

        let stored = repository.all().unwrap();
        assert_eq!(stored.len(), 1);
        assert!(!id.is_nil());
        assert_eq!(stored[0].id(), id);
        assert_eq!(stored[0].name(), "John Doe");
        assert_eq!(stored[0].email(), "john.doe@example.com");
    }

    #[actix_web::test]
    async fn test_each_create_returns_fresh_id() {
        let repository = Arc::new(InMemoryCustomerRepository::new());
        let handler = CreateCustomerHandler::new(repository.clone());

        let first = handler
            .handle(CreateCustomerCommand::new("John Doe", "john@example.com"))
            .await
            .unwrap();
        let second = handler
            .handle(CreateCustomerCommand::new("John Doe", "john@example.com"))
            .await
            .unwrap();

        assert_ne!(first, second);
        assert_eq!(repository.all().unwrap().len(), 2);
    }

    #[actix_web::test]
    async fn test_repository_error_propagates_unmodified() {
        let handler = CreateCustomerHandler::new(Arc::new(UnavailableRepository));

        let result = handler
            .handle(CreateCustomerCommand::new("John Doe", "john@example.com"))
            .await;

        match result {
            Err(AppError::Internal(msg)) => assert_eq!(msg, "storage unavailable"),
            other => panic!("저장소 에러가 전파되어야 함: {:?}", other),
        }
    }
}
