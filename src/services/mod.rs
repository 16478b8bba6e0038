//! # Application Services
//!
//! 파이프라인 끝에서 실행되는 커맨드/쿼리 핸들러와 토큰 발급 서비스입니다.
//!
//! [`build_mediator`]는 애플리케이션의 조립 지점으로, 저장소를 주입받아
//! 요청 타입별 파이프라인을 구성합니다.
//!
//! ```text
//! CreateCustomerCommand : Logging → Validation(CreateCustomerValidator) → CreateCustomerHandler
//! GetCustomerByIdQuery  : Logging → Validation(검증기 없음)              → GetCustomerByIdHandler
//! ```

pub mod auth;
pub mod customers;

use std::sync::Arc;

use crate::core::behaviors::{LoggingBehavior, ValidationBehavior};
use crate::core::{Mediator, Pipeline};
use crate::domain::dto::{CreateCustomerCommand, GetCustomerByIdQuery};
use crate::repositories::CustomerRepository;
use customers::{CreateCustomerHandler, CreateCustomerValidator, GetCustomerByIdHandler};

/// 고객 파이프라인이 모두 등록된 [`Mediator`]를 생성합니다.
///
/// # Examples
///
/// ```rust,ignore
/// let repository: Arc<dyn CustomerRepository> = Arc::new(InMemoryCustomerRepository::new());
/// let mediator = build_mediator(repository);
/// let id = mediator.send(CreateCustomerCommand::new("John Doe", "john.doe@example.com")).await?;
/// ```
pub fn build_mediator(repository: Arc<dyn CustomerRepository>) -> Mediator {
    let create_customer = Pipeline::<CreateCustomerCommand>::builder()
        .behavior(LoggingBehavior)
        .behavior(ValidationBehavior::new().with_validator(CreateCustomerValidator))
        .handler(CreateCustomerHandler::new(Arc::clone(&repository)));

    let get_customer = Pipeline::<GetCustomerByIdQuery>::builder()
        .behavior(LoggingBehavior)
        .behavior(ValidationBehavior::new())
        .handler(GetCustomerByIdHandler::new(repository));

    Mediator::new()
        .register(create_customer)
        .register(get_customer)
}
