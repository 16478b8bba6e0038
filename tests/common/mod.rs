#![allow(dead_code)]

use std::sync::Arc;

use actix_web::web;

use customer_service::core::Mediator;
use customer_service::repositories::InMemoryCustomerRepository;
use customer_service::routes::configure_all_routes;
use customer_service::services::auth::TokenService;
use customer_service::services::build_mediator;

pub const TEST_SECRET: &str = "integration-test-secret";
pub const TEST_ISSUER: &str = "customer-service";
pub const TEST_AUDIENCE: &str = "customer-service-clients";

/// 테스트마다 새로 만드는 애플리케이션 상태
///
/// 저장소를 직접 들고 있어 HTTP 호출 전후의 저장 상태를 확인할 수 있습니다.
pub struct TestState {
    pub repository: Arc<InMemoryCustomerRepository>,
    pub mediator: web::Data<Mediator>,
    pub token_service: web::Data<TokenService>,
}

impl TestState {
    pub fn new() -> Self {
        let repository = Arc::new(InMemoryCustomerRepository::new());
        let mediator = web::Data::new(build_mediator(repository.clone()));
        let token_service = web::Data::new(TokenService::new(
            TEST_SECRET,
            TEST_ISSUER,
            TEST_AUDIENCE,
            1,
        ));

        Self {
            repository,
            mediator,
            token_service,
        }
    }

    /// `App::configure`에 넘길 라우트/상태 설정
    pub fn configure(&self) -> impl FnOnce(&mut web::ServiceConfig) + 'static {
        let mediator = self.mediator.clone();
        let token_service = self.token_service.clone();

        move |cfg| {
            cfg.app_data(mediator).app_data(token_service);
            configure_all_routes(cfg);
        }
    }
}
