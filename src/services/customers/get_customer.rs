//! 고객 조회 쿼리 핸들러

use std::sync::Arc;

use async_trait::async_trait;

use crate::core::errors::{AppError, AppResult};
use crate::core::pipeline::{Request, RequestHandler};
use crate::domain::dto::{CustomerDto, GetCustomerByIdQuery};
use crate::domain::entities::Customer;
use crate::repositories::CustomerRepository;

impl Request for GetCustomerByIdQuery {
    type Response = CustomerDto;
    const NAME: &'static str = "GetCustomerByIdQuery";
}

/// 식별자로 고객을 찾아 [`CustomerDto`]로 변환합니다.
///
/// # Errors
///
/// * `AppError::NotFound` - 해당 식별자의 고객이 없는 경우
///   (`Entity "Customer" (<id>) was not found.`)
pub struct GetCustomerByIdHandler {
    repository: Arc<dyn CustomerRepository>,
}

impl GetCustomerByIdHandler {
    pub fn new(repository: Arc<dyn CustomerRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl RequestHandler<GetCustomerByIdQuery> for GetCustomerByIdHandler {
    async fn handle(&self, request: GetCustomerByIdQuery) -> AppResult<CustomerDto> {
        self.repository
            .get_by_id(request.id)
            .await?
            .map(CustomerDto::from)
            .ok_or_else(|| AppError::not_found(Customer::ENTITY_NAME, request.id))
    }
}
