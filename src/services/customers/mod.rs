//! 고객 커맨드/쿼리 핸들러와 검증기

pub mod create_customer;
pub mod get_customer;
pub mod validators;

pub use create_customer::CreateCustomerHandler;
pub use get_customer::GetCustomerByIdHandler;
pub use validators::CreateCustomerValidator;
