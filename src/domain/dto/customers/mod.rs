//! 고객 관련 DTO

pub mod request;
pub mod response;

pub use request::{CreateCustomerCommand, GetCustomerByIdQuery};
pub use response::CustomerDto;
