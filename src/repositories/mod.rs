//! # Repository Layer
//!
//! 엔티티 영속화를 담당하는 계층입니다.
//!
//! 저장소는 trait 객체(`Arc<dyn CustomerRepository>`)로 핸들러에 주입되며,
//! 전역 상태 없이 애플리케이션 시작 시 한 번 생성되어 공유됩니다.
//!
//! ```text
//! repositories/
//! └── customers/
//!     ├── mod.rs           ← CustomerRepository trait
//!     └── customer_repo.rs ← InMemoryCustomerRepository
//! ```

pub mod customers;

pub use customers::{CustomerRepository, InMemoryCustomerRepository};
