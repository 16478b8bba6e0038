//! 파이프라인 behavior 모음
//!
//! 등록 순서: [`LoggingBehavior`] → [`ValidationBehavior`] → 핸들러

pub mod logging;
pub mod validation;

pub use logging::LoggingBehavior;
pub use validation::{collect_failures, RequestValidator, ValidationBehavior};
