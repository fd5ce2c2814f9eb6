pub mod categories;
pub mod errors;
pub mod questions;
pub mod quizzes;

pub use errors::{ServiceError, ServiceResult};
