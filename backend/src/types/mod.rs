mod environment;
mod error;

pub use environment::Environment;
pub use error::{ApiErrorResponse, AppError, SERVER_ERROR_MESSAGE};
