pub mod catch_async;
pub mod error_handler;

pub use catch_async::{catch_async, forward_rejection, settle};
pub use error_handler::{ErrorHandler, normalize_errors};
