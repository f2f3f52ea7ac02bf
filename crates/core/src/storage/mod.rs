mod error;
mod exit_code;
mod traits;
mod validation;

pub use error::{RepositoryError, Result};
pub use exit_code::repository_error_to_exit_code;
pub use traits::RecordRepository;
pub use validation::{validate_collection, validate_update_attributes};
