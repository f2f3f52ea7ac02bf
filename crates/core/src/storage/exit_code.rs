//! Pure functions for mapping repository errors to process exit codes.
//!
//! Codes follow the BSD `sysexits.h` conventions so shell callers can branch on
//! the failure category without parsing messages.

use super::RepositoryError;

pub const EX_USAGE: i32 = 64;
pub const EX_DATAERR: i32 = 65;
pub const EX_NOINPUT: i32 = 66;
pub const EX_UNAVAILABLE: i32 = 69;
pub const EX_SOFTWARE: i32 = 70;
pub const EX_CANTCREAT: i32 = 73;
pub const EX_TEMPFAIL: i32 = 75;

/// Maps a [`RepositoryError`] to a process exit code.
///
/// - `InvalidInput` -> 64 (usage)
/// - `Validation`, `Serialization` -> 65 (data error)
/// - `NotFound`, `ResourceNotFound` -> 66 (no input)
/// - `ConnectionFailed` -> 69 (unavailable)
/// - `QueryFailed` -> 70 (software)
/// - `AlreadyExists` -> 73 (can't create)
/// - `ThroughputExceeded` -> 75 (temporary failure)
///
/// # Examples
///
/// ```
/// use dynacrud_core::storage::{RepositoryError, repository_error_to_exit_code};
///
/// let error = RepositoryError::ThroughputExceeded("slow down".to_string());
/// assert_eq!(repository_error_to_exit_code(&error), 75);
/// ```
pub fn repository_error_to_exit_code(error: &RepositoryError) -> i32 {
    match error {
        RepositoryError::InvalidInput(_) => EX_USAGE,
        RepositoryError::Validation(_) => EX_DATAERR,
        RepositoryError::Serialization(_) => EX_DATAERR,
        RepositoryError::NotFound { .. } => EX_NOINPUT,
        RepositoryError::ResourceNotFound(_) => EX_NOINPUT,
        RepositoryError::ConnectionFailed(_) => EX_UNAVAILABLE,
        RepositoryError::QueryFailed(_) => EX_SOFTWARE,
        RepositoryError::AlreadyExists { .. } => EX_CANTCREAT,
        RepositoryError::ThroughputExceeded(_) => EX_TEMPFAIL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_66() {
        let error = RepositoryError::NotFound {
            collection: "Users".to_string(),
            id: "use_123".to_string(),
        };
        assert_eq!(repository_error_to_exit_code(&error), 66);
    }

    #[test]
    fn test_already_exists_maps_to_73() {
        let error = RepositoryError::AlreadyExists {
            collection: "Users".to_string(),
            id: "use_123".to_string(),
        };
        assert_eq!(repository_error_to_exit_code(&error), 73);
    }

    #[test]
    fn test_invalid_input_maps_to_64() {
        let error = RepositoryError::InvalidInput("empty update".to_string());
        assert_eq!(repository_error_to_exit_code(&error), 64);
    }

    #[test]
    fn test_data_errors_map_to_65() {
        let validation = RepositoryError::Validation("bad value".to_string());
        let serialization = RepositoryError::Serialization("bad number".to_string());
        assert_eq!(repository_error_to_exit_code(&validation), 65);
        assert_eq!(repository_error_to_exit_code(&serialization), 65);
    }

    #[test]
    fn test_connection_failed_maps_to_69() {
        let error = RepositoryError::ConnectionFailed("dispatch failure".to_string());
        assert_eq!(repository_error_to_exit_code(&error), 69);
    }

    #[test]
    fn test_throughput_exceeded_maps_to_75() {
        let error = RepositoryError::ThroughputExceeded("retry later".to_string());
        assert_eq!(repository_error_to_exit_code(&error), 75);
    }

    #[test]
    fn test_remaining_variants() {
        let missing_table = RepositoryError::ResourceNotFound("Users".to_string());
        let failed = RepositoryError::QueryFailed("boom".to_string());
        assert_eq!(repository_error_to_exit_code(&missing_table), 66);
        assert_eq!(repository_error_to_exit_code(&failed), 70);
    }
}
