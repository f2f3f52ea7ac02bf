//! DynamoDB error mapping.
//!
//! Maps AWS SDK errors to `RepositoryError` from `dynacrud_core::storage`,
//! keeping the failure category DynamoDB reported.

use std::error::Error;
use std::fmt::Debug;

use aws_sdk_dynamodb::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_dynamodb::operation::delete_item::DeleteItemError;
use aws_sdk_dynamodb::operation::get_item::GetItemError;
use aws_sdk_dynamodb::operation::put_item::PutItemError;
use aws_sdk_dynamodb::operation::query::QueryError;
use aws_sdk_dynamodb::operation::scan::ScanError;
use aws_sdk_dynamodb::operation::update_item::UpdateItemError;
use dynacrud_core::storage::RepositoryError;

/// Classify a DynamoDB error code into a repository error.
///
/// Pure so it can be tested without building SDK error values.
pub fn classify_error_code(code: Option<&str>, message: &str) -> RepositoryError {
    match code {
        Some("ResourceNotFoundException") => RepositoryError::ResourceNotFound(message.to_string()),
        Some("ProvisionedThroughputExceededException")
        | Some("RequestLimitExceeded")
        | Some("ThrottlingException") => RepositoryError::ThroughputExceeded(message.to_string()),
        Some("ValidationException") | Some("SerializationException") => {
            RepositoryError::Validation(message.to_string())
        }
        Some(code) => RepositoryError::QueryFailed(format!("{}: {}", code, message)),
        None => RepositoryError::QueryFailed(message.to_string()),
    }
}

/// Map a GetItem SDK error to RepositoryError.
pub fn map_get_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<GetItemError, R>,
) -> RepositoryError {
    map_sdk_error(err, |service| classify(&service))
}

/// Map a Query SDK error to RepositoryError.
pub fn map_query_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<QueryError, R>,
) -> RepositoryError {
    map_sdk_error(err, |service| classify(&service))
}

/// Map a Scan SDK error to RepositoryError.
pub fn map_scan_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<ScanError, R>,
) -> RepositoryError {
    map_sdk_error(err, |service| classify(&service))
}

/// Map a PutItem SDK error to RepositoryError.
///
/// A failed `attribute_not_exists` guard means the generated ID collided.
pub fn map_put_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<PutItemError, R>,
    collection: &str,
    id: &str,
) -> RepositoryError {
    map_sdk_error(err, |service| {
        if service.is_conditional_check_failed_exception() {
            RepositoryError::AlreadyExists {
                collection: collection.to_string(),
                id: id.to_string(),
            }
        } else {
            classify(&service)
        }
    })
}

/// Map an UpdateItem SDK error to RepositoryError.
///
/// A failed `attribute_exists` guard means there was no record to update.
pub fn map_update_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<UpdateItemError, R>,
    collection: &str,
    id: &str,
) -> RepositoryError {
    map_sdk_error(err, |service| {
        if service.is_conditional_check_failed_exception() {
            RepositoryError::NotFound {
                collection: collection.to_string(),
                id: id.to_string(),
            }
        } else {
            classify(&service)
        }
    })
}

/// Map a DeleteItem SDK error to RepositoryError.
pub fn map_delete_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<DeleteItemError, R>,
) -> RepositoryError {
    map_sdk_error(err, |service| classify(&service))
}

fn map_sdk_error<E, R>(
    err: SdkError<E, R>,
    map_service: impl FnOnce(E) -> RepositoryError,
) -> RepositoryError
where
    E: Error + Send + Sync + 'static,
    R: Debug + Send + Sync + 'static,
{
    match err {
        SdkError::ServiceError(context) => map_service(context.into_err()),
        err @ (SdkError::DispatchFailure(_)
        | SdkError::TimeoutError(_)
        | SdkError::ResponseError(_)) => {
            RepositoryError::ConnectionFailed(DisplayErrorContext(&err).to_string())
        }
        err => RepositoryError::QueryFailed(DisplayErrorContext(&err).to_string()),
    }
}

fn classify<E: ProvideErrorMetadata + Error>(err: &E) -> RepositoryError {
    let message = err
        .message()
        .map(str::to_string)
        .unwrap_or_else(|| err.to_string());
    classify_error_code(err.code(), &message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_table() {
        assert_eq!(
            classify_error_code(
                Some("ResourceNotFoundException"),
                "Requested resource not found"
            ),
            RepositoryError::ResourceNotFound("Requested resource not found".to_string())
        );
    }

    #[test]
    fn test_throttling_codes() {
        for code in [
            "ProvisionedThroughputExceededException",
            "RequestLimitExceeded",
            "ThrottlingException",
        ] {
            assert!(matches!(
                classify_error_code(Some(code), "slow down"),
                RepositoryError::ThroughputExceeded(_)
            ));
        }
    }

    #[test]
    fn test_validation() {
        assert_eq!(
            classify_error_code(
                Some("ValidationException"),
                "One or more parameter values were invalid"
            ),
            RepositoryError::Validation("One or more parameter values were invalid".to_string())
        );
    }

    #[test]
    fn test_unknown_code_keeps_code_in_message() {
        assert_eq!(
            classify_error_code(Some("InternalServerError"), "oops"),
            RepositoryError::QueryFailed("InternalServerError: oops".to_string())
        );
    }

    #[test]
    fn test_missing_code() {
        assert_eq!(
            classify_error_code(None, "unhandled error"),
            RepositoryError::QueryFailed("unhandled error".to_string())
        );
    }
}
