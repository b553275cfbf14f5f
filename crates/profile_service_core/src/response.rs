use serde_json::json;

use crate::contract::{ProfileRecord, ServiceResponse, StoredMessage, ValidationFailure};
use crate::outcome::{CreateProfileOutcome, GetProfileOutcome, SaveMessageOutcome};

pub const OPERATION_CREATE_PROFILE: &str = "CreateProfile";
pub const OPERATION_GET_PROFILE: &str = "GetProfile";
pub const OPERATION_SAVE_MESSAGE: &str = "SaveMessage";

pub const STATUS_OK: &str = "200";
pub const STATUS_BAD_REQUEST: &str = "400";
pub const STATUS_NOT_FOUND: &str = "404";
pub const STATUS_BACKEND_FAILURE: &str = "500";

/// Serializes validation failures in the envelope shape consumers already
/// parse: `{Status, Message, Errors: [{Property, Error}]}`.
pub fn validation_errors_json(failures: &[ValidationFailure]) -> String {
    json!({
        "Status": "Failed",
        "Message": "Validation errors occurred.",
        "Errors": failures
            .iter()
            .map(|failure| json!({"Property": failure.field, "Error": failure.reason}))
            .collect::<Vec<_>>(),
    })
    .to_string()
}

pub fn create_profile_response(outcome: CreateProfileOutcome) -> ServiceResponse<ProfileRecord> {
    match outcome {
        CreateProfileOutcome::Created(record) => ServiceResponse {
            operation: OPERATION_CREATE_PROFILE.to_string(),
            status: STATUS_OK.to_string(),
            message: "Created".to_string(),
            success: true,
            model: Some(record),
        },
        CreateProfileOutcome::ValidationFailed(failures) => ServiceResponse {
            operation: OPERATION_CREATE_PROFILE.to_string(),
            status: STATUS_BAD_REQUEST.to_string(),
            message: validation_errors_json(&failures),
            success: false,
            model: None,
        },
        CreateProfileOutcome::ObjectStoreFailure { reason, .. }
        | CreateProfileOutcome::RecordStoreFailure { reason, .. }
        | CreateProfileOutcome::NotificationFailure { reason, .. } => ServiceResponse {
            operation: OPERATION_CREATE_PROFILE.to_string(),
            status: STATUS_BACKEND_FAILURE.to_string(),
            message: reason,
            success: false,
            model: None,
        },
    }
}

pub fn get_profile_response(outcome: GetProfileOutcome) -> ServiceResponse<ProfileRecord> {
    match outcome {
        GetProfileOutcome::Found(record) => ServiceResponse {
            operation: OPERATION_GET_PROFILE.to_string(),
            status: STATUS_OK.to_string(),
            message: "Success".to_string(),
            success: true,
            model: Some(record),
        },
        GetProfileOutcome::ValidationFailed(failures) => ServiceResponse {
            operation: OPERATION_GET_PROFILE.to_string(),
            status: STATUS_BAD_REQUEST.to_string(),
            message: validation_errors_json(&failures),
            success: false,
            model: None,
        },
        GetProfileOutcome::NotFound => ServiceResponse {
            operation: OPERATION_GET_PROFILE.to_string(),
            status: STATUS_NOT_FOUND.to_string(),
            message: "Not Found".to_string(),
            success: false,
            model: None,
        },
        GetProfileOutcome::RecordStoreFailure { reason, .. } => ServiceResponse {
            operation: OPERATION_GET_PROFILE.to_string(),
            status: STATUS_BACKEND_FAILURE.to_string(),
            message: reason,
            success: false,
            model: None,
        },
    }
}

pub fn save_message_response(outcome: SaveMessageOutcome) -> ServiceResponse<StoredMessage> {
    match outcome {
        SaveMessageOutcome::Saved(message) => ServiceResponse {
            operation: OPERATION_SAVE_MESSAGE.to_string(),
            status: STATUS_OK.to_string(),
            message: "Success".to_string(),
            success: true,
            model: Some(message),
        },
        SaveMessageOutcome::ValidationFailed(failures) => ServiceResponse {
            operation: OPERATION_SAVE_MESSAGE.to_string(),
            status: STATUS_BAD_REQUEST.to_string(),
            message: validation_errors_json(&failures),
            success: false,
            model: None,
        },
        SaveMessageOutcome::RecordStoreFailure { reason, .. } => ServiceResponse {
            operation: OPERATION_SAVE_MESSAGE.to_string(),
            status: STATUS_BACKEND_FAILURE.to_string(),
            message: reason,
            success: false,
            model: None,
        },
    }
}

/// Envelope-level rejection: unknown operations, unparseable payloads, and
/// missing envelope fields all answer 400 without touching any backend.
pub fn client_error_response<T>(
    operation: impl Into<String>,
    message: impl Into<String>,
) -> ServiceResponse<T> {
    ServiceResponse {
        operation: operation.into(),
        status: STATUS_BAD_REQUEST.to_string(),
        message: message.into(),
        success: false,
        model: None,
    }
}
