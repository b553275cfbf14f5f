use crate::contract::{ProfileRecord, StoredMessage, ValidationFailure};

/// Result of the profile creation pipeline. Exactly one variant is produced
/// per request; `target` names the backend resource (bucket, table, or queue)
/// and `reason` carries the backend-supplied description. Consumers match
/// exhaustively, there is no catch-all.
#[derive(Debug, Clone, PartialEq)]
pub enum CreateProfileOutcome {
    Created(ProfileRecord),
    ValidationFailed(Vec<ValidationFailure>),
    ObjectStoreFailure { target: String, reason: String },
    RecordStoreFailure { target: String, reason: String },
    NotificationFailure { target: String, reason: String },
}

/// Result of a profile lookup. `NotFound` means the lookup itself succeeded
/// but no row matched, which is distinct from `RecordStoreFailure`.
#[derive(Debug, Clone, PartialEq)]
pub enum GetProfileOutcome {
    Found(ProfileRecord),
    ValidationFailed(Vec<ValidationFailure>),
    NotFound,
    RecordStoreFailure { target: String, reason: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum SaveMessageOutcome {
    Saved(StoredMessage),
    ValidationFailed(Vec<ValidationFailure>),
    RecordStoreFailure { target: String, reason: String },
}
