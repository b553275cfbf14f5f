use std::sync::OnceLock;

use regex::Regex;
use uuid::Uuid;

use crate::contract::{AddProfileRequest, ProfileServiceRequest, ValidationFailure};

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern should compile")
    })
}

/// Field-level rules for profile creation. Returns one failure per violated
/// rule; an empty list means the request is valid.
pub fn validate_add_profile(request: &AddProfileRequest) -> Vec<ValidationFailure> {
    let mut failures = Vec::new();

    if request.email.trim().is_empty() {
        failures.push(ValidationFailure::new("Email", "Email cannot be empty"));
    } else if !email_pattern().is_match(request.email.trim()) {
        failures.push(ValidationFailure::new(
            "Email",
            "Email is not a valid email address",
        ));
    }

    if request.name.trim().is_empty() {
        failures.push(ValidationFailure::new("Name", "Name cannot be empty"));
    }

    if request.profile_pic_name.trim().is_empty() {
        failures.push(ValidationFailure::new(
            "ProfilePicName",
            "ProfilePicName cannot be empty",
        ));
    }

    if request.profile_pic_base64.trim().is_empty() {
        failures.push(ValidationFailure::new(
            "ProfilePicBase64",
            "ProfilePicBase64 cannot be empty",
        ));
    }

    failures
}

pub fn validate_message_body(body: &str) -> Vec<ValidationFailure> {
    if body.trim().is_empty() {
        return vec![ValidationFailure::new("message", "message cannot be empty")];
    }

    Vec::new()
}

pub fn validate_profile_id(id: &str) -> Vec<ValidationFailure> {
    if Uuid::parse_str(id.trim()).is_err() {
        return vec![ValidationFailure::new("Id", "Id must be a valid UUID")];
    }

    Vec::new()
}

/// Envelope-level rules applied before operation dispatch.
pub fn validate_service_request(request: &ProfileServiceRequest) -> Vec<ValidationFailure> {
    let mut failures = Vec::new();

    if request.operation.trim().is_empty() {
        failures.push(ValidationFailure::new(
            "Operation",
            "Operation cannot be empty",
        ));
    }

    if request.payload.trim().is_empty() {
        failures.push(ValidationFailure::new("Payload", "Payload cannot be empty"));
    }

    failures
}
