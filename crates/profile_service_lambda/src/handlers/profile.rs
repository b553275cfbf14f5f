use std::time::Instant;

use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use base64::Engine;
use chrono::{DateTime, Utc};
use profile_service_core::contract::{
    AddProfileRequest, ProfileRecord, ProfileServiceRequest, ServiceResponse,
};
use profile_service_core::object_url::public_object_url;
use profile_service_core::outcome::{CreateProfileOutcome, GetProfileOutcome};
use profile_service_core::response::{
    client_error_response, create_profile_response, get_profile_response, validation_errors_json,
    OPERATION_CREATE_PROFILE, OPERATION_GET_PROFILE,
};
use profile_service_core::validation::{
    validate_add_profile, validate_profile_id, validate_service_request,
};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::adapters::notifier::Notifier;
use crate::adapters::object_store::ProfileImageStore;
use crate::adapters::record_store::{
    RecordItem, RecordStore, CREATED_AT_ATTRIBUTE, EMAIL_ATTRIBUTE, ID_ATTRIBUTE, NAME_ATTRIBUTE,
    PROFILE_PIC_URL_ATTRIBUTE,
};

/// Immutable per-process configuration for the profile operations. Shared by
/// reference across concurrent requests, never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileHandlerConfig {
    pub bucket: String,
    pub table: String,
    pub queue: String,
    pub endpoint_override: Option<String>,
    pub region: String,
}

/// Linear, short-circuiting write pipeline: validate, decode, upload the
/// picture, write the profile row, then notify. Each stage is a precondition
/// for the next; the first failure names the stage that failed and nothing
/// after it runs. Earlier side effects are not rolled back.
pub async fn create_profile(
    request: &AddProfileRequest,
    config: &ProfileHandlerConfig,
    image_store: &dyn ProfileImageStore,
    record_store: &dyn RecordStore,
    notifier: &dyn Notifier,
) -> CreateProfileOutcome {
    let started_at = Instant::now();

    let failures = validate_add_profile(request);
    if !failures.is_empty() {
        return CreateProfileOutcome::ValidationFailed(failures);
    }

    // Decoding is a precondition for the upload, so a bad payload surfaces
    // as an object store failure rather than a validation failure.
    let image_bytes = match BASE64_STANDARD.decode(request.profile_pic_base64.as_bytes()) {
        Ok(bytes) => bytes,
        Err(error) => {
            return CreateProfileOutcome::ObjectStoreFailure {
                target: config.bucket.clone(),
                reason: format!("failed to decode profile picture base64: {error}"),
            };
        }
    };

    if let Err(reason) = image_store
        .put_object(&request.profile_pic_name, &image_bytes)
        .await
    {
        log_profile_error(
            "profile_pic_upload_failed",
            json!({
                "bucket": config.bucket.clone(),
                "key": request.profile_pic_name.clone(),
                "error": reason.clone(),
            }),
        );
        return CreateProfileOutcome::ObjectStoreFailure {
            target: config.bucket.clone(),
            reason,
        };
    }

    let id = Uuid::new_v4().to_string();
    let profile_pic_url = public_object_url(
        config.endpoint_override.as_deref(),
        &config.region,
        &config.bucket,
        &request.profile_pic_name,
    );
    let created_at = Utc::now();

    let item = RecordItem::from([
        (ID_ATTRIBUTE.to_string(), id.clone()),
        (NAME_ATTRIBUTE.to_string(), request.name.clone()),
        (EMAIL_ATTRIBUTE.to_string(), request.email.clone()),
        (PROFILE_PIC_URL_ATTRIBUTE.to_string(), profile_pic_url.clone()),
        (CREATED_AT_ATTRIBUTE.to_string(), created_at.to_rfc3339()),
    ]);

    if let Err(reason) = record_store.put_item(&config.table, item).await {
        log_profile_error(
            "profile_record_write_failed",
            json!({
                "table": config.table.clone(),
                "id": id.clone(),
                "error": reason.clone(),
            }),
        );
        return CreateProfileOutcome::RecordStoreFailure {
            target: config.table.clone(),
            reason,
        };
    }

    let queue_url = match notifier.resolve_queue_url(&config.queue).await {
        Ok(value) => value,
        Err(reason) => {
            return CreateProfileOutcome::NotificationFailure {
                target: config.queue.clone(),
                reason,
            };
        }
    };

    let notification = format!("Profile created. {id}-{}-{}", request.name, request.email);
    if let Err(reason) = notifier.publish(&queue_url, &notification).await {
        return CreateProfileOutcome::NotificationFailure {
            target: config.queue.clone(),
            reason,
        };
    }

    log_profile_info(
        "profile_created",
        json!({
            "id": id.clone(),
            "duration_ms": started_at.elapsed().as_millis() as u64,
        }),
    );

    CreateProfileOutcome::Created(ProfileRecord {
        id,
        name: request.name.clone(),
        email: request.email.clone(),
        profile_pic_url,
        created_at,
    })
}

pub async fn get_profile_by_id(
    id: &str,
    config: &ProfileHandlerConfig,
    record_store: &dyn RecordStore,
) -> GetProfileOutcome {
    let failures = validate_profile_id(id);
    if !failures.is_empty() {
        return GetProfileOutcome::ValidationFailed(failures);
    }

    match record_store.get_item(&config.table, id.trim()).await {
        Err(reason) => GetProfileOutcome::RecordStoreFailure {
            target: config.table.clone(),
            reason,
        },
        Ok(None) => GetProfileOutcome::NotFound,
        Ok(Some(item)) => match profile_from_item(&item) {
            Ok(record) => GetProfileOutcome::Found(record),
            Err(reason) => GetProfileOutcome::RecordStoreFailure {
                target: config.table.clone(),
                reason,
            },
        },
    }
}

/// Entry point for one API invocation: parses the dispatch envelope, routes
/// to the requested operation, and maps the outcome to a response. Never
/// returns an error; every fault becomes a typed response.
pub async fn handle_profile_event(
    event: Value,
    config: &ProfileHandlerConfig,
    image_store: &dyn ProfileImageStore,
    record_store: &dyn RecordStore,
    notifier: &dyn Notifier,
) -> ServiceResponse<ProfileRecord> {
    let request = match serde_json::from_value::<ProfileServiceRequest>(event) {
        Ok(value) => value,
        Err(error) => {
            return client_error_response(
                OPERATION_CREATE_PROFILE,
                format!("Malformed request: {error}"),
            );
        }
    };

    log_profile_info(
        "request_received",
        json!({"operation": request.operation.clone()}),
    );

    let failures = validate_service_request(&request);
    if !failures.is_empty() {
        return client_error_response(
            request.operation.as_str(),
            validation_errors_json(&failures),
        );
    }

    match request.operation.as_str() {
        OPERATION_CREATE_PROFILE => {
            let add_request = match serde_json::from_str::<AddProfileRequest>(&request.payload) {
                Ok(value) => value,
                Err(error) => {
                    return client_error_response(
                        OPERATION_CREATE_PROFILE,
                        format!("Malformed payload: {error}"),
                    );
                }
            };
            create_profile_response(
                create_profile(&add_request, config, image_store, record_store, notifier).await,
            )
        }
        OPERATION_GET_PROFILE => get_profile_response(
            get_profile_by_id(request.payload.trim(), config, record_store).await,
        ),
        _ => client_error_response(request.operation.as_str(), "Invalid Operation"),
    }
}

fn profile_from_item(item: &RecordItem) -> Result<ProfileRecord, String> {
    let created_at_raw = required_attribute(item, CREATED_AT_ATTRIBUTE)?;
    let created_at = DateTime::parse_from_rfc3339(created_at_raw)
        .map_err(|error| format!("profile record has invalid {CREATED_AT_ATTRIBUTE}: {error}"))?
        .with_timezone(&Utc);

    Ok(ProfileRecord {
        id: required_attribute(item, ID_ATTRIBUTE)?.to_string(),
        name: required_attribute(item, NAME_ATTRIBUTE)?.to_string(),
        email: required_attribute(item, EMAIL_ATTRIBUTE)?.to_string(),
        profile_pic_url: required_attribute(item, PROFILE_PIC_URL_ATTRIBUTE)?.to_string(),
        created_at,
    })
}

fn required_attribute<'a>(item: &'a RecordItem, name: &str) -> Result<&'a str, String> {
    item.get(name)
        .map(String::as_str)
        .ok_or_else(|| format!("profile record is missing attribute {name}"))
}

fn log_profile_info(event: &str, details: Value) {
    eprintln!(
        "{}",
        json!({
            "component": "profile_api",
            "event": event,
            "timestamp": Utc::now().to_rfc3339(),
            "details": details,
        })
    );
}

fn log_profile_error(event: &str, details: Value) {
    eprintln!(
        "{}",
        json!({
            "component": "profile_api",
            "level": "error",
            "event": event,
            "timestamp": Utc::now().to_rfc3339(),
            "details": details,
        })
    );
}
