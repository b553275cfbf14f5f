use chrono::Utc;
use futures::future::join_all;
use profile_service_core::contract::{ServiceResponse, StoredMessage};
use profile_service_core::outcome::SaveMessageOutcome;
use profile_service_core::response::save_message_response;
use profile_service_core::validation::validate_message_body;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::adapters::record_store::{
    RecordItem, RecordStore, CREATED_AT_ATTRIBUTE, ID_ATTRIBUTE, MESSAGE_ATTRIBUTE,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageHandlerConfig {
    pub table: String,
}

/// Persists one queue message under a generated id. The id is the durable
/// confirmation token returned to the caller, not the raw body.
pub async fn save_message(
    body: &str,
    config: &MessageHandlerConfig,
    record_store: &dyn RecordStore,
) -> SaveMessageOutcome {
    let failures = validate_message_body(body);
    if !failures.is_empty() {
        return SaveMessageOutcome::ValidationFailed(failures);
    }

    let id = Uuid::new_v4().to_string();
    let created_at = Utc::now();

    let item = RecordItem::from([
        (ID_ATTRIBUTE.to_string(), id.clone()),
        (MESSAGE_ATTRIBUTE.to_string(), body.to_string()),
        (CREATED_AT_ATTRIBUTE.to_string(), created_at.to_rfc3339()),
    ]);

    if let Err(reason) = record_store.put_item(&config.table, item).await {
        log_message_error(
            "message_write_failed",
            json!({"table": config.table.clone(), "error": reason.clone()}),
        );
        return SaveMessageOutcome::RecordStoreFailure {
            target: config.table.clone(),
            reason,
        };
    }

    log_message_info("message_saved", json!({"id": id.clone()}));

    SaveMessageOutcome::Saved(StoredMessage {
        id,
        body: body.to_string(),
        created_at,
    })
}

/// Fans one queue batch out across independent save operations and joins the
/// results. Every record yields exactly one response envelope in input
/// order; one record's failure never short-circuits the others.
pub async fn handle_message_batch(
    bodies: &[String],
    config: &MessageHandlerConfig,
    record_store: &dyn RecordStore,
) -> Vec<ServiceResponse<StoredMessage>> {
    join_all(bodies.iter().map(|body| async move {
        save_message_response(save_message(body, config, record_store).await)
    }))
    .await
}

fn log_message_info(event: &str, details: Value) {
    eprintln!(
        "{}",
        json!({
            "component": "message_handler",
            "event": event,
            "timestamp": Utc::now().to_rfc3339(),
            "details": details,
        })
    );
}

fn log_message_error(event: &str, details: Value) {
    eprintln!(
        "{}",
        json!({
            "component": "message_handler",
            "level": "error",
            "event": event,
            "timestamp": Utc::now().to_rfc3339(),
            "details": details,
        })
    );
}
