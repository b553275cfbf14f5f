use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Dispatch envelope for the profile API. `payload` carries the
/// operation-specific sub-message as a serialized string, e.g. an
/// [`AddProfileRequest`] for `"CreateProfile"` or a raw profile id for
/// `"GetProfile"`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct ProfileServiceRequest {
    pub operation: String,
    pub payload: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct AddProfileRequest {
    pub name: String,
    pub email: String,
    pub profile_pic_name: String,
    pub profile_pic_base64: String,
}

/// A durably persisted profile. The id is assigned by the service, never by
/// the caller, and the record is immutable once written.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct ProfileRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    pub profile_pic_url: String,
    pub created_at: DateTime<Utc>,
}

/// Confirmation payload for a saved queue message. The generated id is the
/// canonical confirmation token returned to the caller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct StoredMessage {
    pub id: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationFailure {
    pub field: String,
    pub reason: String,
}

impl ValidationFailure {
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Response envelope shared by every operation. `status` carries the numeric
/// code as text to match the wire contract of the upstream consumers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct ServiceResponse<T> {
    pub operation: String,
    pub status: String,
    pub message: String,
    pub success: bool,
    pub model: Option<T>,
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn request_envelope_uses_pascal_case_field_names() {
        let request: ProfileServiceRequest = serde_json::from_str(
            r#"{"Operation":"CreateProfile","Payload":"{\"Name\":\"Ann\"}"}"#,
        )
        .expect("envelope should parse");

        assert_eq!(request.operation, "CreateProfile");
        assert_eq!(request.payload, r#"{"Name":"Ann"}"#);
    }

    #[test]
    fn profile_record_round_trips_with_rfc3339_timestamp() {
        let record = ProfileRecord {
            id: "7d4e5c4e-3f6a-4b2f-9f43-0a5a8c1d2e3f".to_string(),
            name: "Ann".to_string(),
            email: "ann@x.com".to_string(),
            profile_pic_url: "https://profile-pictures.s3.us-east-1.amazonaws.com/p.png"
                .to_string(),
            created_at: Utc.with_ymd_and_hms(2026, 2, 14, 9, 30, 0).unwrap(),
        };

        let json = serde_json::to_string(&record).expect("record should serialize");
        assert!(json.contains("\"CreatedAt\":\"2026-02-14T09:30:00Z\""));
        assert!(json.contains("\"ProfilePicUrl\""));

        let parsed: ProfileRecord = serde_json::from_str(&json).expect("record should parse");
        assert_eq!(parsed, record);
    }

    #[test]
    fn response_envelope_serializes_missing_model_as_null() {
        let response: ServiceResponse<ProfileRecord> = ServiceResponse {
            operation: "GetProfile".to_string(),
            status: "404".to_string(),
            message: "Not Found".to_string(),
            success: false,
            model: None,
        };

        let json = serde_json::to_string(&response).expect("response should serialize");
        assert!(json.contains("\"Model\":null"));
        assert!(json.contains("\"Status\":\"404\""));
    }
}
