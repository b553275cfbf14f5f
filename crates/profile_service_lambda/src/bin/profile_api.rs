use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_s3::primitives::ByteStream;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use profile_service_core::object_url::DEFAULT_REGION;
use profile_service_lambda::adapters::notifier::Notifier;
use profile_service_lambda::adapters::object_store::ProfileImageStore;
use profile_service_lambda::adapters::record_store::{RecordItem, RecordStore, ID_ATTRIBUTE};
use profile_service_lambda::handlers::profile::{handle_profile_event, ProfileHandlerConfig};
use serde_json::Value;

struct S3ProfileImageStore {
    bucket: String,
    s3_client: aws_sdk_s3::Client,
}

#[async_trait]
impl ProfileImageStore for S3ProfileImageStore {
    async fn put_object(&self, key: &str, body: &[u8]) -> Result<(), String> {
        self.s3_client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(ByteStream::from(body.to_vec()))
            .send()
            .await
            .map(|_| ())
            .map_err(|error| format!("failed to write object to s3: {error}"))
    }
}

struct DynamoDbRecordStore {
    dynamodb_client: aws_sdk_dynamodb::Client,
}

#[async_trait]
impl RecordStore for DynamoDbRecordStore {
    async fn put_item(&self, table: &str, item: RecordItem) -> Result<(), String> {
        let mut request = self.dynamodb_client.put_item().table_name(table);
        for (name, value) in item {
            request = request.item(name, AttributeValue::S(value));
        }

        request
            .send()
            .await
            .map(|_| ())
            .map_err(|error| format!("failed to put item to dynamodb: {error}"))
    }

    async fn get_item(&self, table: &str, id: &str) -> Result<Option<RecordItem>, String> {
        let response = self
            .dynamodb_client
            .get_item()
            .table_name(table)
            .key(ID_ATTRIBUTE, AttributeValue::S(id.to_string()))
            .send()
            .await
            .map_err(|error| format!("failed to read item from dynamodb: {error}"))?;

        let Some(item) = response.item else {
            return Ok(None);
        };

        let mut record = RecordItem::new();
        for (name, value) in item {
            let text = value
                .as_s()
                .map_err(|_| format!("attribute {name} is not a string"))?
                .clone();
            record.insert(name, text);
        }

        Ok(Some(record))
    }
}

struct SqsNotifier {
    sqs_client: aws_sdk_sqs::Client,
}

#[async_trait]
impl Notifier for SqsNotifier {
    async fn resolve_queue_url(&self, queue_name: &str) -> Result<String, String> {
        let response = self
            .sqs_client
            .get_queue_url()
            .queue_name(queue_name)
            .send()
            .await
            .map_err(|error| format!("failed to resolve queue url: {error}"))?;

        response
            .queue_url()
            .map(str::to_string)
            .ok_or_else(|| format!("queue url missing for queue {queue_name}"))
    }

    async fn publish(&self, queue_url: &str, body: &str) -> Result<(), String> {
        self.sqs_client
            .send_message()
            .queue_url(queue_url)
            .message_body(body)
            .send()
            .await
            .map(|_| ())
            .map_err(|error| format!("failed to send message to queue: {error}"))
    }
}

async fn handle_request(event: LambdaEvent<Value>) -> Result<Value, Error> {
    let config = ProfileHandlerConfig {
        bucket: std::env::var("PROFILE_BUCKET")
            .map_err(|_| Error::from("PROFILE_BUCKET must be configured"))?,
        table: std::env::var("PROFILE_TABLE")
            .map_err(|_| Error::from("PROFILE_TABLE must be configured"))?,
        queue: std::env::var("PROFILE_QUEUE")
            .map_err(|_| Error::from("PROFILE_QUEUE must be configured"))?,
        endpoint_override: endpoint_override_from(std::env::var("AWS_ENDPOINT_URL").ok()),
        region: resolve_region(
            std::env::var("AWS_REGION").ok(),
            std::env::var("AWS_DEFAULT_REGION").ok(),
        ),
    };

    let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let image_store = S3ProfileImageStore {
        bucket: config.bucket.clone(),
        s3_client: aws_sdk_s3::Client::new(&aws_config),
    };
    let record_store = DynamoDbRecordStore {
        dynamodb_client: aws_sdk_dynamodb::Client::new(&aws_config),
    };
    let notifier = SqsNotifier {
        sqs_client: aws_sdk_sqs::Client::new(&aws_config),
    };

    let response =
        handle_profile_event(event.payload, &config, &image_store, &record_store, &notifier).await;

    serde_json::to_value(response)
        .map_err(|error| Error::from(format!("failed to serialize api response: {error}")))
}

fn endpoint_override_from(value: Option<String>) -> Option<String> {
    value.filter(|endpoint| !endpoint.trim().is_empty())
}

fn resolve_region(region: Option<String>, default_region: Option<String>) -> String {
    region
        .or(default_region)
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_REGION.to_string())
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    lambda_runtime::run(service_fn(handle_request)).await
}
