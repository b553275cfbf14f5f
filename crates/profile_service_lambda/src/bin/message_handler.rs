use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use profile_service_lambda::adapters::record_store::{RecordItem, RecordStore, ID_ATTRIBUTE};
use profile_service_lambda::handlers::message::{handle_message_batch, MessageHandlerConfig};
use serde_json::Value;

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

async fn handle_request(event: LambdaEvent<Value>) -> Result<Value, Error> {
    let bodies = decode_sqs_record_bodies(&event.payload)?;

    let config = MessageHandlerConfig {
        table: std::env::var("MESSAGE_TABLE")
            .map_err(|_| Error::from("MESSAGE_TABLE must be configured"))?,
    };

    let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let record_store = DynamoDbRecordStore {
        dynamodb_client: aws_sdk_dynamodb::Client::new(&aws_config),
    };

    let responses = handle_message_batch(&bodies, &config, &record_store).await;

    serde_json::to_value(responses)
        .map_err(|error| Error::from(format!("failed to serialize batch response: {error}")))
}

fn decode_sqs_record_bodies(event: &Value) -> Result<Vec<String>, Error> {
    let records = event
        .get("Records")
        .and_then(Value::as_array)
        .ok_or_else(|| Error::from("SQS event must include Records array"))?;

    let mut bodies = Vec::with_capacity(records.len());
    for record in records {
        let body = record
            .get("body")
            .and_then(Value::as_str)
            .ok_or_else(|| Error::from("SQS record body must be a string"))?;
        bodies.push(body.to_string());
    }

    Ok(bodies)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    lambda_runtime::run(service_fn(handle_request)).await
}
