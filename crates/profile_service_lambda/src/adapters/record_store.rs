use std::collections::HashMap;

use async_trait::async_trait;

/// String-attribute record, keyed by the table's partition attribute.
pub type RecordItem = HashMap<String, String>;

pub const ID_ATTRIBUTE: &str = "Id";
pub const NAME_ATTRIBUTE: &str = "Name";
pub const EMAIL_ATTRIBUTE: &str = "Email";
pub const PROFILE_PIC_URL_ATTRIBUTE: &str = "ProfilePicUrl";
pub const MESSAGE_ATTRIBUTE: &str = "Message";
pub const CREATED_AT_ATTRIBUTE: &str = "CreatedAt";

/// Structured, key-addressed durable storage. `get_item` distinguishes an
/// absent row (`Ok(None)`) from a failed lookup (`Err`).
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn put_item(&self, table: &str, item: RecordItem) -> Result<(), String>;

    async fn get_item(&self, table: &str, id: &str) -> Result<Option<RecordItem>, String>;
}
