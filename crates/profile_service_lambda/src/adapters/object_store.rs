use async_trait::async_trait;

/// Binary blob storage for profile pictures. Implementations hold their
/// bucket as construction-time configuration.
#[async_trait]
pub trait ProfileImageStore: Send + Sync {
    async fn put_object(&self, key: &str, body: &[u8]) -> Result<(), String>;
}
