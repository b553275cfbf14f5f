use async_trait::async_trait;

/// Fire-and-forget downstream signaling. Queue addresses are resolved from
/// logical names at publish time; resolution and delivery fail independently.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn resolve_queue_url(&self, queue_name: &str) -> Result<String, String>;

    async fn publish(&self, queue_url: &str, body: &str) -> Result<(), String>;
}
