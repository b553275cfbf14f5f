pub const DEFAULT_REGION: &str = "us-east-1";

/// Public address of a stored object, computed without a round trip to the
/// object store. An endpoint override (LocalStack-style deployments) takes
/// precedence over the regional virtual-hosted form.
pub fn public_object_url(
    endpoint_override: Option<&str>,
    region: &str,
    bucket: &str,
    key: &str,
) -> String {
    match endpoint_override {
        Some(endpoint) if !endpoint.trim().is_empty() => {
            format!("{}/{bucket}/{key}", endpoint.trim_end_matches('/'))
        }
        _ => format!("https://{bucket}.s3.{region}.amazonaws.com/{key}"),
    }
}
