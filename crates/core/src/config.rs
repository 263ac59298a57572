use std::time::Duration;

/// Default bearer token lifetime (7 days).
const TOKEN_TTL: Duration = Duration::from_secs(7 * 24 * 60 * 60);
/// Default presigned URL lifetime (7 days, the SigV4 maximum).
const PRESIGN_TTL: Duration = Duration::from_secs(7 * 24 * 60 * 60);
/// Default upload size ceiling (5 MiB).
const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Content types accepted by the asset upload pipeline.
/// `image/jpg` is nonstandard but tolerated since clients send it anyway.
pub const IMAGE_MIME_TYPES: &[&str] = &[
    "image/jpeg",
    "image/jpg",
    "image/png",
    "image/gif",
    "image/webp",
];

/// Immutable process configuration, built once at startup and shared by
/// reference with every service. Never read env vars anywhere else.
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub jwt_secret: String,
    pub token_ttl: Duration,
    pub presign_ttl: Duration,
    pub max_upload_bytes: usize,
    pub bucket: String,
    pub store_endpoint: String,
    pub store_access_key: String,
    pub store_secret_key: String,
    pub store_region: String,
}

impl Config {
    /// Reads configuration from the environment.
    ///
    /// # Panics
    ///
    /// Panics if `JWT_SECRET` is not set. A signing secret that silently
    /// defaults would let any client forge tokens.
    pub fn from_env() -> Self {
        Self {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string()),
            jwt_secret: std::env::var("JWT_SECRET").expect("JWT_SECRET must be set"),
            token_ttl: duration_var("TOKEN_TTL_SECS", TOKEN_TTL),
            presign_ttl: duration_var("PRESIGN_TTL_SECS", PRESIGN_TTL),
            max_upload_bytes: upload_ceiling(
                std::env::var("MAX_UPLOAD_BYTES")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(MAX_UPLOAD_BYTES),
            ),
            bucket: std::env::var("MINIO_BUCKET_NAME").unwrap_or_else(|_| "openvtt".to_string()),
            store_endpoint: std::env::var("MINIO_ENDPOINT")
                .unwrap_or_else(|_| "http://localhost:9000".to_string()),
            store_access_key: std::env::var("MINIO_ACCESS_KEY")
                .unwrap_or_else(|_| "minioadmin".to_string()),
            store_secret_key: std::env::var("MINIO_SECRET_KEY")
                .unwrap_or_else(|_| "minioadmin".to_string()),
            store_region: std::env::var("MINIO_REGION").unwrap_or_else(|_| "us-east-1".to_string()),
        }
    }

    /// Whether the declared content type is in the image allow-list.
    pub fn allows_mime(&self, mime: &str) -> bool {
        IMAGE_MIME_TYPES.contains(&mime)
    }
}

/// Asset sizes persist in an INTEGER column, so the ceiling is capped at
/// what that column can record regardless of what the operator sets.
fn upload_ceiling(bytes: usize) -> usize {
    bytes.min(i32::MAX as usize)
}

fn duration_var(name: &str, fallback: Duration) -> Duration {
    std::env::var(name)
        .ok()
        .and_then(|s| s.parse().ok())
        .map(Duration::from_secs)
        .unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config {
            bind_addr: "127.0.0.1:0".to_string(),
            jwt_secret: "test-secret".to_string(),
            token_ttl: TOKEN_TTL,
            presign_ttl: PRESIGN_TTL,
            max_upload_bytes: MAX_UPLOAD_BYTES,
            bucket: "openvtt".to_string(),
            store_endpoint: "http://localhost:9000".to_string(),
            store_access_key: "minioadmin".to_string(),
            store_secret_key: "minioadmin".to_string(),
            store_region: "us-east-1".to_string(),
        }
    }

    #[test]
    fn images_are_allowed() {
        let config = config();
        assert!(config.allows_mime("image/png"));
        assert!(config.allows_mime("image/jpg"));
        assert!(config.allows_mime("image/webp"));
    }
    #[test]
    fn non_images_are_rejected() {
        let config = config();
        assert!(!config.allows_mime("application/pdf"));
        assert!(!config.allows_mime("text/html"));
        assert!(!config.allows_mime("image/svg+xml"));
    }
    #[test]
    fn default_ceiling_is_five_mib() {
        assert_eq!(config().max_upload_bytes, 5 * 1024 * 1024);
    }
    #[test]
    fn ceiling_never_exceeds_size_column() {
        assert_eq!(upload_ceiling(usize::MAX), i32::MAX as usize);
        assert_eq!(upload_ceiling(MAX_UPLOAD_BYTES), MAX_UPLOAD_BYTES);
    }
}
