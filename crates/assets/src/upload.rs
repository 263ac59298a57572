use actix_multipart::Multipart;
use futures::TryStreamExt;
use vtt_core::AppError;
use vtt_core::Config;

/// An upload as received from the wire: the original filename, the
/// declared content type, and the raw bytes.
pub struct Upload {
    pub original_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl Upload {
    /// Policy checks, run before any storage I/O.
    pub fn validate(&self, config: &Config) -> Result<(), AppError> {
        if self.bytes.len() > config.max_upload_bytes {
            return Err(AppError::bad_request("file size exceeds upload limit"));
        }
        if !config.allows_mime(&self.mime_type) {
            return Err(AppError::bad_request("only image files are allowed"));
        }
        Ok(())
    }
}

/// Drains the multipart stream looking for the `file` part.
///
/// Returns `Ok(None)` when the payload carries no file. The reader stops
/// accumulating as soon as the byte count crosses the ceiling, so an
/// oversized upload is rejected without buffering the whole body and
/// without touching either store.
pub async fn receive(payload: &mut Multipart, max_bytes: usize) -> Result<Option<Upload>, AppError> {
    while let Some(mut field) = payload
        .try_next()
        .await
        .map_err(|_| AppError::bad_request("malformed multipart payload"))?
    {
        if field.name() != "file" {
            continue;
        }
        let original_name = field
            .content_disposition()
            .get_filename()
            .unwrap_or("file")
            .to_string();
        let mime_type = field
            .content_type()
            .map(|m| m.to_string())
            .unwrap_or_else(|| "application/octet-stream".to_string());
        let mut bytes = Vec::new();
        while let Some(chunk) = field
            .try_next()
            .await
            .map_err(|_| AppError::bad_request("malformed multipart payload"))?
        {
            if bytes.len() + chunk.len() > max_bytes {
                return Err(AppError::bad_request("file size exceeds upload limit"));
            }
            bytes.extend_from_slice(&chunk);
        }
        return Ok(Some(Upload {
            original_name,
            mime_type,
            bytes,
        }));
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config {
            bind_addr: "127.0.0.1:0".to_string(),
            jwt_secret: "test-secret".to_string(),
            token_ttl: std::time::Duration::from_secs(60),
            presign_ttl: std::time::Duration::from_secs(60),
            max_upload_bytes: 5 * 1024 * 1024,
            bucket: "openvtt".to_string(),
            store_endpoint: "http://localhost:9000".to_string(),
            store_access_key: "minioadmin".to_string(),
            store_secret_key: "minioadmin".to_string(),
            store_region: "us-east-1".to_string(),
        }
    }

    fn upload(size: usize, mime: &str) -> Upload {
        Upload {
            original_name: "map.png".to_string(),
            mime_type: mime.to_string(),
            bytes: vec![0u8; size],
        }
    }

    #[test]
    fn small_png_passes() {
        assert!(upload(10 * 1024, "image/png").validate(&config()).is_ok());
    }
    #[test]
    fn six_mib_rejected() {
        let result = upload(6 * 1024 * 1024, "image/png").validate(&config());
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }
    #[test]
    fn exactly_at_ceiling_passes() {
        assert!(
            upload(5 * 1024 * 1024, "image/png")
                .validate(&config())
                .is_ok()
        );
    }
    #[test]
    fn pdf_rejected() {
        let result = upload(1024, "application/pdf").validate(&config());
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }
    #[test]
    fn jpg_variant_tolerated() {
        assert!(upload(1024, "image/jpg").validate(&config()).is_ok());
    }
}
