use super::Asset;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use vtt_core::Unique;

/// Upload parameters beside the file itself.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadParams {
    pub world_id: uuid::Uuid,
    pub folder: Option<String>,
    pub filename: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub asset_id: String,
    pub object_key: String,
    pub presigned_url: String,
}

#[derive(Deserialize)]
pub struct PresignParams {
    /// Overrides the configured default expiry, in seconds.
    pub expiry: Option<u64>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetInfo {
    pub id: String,
    pub world_id: String,
    pub provider: &'static str,
    pub object_key: String,
    pub mime_type: String,
    pub size: i32,
    pub created_at: DateTime<Utc>,
}

impl From<&Asset> for AssetInfo {
    fn from(asset: &Asset) -> Self {
        Self {
            id: asset.id().to_string(),
            world_id: asset.world().to_string(),
            provider: asset.provider().as_str(),
            object_key: asset.object_key().to_string(),
            mime_type: asset.mime_type().to_string(),
            size: asset.size(),
            created_at: asset.created_at(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vtt_core::ID;

    #[test]
    fn asset_info_shape() {
        let asset = Asset::stored(
            ID::default(),
            "worlds/w/k.png".to_string(),
            "image/png".to_string(),
            10240,
        );
        let json = serde_json::to_value(AssetInfo::from(&asset)).expect("serialize");
        assert_eq!(json["mimeType"], "image/png");
        assert_eq!(json["size"], 10240);
        assert_eq!(json["provider"], "s3");
    }
}
