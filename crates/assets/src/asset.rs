use chrono::DateTime;
use chrono::Utc;
use vtt_core::ID;
use vtt_core::Unique;
use vtt_worlds::World;

/// Where an asset's blob lives. Stored as text with a CHECK constraint
/// rather than a pg enum so migration stays a single idempotent batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    Local,
    S3,
}

impl Provider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::S3 => "s3",
        }
    }

    /// Lenient read-side conversion. A value outside the CHECK set means
    /// schema drift or a manual row edit; reads degrade to [`Provider::S3`]
    /// with a warning instead of panicking in the row mapper.
    pub fn from_column(s: &str) -> Self {
        Self::try_from(s).unwrap_or_else(|e| {
            log::warn!("{}, treating as s3", e);
            Self::S3
        })
    }
}

impl TryFrom<&str> for Provider {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "local" => Ok(Self::Local),
            "s3" => Ok(Self::S3),
            other => Err(format!("unknown asset provider: {}", other)),
        }
    }
}

/// Metadata record for one stored blob. `size` is the actual received
/// byte count, not the caller's declared length.
#[derive(Debug, Clone)]
pub struct Asset {
    id: ID<Self>,
    world: ID<World>,
    provider: Provider,
    object_key: String,
    mime_type: String,
    size: i32,
    created_at: DateTime<Utc>,
}

impl Asset {
    pub fn new(
        id: ID<Self>,
        world: ID<World>,
        provider: Provider,
        object_key: String,
        mime_type: String,
        size: i32,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            world,
            provider,
            object_key,
            mime_type,
            size,
            created_at,
        }
    }
    /// A freshly stored asset, timestamped now.
    pub fn stored(world: ID<World>, object_key: String, mime_type: String, size: i32) -> Self {
        Self::new(
            ID::default(),
            world,
            Provider::S3,
            object_key,
            mime_type,
            size,
            Utc::now(),
        )
    }
    pub fn world(&self) -> ID<World> {
        self.world
    }
    pub fn provider(&self) -> Provider {
        self.provider
    }
    pub fn object_key(&self) -> &str {
        &self.object_key
    }
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }
    pub fn size(&self) -> i32 {
        self.size
    }
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Unique for Asset {
    fn id(&self) -> ID<Self> {
        self.id
    }
}

mod schema {
    use super::*;
    use vtt_pg::*;

    /// ON DELETE CASCADE makes world deletion and dependent-asset removal
    /// one atomic statement; blob bodies are not touched by that path.
    impl Schema for Asset {
        fn name() -> &'static str {
            ASSETS
        }
        fn creates() -> &'static str {
            const_format::concatcp!(
                "CREATE TABLE IF NOT EXISTS ",
                ASSETS,
                " (
                    id         UUID PRIMARY KEY,
                    world_id   UUID NOT NULL REFERENCES ",
                WORLDS,
                "(id) ON DELETE CASCADE,
                    provider   VARCHAR(16) NOT NULL CHECK (provider IN ('local', 's3')),
                    object_key VARCHAR(255) NOT NULL,
                    mime_type  VARCHAR(255) NOT NULL,
                    size       INTEGER NOT NULL,
                    created_at TIMESTAMPTZ NOT NULL,
                    UNIQUE (provider, object_key)
                );"
            )
        }
        fn indices() -> &'static str {
            const_format::concatcp!(
                "CREATE INDEX IF NOT EXISTS idx_assets_world ON ",
                ASSETS,
                " (world_id);"
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_round_trip() {
        assert_eq!(Provider::try_from("s3"), Ok(Provider::S3));
        assert_eq!(Provider::try_from("local"), Ok(Provider::Local));
        assert_eq!(Provider::S3.as_str(), "s3");
        assert!(Provider::try_from("gcs").is_err());
    }
    #[test]
    fn unknown_provider_column_degrades_to_s3() {
        assert_eq!(Provider::from_column("gcs"), Provider::S3);
        assert_eq!(Provider::from_column("local"), Provider::Local);
        assert_eq!(Provider::from_column("s3"), Provider::S3);
    }
    #[test]
    fn stored_asset_defaults_to_s3() {
        let asset = Asset::stored(
            ID::default(),
            "worlds/w/k.png".to_string(),
            "image/png".to_string(),
            10240,
        );
        assert_eq!(asset.provider(), Provider::S3);
        assert_eq!(asset.size(), 10240);
    }
}
