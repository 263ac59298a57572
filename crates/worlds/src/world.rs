use chrono::DateTime;
use chrono::Utc;
use vtt_auth::Member;
use vtt_core::ID;
use vtt_core::Unique;

/// Owned container resource. The owner is immutable after creation;
/// name uniqueness is deliberately not enforced.
#[derive(Debug, Clone)]
pub struct World {
    id: ID<Self>,
    name: String,
    description: Option<String>,
    system_id: i32,
    owner: ID<Member>,
    settings: serde_json::Value,
    cover_image_id: Option<uuid::Uuid>,
    created_at: DateTime<Utc>,
}

impl World {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: ID<Self>,
        name: String,
        description: Option<String>,
        system_id: i32,
        owner: ID<Member>,
        settings: serde_json::Value,
        cover_image_id: Option<uuid::Uuid>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            system_id,
            owner,
            settings,
            cover_image_id,
            created_at,
        }
    }
    /// A freshly created world, timestamped now.
    pub fn create(
        owner: ID<Member>,
        name: String,
        description: Option<String>,
        system_id: i32,
        settings: serde_json::Value,
        cover_image_id: Option<uuid::Uuid>,
    ) -> Self {
        Self::new(
            ID::default(),
            name,
            description,
            system_id,
            owner,
            settings,
            cover_image_id,
            Utc::now(),
        )
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
    pub fn system_id(&self) -> i32 {
        self.system_id
    }
    pub fn owner(&self) -> ID<Member> {
        self.owner
    }
    pub fn settings(&self) -> &serde_json::Value {
        &self.settings
    }
    pub fn cover_image_id(&self) -> Option<uuid::Uuid> {
        self.cover_image_id
    }
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Unique for World {
    fn id(&self) -> ID<Self> {
        self.id
    }
}

mod schema {
    use super::*;
    use vtt_pg::*;

    /// cover_image_id carries no FK: it would be circular with the assets
    /// table, which references worlds.
    impl Schema for World {
        fn name() -> &'static str {
            WORLDS
        }
        fn creates() -> &'static str {
            const_format::concatcp!(
                "CREATE TABLE IF NOT EXISTS ",
                WORLDS,
                " (
                    id             UUID PRIMARY KEY,
                    name           VARCHAR(255) NOT NULL,
                    description    VARCHAR(255),
                    system_id      INTEGER NOT NULL DEFAULT 0,
                    owner_id       UUID NOT NULL REFERENCES ",
                USERS,
                "(id),
                    settings       JSONB NOT NULL DEFAULT '{}',
                    cover_image_id UUID,
                    created_at     TIMESTAMPTZ NOT NULL
                );"
            )
        }
        fn indices() -> &'static str {
            const_format::concatcp!(
                "CREATE INDEX IF NOT EXISTS idx_worlds_owner ON ",
                WORLDS,
                " (owner_id);
                 CREATE INDEX IF NOT EXISTS idx_worlds_owner_created ON ",
                WORLDS,
                " (owner_id, created_at DESC);"
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_defaults() {
        let owner: ID<Member> = ID::default();
        let world = World::create(
            owner,
            "Shire".to_string(),
            None,
            0,
            serde_json::json!({}),
            None,
        );
        assert_eq!(world.owner(), owner);
        assert_eq!(world.system_id(), 0);
        assert!(world.description().is_none());
        assert!(world.cover_image_id().is_none());
    }
}
