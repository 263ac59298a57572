use super::World;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use vtt_core::Unique;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWorldRequest {
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub system_id: i32,
    pub settings: Option<serde_json::Value>,
    pub cover_image_id: Option<uuid::Uuid>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorldInfo {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub system_id: i32,
    pub owner_id: String,
    pub settings: serde_json::Value,
    pub cover_image_id: Option<uuid::Uuid>,
    pub created_at: DateTime<Utc>,
}

impl From<&World> for WorldInfo {
    fn from(world: &World) -> Self {
        Self {
            id: world.id().to_string(),
            name: world.name().to_string(),
            description: world.description().map(str::to_string),
            system_id: world.system_id(),
            owner_id: world.owner().to_string(),
            settings: world.settings().clone(),
            cover_image_id: world.cover_image_id(),
            created_at: world.created_at(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vtt_core::ID;

    #[test]
    fn world_info_exposes_owner() {
        let owner = ID::default();
        let world = World::create(
            owner,
            "Shire".to_string(),
            None,
            0,
            serde_json::json!({}),
            None,
        );
        let info = WorldInfo::from(&world);
        assert_eq!(info.owner_id, owner.to_string());
        assert_eq!(info.system_id, 0);
    }
    #[test]
    fn create_request_defaults_system_id() {
        let req: CreateWorldRequest = serde_json::from_str(r#"{"name": "Shire"}"#).expect("parse");
        assert_eq!(req.system_id, 0);
        assert!(req.settings.is_none());
    }
}
