use super::*;
use std::sync::Arc;
use tokio_postgres::Client;
use tokio_postgres::types::Json;
use tokio_postgres::types::ToSql;
use vtt_auth::Member;
use vtt_core::ID;
use vtt_core::Unique;
use vtt_pg::*;

const WORLD_COLUMNS: &str =
    "id, name, description, system_id, owner_id, settings, cover_image_id, created_at";

/// Repository trait for world database operations. Every read and write
/// is predicate-scoped on the owner; ownership is enforced here, not by
/// locks or by the callers.
#[allow(async_fn_in_trait)]
pub trait WorldRepository {
    async fn create(&self, world: &World) -> Result<(), PgErr>;
    async fn list(&self, owner: ID<Member>, query: &ListWorlds, page: Page)
    -> Result<Vec<World>, PgErr>;
    async fn get(&self, id: ID<World>, owner: ID<Member>) -> Result<Option<World>, PgErr>;
    async fn delete(&self, id: ID<World>, owner: ID<Member>) -> Result<u64, PgErr>;
}

fn world(row: &tokio_postgres::Row) -> World {
    World::new(
        ID::from(row.get::<_, uuid::Uuid>(0)),
        row.get::<_, String>(1),
        row.get::<_, Option<String>>(2),
        row.get::<_, i32>(3),
        ID::from(row.get::<_, uuid::Uuid>(4)),
        row.get::<_, Json<serde_json::Value>>(5).0,
        row.get::<_, Option<uuid::Uuid>>(6),
        row.get(7),
    )
}

impl WorldRepository for Arc<Client> {
    async fn create(&self, world: &World) -> Result<(), PgErr> {
        self.execute(
            const_format::concatcp!(
                "INSERT INTO ",
                WORLDS,
                " (id, name, description, system_id, owner_id, settings, cover_image_id, created_at)
                 VALUES ($1, $2, $3, $4, $5, $6, $7, $8)"
            ),
            &[
                &world.id().inner(),
                &world.name(),
                &world.description(),
                &world.system_id(),
                &world.owner().inner(),
                &Json(world.settings()),
                &world.cover_image_id(),
                &world.created_at(),
            ],
        )
        .await
        .map(|_| ())
    }

    /// Builds the filter conjunction dynamically, but only from fixed
    /// fragments: the owner anchor, an optional system_id equality, and
    /// an optional escaped ILIKE pattern. The ORDER BY fragment comes
    /// from the closed [`ListWorlds::order_by`] mapping.
    async fn list(
        &self,
        owner: ID<Member>,
        query: &ListWorlds,
        page: Page,
    ) -> Result<Vec<World>, PgErr> {
        let owner_id = owner.inner();
        let system_id = query.system_id;
        let pattern = query.search_pattern();
        let mut sql = format!(
            "SELECT {} FROM {} WHERE owner_id = $1",
            WORLD_COLUMNS, WORLDS
        );
        let mut params: Vec<&(dyn ToSql + Sync)> = vec![&owner_id];
        if let Some(ref system_id) = system_id {
            sql.push_str(&format!(" AND system_id = ${}", params.len() + 1));
            params.push(system_id);
        }
        if let Some(ref pattern) = pattern {
            sql.push_str(&format!(" AND name ILIKE ${}", params.len() + 1));
            params.push(pattern);
        }
        sql.push_str(query.order_by());
        sql.push_str(&format!(
            " LIMIT ${} OFFSET ${}",
            params.len() + 1,
            params.len() + 2
        ));
        params.push(&page.limit);
        params.push(&page.offset);
        self.query(&sql, &params)
            .await
            .map(|rows| rows.iter().map(world).collect())
    }

    async fn get(&self, id: ID<World>, owner: ID<Member>) -> Result<Option<World>, PgErr> {
        self.query_opt(
            const_format::concatcp!(
                "SELECT ",
                WORLD_COLUMNS,
                " FROM ",
                WORLDS,
                " WHERE id = $1 AND owner_id = $2"
            ),
            &[&id.inner(), &owner.inner()],
        )
        .await
        .map(|opt| opt.map(|row| world(&row)))
    }

    /// Deletes the world scoped to (id, owner). Dependent asset rows go
    /// with it in the same statement via the FK cascade, so a crash can
    /// never leave orphaned asset rows visible. Returns the number of
    /// world rows removed; callers deliberately do not distinguish
    /// "not yours" from "not there".
    async fn delete(&self, id: ID<World>, owner: ID<Member>) -> Result<u64, PgErr> {
        self.execute(
            const_format::concatcp!("DELETE FROM ", WORLDS, " WHERE id = $1 AND owner_id = $2"),
            &[&id.inner(), &owner.inner()],
        )
        .await
    }
}
