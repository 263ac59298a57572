use super::*;
use std::sync::Arc;
use tokio_postgres::Client;
use vtt_auth::Member;
use vtt_core::ID;
use vtt_core::Unique;
use vtt_pg::*;

/// Repository trait for asset metadata operations. Reads join through
/// the worlds table so that access is scoped to the requesting owner;
/// an asset behind someone else's world simply does not resolve.
#[allow(async_fn_in_trait)]
pub trait AssetRepository {
    async fn create_asset(&self, asset: &Asset) -> Result<(), PgErr>;
    async fn get_asset(&self, id: ID<Asset>, owner: ID<Member>) -> Result<Option<Asset>, PgErr>;
}

fn asset(row: &tokio_postgres::Row) -> Asset {
    Asset::new(
        ID::from(row.get::<_, uuid::Uuid>(0)),
        ID::from(row.get::<_, uuid::Uuid>(1)),
        Provider::from_column(row.get::<_, &str>(2)),
        row.get::<_, String>(3),
        row.get::<_, String>(4),
        row.get::<_, i32>(5),
        row.get(6),
    )
}

impl AssetRepository for Arc<Client> {
    async fn create_asset(&self, asset: &Asset) -> Result<(), PgErr> {
        self.execute(
            const_format::concatcp!(
                "INSERT INTO ",
                ASSETS,
                " (id, world_id, provider, object_key, mime_type, size, created_at)
                 VALUES ($1, $2, $3, $4, $5, $6, $7)"
            ),
            &[
                &asset.id().inner(),
                &asset.world().inner(),
                &asset.provider().as_str(),
                &asset.object_key(),
                &asset.mime_type(),
                &asset.size(),
                &asset.created_at(),
            ],
        )
        .await
        .map(|_| ())
    }

    async fn get_asset(&self, id: ID<Asset>, owner: ID<Member>) -> Result<Option<Asset>, PgErr> {
        self.query_opt(
            const_format::concatcp!(
                "SELECT a.id, a.world_id, a.provider, a.object_key, a.mime_type, a.size, a.created_at
                 FROM ",
                ASSETS,
                " a JOIN ",
                WORLDS,
                " w ON w.id = a.world_id WHERE a.id = $1 AND w.owner_id = $2"
            ),
            &[&id.inner(), &owner.inner()],
        )
        .await
        .map(|opt| opt.map(|row| asset(&row)))
    }
}
