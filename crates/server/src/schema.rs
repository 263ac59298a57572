use tokio_postgres::Client;
use vtt_assets::Asset;
use vtt_auth::Member;
use vtt_pg::PgErr;
use vtt_pg::Schema;
use vtt_worlds::World;

/// Creates tables and indices for every persistent entity. Idempotent:
/// all DDL is IF NOT EXISTS, so startup can run it unconditionally.
/// Ordered leaf-first because worlds references users and assets
/// references worlds.
pub async fn migrate(client: &Client) -> Result<(), PgErr> {
    log::info!("running schema migration");
    client.batch_execute(Member::creates()).await?;
    client.batch_execute(World::creates()).await?;
    client.batch_execute(Asset::creates()).await?;
    client.batch_execute(Member::indices()).await?;
    client.batch_execute(World::indices()).await?;
    client.batch_execute(Asset::indices()).await?;
    Ok(())
}
