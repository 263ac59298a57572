use super::*;
use std::sync::Arc;
use tokio_postgres::Client;
use vtt_core::ID;
use vtt_core::Unique;
use vtt_pg::*;

/// Repository trait for authentication database operations.
/// Abstracts SQL from domain modules. Every email parameter is expected
/// to be lowercased by the caller before it reaches this boundary.
#[allow(async_fn_in_trait)]
pub trait AuthRepository {
    async fn exists(&self, email: &str) -> Result<bool, PgErr>;
    async fn create(&self, member: &Member, hashword: &str) -> Result<(), PgErr>;
    async fn lookup(&self, email: &str) -> Result<Option<(Member, String)>, PgErr>;
    async fn resolve(&self, id: ID<Member>) -> Result<Option<Member>, PgErr>;
    async fn touch_login(&self, id: ID<Member>) -> Result<(), PgErr>;
}

fn member(row: &tokio_postgres::Row) -> Member {
    Member::new(
        ID::from(row.get::<_, uuid::Uuid>(0)),
        row.get::<_, String>(1),
        row.get::<_, String>(2),
        row.get(3),
        row.get(4),
    )
}

impl AuthRepository for Arc<Client> {
    async fn exists(&self, email: &str) -> Result<bool, PgErr> {
        self.query_opt(
            const_format::concatcp!("SELECT 1 FROM ", USERS, " WHERE email = $1"),
            &[&email],
        )
        .await
        .map(|opt| opt.is_some())
    }

    async fn create(&self, member: &Member, hashword: &str) -> Result<(), PgErr> {
        self.execute(
            const_format::concatcp!(
                "INSERT INTO ",
                USERS,
                " (id, email, hashword, display_name, created_at) VALUES ($1, $2, $3, $4, $5)"
            ),
            &[
                &member.id().inner(),
                &member.email(),
                &hashword,
                &member.display_name(),
                &member.created_at(),
            ],
        )
        .await
        .map(|_| ())
    }

    async fn lookup(&self, email: &str) -> Result<Option<(Member, String)>, PgErr> {
        self.query_opt(
            const_format::concatcp!(
                "SELECT id, email, display_name, created_at, last_login_at, hashword FROM ",
                USERS,
                " WHERE email = $1"
            ),
            &[&email],
        )
        .await
        .map(|opt| opt.map(|row| (member(&row), row.get::<_, String>(5))))
    }

    /// Resolves a verified token subject back to a user record.
    /// `None` means the token is stale, not that something failed.
    async fn resolve(&self, id: ID<Member>) -> Result<Option<Member>, PgErr> {
        self.query_opt(
            const_format::concatcp!(
                "SELECT id, email, display_name, created_at, last_login_at FROM ",
                USERS,
                " WHERE id = $1"
            ),
            &[&id.inner()],
        )
        .await
        .map(|opt| opt.map(|row| member(&row)))
    }

    async fn touch_login(&self, id: ID<Member>) -> Result<(), PgErr> {
        self.execute(
            const_format::concatcp!("UPDATE ", USERS, " SET last_login_at = NOW() WHERE id = $1"),
            &[&id.inner()],
        )
        .await
        .map(|_| ())
    }
}
