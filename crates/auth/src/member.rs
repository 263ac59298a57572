use chrono::DateTime;
use chrono::Utc;
use vtt_core::ID;
use vtt_core::Unique;

/// Registered user with verified identity.
///
/// The password hash is not a field here: it is a database-only value
/// that never crosses the repository boundary attached to a `Member`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    id: ID<Self>,
    email: String,
    display_name: String,
    created_at: DateTime<Utc>,
    last_login_at: Option<DateTime<Utc>>,
}

impl Member {
    pub fn new(
        id: ID<Self>,
        email: String,
        display_name: String,
        created_at: DateTime<Utc>,
        last_login_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            email,
            display_name,
            created_at,
            last_login_at,
        }
    }
    /// A freshly registered member, timestamped now.
    pub fn register(email: String, display_name: String) -> Self {
        Self::new(ID::default(), email, display_name, Utc::now(), None)
    }
    pub fn email(&self) -> &str {
        &self.email
    }
    pub fn display_name(&self) -> &str {
        &self.display_name
    }
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
    pub fn last_login_at(&self) -> Option<DateTime<Utc>> {
        self.last_login_at
    }
}

impl Unique for Member {
    fn id(&self) -> ID<Self> {
        self.id
    }
}

mod schema {
    use super::*;
    use vtt_pg::*;

    /// Schema implementation for Member (users table).
    /// Note: hashword is a database-only field, not part of Member.
    /// Emails are stored lowercased, so the unique constraint is
    /// effectively case-insensitive.
    impl Schema for Member {
        fn name() -> &'static str {
            USERS
        }
        fn creates() -> &'static str {
            const_format::concatcp!(
                "CREATE TABLE IF NOT EXISTS ",
                USERS,
                " (
                    id            UUID PRIMARY KEY,
                    email         VARCHAR(255) UNIQUE NOT NULL,
                    hashword      TEXT NOT NULL,
                    display_name  VARCHAR(255) NOT NULL,
                    created_at    TIMESTAMPTZ NOT NULL,
                    last_login_at TIMESTAMPTZ
                );"
            )
        }
        fn indices() -> &'static str {
            const_format::concatcp!(
                "CREATE INDEX IF NOT EXISTS idx_users_email ON ",
                USERS,
                " (email);"
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_sets_no_last_login() {
        let member = Member::register("a@x.com".to_string(), "Frodo".to_string());
        assert!(member.last_login_at().is_none());
        assert_eq!(member.email(), "a@x.com");
    }
    #[test]
    fn fresh_members_get_distinct_ids() {
        let a = Member::register("a@x.com".to_string(), "A".to_string());
        let b = Member::register("b@x.com".to_string(), "B".to_string());
        assert_ne!(a.id(), b.id());
    }
}
