use super::*;
use std::time::Duration;
use vtt_core::ID;

/// JWT payload: subject id, email, issue and expiry timestamps.
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct Claims {
    pub sub: uuid::Uuid,
    pub email: String,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    pub fn new(user: ID<Member>, email: String, ttl: Duration) -> Self {
        let now = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("time")
            .as_secs() as i64;
        Self {
            sub: user.inner(),
            email,
            iat: now,
            exp: now + ttl.as_secs() as i64,
        }
    }
    pub fn expired(&self) -> bool {
        self.exp
            < std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .expect("time")
                .as_secs() as i64
    }
    pub fn user(&self) -> ID<Member> {
        ID::from(self.sub)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_claims_not_expired() {
        let claims = Claims::new(
            ID::default(),
            "a@x.com".to_string(),
            Duration::from_secs(60),
        );
        assert!(!claims.expired());
    }
    #[test]
    fn zero_ttl_expires() {
        let mut claims = Claims::new(
            ID::default(),
            "a@x.com".to_string(),
            Duration::from_secs(0),
        );
        claims.exp -= 1;
        assert!(claims.expired());
    }
    #[test]
    fn subject_round_trip() {
        let id: ID<Member> = ID::default();
        let claims = Claims::new(id, "a@x.com".to_string(), Duration::from_secs(60));
        assert_eq!(claims.user(), id);
    }
}
