use super::*;
use std::time::Duration;

/// JWT signing and verification.
///
/// Holds both key halves derived from the shared secret along with the
/// token lifetime. Built once from [`vtt_core::Config`] at startup.
pub struct Crypto {
    encoding: jsonwebtoken::EncodingKey,
    decoding: jsonwebtoken::DecodingKey,
    ttl: Duration,
}

impl Crypto {
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        Self {
            encoding: jsonwebtoken::EncodingKey::from_secret(secret),
            decoding: jsonwebtoken::DecodingKey::from_secret(secret),
            ttl,
        }
    }
    pub fn from_config(config: &vtt_core::Config) -> Self {
        Self::new(config.jwt_secret.as_bytes(), config.token_ttl)
    }
    pub fn ttl(&self) -> Duration {
        self.ttl
    }
    pub fn encode(&self, claims: &Claims) -> Result<String, jsonwebtoken::errors::Error> {
        jsonwebtoken::encode(&jsonwebtoken::Header::default(), claims, &self.encoding)
    }
    pub fn decode(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        jsonwebtoken::decode::<Claims>(token, &self.decoding, &jsonwebtoken::Validation::default())
            .map(|data| data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vtt_core::ID;

    fn crypto() -> Crypto {
        Crypto::new(b"test-secret", Duration::from_secs(7 * 24 * 60 * 60))
    }

    #[test]
    fn token_round_trip() {
        let crypto = crypto();
        let claims = Claims::new(ID::default(), "a@x.com".to_string(), crypto.ttl());
        let token = crypto.encode(&claims).expect("encode");
        let decoded = crypto.decode(&token).expect("decode");
        assert_eq!(decoded.sub, claims.sub);
        assert_eq!(decoded.email, claims.email);
        assert_eq!(decoded.exp, claims.exp);
    }
    #[test]
    fn wrong_secret_rejects() {
        let crypto = crypto();
        let other = Crypto::new(b"rotated-secret", crypto.ttl());
        let claims = Claims::new(ID::default(), "a@x.com".to_string(), crypto.ttl());
        let token = crypto.encode(&claims).expect("encode");
        assert!(other.decode(&token).is_err());
    }
    #[test]
    fn tampered_token_rejects() {
        let crypto = crypto();
        let claims = Claims::new(ID::default(), "a@x.com".to_string(), crypto.ttl());
        let mut token = crypto.encode(&claims).expect("encode");
        token.push('x');
        assert!(crypto.decode(&token).is_err());
    }
}
