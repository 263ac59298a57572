//! Authentication and identity management.
//!
//! JWT-based stateless authentication with Argon2 password hashing.
//! Expiry is the only invalidation mechanism: there is no session table
//! and no revocation; rotating the signing secret invalidates every
//! outstanding token at once.
//!
//! ## Identity
//!
//! - [`Member`] — Registered user with credentials
//!
//! ## Security
//!
//! - [`Crypto`] — JWT signing and verification
//! - [`Claims`] — JWT payload structure
//! - [`password`] — Argon2 hashing and verification
//! - [`Auth`] — Request extractor resolving a verified token subject

mod claims;
mod crypto;
mod dto;
mod handlers;
mod member;
mod middleware;
pub mod password;
mod repository;

pub use claims::*;
pub use crypto::*;
pub use dto::*;
pub use handlers::*;
pub use member::*;
pub use middleware::*;
pub use repository::*;
