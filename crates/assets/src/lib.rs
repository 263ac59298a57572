//! Binary asset ingestion and retrieval.
//!
//! The upload pipeline runs `received → validated → blob-stored →
//! metadata-persisted → url-issued`. Validation happens before any
//! storage I/O; a blob-store failure never produces a metadata row; a
//! metadata failure after a successful put leaves an orphan blob, which
//! is an accepted inconsistency window (no distributed transaction spans
//! the two stores) surfaced once as an internal error.
//!
//! Asset access is derived transitively through world ownership: every
//! lookup is scoped to worlds the caller owns, and an asset behind
//! someone else's world is indistinguishable from a missing one.
//!
//! - [`Asset`] / [`Provider`] — Domain types and table schema
//! - [`object_key`] — Deterministic per-world key derivation
//! - [`Upload`] — Validated upload payload
//! - [`AssetRepository`] — SQL operations on `Arc<Client>`

mod asset;
mod dto;
mod handlers;
mod key;
mod repository;
mod upload;

pub use asset::*;
pub use dto::*;
pub use handlers::*;
pub use key::*;
pub use repository::*;
pub use upload::*;
