//! Ownership-scoped world records.
//!
//! A world is an owned container resource (project/workspace analogue).
//! Every query is anchored on the owner's id: there is no path by which
//! one user's worlds become visible to another, and deletion of a world
//! not owned by the caller is indistinguishable from deletion of a world
//! that does not exist.
//!
//! - [`World`] — Domain type and table schema
//! - [`ListWorlds`] — Validated filter/sort/pagination parameters
//! - [`WorldRepository`] — SQL operations on `Arc<Client>`

mod dto;
mod handlers;
mod query;
mod repository;
mod world;

pub use dto::*;
pub use handlers::*;
pub use query::*;
pub use repository::*;
pub use world::*;
