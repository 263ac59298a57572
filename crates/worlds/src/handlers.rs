use super::*;
use actix_web::HttpResponse;
use actix_web::Responder;
use actix_web::web;
use std::sync::Arc;
use tokio_postgres::Client;
use vtt_auth::Auth;
use vtt_core::ID;

pub async fn create(
    db: web::Data<Arc<Client>>,
    auth: Auth,
    req: web::Json<CreateWorldRequest>,
) -> impl Responder {
    if req.name.trim().is_empty() {
        return HttpResponse::BadRequest().body("world name must not be empty");
    }
    let req = req.into_inner();
    let world = World::create(
        auth.user(),
        req.name,
        req.description,
        req.system_id,
        req.settings.unwrap_or_else(|| serde_json::json!({})),
        req.cover_image_id,
    );
    log::info!("creating world {} for user {}", world.name(), auth.user());
    match db.create(&world).await {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({
            "world": WorldInfo::from(&world),
            "message": "world created successfully",
        })),
        Err(e) => vtt_pg::storage_error(e).respond(),
    }
}

pub async fn list(
    db: web::Data<Arc<Client>>,
    auth: Auth,
    query: web::Query<ListWorlds>,
) -> impl Responder {
    let page = match query.pagination() {
        Ok(page) => page,
        Err(e) => return e.respond(),
    };
    match db.list(auth.user(), &query, page).await {
        Ok(worlds) => {
            log::debug!("found {} worlds for user {}", worlds.len(), auth.user());
            HttpResponse::Ok().json(serde_json::json!({
                "worlds": worlds.iter().map(WorldInfo::from).collect::<Vec<_>>(),
                "message": "worlds fetched successfully",
            }))
        }
        Err(e) => vtt_pg::storage_error(e).respond(),
    }
}

/// Constant response shape whether the world was deleted, was not owned
/// by the caller, or never existed.
pub async fn delete(
    db: web::Data<Arc<Client>>,
    auth: Auth,
    path: web::Path<uuid::Uuid>,
) -> impl Responder {
    let id: ID<World> = ID::from(path.into_inner());
    match db.delete(id, auth.user()).await {
        Ok(removed) => {
            log::info!("delete world {} by {}: {} rows", id, auth.user(), removed);
            HttpResponse::Ok().json(serde_json::json!({ "message": "world deleted" }))
        }
        Err(e) => vtt_pg::storage_error(e).respond(),
    }
}
