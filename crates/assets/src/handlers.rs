use super::*;
use actix_multipart::Multipart;
use actix_web::HttpResponse;
use actix_web::Responder;
use actix_web::web;
use std::sync::Arc;
use std::time::Duration;
use tokio_postgres::Client;
use vtt_auth::Auth;
use vtt_core::AppError;
use vtt_core::Config;
use vtt_core::ID;
use vtt_core::Unique;
use vtt_storage::ObjectStore;
use vtt_worlds::World;
use vtt_worlds::WorldRepository;

/// SigV4 refuses presigned URLs valid for more than 7 days.
const MAX_PRESIGN_SECS: u64 = 7 * 24 * 60 * 60;

/// Upload pipeline: receive → validate → store blob → persist metadata →
/// issue URL. Each step fails the request without running the next; a
/// metadata failure after the blob was stored leaves an orphan blob
/// (accepted window, logged, surfaced once as an internal error).
pub async fn upload(
    db: web::Data<Arc<Client>>,
    store: web::Data<ObjectStore>,
    config: web::Data<Config>,
    auth: Auth,
    params: web::Query<UploadParams>,
    mut payload: Multipart,
) -> impl Responder {
    let upload = match receive(&mut payload, config.max_upload_bytes).await {
        Ok(Some(upload)) => upload,
        Ok(None) => return HttpResponse::BadRequest().body("file is required"),
        Err(e) => return e.respond(),
    };
    if let Err(e) = upload.validate(&config) {
        return e.respond();
    }
    let world: ID<World> = ID::from(params.world_id);
    match db.get(world, auth.user()).await {
        Ok(Some(_)) => {}
        Ok(None) => return HttpResponse::NotFound().body("world not found"),
        Err(e) => return vtt_pg::storage_error(e).respond(),
    }
    let key = object_key(
        &upload.original_name,
        params.folder.as_deref(),
        params.filename.as_deref(),
        world,
    );
    let size = upload.bytes.len() as i32;
    log::info!(
        "uploading {} bytes as {} for world {}",
        size,
        key,
        world
    );
    if let Err(e) = store.put(&key, upload.bytes, &upload.mime_type).await {
        log::error!("object store write failed for {}: {}", key, e);
        return AppError::Internal.respond();
    }
    let asset = Asset::stored(world, key.clone(), upload.mime_type, size);
    if let Err(e) = db.create_asset(&asset).await {
        // the blob at `key` is now an orphan; left for reconciliation
        log::error!("asset row insert failed, orphan blob at {}: {}", key, e);
        return AppError::Internal.respond();
    }
    let url = match store.presign_get(&key, config.presign_ttl).await {
        Ok(url) => url,
        Err(e) => {
            log::error!("presign failed for {}: {}", key, e);
            return AppError::Internal.respond();
        }
    };
    HttpResponse::Ok().json(UploadResponse {
        asset_id: asset.id().to_string(),
        object_key: key,
        presigned_url: url,
    })
}

pub async fn get_asset(
    db: web::Data<Arc<Client>>,
    auth: Auth,
    path: web::Path<uuid::Uuid>,
) -> impl Responder {
    let id: ID<Asset> = ID::from(path.into_inner());
    match db.get_asset(id, auth.user()).await {
        Ok(Some(asset)) => HttpResponse::Ok().json(AssetInfo::from(&asset)),
        Ok(None) => HttpResponse::NotFound().body("asset not found"),
        Err(e) => vtt_pg::storage_error(e).respond(),
    }
}

pub async fn presign(
    db: web::Data<Arc<Client>>,
    store: web::Data<ObjectStore>,
    config: web::Data<Config>,
    auth: Auth,
    path: web::Path<uuid::Uuid>,
    params: web::Query<PresignParams>,
) -> impl Responder {
    let expiry = match params.expiry {
        None => config.presign_ttl,
        Some(secs) if secs == 0 || secs > MAX_PRESIGN_SECS => {
            return HttpResponse::BadRequest().body("expiry must be 1-604800 seconds");
        }
        Some(secs) => Duration::from_secs(secs),
    };
    let id: ID<Asset> = ID::from(path.into_inner());
    let asset = match db.get_asset(id, auth.user()).await {
        Ok(Some(asset)) => asset,
        Ok(None) => return HttpResponse::NotFound().body("asset not found"),
        Err(e) => return vtt_pg::storage_error(e).respond(),
    };
    match store.presign_get(asset.object_key(), expiry).await {
        Ok(url) => HttpResponse::Ok().json(serde_json::json!({ "presignedUrl": url })),
        Err(e) => {
            log::error!("presign failed for {}: {}", asset.object_key(), e);
            AppError::Internal.respond()
        }
    }
}
