use super::*;
use actix_web::HttpResponse;
use actix_web::Responder;
use actix_web::web;
use std::sync::Arc;
use tokio_postgres::Client;
use vtt_core::Unique;

/// Boundary normalization: emails are lowercased before any lookup or
/// insert, making uniqueness and login case-insensitive.
fn normalize(email: &str) -> String {
    email.trim().to_lowercase()
}

pub async fn register(
    db: web::Data<Arc<Client>>,
    req: web::Json<RegisterRequest>,
) -> impl Responder {
    let email = normalize(&req.email);
    if req.display_name.len() < 3 || req.display_name.len() > 255 {
        return HttpResponse::BadRequest().body("display name must be 3-255 characters");
    }
    if req.password.len() < 8 {
        return HttpResponse::BadRequest().body("password must be at least 8 characters");
    }
    if !email.contains('@') {
        return HttpResponse::BadRequest().body("invalid email address");
    }
    log::debug!("processing registration for {}", email);
    match db.exists(&email).await {
        Ok(false) => {}
        Ok(true) => {
            log::warn!("registration failed, user already exists: {}", email);
            return HttpResponse::Conflict().body("user with this email already exists");
        }
        Err(e) => return vtt_pg::storage_error(e).respond(),
    }
    let hashword = match password::hash(&req.password) {
        Ok(h) => h,
        Err(e) => {
            log::error!("password hash failed: {}", e);
            return HttpResponse::InternalServerError().body("internal server error");
        }
    };
    let member = Member::register(email.clone(), req.display_name.clone());
    // the unique constraint backs the exists() check against races
    if let Err(e) = db.create(&member, &hashword).await {
        return match vtt_pg::unique_violation(&e) {
            true => HttpResponse::Conflict().body("user with this email already exists"),
            false => vtt_pg::storage_error(e).respond(),
        };
    }
    log::info!("user created: {} ({})", email, member.id());
    HttpResponse::Ok().json(serde_json::json!({ "message": "user created successfully" }))
}

pub async fn login(
    db: web::Data<Arc<Client>>,
    tokens: web::Data<Crypto>,
    req: web::Json<LoginRequest>,
) -> impl Responder {
    let email = normalize(&req.email);
    let (member, hashword) = match db.lookup(&email).await {
        Ok(Some(row)) => row,
        Ok(None) => {
            // pay the same hashing cost as the wrong-password path
            password::burn(&req.password);
            log::warn!("login failed, user not found: {}", email);
            return HttpResponse::Unauthorized().body("invalid email or password");
        }
        Err(e) => return vtt_pg::storage_error(e).respond(),
    };
    if !password::verify(&req.password, &hashword) {
        log::warn!("login failed, invalid password for {}", email);
        return HttpResponse::Unauthorized().body("invalid email or password");
    }
    if let Err(e) = db.touch_login(member.id()).await {
        log::warn!("failed to update last login for {}: {}", email, e);
    }
    let claims = Claims::new(member.id(), member.email().to_string(), tokens.ttl());
    let token = match tokens.encode(&claims) {
        Ok(t) => t,
        Err(e) => {
            log::error!("token encoding failed: {}", e);
            return HttpResponse::InternalServerError().body("internal server error");
        }
    };
    log::info!("login successful for {}", email);
    HttpResponse::Ok().json(AuthResponse {
        token,
        user: UserInfo::from(&member),
    })
}

pub async fn me(auth: Auth) -> impl Responder {
    HttpResponse::Ok().json(UserInfo::from(auth.member()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emails_normalize_to_trimmed_lowercase() {
        assert_eq!(normalize(" A@X.Com "), "a@x.com");
        assert_eq!(normalize("USER@EXAMPLE.COM"), "user@example.com");
    }
    #[test]
    fn normalization_is_idempotent() {
        let once = normalize("MiXeD@CaSe.Io");
        assert_eq!(normalize(&once), once);
    }
    #[test]
    fn case_variants_collapse_to_one_identity() {
        // register and login both normalize first, so any casing of the
        // same address resolves to the same stored row
        assert_eq!(normalize("Gm@Table.Top"), normalize("gm@table.top"));
        assert_eq!(normalize("GM@TABLE.TOP "), normalize(" gm@table.top"));
    }
}
