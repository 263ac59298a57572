use super::Member;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use vtt_core::Unique;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub display_name: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserInfo,
}

/// User as it appears in responses. No hashword field exists here, so the
/// credential cannot leak by serialization.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub id: String,
    pub email: String,
    pub display_name: String,
    pub created_at: DateTime<Utc>,
    pub last_login_at: Option<DateTime<Utc>>,
}

impl From<&Member> for UserInfo {
    fn from(member: &Member) -> Self {
        Self {
            id: member.id().to_string(),
            email: member.email().to_string(),
            display_name: member.display_name().to_string(),
            created_at: member.created_at(),
            last_login_at: member.last_login_at(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_info_has_no_password_field() {
        let member = Member::register("a@x.com".to_string(), "Frodo".to_string());
        let json = serde_json::to_value(UserInfo::from(&member)).expect("serialize");
        let object = json.as_object().expect("object");
        assert!(!object.contains_key("password"));
        assert!(!object.contains_key("hashword"));
        assert_eq!(object["email"], "a@x.com");
        assert_eq!(object["displayName"], "Frodo");
    }
}
