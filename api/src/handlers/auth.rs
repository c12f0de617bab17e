//! Activation-code login.

use axum::extract::State;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use shared::entity::members;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub activation_code: String,
}

/// Member record in the shape the frontend session layer expects.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub uid: Uuid,
    pub name: String,
    pub email: String,
    pub code: String,
    pub is_admin: bool,
    pub is_active: bool,
    pub membership: String,
    pub plan_type: String,
    pub join_date: DateTime<Utc>,
    pub exp_date: Option<DateTime<Utc>>,
    pub last_login: Option<DateTime<Utc>>,
    pub picture: Option<String>,
}

impl From<members::Model> for UserDto {
    fn from(member: members::Model) -> Self {
        Self {
            uid: member.uid,
            name: member.name,
            email: member.email,
            code: member.activation_code,
            is_admin: member.is_admin,
            is_active: member.is_active,
            membership: member.membership_type,
            plan_type: member.plan_type,
            join_date: member.join_date,
            exp_date: member.membership_expires_at,
            last_login: member.last_login,
            picture: member.picture_url,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub message: String,
    pub user: UserDto,
}

pub async fn auth(
    State(state): State<AppState>,
    Json(req): Json<AuthRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    if req.email.trim().is_empty() || req.activation_code.trim().is_empty() {
        return Err(ApiError::Validation("Email dan Kode Aktivasi dibutuhkan.".to_string()));
    }

    let member = state.members.authenticate(req.email.trim(), req.activation_code.trim()).await?;

    Ok(Json(AuthResponse {
        message: "Login berhasil!".to_string(),
        user: UserDto::from(member),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_member() -> members::Model {
        members::Model {
            id: 1,
            uid: Uuid::new_v4(),
            name: "Joe".to_string(),
            email: "joe@example.com".to_string(),
            activation_code: "ABCD1234".to_string(),
            is_admin: true,
            is_active: true,
            membership_type: "Lifetime Access".to_string(),
            plan_type: "ADMIN".to_string(),
            join_date: Utc::now(),
            membership_expires_at: None,
            last_login: None,
            picture_url: None,
        }
    }

    #[test]
    fn test_user_dto_serializes_in_frontend_shape() {
        let dto = UserDto::from(sample_member());
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["isAdmin"], true);
        assert_eq!(json["planType"], "ADMIN");
        assert_eq!(json["membership"], "Lifetime Access");
        assert_eq!(json["code"], "ABCD1234");
        assert!(json.get("activation_code").is_none());
    }

    #[test]
    fn test_auth_request_accepts_camel_case_body() {
        let req: AuthRequest =
            serde_json::from_str(r#"{"email": "a@b.c", "activationCode": "XYZ"}"#).unwrap();
        assert_eq!(req.activation_code, "XYZ");
    }
}
