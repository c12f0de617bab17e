//! Admin member management, guarded per request.
//!
//! Every handler resolves the `x-user-uid` header to a member and rejects
//! non-admins before touching anything. Mutations land in the admin_logs
//! trail so the activity view has something to show.

use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use shared::entity::members;

use crate::error::ApiError;
use crate::services::member_service::NewMember;
use crate::state::AppState;

async fn require_admin(state: &AppState, headers: &HeaderMap) -> Result<members::Model, ApiError> {
    let uid = headers
        .get("x-user-uid")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| Uuid::parse_str(v).ok())
        .ok_or_else(|| ApiError::Unauthorized("Sesi kadaluarsa. Silakan login ulang.".to_string()))?;
    state.members.require_admin(uid).await
}

pub async fn list_members(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Value>, ApiError> {
    require_admin(&state, &headers).await?;
    let members = state.members.list_members().await?;
    Ok(Json(json!({ "members": members })))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddMemberRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub activation_code: Option<String>,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub membership_type: Option<String>,
    #[serde(default)]
    pub plan_type: Option<String>,
    #[serde(default)]
    pub membership_expires_at: Option<DateTime<Utc>>,
}

fn default_true() -> bool {
    true
}

pub async fn add_member(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<AddMemberRequest>,
) -> Result<Json<Value>, ApiError> {
    let admin = require_admin(&state, &headers).await?;

    if req.name.trim().is_empty() || req.email.trim().is_empty() {
        return Err(ApiError::Validation("Nama dan Email wajib diisi.".to_string()));
    }

    let member = state
        .members
        .add_member(
            NewMember {
                name: req.name.trim().to_string(),
                email: req.email.trim().to_string(),
                activation_code: req.activation_code,
                is_admin: req.is_admin,
                is_active: req.is_active,
                membership_type: req.membership_type,
                plan_type: req.plan_type,
                membership_expires_at: req.membership_expires_at,
            },
            &admin.email,
        )
        .await?;

    Ok(Json(json!({ "message": "User berhasil ditambahkan.", "member": member })))
}

#[derive(Debug, Deserialize)]
pub struct ToggleMemberRequest {
    pub field: String,
    pub value: bool,
}

pub async fn toggle_member(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(req): Json<ToggleMemberRequest>,
) -> Result<Json<Value>, ApiError> {
    let admin = require_admin(&state, &headers).await?;
    let member = state
        .members
        .toggle_member_field(id, &req.field, req.value, &admin.email)
        .await?;
    Ok(Json(json!({ "message": "Status berhasil diubah.", "member": member })))
}

pub async fn delete_member(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<Json<Value>, ApiError> {
    let admin = require_admin(&state, &headers).await?;
    if admin.id == id {
        return Err(ApiError::Validation("Tidak bisa menghapus akun sendiri.".to_string()));
    }
    state.members.delete_member(id, &admin.email).await?;
    Ok(Json(json!({ "message": "User berhasil dihapus." })))
}

pub async fn list_logs(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Value>, ApiError> {
    require_admin(&state, &headers).await?;
    let logs = state.members.recent_logs().await?;
    Ok(Json(json!({ "logs": logs })))
}
