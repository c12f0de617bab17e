//! Member directory: activation-code login and admin management.
//!
//! Authentication is deliberately simple: an email plus a pre-provisioned
//! activation code, checked against the members table. The service never
//! issues sessions; callers hold on to the returned member record.

use chrono::Utc;
use rand::distributions::Alphanumeric;
use rand::Rng;
use sea_orm::prelude::*;
use sea_orm::{ActiveValue::NotSet, IntoActiveModel, Set};
use serde_json::json;
use shared::entity::members;
use std::sync::Arc;
use tracing::info;

use crate::error::ApiError;
use crate::repositories::{AdminLogRepository, MemberRepository};

const AUTH_FAILED: &str = "Email atau Kode Aktivasi salah.";

pub struct NewMember {
    pub name: String,
    pub email: String,
    pub activation_code: Option<String>,
    pub is_admin: bool,
    pub is_active: bool,
    pub membership_type: Option<String>,
    pub plan_type: Option<String>,
    pub membership_expires_at: Option<DateTimeUtc>,
}

pub struct MemberService {
    repo: MemberRepository,
    logs: AdminLogRepository,
}

impl MemberService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            repo: MemberRepository::new(db.clone()),
            logs: AdminLogRepository::new(db),
        }
    }

    /// Verify an email/activation-code pair, enforce account status and
    /// membership expiry, and stamp the login time. Lookup failure and code
    /// mismatch produce the same message so the endpoint does not leak which
    /// emails exist.
    pub async fn authenticate(&self, email: &str, code: &str) -> Result<members::Model, ApiError> {
        let member = self
            .repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| ApiError::Unauthorized(AUTH_FAILED.to_string()))?;

        if member.activation_code != code {
            return Err(ApiError::Unauthorized(AUTH_FAILED.to_string()));
        }
        if !member.is_active {
            return Err(ApiError::Unauthorized("Akun belum aktif. Hubungi admin.".to_string()));
        }
        if let Some(expires_at) = member.membership_expires_at {
            if expires_at < Utc::now() {
                return Err(ApiError::Unauthorized("Masa aktif akun telah habis.".to_string()));
            }
        }

        let mut active: members::ActiveModel = member.into_active_model();
        active.last_login = Set(Some(Utc::now()));
        let member = self.repo.update(active).await?;
        info!(email = %member.email, "member logged in");
        Ok(member)
    }

    /// Resolve a member by uid and insist on the admin flag. Used as the
    /// guard in front of every admin endpoint.
    pub async fn require_admin(&self, uid: Uuid) -> Result<members::Model, ApiError> {
        let member = self
            .repo
            .find_by_uid(uid)
            .await?
            .ok_or_else(|| ApiError::Unauthorized("Sesi kadaluarsa. Silakan login ulang.".to_string()))?;
        if !member.is_admin {
            return Err(ApiError::Forbidden(
                "Akses ditolak. Hanya admin yang dapat mengelola data.".to_string(),
            ));
        }
        Ok(member)
    }

    pub async fn list_members(&self) -> Result<Vec<members::Model>, ApiError> {
        Ok(self.repo.list_all().await?)
    }

    pub async fn add_member(
        &self,
        new_member: NewMember,
        performed_by: &str,
    ) -> Result<members::Model, ApiError> {
        if self.repo.find_by_email(&new_member.email).await?.is_some() {
            return Err(ApiError::Validation("Email sudah terdaftar.".to_string()));
        }

        let activation_code = match new_member.activation_code {
            Some(code) if !code.trim().is_empty() => code,
            _ => generate_activation_code(),
        };

        let active = members::ActiveModel {
            id: NotSet,
            uid: Set(Uuid::new_v4()),
            name: Set(new_member.name),
            email: Set(new_member.email.clone()),
            activation_code: Set(activation_code),
            is_admin: Set(new_member.is_admin),
            is_active: Set(new_member.is_active),
            membership_type: Set(new_member
                .membership_type
                .unwrap_or_else(|| "Standard".to_string())),
            plan_type: Set(new_member.plan_type.unwrap_or_else(|| "MEMBER".to_string())),
            join_date: Set(Utc::now()),
            membership_expires_at: Set(new_member.membership_expires_at),
            last_login: Set(None),
            picture_url: Set(None),
        };
        let member = self.repo.create(active).await?;

        self.logs
            .append(
                "INSERT",
                Some(new_member.email),
                performed_by,
                Some(json!({ "member_id": member.id })),
            )
            .await?;
        Ok(member)
    }

    /// Flip `is_admin` or `is_active` on a member. Any other field name is a
    /// validation error, never a silent no-op.
    pub async fn toggle_member_field(
        &self,
        id: i32,
        field: &str,
        value: bool,
        performed_by: &str,
    ) -> Result<members::Model, ApiError> {
        let member = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApiError::NotFound("User tidak ditemukan.".to_string()))?;

        let email = member.email.clone();
        let mut active: members::ActiveModel = member.into_active_model();
        match field {
            "is_admin" => active.is_admin = Set(value),
            "is_active" => active.is_active = Set(value),
            other => {
                return Err(ApiError::Validation(format!("Field tidak dikenal: {other}")));
            }
        }
        let member = self.repo.update(active).await?;

        self.logs
            .append(
                "UPDATE",
                Some(email),
                performed_by,
                Some(json!({ "field": field, "value": value })),
            )
            .await?;
        Ok(member)
    }

    pub async fn delete_member(&self, id: i32, performed_by: &str) -> Result<(), ApiError> {
        let member = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApiError::NotFound("User tidak ditemukan.".to_string()))?;

        self.repo.delete_by_id(id).await?;
        self.logs
            .append("DELETE", Some(member.email), performed_by, None)
            .await?;
        Ok(())
    }

    pub async fn recent_logs(&self) -> Result<Vec<shared::entity::admin_logs::Model>, ApiError> {
        Ok(self.logs.recent(50).await?)
    }
}

fn generate_activation_code() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(8)
        .map(char::from)
        .collect::<String>()
        .to_ascii_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_codes_are_uppercase_and_fixed_length() {
        for _ in 0..32 {
            let code = generate_activation_code();
            assert_eq!(code.len(), 8);
            assert!(code.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
        }
    }
}
