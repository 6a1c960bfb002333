use std::str::FromStr;

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde_json::Value;
use uuid::Uuid;

use crate::modules::audit::domain::{AuditAction, AuditLog};
use crate::schema::audit_logs;
use crate::shared::errors::AppError;

#[derive(Queryable, Identifiable, Debug, Clone)]
#[diesel(table_name = audit_logs)]
pub struct AuditLogModel {
    pub id: Uuid,
    pub action: String,
    pub user_id: Uuid,
    pub target_id: Uuid,
    pub data: Option<Value>,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = audit_logs)]
pub struct NewAuditLog {
    pub id: Uuid,
    pub action: String,
    pub user_id: Uuid,
    pub target_id: Uuid,
    pub data: Option<Value>,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<AuditLogModel> for AuditLog {
    type Error = AppError;

    fn try_from(model: AuditLogModel) -> Result<Self, Self::Error> {
        Ok(AuditLog {
            id: model.id,
            action: AuditAction::from_str(&model.action)?,
            user_id: model.user_id,
            target_id: model.target_id,
            data: model.data,
            created_at: model.created_at,
        })
    }
}
