use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use serde_json::Value;
use tokio::task;
use uuid::Uuid;

use super::models::{AuditLogModel, NewAuditLog};
use crate::log_debug;
use crate::modules::audit::domain::{AuditAction, AuditLog, AuditLogRepository};
use crate::schema::audit_logs;
use crate::shared::errors::AppResult;
use crate::shared::Database;

pub struct AuditLogRepositoryImpl {
    db: Arc<Database>,
}

impl AuditLogRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AuditLogRepository for AuditLogRepositoryImpl {
    async fn create(
        &self,
        action: AuditAction,
        user_id: Uuid,
        target_id: Uuid,
        data: Option<Value>,
    ) -> AppResult<AuditLog> {
        log_debug!("Recording {} audit log for {}", action, target_id);

        let db = Arc::clone(&self.db);

        let model = task::spawn_blocking(move || -> AppResult<AuditLogModel> {
            let mut conn = db.get_connection()?;

            let record = NewAuditLog {
                id: Uuid::new_v4(),
                action: action.as_str().to_string(),
                user_id,
                target_id,
                data,
                created_at: Utc::now(),
            };

            let saved = diesel::insert_into(audit_logs::table)
                .values(&record)
                .get_result::<AuditLogModel>(&mut conn)?;

            Ok(saved)
        })
        .await??;

        model.try_into()
    }
}
