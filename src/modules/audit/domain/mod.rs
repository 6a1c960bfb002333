use async_trait::async_trait;
use chrono::{DateTime, Utc};
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::shared::errors::{AppError, AppResult};

/// Action tags persisted with every audit record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditAction {
    CollectionCreate,
    CollectionUpdate,
    CollectionDelete,
}

impl AuditAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditAction::CollectionCreate => "collection_create",
            AuditAction::CollectionUpdate => "collection_update",
            AuditAction::CollectionDelete => "collection_delete",
        }
    }
}

impl std::fmt::Display for AuditAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for AuditAction {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "collection_create" => Ok(AuditAction::CollectionCreate),
            "collection_update" => Ok(AuditAction::CollectionUpdate),
            "collection_delete" => Ok(AuditAction::CollectionDelete),
            other => Err(AppError::InvalidInput(format!(
                "Unknown audit action: {}",
                other
            ))),
        }
    }
}

/// A persisted audit record describing one mutation, for traceability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditLog {
    pub id: Uuid,
    pub action: AuditAction,
    pub user_id: Uuid,
    pub target_id: Uuid,
    pub data: Option<Value>,
    pub created_at: DateTime<Utc>,
}

/// Field-level before/after diff. Only fields whose value actually changed
/// are recorded; an empty diff means the mutation was a no-op and no audit
/// record should be emitted.
#[derive(Debug, Clone, Default)]
pub struct FieldDiff {
    pub before: Map<String, Value>,
    pub after: Map<String, Value>,
}

impl FieldDiff {
    pub fn is_empty(&self) -> bool {
        self.before.is_empty() && self.after.is_empty()
    }

    pub fn record<T: Serialize + ?Sized>(&mut self, field: &str, old: &T, new: &T) {
        self.before.insert(
            field.to_string(),
            serde_json::to_value(old).unwrap_or(Value::Null),
        );
        self.after.insert(
            field.to_string(),
            serde_json::to_value(new).unwrap_or(Value::Null),
        );
    }
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait AuditLogRepository: Send + Sync {
    async fn create(
        &self,
        action: AuditAction,
        user_id: Uuid,
        target_id: Uuid,
        data: Option<Value>,
    ) -> AppResult<AuditLog>;
}
