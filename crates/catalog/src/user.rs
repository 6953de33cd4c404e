use serde::{Deserialize, Serialize};

use stocklens_core::{DomainError, DomainResult, UserId};

/// User roles as defined by the remote API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    SuperAdmin,
    InventoryManager,
    Purchaser,
    Sales,
    WarehouseStaff,
    Analyst,
    Guest,
}

impl Role {
    /// Roles allowed to create, edit, or delete inventory records. Everyone
    /// else gets a read-only dashboard.
    pub fn can_manage_inventory(&self) -> bool {
        matches!(
            self,
            Role::SuperAdmin | Role::InventoryManager | Role::WarehouseStaff
        )
    }
}

/// User record as served by the remote API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub user_id: UserId,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub photo: Option<String>,
    pub role: Role,
}

/// Payload for creating a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    pub role: Role,
}

impl NewUser {
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if !self.email.contains('@') {
            return Err(DomainError::validation("email is not valid"));
        }
        Ok(())
    }
}
