//! User management for administrators.

use std::sync::Arc;

use raline_api::{RalineApiClient, UserInfo, UserPage, UserPatch, UserRole};

use crate::error::{AdminError, FormError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserAction {
    SetAdministrator,
    SetGuest,
    SetLabel,
}

impl UserAction {
    pub fn label(self) -> &'static str {
        match self {
            Self::SetAdministrator => "set administrator",
            Self::SetGuest => "set guest",
            Self::SetLabel => "set label",
        }
    }
}

/// Actions offered for `user` when `current` is looking at the list.
pub fn actions_for(user: &UserInfo, current: &UserInfo) -> Vec<UserAction> {
    let mut actions = Vec::with_capacity(2);
    match user.role {
        UserRole::Guest => actions.push(UserAction::SetAdministrator),
        UserRole::Admin if !is_same_user(user, current) => actions.push(UserAction::SetGuest),
        _ => {}
    }
    actions.push(UserAction::SetLabel);
    actions
}

/// Role column text. Every pending-verification state reads `verify`.
pub fn role_display(role: &UserRole) -> &str {
    match role {
        UserRole::Verify(_) => "verify",
        other => other.as_str(),
    }
}

fn is_same_user(user: &UserInfo, current: &UserInfo) -> bool {
    user.object_id.is_some() && user.object_id == current.object_id
}

pub struct UserAdmin {
    client: Arc<RalineApiClient>,
}

impl UserAdmin {
    pub fn new(client: Arc<RalineApiClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self, page: u64) -> Result<UserPage> {
        Ok(self.client.get_user_list(page, None).await?)
    }

    /// Change a user's role. Demoting yourself is refused locally.
    pub async fn set_role(&self, user_id: i64, role: UserRole, current: &UserInfo) -> Result<()> {
        if role == UserRole::Guest && current.object_id == Some(user_id) {
            return Err(AdminError::SelfDemotion);
        }
        let patch = UserPatch {
            role: Some(role),
            ..UserPatch::default()
        };
        self.client.update_user(user_id, &patch, None).await?;
        tracing::info!(user_id, role = ?patch.role, "user role updated");
        Ok(())
    }

    pub async fn set_label(&self, user_id: i64, label: &str) -> Result<()> {
        let label = label.trim();
        if label.is_empty() {
            return Err(FormError::MissingLabel.into());
        }
        let patch = UserPatch {
            label: Some(label.to_owned()),
            ..UserPatch::default()
        };
        self.client.update_user(user_id, &patch, None).await?;
        tracing::info!(user_id, label, "user label updated");
        Ok(())
    }
}
