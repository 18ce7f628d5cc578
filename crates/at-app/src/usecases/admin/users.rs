use std::sync::Arc;

use tracing::info;

use at_core::ports::AdminPort;
use at_core::{User, UserId};

use super::AdminError;

pub struct ListUsers {
    admin: Arc<dyn AdminPort>,
}

impl ListUsers {
    pub fn new(admin: Arc<dyn AdminPort>) -> Self {
        Self { admin }
    }

    pub async fn execute(&self) -> Result<Vec<User>, AdminError> {
        Ok(self.admin.list_users().await?)
    }
}

/// Block or unblock a user account.
pub struct SetUserBlocked {
    admin: Arc<dyn AdminPort>,
}

impl SetUserBlocked {
    pub fn new(admin: Arc<dyn AdminPort>) -> Self {
        Self { admin }
    }

    pub async fn execute(&self, user_id: &UserId, blocked: bool) -> Result<(), AdminError> {
        self.admin.set_user_blocked(user_id, blocked).await?;
        info!(user_id = %user_id, blocked, "user block state changed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::FakeAdmin;

    #[tokio::test]
    async fn block_and_unblock_reach_the_backend() {
        let admin = Arc::new(FakeAdmin::default());
        let uc = SetUserBlocked::new(admin.clone());

        uc.execute(&UserId::new("u7"), true).await.unwrap();
        uc.execute(&UserId::new("u7"), false).await.unwrap();

        assert_eq!(admin.calls(), vec!["block u7 true", "block u7 false"]);
    }

    #[tokio::test]
    async fn lists_users() {
        let users = ListUsers::new(Arc::new(FakeAdmin::default()))
            .execute()
            .await
            .unwrap();
        assert_eq!(users.len(), 2);
    }
}
