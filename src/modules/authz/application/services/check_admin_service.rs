use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::domain::entities::UserId;
use crate::authz::application::ports::{
    incoming::use_cases::CheckAdminUseCase,
    outgoing::{RoleStore, ADMIN_ROLE},
};
use crate::shared::store::StoreError;

pub struct CheckAdminService {
    roles: Arc<dyn RoleStore>,
}

impl CheckAdminService {
    pub fn new(roles: Arc<dyn RoleStore>) -> Self {
        Self { roles }
    }
}

#[async_trait]
impl CheckAdminUseCase for CheckAdminService {
    async fn is_admin(&self, user: Option<UserId>) -> Result<bool, StoreError> {
        // No session, no store round trip.
        let Some(user) = user else {
            return Ok(false);
        };

        self.roles.has_role(user, ADMIN_ROLE).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    struct StubRoles {
        is_admin: bool,
    }

    #[async_trait]
    impl RoleStore for StubRoles {
        async fn has_role(&self, _user: UserId, role: &str) -> Result<bool, StoreError> {
            assert_eq!(role, ADMIN_ROLE);
            Ok(self.is_admin)
        }

        async fn assign_role(&self, _user: UserId, _role: &str) -> Result<(), StoreError> {
            unimplemented!("not used in check tests")
        }
    }

    /// Fails the test if the service queries the store at all.
    struct PanickingRoles;

    #[async_trait]
    impl RoleStore for PanickingRoles {
        async fn has_role(&self, _user: UserId, _role: &str) -> Result<bool, StoreError> {
            panic!("anonymous probe must not reach the role store");
        }

        async fn assign_role(&self, _user: UserId, _role: &str) -> Result<(), StoreError> {
            panic!("anonymous probe must not reach the role store");
        }
    }

    #[tokio::test]
    async fn anonymous_caller_is_false_without_store_query() {
        let service = CheckAdminService::new(Arc::new(PanickingRoles));

        assert!(!service.is_admin(None).await.unwrap());
    }

    #[tokio::test]
    async fn role_row_present_is_true() {
        let service = CheckAdminService::new(Arc::new(StubRoles { is_admin: true }));

        assert!(service
            .is_admin(Some(UserId::from(Uuid::new_v4())))
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn role_row_absent_is_false() {
        let service = CheckAdminService::new(Arc::new(StubRoles { is_admin: false }));

        assert!(!service
            .is_admin(Some(UserId::from(Uuid::new_v4())))
            .await
            .unwrap());
    }
}
