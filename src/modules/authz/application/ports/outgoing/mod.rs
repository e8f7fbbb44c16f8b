mod role_store;

pub use role_store::{RoleStore, ADMIN_ROLE};
