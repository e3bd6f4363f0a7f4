//! Repo for user_roles table, read only
use diesel;
use diesel::connection::AnsiTransactionManager;
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel::query_dsl::RunQueryDsl;
use diesel::Connection;
use failure::Fail;

use super::types::RepoResult;
use models::{UserRole, UserRoleKind};
use schema::user_roles::dsl::*;

pub trait UserRolesRepo {
    /// Returns list of roles for a specific user
    fn list_for_user(&self, user_id: i32) -> RepoResult<Vec<UserRoleKind>>;
}

pub struct UserRolesRepoImpl<'a, T: Connection<Backend = Pg, TransactionManager = AnsiTransactionManager> + 'static> {
    pub db_conn: &'a T,
}

impl<'a, T> UserRolesRepoImpl<'a, T>
where
    T: Connection<Backend = Pg, TransactionManager = AnsiTransactionManager> + 'static,
{
    pub fn new(db_conn: &'a T) -> Self {
        Self { db_conn }
    }
}

impl<'a, T> UserRolesRepo for UserRolesRepoImpl<'a, T>
where
    T: Connection<Backend = Pg, TransactionManager = AnsiTransactionManager> + 'static,
{
    fn list_for_user(&self, user_id_value: i32) -> RepoResult<Vec<UserRoleKind>> {
        debug!("list user roles for id {}.", user_id_value);
        user_roles
            .filter(user_id.eq(user_id_value))
            .get_results::<UserRole>(self.db_conn)
            .map(|roles| roles.into_iter().map(|user_role| user_role.role).collect())
            .map_err(|e: diesel::result::Error| e.context(format!("List user roles for user {} error occured", user_id_value)).into())
    }
}
