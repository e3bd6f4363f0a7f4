//! Options repo, presents read access to attribute options
use diesel;
use diesel::connection::AnsiTransactionManager;
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel::query_dsl::RunQueryDsl;
use diesel::Connection;
use failure::Fail;

use super::types::RepoResult;
use models::AttributeOption;
use schema::options::dsl::*;

pub trait OptionsRepo {
    /// Options of any of the groups
    fn find_by_groups(&self, group_ids: Vec<i32>) -> RepoResult<Vec<AttributeOption>>;
}

pub struct OptionsRepoImpl<'a, T: Connection<Backend = Pg, TransactionManager = AnsiTransactionManager> + 'static> {
    pub db_conn: &'a T,
}

impl<'a, T> OptionsRepoImpl<'a, T>
where
    T: Connection<Backend = Pg, TransactionManager = AnsiTransactionManager> + 'static,
{
    pub fn new(db_conn: &'a T) -> Self {
        Self { db_conn }
    }
}

impl<'a, T> OptionsRepo for OptionsRepoImpl<'a, T>
where
    T: Connection<Backend = Pg, TransactionManager = AnsiTransactionManager> + 'static,
{
    fn find_by_groups(&self, group_ids: Vec<i32>) -> RepoResult<Vec<AttributeOption>> {
        debug!("Find options by groups {:?}.", group_ids);
        if group_ids.is_empty() {
            return Ok(vec![]);
        }

        options
            .filter(options_group_id.eq_any(&group_ids))
            .order_by(id)
            .get_results::<AttributeOption>(self.db_conn)
            .map_err(|e: diesel::result::Error| e.context(format!("Find options by groups {:?} error occured", group_ids)).into())
    }
}
