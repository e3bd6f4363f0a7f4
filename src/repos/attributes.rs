//! Attributes repo, presents read access to filterable attributes
use diesel;
use diesel::connection::AnsiTransactionManager;
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel::query_dsl::RunQueryDsl;
use diesel::Connection;
use failure::Fail;

use super::types::RepoResult;
use models::Attribute;
use schema::attributes::dsl::*;

pub trait AttributesRepo {
    /// Attributes matching filter keys
    fn find_by_slugs(&self, slugs: Vec<String>) -> RepoResult<Vec<Attribute>>;

    /// Attributes belonging to any of the groups
    fn find_by_groups(&self, group_ids: Vec<i32>) -> RepoResult<Vec<Attribute>>;
}

pub struct AttributesRepoImpl<'a, T: Connection<Backend = Pg, TransactionManager = AnsiTransactionManager> + 'static> {
    pub db_conn: &'a T,
}

impl<'a, T> AttributesRepoImpl<'a, T>
where
    T: Connection<Backend = Pg, TransactionManager = AnsiTransactionManager> + 'static,
{
    pub fn new(db_conn: &'a T) -> Self {
        Self { db_conn }
    }
}

impl<'a, T> AttributesRepo for AttributesRepoImpl<'a, T>
where
    T: Connection<Backend = Pg, TransactionManager = AnsiTransactionManager> + 'static,
{
    fn find_by_slugs(&self, slugs: Vec<String>) -> RepoResult<Vec<Attribute>> {
        debug!("Find attributes by slugs {:?}.", slugs);
        if slugs.is_empty() {
            return Ok(vec![]);
        }

        attributes
            .filter(slug.eq_any(&slugs))
            .order_by(id)
            .get_results::<Attribute>(self.db_conn)
            .map_err(|e: diesel::result::Error| e.context(format!("Find attributes by slugs {:?} error occured", slugs)).into())
    }

    fn find_by_groups(&self, group_ids: Vec<i32>) -> RepoResult<Vec<Attribute>> {
        debug!("Find attributes by groups {:?}.", group_ids);
        if group_ids.is_empty() {
            return Ok(vec![]);
        }

        attributes
            .filter(attributes_group_id.eq_any(&group_ids))
            .order_by(id)
            .get_results::<Attribute>(self.db_conn)
            .map_err(|e: diesel::result::Error| e.context(format!("Find attributes by groups {:?} error occured", group_ids)).into())
    }
}
