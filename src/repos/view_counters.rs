//! View counters repo, keeps per city popularity of catalogue entities
use std::collections::HashMap;

use diesel;
use diesel::connection::AnsiTransactionManager;
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel::query_dsl::RunQueryDsl;
use diesel::Connection;
use failure::Fail;

use super::types::RepoResult;
use models::{CounterEntity, CounterKey, NewViewCounter, ViewCounter, NO_DIMENSION};
use schema::view_counters::dsl::*;

pub trait ViewCountersRepo {
    /// Registers one view: creates the counter at default priority or adds one to it
    fn increment(&self, key: CounterKey, city: String) -> RepoResult<ViewCounter>;

    /// Counter values of entities of one kind in one dimension, keyed by entity id
    fn find_counters(
        &self,
        entity: CounterEntity,
        entity_ids: Vec<i32>,
        city: String,
        rubric_id: Option<i32>,
        attribute_id: Option<i32>,
    ) -> RepoResult<HashMap<i32, i32>>;
}

pub struct ViewCountersRepoImpl<'a, T: Connection<Backend = Pg, TransactionManager = AnsiTransactionManager> + 'static> {
    pub db_conn: &'a T,
}

impl<'a, T> ViewCountersRepoImpl<'a, T>
where
    T: Connection<Backend = Pg, TransactionManager = AnsiTransactionManager> + 'static,
{
    pub fn new(db_conn: &'a T) -> Self {
        Self { db_conn }
    }
}

impl<'a, T> ViewCountersRepo for ViewCountersRepoImpl<'a, T>
where
    T: Connection<Backend = Pg, TransactionManager = AnsiTransactionManager> + 'static,
{
    fn increment(&self, key: CounterKey, city_arg: String) -> RepoResult<ViewCounter> {
        debug!("Increment view counter {:?} in city {}.", key, city_arg);
        let payload = NewViewCounter::new(key, city_arg);

        diesel::insert_into(view_counters)
            .values(&payload)
            .on_conflict((entity_kind, entity_id, city, rubric_id, attribute_id))
            .do_update()
            .set(counter.eq(counter + 1))
            .get_result::<ViewCounter>(self.db_conn)
            .map_err(|e: diesel::result::Error| e.context(format!("Increment view counter {:?} error occured", payload)).into())
    }

    fn find_counters(
        &self,
        entity: CounterEntity,
        entity_ids: Vec<i32>,
        city_arg: String,
        rubric_id_arg: Option<i32>,
        attribute_id_arg: Option<i32>,
    ) -> RepoResult<HashMap<i32, i32>> {
        debug!(
            "Find {} view counters for {:?} in city {}, rubric {:?}, attribute {:?}.",
            entity, entity_ids, city_arg, rubric_id_arg, attribute_id_arg
        );
        if entity_ids.is_empty() {
            return Ok(HashMap::new());
        }

        view_counters
            .filter(entity_kind.eq(entity))
            .filter(entity_id.eq_any(&entity_ids))
            .filter(city.eq(&city_arg))
            .filter(rubric_id.eq(rubric_id_arg.unwrap_or(NO_DIMENSION)))
            .filter(attribute_id.eq(attribute_id_arg.unwrap_or(NO_DIMENSION)))
            .get_results::<ViewCounter>(self.db_conn)
            .map(|found| found.into_iter().map(|view_counter| (view_counter.entity_id, view_counter.counter)).collect())
            .map_err(|e: diesel::result::Error| {
                e.context(format!("Find {} view counters for {:?} error occured", entity, entity_ids))
                    .into()
            })
    }
}
