//! View counters service, registers views of catalogue entities per city
use std::collections::HashSet;

use diesel::connection::AnsiTransactionManager;
use diesel::pg::Pg;
use diesel::Connection;
use r2d2::ManageConnection;

use super::types::ServiceFuture;
use models::{CounterKey, UserRoleKind, ViewCounter};
use repos::{ReposFactory, ViewCountersRepo};
use services::Service;

pub trait ViewCountersService {
    /// Increments every counter once, returns the counters that were updated
    fn update_view_counters(&self, keys: Vec<CounterKey>) -> ServiceFuture<Vec<ViewCounter>>;

    /// Starts counters update without waiting for it
    fn spawn_view_counters_update(&self, keys: Vec<CounterKey>);
}

impl<
        T: Connection<Backend = Pg, TransactionManager = AnsiTransactionManager> + 'static,
        M: ManageConnection<Connection = T>,
        F: ReposFactory<T>,
    > ViewCountersService for Service<T, M, F>
{
    fn update_view_counters(&self, keys: Vec<CounterKey>) -> ServiceFuture<Vec<ViewCounter>> {
        let repo_factory = self.static_context.repo_factory.clone();
        let city = self.dynamic_context.city.clone();

        self.spawn_on_pool(move |conn| {
            let view_counters_repo = repo_factory.create_view_counters_repo(&*conn);
            Ok(increment_counters(&*view_counters_repo, keys, &city))
        })
    }

    fn spawn_view_counters_update(&self, keys: Vec<CounterKey>) {
        if keys.is_empty() {
            return;
        }
        let repo_factory = self.static_context.repo_factory.clone();
        let city = self.dynamic_context.city.clone();

        self.spawn_detachable(move |conn| {
            let view_counters_repo = repo_factory.create_view_counters_repo(&*conn);
            increment_counters(&*view_counters_repo, keys, &city);
            Ok(())
        }).forget();
    }
}

/// Counters are independent, a failed key is logged and the rest still move
fn increment_counters(view_counters_repo: &ViewCountersRepo, keys: Vec<CounterKey>, city: &str) -> Vec<ViewCounter> {
    unique_keys(keys)
        .into_iter()
        .filter_map(|key| match view_counters_repo.increment(key, city.to_string()) {
            Ok(counter) => Some(counter),
            Err(e) => {
                warn!("View counter {:?} update failed: {}", key, e);
                None
            }
        }).collect()
}

/// Staff traffic never moves counters
pub fn is_staff(roles: &[UserRoleKind]) -> bool {
    roles.iter().any(|role| role.is_staff())
}

/// Drops repeated keys keeping the first occurrence order
pub fn unique_keys(keys: Vec<CounterKey>) -> Vec<CounterKey> {
    let mut seen = HashSet::new();
    keys.into_iter().filter(|key| seen.insert(*key)).collect()
}
