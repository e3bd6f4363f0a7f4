//! Services is a core layer for the app business logic like
//! resolving catalogue pages, composing titles, counting views, etc.

pub mod catalogue;
pub mod products;
pub mod rubrics;
pub mod system;
pub mod types;
pub mod view_counters;

pub use self::catalogue::*;
pub use self::products::*;
pub use self::rubrics::*;
pub use self::system::*;
pub use self::types::*;
pub use self::view_counters::*;

use diesel::connection::AnsiTransactionManager;
use diesel::pg::Pg;
use diesel::Connection;
use failure::Error as FailureError;
use failure::Fail;
use futures_cpupool::CpuFuture;
use r2d2::{ManageConnection, PooledConnection};

use controller::context::{DynamicContext, StaticContext};
use errors::Error;
use repos::repo_factory::*;

/// Service
pub struct Service<
    T: Connection<Backend = Pg, TransactionManager = AnsiTransactionManager> + 'static,
    M: ManageConnection<Connection = T>,
    F: ReposFactory<T>,
> {
    pub static_context: StaticContext<T, M, F>,
    pub dynamic_context: DynamicContext,
}

impl<
        T: Connection<Backend = Pg, TransactionManager = AnsiTransactionManager> + 'static,
        M: ManageConnection<Connection = T>,
        F: ReposFactory<T>,
    > Service<T, M, F>
{
    /// Create a new service
    pub fn new(static_context: StaticContext<T, M, F>, dynamic_context: DynamicContext) -> Self {
        Self {
            static_context,
            dynamic_context,
        }
    }

    /// Runs blocking database work on the cpu pool with a pooled connection
    pub fn spawn_on_pool<R, Func>(&self, f: Func) -> ServiceFuture<R>
    where
        Func: FnOnce(PooledConnection<M>) -> Result<R, FailureError> + Send + 'static,
        R: Send + 'static,
    {
        Box::new(self.spawn_detachable(f))
    }

    /// Same as `spawn_on_pool`, the returned future may be forgotten
    /// to let the work finish without awaiting it
    pub fn spawn_detachable<R, Func>(&self, f: Func) -> CpuFuture<R, FailureError>
    where
        Func: FnOnce(PooledConnection<M>) -> Result<R, FailureError> + Send + 'static,
        R: Send + 'static,
    {
        let db_pool = self.static_context.db_pool.clone();
        self.static_context.cpu_pool.spawn_fn(move || {
            db_pool
                .get()
                .map_err(|e| e.context(Error::Connection).into())
                .and_then(f)
        })
    }
}

impl<
        T: Connection<Backend = Pg, TransactionManager = AnsiTransactionManager> + 'static,
        M: ManageConnection<Connection = T>,
        F: ReposFactory<T>,
    > Clone for Service<T, M, F>
{
    fn clone(&self) -> Self {
        Self {
            static_context: self.static_context.clone(),
            dynamic_context: self.dynamic_context.clone(),
        }
    }
}
