//! System Services, presents system wide operations
use futures::future;

use super::types::ServiceFuture;

pub trait SystemService {
    /// Healthcheck
    fn healthcheck(&self) -> ServiceFuture<String>;
}

/// System service, responsible for service health
#[derive(Clone, Default)]
pub struct SystemServiceImpl;

impl SystemService for SystemServiceImpl {
    fn healthcheck(&self) -> ServiceFuture<String> {
        Box::new(future::ok("Ok".to_string()))
    }
}
