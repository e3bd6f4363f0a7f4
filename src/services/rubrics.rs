//! Rubrics Services, presents operations on the rubric tree
use diesel::connection::AnsiTransactionManager;
use diesel::pg::Pg;
use diesel::Connection;
use failure::Error as FailureError;
use futures::Future;
use r2d2::ManageConnection;

use super::types::ServiceFuture;
use models::RubricSubtree;
use repos::{rubric_subtree_ids, ReposFactory};
use services::Service;

pub trait RubricsService {
    /// Returns ids of a rubric and all of its descendants
    fn get_rubric_subtree(&self, rubric_id: i32) -> ServiceFuture<Option<RubricSubtree>>;
}

impl<
        T: Connection<Backend = Pg, TransactionManager = AnsiTransactionManager> + 'static,
        M: ManageConnection<Connection = T>,
        F: ReposFactory<T>,
    > RubricsService for Service<T, M, F>
{
    fn get_rubric_subtree(&self, rubric_id: i32) -> ServiceFuture<Option<RubricSubtree>> {
        let repo_factory = self.static_context.repo_factory.clone();

        Box::new(
            self.spawn_on_pool(move |conn| {
                let rubrics_repo = repo_factory.create_rubrics_repo(&*conn);
                match rubrics_repo.find(rubric_id)? {
                    Some(rubric) => {
                        let nodes = rubrics_repo.list_nodes()?;
                        Ok(Some(RubricSubtree {
                            rubric_id: rubric.id,
                            ids: rubric_subtree_ids(&nodes, rubric.id),
                        }))
                    }
                    None => Ok(None),
                }
            }).map_err(|e: FailureError| e.context("Service rubrics, get_rubric_subtree endpoint error occured.").into()),
        )
    }
}

#[cfg(test)]
pub mod tests {
    use tokio_core::reactor::Core;

    use repos::repo_factory::tests::*;
    use services::rubrics::RubricsService;

    #[test]
    fn test_subtree_of_root_rubric() {
        let mut core = Core::new().unwrap();
        let service = create_service(None);
        let work = service.get_rubric_subtree(1);
        let result = core.run(work).unwrap().unwrap();
        assert_eq!(result.ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_subtree_of_leaf_rubric() {
        let mut core = Core::new().unwrap();
        let service = create_service(None);
        let result = core.run(service.get_rubric_subtree(4)).unwrap().unwrap();
        assert_eq!(result.ids, vec![4]);
    }

    #[test]
    fn test_subtree_of_unknown_rubric() {
        let mut core = Core::new().unwrap();
        let service = create_service(None);
        assert_eq!(core.run(service.get_rubric_subtree(100)).unwrap(), None);
    }
}
