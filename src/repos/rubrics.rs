//! Rubrics repo, presents read access to the rubric tree
use std::collections::{HashMap, HashSet, VecDeque};

use diesel;
use diesel::connection::AnsiTransactionManager;
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel::query_dsl::RunQueryDsl;
use diesel::Connection;
use failure::Fail;

use super::types::RepoResult;
use models::{Rubric, RubricNode};
use schema::rubric_attributes_groups::dsl as RubricAttributesGroups;
use schema::rubrics::dsl::*;

pub trait RubricsRepo {
    /// Find specific rubric by id
    fn find(&self, rubric_id: i32) -> RepoResult<Option<Rubric>>;

    /// Find rubric by slug, the topmost one when slugs repeat across branches
    fn find_by_slug(&self, rubric_slug: String) -> RepoResult<Option<Rubric>>;

    /// Every tree edge
    fn list_nodes(&self) -> RepoResult<Vec<RubricNode>>;

    /// Attribute groups of a rubric shown in the catalogue filter
    fn filter_attributes_groups(&self, rubric_id: i32) -> RepoResult<Vec<i32>>;
}

/// Implementation of RubricsRepo trait
pub struct RubricsRepoImpl<'a, T: Connection<Backend = Pg, TransactionManager = AnsiTransactionManager> + 'static> {
    pub db_conn: &'a T,
}

impl<'a, T> RubricsRepoImpl<'a, T>
where
    T: Connection<Backend = Pg, TransactionManager = AnsiTransactionManager> + 'static,
{
    pub fn new(db_conn: &'a T) -> Self {
        Self { db_conn }
    }
}

impl<'a, T> RubricsRepo for RubricsRepoImpl<'a, T>
where
    T: Connection<Backend = Pg, TransactionManager = AnsiTransactionManager> + 'static,
{
    fn find(&self, rubric_id: i32) -> RepoResult<Option<Rubric>> {
        debug!("Find in rubrics with id {}.", rubric_id);
        rubrics
            .find(rubric_id)
            .get_result::<Rubric>(self.db_conn)
            .optional()
            .map_err(|e| e.context(format!("Find rubric by id: {} error occured", rubric_id)).into())
    }

    fn find_by_slug(&self, rubric_slug: String) -> RepoResult<Option<Rubric>> {
        debug!("Find in rubrics with slug {}.", rubric_slug);
        rubrics
            .filter(slug.eq(&rubric_slug))
            .order_by((level.asc(), id.asc()))
            .first::<Rubric>(self.db_conn)
            .optional()
            .map_err(|e| e.context(format!("Find rubric by slug: {} error occured", rubric_slug)).into())
    }

    fn list_nodes(&self) -> RepoResult<Vec<RubricNode>> {
        debug!("List rubric tree nodes.");
        rubrics
            .select((id, parent_id))
            .order_by(id)
            .get_results::<RubricNode>(self.db_conn)
            .map_err(|e| e.context("List rubric tree nodes error occured").into())
    }

    fn filter_attributes_groups(&self, rubric_id_arg: i32) -> RepoResult<Vec<i32>> {
        debug!("Find catalogue filter attribute groups of rubric {}.", rubric_id_arg);
        RubricAttributesGroups::rubric_attributes_groups
            .filter(RubricAttributesGroups::rubric_id.eq(rubric_id_arg))
            .filter(RubricAttributesGroups::show_in_catalogue_filter.eq(true))
            .select(RubricAttributesGroups::attributes_group_id)
            .order_by(RubricAttributesGroups::id)
            .get_results::<i32>(self.db_conn)
            .map_err(|e: diesel::result::Error| {
                e.context(format!("Find catalogue filter attribute groups of rubric {} error occured", rubric_id_arg))
                    .into()
            })
    }
}

/// Returns `root` followed by all of its descendants in breadth-first order.
/// A cycle in the tree is logged and cut so no node is visited twice.
pub fn rubric_subtree_ids(nodes: &[RubricNode], root: i32) -> Vec<i32> {
    let mut children: HashMap<i32, Vec<i32>> = HashMap::new();
    for node in nodes {
        if let Some(parent) = node.parent_id {
            children.entry(parent).or_insert_with(Vec::new).push(node.id);
        }
    }

    let mut visited = HashSet::new();
    let mut queue = VecDeque::new();
    let mut result = vec![];
    visited.insert(root);
    queue.push_back(root);

    while let Some(current) = queue.pop_front() {
        result.push(current);
        if let Some(node_children) = children.get(&current) {
            for child in node_children {
                if visited.insert(*child) {
                    queue.push_back(*child);
                } else {
                    warn!("Rubric tree cycle detected at edge {} -> {}, skipping.", current, child);
                }
            }
        }
    }

    result
}
