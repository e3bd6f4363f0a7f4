//! Repos is a module responsible for interacting with postgres db
pub mod attributes;
pub mod catalogue_pipeline;
pub mod options;
pub mod products;
pub mod repo_factory;
pub mod rubrics;
pub mod types;
pub mod user_roles;
pub mod view_counters;

pub use self::attributes::*;
pub use self::catalogue_pipeline::*;
pub use self::options::*;
pub use self::products::*;
pub use self::repo_factory::*;
pub use self::rubrics::*;
pub use self::types::*;
pub use self::user_roles::*;
pub use self::view_counters::*;
