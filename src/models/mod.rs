//! Models contains all structures that are used in different
//! modules of the app

pub mod attribute;
pub mod catalogue;
pub mod option;
pub mod pagination;
pub mod product;
pub mod rubric;
pub mod translation;
pub mod user_role;
pub mod validation_rules;
pub mod view_counter;

pub use self::attribute::*;
pub use self::catalogue::*;
pub use self::option::*;
pub use self::pagination::*;
pub use self::product::*;
pub use self::rubric::*;
pub use self::translation::*;
pub use self::user_role::*;
pub use self::validation_rules::*;
pub use self::view_counter::*;
