//! View counters rank entities by popularity per city
use std::fmt;
use std::str::FromStr;

use diesel::sql_types::VarChar;

use schema::view_counters;

/// Counter value of an entity that was never viewed
pub const DEFAULT_PRIORITY: i32 = 1;

/// Stored in place of an absent counter dimension
pub const NO_DIMENSION: i32 = 0;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, AsExpression, FromSqlRow)]
#[sql_type = "VarChar"]
#[serde(rename_all = "lowercase")]
pub enum CounterEntity {
    Rubric,
    Attribute,
    Option,
    Product,
}

impl fmt::Display for CounterEntity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let entity = match *self {
            CounterEntity::Rubric => "rubric",
            CounterEntity::Attribute => "attribute",
            CounterEntity::Option => "option",
            CounterEntity::Product => "product",
        };
        write!(f, "{}", entity)
    }
}

impl FromStr for CounterEntity {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rubric" => Ok(CounterEntity::Rubric),
            "attribute" => Ok(CounterEntity::Attribute),
            "option" => Ok(CounterEntity::Option),
            "product" => Ok(CounterEntity::Product),
            _ => Err(()),
        }
    }
}

varchar_enum_sql!(CounterEntity);

/// Identifies a single counter, the city is supplied separately
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CounterKey {
    pub entity: CounterEntity,
    pub entity_id: i32,
    pub rubric_id: Option<i32>,
    pub attribute_id: Option<i32>,
}

impl CounterKey {
    pub fn rubric(rubric_id: i32) -> Self {
        Self {
            entity: CounterEntity::Rubric,
            entity_id: rubric_id,
            rubric_id: None,
            attribute_id: None,
        }
    }

    pub fn attribute(attribute_id: i32, rubric_id: i32) -> Self {
        Self {
            entity: CounterEntity::Attribute,
            entity_id: attribute_id,
            rubric_id: Some(rubric_id),
            attribute_id: None,
        }
    }

    pub fn option(option_id: i32, rubric_id: i32, attribute_id: i32) -> Self {
        Self {
            entity: CounterEntity::Option,
            entity_id: option_id,
            rubric_id: Some(rubric_id),
            attribute_id: Some(attribute_id),
        }
    }

    pub fn product(product_id: i32) -> Self {
        Self {
            entity: CounterEntity::Product,
            entity_id: product_id,
            rubric_id: None,
            attribute_id: None,
        }
    }
}

#[derive(Serialize, Deserialize, Queryable, Debug, Clone, PartialEq)]
pub struct ViewCounter {
    pub id: i32,
    pub entity_kind: CounterEntity,
    pub entity_id: i32,
    pub city: String,
    pub rubric_id: i32,
    pub attribute_id: i32,
    pub counter: i32,
}

#[derive(Insertable, Debug, Clone)]
#[table_name = "view_counters"]
pub struct NewViewCounter {
    pub entity_kind: CounterEntity,
    pub entity_id: i32,
    pub city: String,
    pub rubric_id: i32,
    pub attribute_id: i32,
    pub counter: i32,
}

impl NewViewCounter {
    /// First view of an entity starts it at `DEFAULT_PRIORITY`
    pub fn new(key: CounterKey, city: String) -> Self {
        Self {
            entity_kind: key.entity,
            entity_id: key.entity_id,
            city,
            rubric_id: key.rubric_id.unwrap_or(NO_DIMENSION),
            attribute_id: key.attribute_id.unwrap_or(NO_DIMENSION),
            counter: DEFAULT_PRIORITY,
        }
    }
}
