//! Catalogue request, pipeline and response structures
use std::fmt;
use std::str::FromStr;
use std::time::SystemTime;

use diesel::sql_types::{Array, BigInt, Double, Integer, Jsonb, Nullable, Timestamp, VarChar};
use serde_json;
use validator::Validate;

use models::validation_rules::validate_catalogue_filter;
use models::{Pagination, RubricOutput};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum SortBy {
    Priority,
    Price,
    CreatedAt,
}

impl Default for SortBy {
    fn default() -> Self {
        SortBy::Priority
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let sort_by = match *self {
            SortBy::Priority => "priority",
            SortBy::Price => "price",
            SortBy::CreatedAt => "createdAt",
        };
        write!(f, "{}", sort_by)
    }
}

impl FromStr for SortBy {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "priority" => Ok(SortBy::Priority),
            "price" => Ok(SortBy::Price),
            "createdAt" => Ok(SortBy::CreatedAt),
            _ => Err(()),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortDir {
    Asc,
    Desc,
}

impl Default for SortDir {
    fn default() -> Self {
        SortDir::Desc
    }
}

impl fmt::Display for SortDir {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let sort_dir = match *self {
            SortDir::Asc => "asc",
            SortDir::Desc => "desc",
        };
        write!(f, "{}", sort_dir)
    }
}

impl FromStr for SortDir {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortDir::Asc),
            "desc" => Ok(SortDir::Desc),
            _ => Err(()),
        }
    }
}

/// Payload of `POST /catalogue`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Validate)]
pub struct CatalogueInput {
    #[validate(custom = "validate_catalogue_filter")]
    pub filter: Vec<String>,
    #[validate(range(min = "1", max = "100"))]
    pub limit: Option<i64>,
    #[validate(range(min = "1", max = "100000"))]
    pub page: Option<i64>,
    pub sort_by: Option<SortBy>,
    pub sort_dir: Option<SortDir>,
}

/// Attribute filter collected from `<key>-<value>` segments
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CatalogueFilterParam {
    pub key: String,
    pub values: Vec<String>,
}

/// Reserved segments steering sorting and price bounds
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct CatalogueControlParams {
    pub sort_by: Option<SortBy>,
    pub sort_dir: Option<SortDir>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ParsedCatalogueFilter {
    pub rubric_slug: String,
    pub params: Vec<CatalogueFilterParam>,
    pub control: CatalogueControlParams,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

/// Typed description of a catalogue products query
#[derive(Debug, Clone, PartialEq)]
pub struct CataloguePipeline {
    pub rubric_ids: Vec<i32>,
    /// Only params with at least one value
    pub filters: Vec<CatalogueFilterParam>,
    pub price_range: Option<PriceRange>,
    pub sort_by: SortBy,
    pub sort_dir: SortDir,
    pub city: String,
    pub default_priority: i32,
    pub pagination: Pagination,
}

/// Product row produced by the pipeline
#[derive(QueryableByName, Debug, Clone, PartialEq)]
pub struct CatalogueProductRow {
    #[sql_type = "Integer"]
    pub id: i32,
    #[sql_type = "Jsonb"]
    pub name: serde_json::Value,
    #[sql_type = "Nullable<Jsonb>"]
    pub card_name: Option<serde_json::Value>,
    #[sql_type = "VarChar"]
    pub slug: String,
    #[sql_type = "Array<Integer>"]
    pub rubric_ids: Vec<i32>,
    #[sql_type = "Timestamp"]
    pub created_at: SystemTime,
    #[sql_type = "Double"]
    pub min_price: f64,
    #[sql_type = "Double"]
    pub max_price: f64,
    #[sql_type = "BigInt"]
    pub shops_count: i64,
    #[sql_type = "Integer"]
    pub priority: i32,
}

#[derive(QueryableByName, Debug, Clone, Copy, PartialEq)]
pub struct TotalDocsRow {
    #[sql_type = "BigInt"]
    pub total_docs: i64,
}

#[derive(QueryableByName, Debug, Clone, Copy, PartialEq)]
pub struct PriceRangeRow {
    #[sql_type = "Nullable<Double>"]
    pub min_price: Option<f64>,
    #[sql_type = "Nullable<Double>"]
    pub max_price: Option<f64>,
}

/// Everything the products repo returns for one pipeline run
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogueSearchResult {
    pub docs: Vec<CatalogueProductRow>,
    pub total_docs: i64,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CatalogueProduct {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub rubric_ids: Vec<i32>,
    pub min_price: f64,
    pub max_price: f64,
    pub shops_count: i64,
    pub priority: i32,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CatalogueProducts {
    pub docs: Vec<CatalogueProduct>,
    pub page: i64,
    pub total_docs: i64,
    pub total_pages: i64,
    pub limit: i64,
    pub sort_by: SortBy,
    pub sort_dir: SortDir,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CatalogueFilterOption {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub is_selected: bool,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CatalogueFilterAttribute {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub options: Vec<CatalogueFilterOption>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CatalogueData {
    pub rubric: RubricOutput,
    pub products: CatalogueProducts,
    pub catalogue_title: String,
    pub catalogue_filter: Vec<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub attributes: Vec<CatalogueFilterAttribute>,
}
