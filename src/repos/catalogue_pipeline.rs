//! Compiles a `CataloguePipeline` into parameterised SQL.
//!
//! All three statements share one CTE and one bind set:
//!
//! | bind | value                                   |
//! |------|-----------------------------------------|
//! | $1   | rubric ids, descendants included        |
//! | $2   | flattened attribute filter keys         |
//! | $3   | flattened attribute filter values       |
//! | $4   | number of distinct filter keys          |
//! | $5   | city of the priority counters           |
//! | $6   | priority of products never viewed       |
//! | $7   | lower price bound                       |
//! | $8   | upper price bound                       |
//! | $9   | page size (docs statement only)         |
//! | $10  | page offset (docs statement only)       |
use std::collections::HashSet;

use models::{CataloguePipeline, SortBy, SortDir};

const FILTERED_PRODUCTS: &str = "WITH filtered AS (\
SELECT p.id, p.name, p.card_name, p.slug, p.rubric_ids, p.created_at, \
offers.min_price, offers.max_price, offers.shops_count, \
COALESCE(vc.counter, $6) AS priority \
FROM products p \
JOIN LATERAL (\
SELECT MIN(sp.price) AS min_price, MAX(sp.price) AS max_price, COUNT(sp.id) AS shops_count \
FROM shop_products sp WHERE sp.product_id = p.id\
) offers ON offers.shops_count > 0 \
LEFT JOIN view_counters vc ON vc.entity_kind = 'product' AND vc.entity_id = p.id \
AND vc.city = $5 AND vc.rubric_id = 0 AND vc.attribute_id = 0 \
WHERE p.active AND p.rubric_ids && $1";

const ATTRIBUTES_MATCH: &str = " AND (\
SELECT COUNT(DISTINCT f.key) FROM product_attributes pa \
JOIN UNNEST($2::varchar[], $3::varchar[]) AS f(key, value) \
ON pa.attribute_slug = f.key AND f.value = ANY(pa.value) \
WHERE pa.product_id = p.id\
) = $4";

const PRICE_RANGE: &str = " WHERE min_price BETWEEN $7 AND $8";

/// Values bound to the compiled statements
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineBinds {
    pub rubric_ids: Vec<i32>,
    pub keys: Vec<String>,
    pub values: Vec<String>,
    pub keys_count: i64,
    pub city: String,
    pub default_priority: i32,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub limit: i64,
    pub offset: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PipelineSql {
    /// Page of products
    pub docs: String,
    /// Number of matching products
    pub count: String,
    /// Min offer price range over the attribute matched set, price bounds ignored
    pub prices: String,
    pub binds: PipelineBinds,
}

impl PipelineSql {
    pub fn compile(pipeline: &CataloguePipeline) -> Self {
        let mut keys = vec![];
        let mut values = vec![];
        let mut distinct_keys = HashSet::new();
        for param in pipeline.filters.iter().filter(|param| !param.values.is_empty()) {
            distinct_keys.insert(param.key.clone());
            for value in &param.values {
                keys.push(param.key.clone());
                values.push(value.clone());
            }
        }

        let mut filtered = FILTERED_PRODUCTS.to_string();
        if !distinct_keys.is_empty() {
            filtered.push_str(ATTRIBUTES_MATCH);
        }
        filtered.push(')');

        let price_filter = if pipeline.price_range.is_some() { PRICE_RANGE } else { "" };

        let docs = format!(
            "{} SELECT * FROM filtered{} ORDER BY {} {}, id DESC LIMIT $9 OFFSET $10",
            filtered,
            price_filter,
            sort_column(pipeline.sort_by),
            sort_direction(pipeline.sort_dir)
        );
        let count = format!("{} SELECT COUNT(*) AS total_docs FROM filtered{}", filtered, price_filter);
        let prices = format!(
            "{} SELECT MIN(min_price) AS min_price, MAX(min_price) AS max_price FROM filtered",
            filtered
        );

        let binds = PipelineBinds {
            rubric_ids: pipeline.rubric_ids.clone(),
            keys,
            values,
            keys_count: distinct_keys.len() as i64,
            city: pipeline.city.clone(),
            default_priority: pipeline.default_priority,
            min_price: pipeline.price_range.map(|range| range.min),
            max_price: pipeline.price_range.map(|range| range.max),
            limit: pipeline.pagination.limit,
            offset: pipeline.pagination.offset(),
        };

        Self { docs, count, prices, binds }
    }
}

fn sort_column(sort_by: SortBy) -> &'static str {
    match sort_by {
        SortBy::Priority => "priority",
        SortBy::Price => "min_price",
        SortBy::CreatedAt => "created_at",
    }
}

fn sort_direction(sort_dir: SortDir) -> &'static str {
    match sort_dir {
        SortDir::Asc => "ASC",
        SortDir::Desc => "DESC",
    }
}
