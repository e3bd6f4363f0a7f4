//! Products and their shop offers
use std::time::SystemTime;

use serde_json;

#[derive(Serialize, Deserialize, Queryable, Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i32,
    pub name: serde_json::Value,
    pub card_name: Option<serde_json::Value>,
    pub description: Option<serde_json::Value>,
    pub slug: String,
    pub rubric_ids: Vec<i32>,
    pub active: bool,
    pub created_at: SystemTime,
    pub updated_at: SystemTime,
}

/// Attribute values stored for a product
#[derive(Serialize, Deserialize, Queryable, Debug, Clone, PartialEq)]
pub struct ProductAttribute {
    pub id: i32,
    pub product_id: i32,
    pub attribute_slug: String,
    pub value: Vec<String>,
}

/// A shop selling a product
#[derive(Serialize, Deserialize, Queryable, Debug, Clone, PartialEq)]
pub struct ShopProduct {
    pub id: i32,
    pub shop_id: i32,
    pub product_id: i32,
    pub available: i32,
    pub price: f64,
    pub old_prices: Option<serde_json::Value>,
    pub created_at: SystemTime,
    pub updated_at: SystemTime,
}

/// Aggregate over all shop offers of a product
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ProductOffers {
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub shops_count: i64,
}

impl ProductOffers {
    pub fn from_shop_products(shop_products: &[ShopProduct]) -> Self {
        let prices = shop_products.iter().map(|sp| sp.price);
        Self {
            min_price: prices.clone().fold(None, |acc: Option<f64>, price| Some(acc.map_or(price, |acc| acc.min(price)))),
            max_price: prices.fold(None, |acc: Option<f64>, price| Some(acc.map_or(price, |acc| acc.max(price)))),
            shops_count: shop_products.len() as i64,
        }
    }
}

/// Product card page data
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ProductCard {
    pub id: i32,
    pub slug: String,
    pub name: String,
    pub description: Option<String>,
    pub rubric_ids: Vec<i32>,
    pub attributes: Vec<ProductAttribute>,
    pub offers: ProductOffers,
}
