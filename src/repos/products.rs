//! Products repo, runs the catalogue pipeline and product card lookups
use diesel;
use diesel::connection::AnsiTransactionManager;
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel::query_dsl::RunQueryDsl;
use diesel::sql_types::{Array, BigInt, Double, Integer, Nullable, VarChar};
use diesel::Connection;
use failure::Error as FailureError;

use super::catalogue_pipeline::PipelineSql;
use super::types::RepoResult;
use models::{
    CataloguePipeline, CatalogueProductRow, CatalogueSearchResult, PriceRangeRow, Product, ProductAttribute, ShopProduct, TotalDocsRow,
};
use schema::product_attributes::dsl as ProductAttributes;
use schema::products::dsl::*;
use schema::shop_products::dsl as ShopProducts;

/// Binds the filter part shared by every pipeline statement, `$1` to `$8`
macro_rules! bind_filter {
    ($query:expr, $binds:expr) => {
        $query
            .bind::<Array<Integer>, _>($binds.rubric_ids.clone())
            .bind::<Array<VarChar>, _>($binds.keys.clone())
            .bind::<Array<VarChar>, _>($binds.values.clone())
            .bind::<BigInt, _>($binds.keys_count)
            .bind::<VarChar, _>($binds.city.clone())
            .bind::<Integer, _>($binds.default_priority)
            .bind::<Nullable<Double>, _>($binds.min_price)
            .bind::<Nullable<Double>, _>($binds.max_price)
    };
}

pub trait ProductsRepo {
    /// Page of catalogue products together with totals and price range
    fn search_catalogue(&self, pipeline: CataloguePipeline) -> RepoResult<CatalogueSearchResult>;

    /// Find active product by slug
    fn find_by_slug(&self, product_slug: String) -> RepoResult<Option<Product>>;

    /// Attribute values of a product
    fn find_attributes(&self, product_id: i32) -> RepoResult<Vec<ProductAttribute>>;

    /// Shop offers of a product
    fn find_offers(&self, product_id: i32) -> RepoResult<Vec<ShopProduct>>;
}

/// Implementation of ProductsRepo trait
pub struct ProductsRepoImpl<'a, T: Connection<Backend = Pg, TransactionManager = AnsiTransactionManager> + 'static> {
    pub db_conn: &'a T,
}

impl<'a, T> ProductsRepoImpl<'a, T>
where
    T: Connection<Backend = Pg, TransactionManager = AnsiTransactionManager> + 'static,
{
    pub fn new(db_conn: &'a T) -> Self {
        Self { db_conn }
    }
}

impl<'a, T> ProductsRepo for ProductsRepoImpl<'a, T>
where
    T: Connection<Backend = Pg, TransactionManager = AnsiTransactionManager> + 'static,
{
    fn search_catalogue(&self, pipeline: CataloguePipeline) -> RepoResult<CatalogueSearchResult> {
        let sql = PipelineSql::compile(&pipeline);
        debug!("Search catalogue products: {} with {:?}.", sql.docs, sql.binds);
        let binds = &sql.binds;

        let search = || -> RepoResult<CatalogueSearchResult> {
            let docs = bind_filter!(diesel::sql_query(sql.docs.as_str()), binds)
                .bind::<BigInt, _>(binds.limit)
                .bind::<BigInt, _>(binds.offset)
                .load::<CatalogueProductRow>(self.db_conn)?;

            let total_docs = bind_filter!(diesel::sql_query(sql.count.as_str()), binds)
                .get_result::<TotalDocsRow>(self.db_conn)?
                .total_docs;

            let prices = bind_filter!(diesel::sql_query(sql.prices.as_str()), binds).get_result::<PriceRangeRow>(self.db_conn)?;

            Ok(CatalogueSearchResult {
                docs,
                total_docs,
                min_price: prices.min_price,
                max_price: prices.max_price,
            })
        };

        search().map_err(|e: FailureError| e.context(format!("Search catalogue products with {:?} error occured", pipeline)).into())
    }

    fn find_by_slug(&self, product_slug: String) -> RepoResult<Option<Product>> {
        debug!("Find in products with slug {}.", product_slug);
        products
            .filter(slug.eq(&product_slug))
            .filter(active.eq(true))
            .first::<Product>(self.db_conn)
            .optional()
            .map_err(|e: diesel::result::Error| {
                let e: FailureError = e.into();
                e.context(format!("Find product by slug: {} error occured", product_slug)).into()
            })
    }

    fn find_attributes(&self, product_id_arg: i32) -> RepoResult<Vec<ProductAttribute>> {
        debug!("Find attributes of product {}.", product_id_arg);
        ProductAttributes::product_attributes
            .filter(ProductAttributes::product_id.eq(product_id_arg))
            .order_by(ProductAttributes::id)
            .get_results::<ProductAttribute>(self.db_conn)
            .map_err(|e: diesel::result::Error| {
                let e: FailureError = e.into();
                e.context(format!("Find attributes of product {} error occured", product_id_arg)).into()
            })
    }

    fn find_offers(&self, product_id_arg: i32) -> RepoResult<Vec<ShopProduct>> {
        debug!("Find offers of product {}.", product_id_arg);
        ShopProducts::shop_products
            .filter(ShopProducts::product_id.eq(product_id_arg))
            .order_by(ShopProducts::price)
            .get_results::<ShopProduct>(self.db_conn)
            .map_err(|e: diesel::result::Error| {
                let e: FailureError = e.into();
                e.context(format!("Find offers of product {} error occured", product_id_arg)).into()
            })
    }
}
