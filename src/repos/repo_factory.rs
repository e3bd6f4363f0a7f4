use diesel::connection::AnsiTransactionManager;
use diesel::pg::Pg;
use diesel::Connection;

use repos::*;

pub trait ReposFactory<C: Connection<Backend = Pg, TransactionManager = AnsiTransactionManager> + 'static>:
    Clone + Send + Sync + 'static
{
    fn create_rubrics_repo<'a>(&self, db_conn: &'a C) -> Box<RubricsRepo + 'a>;
    fn create_attributes_repo<'a>(&self, db_conn: &'a C) -> Box<AttributesRepo + 'a>;
    fn create_options_repo<'a>(&self, db_conn: &'a C) -> Box<OptionsRepo + 'a>;
    fn create_products_repo<'a>(&self, db_conn: &'a C) -> Box<ProductsRepo + 'a>;
    fn create_view_counters_repo<'a>(&self, db_conn: &'a C) -> Box<ViewCountersRepo + 'a>;
    fn create_user_roles_repo<'a>(&self, db_conn: &'a C) -> Box<UserRolesRepo + 'a>;
}

#[derive(Clone, Default)]
pub struct ReposFactoryImpl;

impl<C: Connection<Backend = Pg, TransactionManager = AnsiTransactionManager> + 'static> ReposFactory<C> for ReposFactoryImpl {
    fn create_rubrics_repo<'a>(&self, db_conn: &'a C) -> Box<RubricsRepo + 'a> {
        Box::new(RubricsRepoImpl::new(db_conn)) as Box<RubricsRepo>
    }

    fn create_attributes_repo<'a>(&self, db_conn: &'a C) -> Box<AttributesRepo + 'a> {
        Box::new(AttributesRepoImpl::new(db_conn)) as Box<AttributesRepo>
    }

    fn create_options_repo<'a>(&self, db_conn: &'a C) -> Box<OptionsRepo + 'a> {
        Box::new(OptionsRepoImpl::new(db_conn)) as Box<OptionsRepo>
    }

    fn create_products_repo<'a>(&self, db_conn: &'a C) -> Box<ProductsRepo + 'a> {
        Box::new(ProductsRepoImpl::new(db_conn)) as Box<ProductsRepo>
    }

    fn create_view_counters_repo<'a>(&self, db_conn: &'a C) -> Box<ViewCountersRepo + 'a> {
        Box::new(ViewCountersRepoImpl::new(db_conn)) as Box<ViewCountersRepo>
    }

    fn create_user_roles_repo<'a>(&self, db_conn: &'a C) -> Box<UserRolesRepo + 'a> {
        Box::new(UserRolesRepoImpl::new(db_conn)) as Box<UserRolesRepo>
    }
}

#[cfg(test)]
pub mod tests {
    use std::cmp::Ordering;
    use std::collections::{HashMap, HashSet};
    use std::error::Error;
    use std::fmt;
    use std::sync::{Arc, Mutex};
    use std::time::{Duration, SystemTime, UNIX_EPOCH};

    use diesel::connection::AnsiTransactionManager;
    use diesel::connection::SimpleConnection;
    use diesel::deserialize::QueryableByName;
    use diesel::pg::Pg;
    use diesel::query_builder::AsQuery;
    use diesel::query_builder::QueryFragment;
    use diesel::query_builder::QueryId;
    use diesel::sql_types::HasSqlType;
    use diesel::Connection;
    use diesel::ConnectionResult;
    use diesel::QueryResult;
    use diesel::Queryable;
    use futures_cpupool::CpuPool;
    use r2d2;
    use r2d2::ManageConnection;
    use serde_json;

    use config::Config;
    use controller::context::*;
    use models::*;
    use repos::*;
    use services::*;

    pub const MOCK_USER_ID: i32 = 1;
    pub const MOCK_MODERATOR_ID: i32 = 2;
    pub const MOCK_CITY: &str = "msk";

    pub fn create_service(user_id: Option<i32>) -> Service<MockConnection, MockConnectionManager, ReposFactoryMock> {
        create_service_with_factory(user_id, Language::Ru, ReposFactoryMock::default())
    }

    pub fn create_service_with_factory(
        user_id: Option<i32>,
        lang: Language,
        repo_factory: ReposFactoryMock,
    ) -> Service<MockConnection, MockConnectionManager, ReposFactoryMock> {
        let manager = MockConnectionManager::default();
        let db_pool = r2d2::Pool::builder().build(manager).expect("Failed to create connection pool");
        let cpu_pool = CpuPool::new(1);

        let config = Config::new().unwrap();
        let static_context = StaticContext::new(db_pool, cpu_pool, Arc::new(config), repo_factory);
        let dynamic_context = DynamicContext::new(user_id, MOCK_CITY.to_string(), lang);

        Service::new(static_context, dynamic_context)
    }

    type CounterRecord = (CounterEntity, i32, String, i32, i32);

    /// Repos over fixed catalogue fixtures, view counters are kept in memory
    #[derive(Default, Clone)]
    pub struct ReposFactoryMock {
        pub counters: Arc<Mutex<HashMap<CounterRecord, i32>>>,
        /// Every catalogue search fails as if the database went away
        pub failing_search: bool,
        /// Counter whose updates always fail
        pub failing_counter: Option<CounterKey>,
    }

    impl ReposFactoryMock {
        pub fn counter(&self, key: CounterKey, city: &str) -> Option<i32> {
            let record = NewViewCounter::new(key, city.to_string());
            self.counters
                .lock()
                .unwrap()
                .get(&(record.entity_kind, record.entity_id, record.city, record.rubric_id, record.attribute_id))
                .cloned()
        }

        pub fn set_counter(&self, key: CounterKey, city: &str, value: i32) {
            let record = NewViewCounter::new(key, city.to_string());
            self.counters.lock().unwrap().insert(
                (record.entity_kind, record.entity_id, record.city, record.rubric_id, record.attribute_id),
                value,
            );
        }

        pub fn counters_count(&self) -> usize {
            self.counters.lock().unwrap().len()
        }
    }

    impl<C: Connection<Backend = Pg, TransactionManager = AnsiTransactionManager> + 'static> ReposFactory<C> for ReposFactoryMock {
        fn create_rubrics_repo<'a>(&self, _db_conn: &'a C) -> Box<RubricsRepo + 'a> {
            Box::new(RubricsRepoMock::default()) as Box<RubricsRepo>
        }
        fn create_attributes_repo<'a>(&self, _db_conn: &'a C) -> Box<AttributesRepo + 'a> {
            Box::new(AttributesRepoMock::default()) as Box<AttributesRepo>
        }
        fn create_options_repo<'a>(&self, _db_conn: &'a C) -> Box<OptionsRepo + 'a> {
            Box::new(OptionsRepoMock::default()) as Box<OptionsRepo>
        }
        fn create_products_repo<'a>(&self, _db_conn: &'a C) -> Box<ProductsRepo + 'a> {
            Box::new(ProductsRepoMock {
                counters: self.counters.clone(),
                failing: self.failing_search,
            }) as Box<ProductsRepo>
        }
        fn create_view_counters_repo<'a>(&self, _db_conn: &'a C) -> Box<ViewCountersRepo + 'a> {
            Box::new(ViewCountersRepoMock {
                counters: self.counters.clone(),
                failing: self.failing_counter,
            }) as Box<ViewCountersRepo>
        }
        fn create_user_roles_repo<'a>(&self, _db_conn: &'a C) -> Box<UserRolesRepo + 'a> {
            Box::new(UserRolesRepoMock::default()) as Box<UserRolesRepo>
        }
    }

    fn translations(en: &str, ru: &str) -> serde_json::Value {
        json!([{ "lang": "en", "text": en }, { "lang": "ru", "text": ru }])
    }

    fn moment(secs: u64) -> SystemTime {
        UNIX_EPOCH + Duration::from_secs(secs)
    }

    pub fn create_rubric(id: i32, slug: &str, level: i32, parent_id: Option<i32>) -> Rubric {
        Rubric {
            id,
            name: translations(slug, slug),
            slug: slug.to_string(),
            level,
            parent_id,
            catalogue_title: json!({
                "defaultTitle": translations("All wines", "Все вина"),
                "keyword": translations("wine", "вино"),
                "gender": "neuter"
            }),
            created_at: moment(0),
            updated_at: moment(0),
        }
    }

    /// wine(1) -> red-wine(2), sparkling(3) -> champagne(4); beer(5)
    pub fn rubrics_fixture() -> Vec<Rubric> {
        vec![
            create_rubric(1, "wine", 1, None),
            create_rubric(2, "red-wine", 2, Some(1)),
            create_rubric(3, "sparkling", 2, Some(1)),
            create_rubric(4, "champagne", 3, Some(3)),
            create_rubric(5, "beer", 1, None),
        ]
    }

    pub fn attributes_fixture() -> Vec<Attribute> {
        vec![
            Attribute {
                id: 1,
                attributes_group_id: 1,
                name: translations("Color", "Цвет"),
                slug: "color".to_string(),
                variant: AttributeVariant::Select,
                options_group_id: Some(1),
                metric: None,
                positioning_in_title: Some(json!([
                    { "lang": "ru", "position": "beforeKeyword" },
                    { "lang": "en", "position": "beforeKeyword" }
                ])),
            },
            Attribute {
                id: 2,
                attributes_group_id: 2,
                name: translations("Country", "Страна"),
                slug: "country".to_string(),
                variant: AttributeVariant::Select,
                options_group_id: Some(2),
                metric: None,
                positioning_in_title: Some(json!([{ "lang": "ru", "position": "afterKeyword" }])),
            },
            Attribute {
                id: 3,
                attributes_group_id: 1,
                name: translations("Type", "Тип"),
                slug: "type".to_string(),
                variant: AttributeVariant::MultipleSelect,
                options_group_id: Some(3),
                metric: None,
                positioning_in_title: Some(json!([{ "lang": "ru", "position": "replaceKeyword" }])),
            },
            Attribute {
                id: 4,
                attributes_group_id: 1,
                name: translations("Vintage", "Год урожая"),
                slug: "vintage".to_string(),
                variant: AttributeVariant::Number,
                options_group_id: None,
                metric: None,
                positioning_in_title: Some(json!([{ "lang": "ru", "position": "end" }])),
            },
        ]
    }

    pub fn create_option(id: i32, options_group_id: i32, slug: &str, name: serde_json::Value, gender: Option<Gender>) -> AttributeOption {
        AttributeOption {
            id,
            options_group_id,
            name,
            slug: slug.to_string(),
            gender,
            variants: None,
        }
    }

    pub fn options_fixture() -> Vec<AttributeOption> {
        let mut red = create_option(1, 1, "red", translations("Red", "Красный"), Some(Gender::Masculine));
        red.variants = Some(json!([
            { "gender": "feminine", "value": translations("Red", "Красная") },
            { "gender": "neuter", "value": translations("Red", "Красное") }
        ]));
        let mut white = create_option(2, 1, "white", translations("White", "Белый"), Some(Gender::Masculine));
        white.variants = Some(json!([
            { "gender": "feminine", "value": translations("White", "Белая") },
            { "gender": "neuter", "value": translations("White", "Белое") }
        ]));

        vec![
            red,
            white,
            create_option(3, 2, "france", translations("from France", "из Франции"), None),
            create_option(4, 3, "champagne", translations("champagne", "шампанское"), Some(Gender::Neuter)),
            create_option(5, 3, "port", translations("port", "портвейн"), Some(Gender::Masculine)),
            create_option(6, 3, "madeira", translations("madeira", "мадера"), Some(Gender::Feminine)),
        ]
    }

    pub struct ProductFixture {
        pub product: Product,
        pub attributes: Vec<(&'static str, Vec<&'static str>)>,
        pub prices: Vec<f64>,
    }

    pub fn create_product(id: i32, slug: &str, rubric_ids: Vec<i32>) -> Product {
        Product {
            id,
            name: translations(slug, slug),
            card_name: None,
            description: Some(translations("Description", "Описание")),
            slug: slug.to_string(),
            rubric_ids,
            active: true,
            created_at: moment(id as u64 * 100),
            updated_at: moment(id as u64 * 100),
        }
    }

    pub fn products_fixture() -> Vec<ProductFixture> {
        let mut inactive = create_product(5, "inactive", vec![1]);
        inactive.active = false;

        vec![
            ProductFixture {
                product: create_product(1, "red-bordeaux", vec![2]),
                attributes: vec![("color", vec!["red"]), ("country", vec!["france"])],
                prices: vec![95.0, 80.0],
            },
            ProductFixture {
                product: create_product(2, "white-chablis", vec![1]),
                attributes: vec![("color", vec!["white"]), ("country", vec!["france"])],
                prices: vec![100.0],
            },
            ProductFixture {
                product: create_product(3, "champagne-brut", vec![4]),
                attributes: vec![("color", vec!["white"]), ("type", vec!["champagne"])],
                prices: vec![200.0, 150.0],
            },
            ProductFixture {
                product: create_product(4, "no-offers", vec![1]),
                attributes: vec![("color", vec!["red"])],
                prices: vec![],
            },
            ProductFixture {
                product: inactive,
                attributes: vec![("color", vec!["red"])],
                prices: vec![50.0],
            },
            ProductFixture {
                product: create_product(6, "lager", vec![5]),
                attributes: vec![],
                prices: vec![10.0],
            },
        ]
    }

    #[derive(Clone, Default)]
    pub struct RubricsRepoMock;

    impl RubricsRepo for RubricsRepoMock {
        fn find(&self, rubric_id: i32) -> RepoResult<Option<Rubric>> {
            Ok(rubrics_fixture().into_iter().find(|rubric| rubric.id == rubric_id))
        }

        fn find_by_slug(&self, rubric_slug: String) -> RepoResult<Option<Rubric>> {
            Ok(rubrics_fixture().into_iter().find(|rubric| rubric.slug == rubric_slug))
        }

        fn list_nodes(&self) -> RepoResult<Vec<RubricNode>> {
            Ok(rubrics_fixture()
                .into_iter()
                .map(|rubric| RubricNode {
                    id: rubric.id,
                    parent_id: rubric.parent_id,
                }).collect())
        }

        fn filter_attributes_groups(&self, rubric_id: i32) -> RepoResult<Vec<i32>> {
            Ok(if rubric_id == 5 { vec![] } else { vec![1] })
        }
    }

    #[derive(Clone, Default)]
    pub struct AttributesRepoMock;

    impl AttributesRepo for AttributesRepoMock {
        fn find_by_slugs(&self, slugs: Vec<String>) -> RepoResult<Vec<Attribute>> {
            Ok(attributes_fixture().into_iter().filter(|attribute| slugs.contains(&attribute.slug)).collect())
        }

        fn find_by_groups(&self, group_ids: Vec<i32>) -> RepoResult<Vec<Attribute>> {
            Ok(attributes_fixture()
                .into_iter()
                .filter(|attribute| group_ids.contains(&attribute.attributes_group_id))
                .collect())
        }
    }

    #[derive(Clone, Default)]
    pub struct OptionsRepoMock;

    impl OptionsRepo for OptionsRepoMock {
        fn find_by_groups(&self, group_ids: Vec<i32>) -> RepoResult<Vec<AttributeOption>> {
            Ok(options_fixture()
                .into_iter()
                .filter(|option| group_ids.contains(&option.options_group_id))
                .collect())
        }
    }

    /// Evaluates catalogue pipelines over `products_fixture` in memory,
    /// product priorities come from the shared view counters
    #[derive(Clone)]
    pub struct ProductsRepoMock {
        pub counters: Arc<Mutex<HashMap<CounterRecord, i32>>>,
        pub failing: bool,
    }

    impl ProductsRepoMock {
        fn matches(fixture: &ProductFixture, pipeline: &CataloguePipeline) -> bool {
            let rubric_ids: HashSet<i32> = pipeline.rubric_ids.iter().cloned().collect();
            fixture.product.active
                && !fixture.prices.is_empty()
                && fixture.product.rubric_ids.iter().any(|id| rubric_ids.contains(id))
                && pipeline.filters.iter().filter(|param| !param.values.is_empty()).all(|param| {
                    fixture
                        .attributes
                        .iter()
                        .any(|(key, values)| *key == param.key && param.values.iter().any(|value| values.contains(&value.as_str())))
                })
        }

        fn row(&self, fixture: &ProductFixture, pipeline: &CataloguePipeline) -> CatalogueProductRow {
            let record = NewViewCounter::new(CounterKey::product(fixture.product.id), pipeline.city.clone());
            let priority = self
                .counters
                .lock()
                .unwrap()
                .get(&(record.entity_kind, record.entity_id, record.city, record.rubric_id, record.attribute_id))
                .cloned()
                .unwrap_or(pipeline.default_priority);
            let min_price = fixture.prices.iter().cloned().fold(::std::f64::MAX, f64::min);
            let max_price = fixture.prices.iter().cloned().fold(::std::f64::MIN, f64::max);
            CatalogueProductRow {
                id: fixture.product.id,
                name: fixture.product.name.clone(),
                card_name: fixture.product.card_name.clone(),
                slug: fixture.product.slug.clone(),
                rubric_ids: fixture.product.rubric_ids.clone(),
                created_at: fixture.product.created_at,
                min_price,
                max_price,
                shops_count: fixture.prices.len() as i64,
                priority,
            }
        }

        fn compare(a: &CatalogueProductRow, b: &CatalogueProductRow, pipeline: &CataloguePipeline) -> Ordering {
            let ordering = match pipeline.sort_by {
                SortBy::Priority => a.priority.cmp(&b.priority),
                SortBy::Price => a.min_price.partial_cmp(&b.min_price).unwrap_or(Ordering::Equal),
                SortBy::CreatedAt => a.created_at.cmp(&b.created_at),
            };
            let ordering = match pipeline.sort_dir {
                SortDir::Asc => ordering,
                SortDir::Desc => ordering.reverse(),
            };
            ordering.then_with(|| b.id.cmp(&a.id))
        }
    }

    impl ProductsRepo for ProductsRepoMock {
        fn search_catalogue(&self, pipeline: CataloguePipeline) -> RepoResult<CatalogueSearchResult> {
            if self.failing {
                return Err(format_err!("Connection to products storage lost"));
            }
            let matched: Vec<CatalogueProductRow> = products_fixture()
                .iter()
                .filter(|fixture| Self::matches(fixture, &pipeline))
                .map(|fixture| self.row(fixture, &pipeline))
                .collect();

            let min_price = matched.iter().map(|row| row.min_price).fold(None, |acc: Option<f64>, price| {
                Some(acc.map_or(price, |acc| acc.min(price)))
            });
            let max_price = matched.iter().map(|row| row.min_price).fold(None, |acc: Option<f64>, price| {
                Some(acc.map_or(price, |acc| acc.max(price)))
            });

            let mut docs: Vec<CatalogueProductRow> = matched
                .into_iter()
                .filter(|row| {
                    pipeline
                        .price_range
                        .map(|range| row.min_price >= range.min && row.min_price <= range.max)
                        .unwrap_or(true)
                }).collect();
            docs.sort_by(|a, b| Self::compare(a, b, &pipeline));
            let total_docs = docs.len() as i64;

            let docs = docs
                .into_iter()
                .skip(pipeline.pagination.offset() as usize)
                .take(pipeline.pagination.limit as usize)
                .collect();

            Ok(CatalogueSearchResult {
                docs,
                total_docs,
                min_price,
                max_price,
            })
        }

        fn find_by_slug(&self, product_slug: String) -> RepoResult<Option<Product>> {
            Ok(products_fixture()
                .into_iter()
                .map(|fixture| fixture.product)
                .find(|product| product.active && product.slug == product_slug))
        }

        fn find_attributes(&self, product_id: i32) -> RepoResult<Vec<ProductAttribute>> {
            Ok(products_fixture()
                .into_iter()
                .filter(|fixture| fixture.product.id == product_id)
                .flat_map(|fixture| fixture.attributes.into_iter())
                .enumerate()
                .map(|(index, (key, values))| ProductAttribute {
                    id: index as i32 + 1,
                    product_id,
                    attribute_slug: key.to_string(),
                    value: values.into_iter().map(|value| value.to_string()).collect(),
                }).collect())
        }

        fn find_offers(&self, product_id: i32) -> RepoResult<Vec<ShopProduct>> {
            Ok(products_fixture()
                .into_iter()
                .filter(|fixture| fixture.product.id == product_id)
                .flat_map(|fixture| fixture.prices.into_iter())
                .enumerate()
                .map(|(index, price)| ShopProduct {
                    id: index as i32 + 1,
                    shop_id: index as i32 + 1,
                    product_id,
                    available: 1,
                    price,
                    old_prices: None,
                    created_at: moment(0),
                    updated_at: moment(0),
                }).collect())
        }
    }

    /// Upserts counters into the map shared with `ReposFactoryMock`
    #[derive(Clone, Default)]
    pub struct ViewCountersRepoMock {
        pub counters: Arc<Mutex<HashMap<CounterRecord, i32>>>,
        pub failing: Option<CounterKey>,
    }

    impl ViewCountersRepo for ViewCountersRepoMock {
        fn increment(&self, key: CounterKey, city: String) -> RepoResult<ViewCounter> {
            if self.failing == Some(key) {
                return Err(format_err!("Counter {:?} is locked", key));
            }
            let record = NewViewCounter::new(key, city);
            let mut counters = self.counters.lock().unwrap();
            let counter = counters
                .entry((
                    record.entity_kind,
                    record.entity_id,
                    record.city.clone(),
                    record.rubric_id,
                    record.attribute_id,
                )).and_modify(|counter| *counter += 1)
                .or_insert(record.counter);
            Ok(ViewCounter {
                id: 1,
                entity_kind: record.entity_kind,
                entity_id: record.entity_id,
                city: record.city,
                rubric_id: record.rubric_id,
                attribute_id: record.attribute_id,
                counter: *counter,
            })
        }

        fn find_counters(
            &self,
            entity: CounterEntity,
            entity_ids: Vec<i32>,
            city: String,
            rubric_id: Option<i32>,
            attribute_id: Option<i32>,
        ) -> RepoResult<HashMap<i32, i32>> {
            let counters = self.counters.lock().unwrap();
            Ok(entity_ids
                .into_iter()
                .filter_map(|entity_id| {
                    counters
                        .get(&(
                            entity,
                            entity_id,
                            city.clone(),
                            rubric_id.unwrap_or(NO_DIMENSION),
                            attribute_id.unwrap_or(NO_DIMENSION),
                        )).map(|counter| (entity_id, *counter))
                }).collect())
        }
    }

    #[derive(Clone, Default)]
    pub struct UserRolesRepoMock;

    impl UserRolesRepo for UserRolesRepoMock {
        fn list_for_user(&self, user_id: i32) -> RepoResult<Vec<UserRoleKind>> {
            Ok(match user_id {
                MOCK_MODERATOR_ID => vec![UserRoleKind::User, UserRoleKind::Moderator],
                _ => vec![UserRoleKind::User],
            })
        }
    }

    #[derive(Default)]
    pub struct MockConnection {
        tr: AnsiTransactionManager,
    }

    impl Connection for MockConnection {
        type Backend = Pg;
        type TransactionManager = AnsiTransactionManager;

        fn establish(_database_url: &str) -> ConnectionResult<MockConnection> {
            Ok(MockConnection::default())
        }

        fn execute(&self, _query: &str) -> QueryResult<usize> {
            unimplemented!()
        }

        fn query_by_index<T, U>(&self, _source: T) -> QueryResult<Vec<U>>
        where
            T: AsQuery,
            T::Query: QueryFragment<Pg> + QueryId,
            Pg: HasSqlType<T::SqlType>,
            U: Queryable<T::SqlType, Pg>,
        {
            unimplemented!()
        }

        fn query_by_name<T, U>(&self, _source: &T) -> QueryResult<Vec<U>>
        where
            T: QueryFragment<Pg> + QueryId,
            U: QueryableByName<Pg>,
        {
            unimplemented!()
        }

        fn execute_returning_count<T>(&self, _source: &T) -> QueryResult<usize>
        where
            T: QueryFragment<Pg> + QueryId,
        {
            unimplemented!()
        }

        fn transaction_manager(&self) -> &Self::TransactionManager {
            &self.tr
        }
    }

    impl SimpleConnection for MockConnection {
        fn batch_execute(&self, _query: &str) -> QueryResult<()> {
            Ok(())
        }
    }

    #[derive(Default)]
    pub struct MockConnectionManager;

    impl ManageConnection for MockConnectionManager {
        type Connection = MockConnection;
        type Error = MockError;

        fn connect(&self) -> Result<MockConnection, MockError> {
            Ok(MockConnection::default())
        }

        fn is_valid(&self, _conn: &mut MockConnection) -> Result<(), MockError> {
            Ok(())
        }

        fn has_broken(&self, _conn: &mut MockConnection) -> bool {
            false
        }
    }

    #[derive(Debug)]
    pub struct MockError {}

    impl fmt::Display for MockError {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            write!(f, "Mock connection error")
        }
    }

    impl Error for MockError {
        fn description(&self) -> &str {
            "Mock connection error"
        }

        fn cause(&self) -> Option<&Error> {
            None
        }
    }
}
