//! Catalogue service resolves a storefront catalogue page:
//! rubric, products page, price range, title and filter facets.
pub mod facets;
pub mod filter;
pub mod title;

pub use self::facets::*;
pub use self::filter::*;
pub use self::title::*;

use std::collections::HashMap;

use diesel::connection::AnsiTransactionManager;
use diesel::pg::Pg;
use diesel::Connection;
use failure::Error as FailureError;
use futures::future;
use futures::Future;
use r2d2::ManageConnection;
use sentry::integrations::failure::capture_error;

use super::types::ServiceFuture;
use super::view_counters::{is_staff, ViewCountersService};
use models::*;
use repos::{rubric_subtree_ids, AttributesRepo, OptionsRepo, ProductsRepo, ReposFactory, RepoResult, RubricsRepo, UserRolesRepo, ViewCountersRepo};
use services::Service;

pub trait CatalogueService {
    /// Resolves a catalogue page, `None` when the rubric is unknown or the lookup failed
    fn get_catalogue_data(&self, input: CatalogueInput) -> ServiceFuture<Option<CatalogueData>>;
}

impl<
        T: Connection<Backend = Pg, TransactionManager = AnsiTransactionManager> + 'static,
        M: ManageConnection<Connection = T>,
        F: ReposFactory<T>,
    > CatalogueService for Service<T, M, F>
{
    fn get_catalogue_data(&self, input: CatalogueInput) -> ServiceFuture<Option<CatalogueData>> {
        let repo_factory = self.static_context.repo_factory.clone();
        let request = CatalogueRequest {
            user_id: self.dynamic_context.user_id,
            city: self.dynamic_context.city.clone(),
            lang: self.dynamic_context.lang,
            default_lang: self.static_context.config.catalogue.default_lang,
            products_limit: self.static_context.config.catalogue.products_limit,
        };
        let service = self.clone();

        Box::new(
            self.spawn_on_pool(move |conn| {
                let repos = CatalogueRepos {
                    rubrics: repo_factory.create_rubrics_repo(&*conn),
                    attributes: repo_factory.create_attributes_repo(&*conn),
                    options: repo_factory.create_options_repo(&*conn),
                    products: repo_factory.create_products_repo(&*conn),
                    view_counters: repo_factory.create_view_counters_repo(&*conn),
                    user_roles: repo_factory.create_user_roles_repo(&*conn),
                };
                resolve_catalogue(&repos, &input, &request)
            }).map(move |lookup| {
                if lookup.is_staff {
                    debug!("Staff request, catalogue view counters are left intact.");
                } else {
                    service.spawn_view_counters_update(lookup.counter_keys);
                }
                lookup.data
            }).or_else(|e: FailureError| {
                let e: FailureError = e.context("Service catalogue, get_catalogue_data endpoint error occured.").into();
                error!("{}", error_chain(&e));
                capture_error(&e);
                future::ok(None)
            }),
        )
    }
}

struct CatalogueRequest {
    user_id: Option<i32>,
    city: String,
    lang: Language,
    default_lang: Language,
    products_limit: i64,
}

struct CatalogueRepos<'a> {
    rubrics: Box<RubricsRepo + 'a>,
    attributes: Box<AttributesRepo + 'a>,
    options: Box<OptionsRepo + 'a>,
    products: Box<ProductsRepo + 'a>,
    view_counters: Box<ViewCountersRepo + 'a>,
    user_roles: Box<UserRolesRepo + 'a>,
}

/// Page data together with the view counters it should bump
struct CatalogueLookup {
    data: Option<CatalogueData>,
    counter_keys: Vec<CounterKey>,
    is_staff: bool,
}

impl CatalogueLookup {
    fn not_found() -> Self {
        Self {
            data: None,
            counter_keys: vec![],
            is_staff: false,
        }
    }
}

fn resolve_catalogue(repos: &CatalogueRepos, input: &CatalogueInput, request: &CatalogueRequest) -> RepoResult<CatalogueLookup> {
    let parsed = match parse_catalogue_filter(&input.filter) {
        Some(parsed) => parsed,
        None => {
            debug!("Catalogue filter {:?} has no rubric slug.", input.filter);
            return Ok(CatalogueLookup::not_found());
        }
    };

    let rubric = match repos.rubrics.find_by_slug(parsed.rubric_slug.clone())? {
        Some(rubric) => rubric,
        None => {
            debug!("Catalogue rubric {} not found.", parsed.rubric_slug);
            return Ok(CatalogueLookup::not_found());
        }
    };
    let rubric_ids = rubric_subtree_ids(&repos.rubrics.list_nodes()?, rubric.id);

    let filter_keys = parsed.params.iter().map(|param| param.key.clone()).collect();
    let filter_attributes = repos.attributes.find_by_slugs(filter_keys)?;
    let filter_options = repos
        .options
        .find_by_groups(filter_attributes.iter().filter_map(|attribute| attribute.options_group_id).collect())?;

    let pipeline = build_catalogue_pipeline(rubric_ids, &parsed, input, request.city.clone(), request.products_limit);
    let pagination = pipeline.pagination;
    let (sort_by, sort_dir) = (pipeline.sort_by, pipeline.sort_dir);
    let search = repos.products.search_catalogue(pipeline)?;

    let title_attributes = build_title_attributes(&parsed.params, &filter_attributes, &filter_options);
    let catalogue_title = generate_catalogue_title(
        &rubric.catalogue_title_template(),
        &title_attributes,
        request.lang,
        request.default_lang,
    );

    let attributes = load_filter_attributes(repos, &rubric, &parsed.params, request)?;

    let is_staff = match request.user_id {
        Some(user_id) => is_staff(&repos.user_roles.list_for_user(user_id)?),
        None => false,
    };
    let counter_keys = catalogue_counter_keys(rubric.id, &title_attributes);

    let docs = search
        .docs
        .into_iter()
        .map(|row| CatalogueProduct {
            id: row.id,
            name: get_translation(&row.name, request.lang, request.default_lang),
            slug: row.slug,
            rubric_ids: row.rubric_ids,
            min_price: row.min_price,
            max_price: row.max_price,
            shops_count: row.shops_count,
            priority: row.priority,
        }).collect();

    Ok(CatalogueLookup {
        data: Some(CatalogueData {
            rubric: rubric.output(request.lang, request.default_lang),
            products: CatalogueProducts {
                docs,
                page: pagination.page,
                total_docs: search.total_docs,
                total_pages: pagination.total_pages(search.total_docs),
                limit: pagination.limit,
                sort_by,
                sort_dir,
            },
            catalogue_title,
            catalogue_filter: input.filter.clone(),
            min_price: search.min_price,
            max_price: search.max_price,
            attributes,
        }),
        counter_keys,
        is_staff,
    })
}

fn load_filter_attributes(
    repos: &CatalogueRepos,
    rubric: &Rubric,
    selected: &[CatalogueFilterParam],
    request: &CatalogueRequest,
) -> RepoResult<Vec<CatalogueFilterAttribute>> {
    let groups = repos.rubrics.filter_attributes_groups(rubric.id)?;
    let attributes: Vec<Attribute> = repos
        .attributes
        .find_by_groups(groups)?
        .into_iter()
        .filter(|attribute| attribute.variant.is_selectable())
        .collect();
    let options = repos
        .options
        .find_by_groups(attributes.iter().filter_map(|attribute| attribute.options_group_id).collect())?;

    let mut priorities = FacetPriorities {
        attributes: repos.view_counters.find_counters(
            CounterEntity::Attribute,
            attributes.iter().map(|attribute| attribute.id).collect(),
            request.city.clone(),
            Some(rubric.id),
            None,
        )?,
        options: HashMap::new(),
    };
    for attribute in &attributes {
        let option_ids = options
            .iter()
            .filter(|option| Some(option.options_group_id) == attribute.options_group_id)
            .map(|option| option.id)
            .collect();
        let counters = repos.view_counters.find_counters(
            CounterEntity::Option,
            option_ids,
            request.city.clone(),
            Some(rubric.id),
            Some(attribute.id),
        )?;
        priorities.options.insert(attribute.id, counters);
    }

    Ok(catalogue_filter_attributes(
        &attributes,
        &options,
        selected,
        &priorities,
        request.lang,
        request.default_lang,
    ))
}

/// Turns parsed segments and request defaults into a products query.
/// The price range applies only when both bounds are given,
/// sorting from segments wins over sorting from the request.
pub fn build_catalogue_pipeline(
    rubric_ids: Vec<i32>,
    parsed: &ParsedCatalogueFilter,
    input: &CatalogueInput,
    city: String,
    default_limit: i64,
) -> CataloguePipeline {
    let price_range = match (parsed.control.min_price, parsed.control.max_price) {
        (Some(min), Some(max)) => Some(PriceRange { min, max }),
        _ => None,
    };

    CataloguePipeline {
        rubric_ids,
        filters: parsed.params.iter().filter(|param| !param.values.is_empty()).cloned().collect(),
        price_range,
        sort_by: parsed.control.sort_by.or(input.sort_by).unwrap_or_default(),
        sort_dir: parsed.control.sort_dir.or(input.sort_dir).unwrap_or_default(),
        city,
        default_priority: DEFAULT_PRIORITY,
        pagination: Pagination::new(input.page.unwrap_or(1).max(1), input.limit.unwrap_or(default_limit).max(1)),
    }
}

/// Pairs filter params with their attributes and options, unknown attributes are skipped
pub fn build_title_attributes<'a>(
    params: &[CatalogueFilterParam],
    attributes: &'a [Attribute],
    options: &'a [AttributeOption],
) -> Vec<TitleAttribute<'a>> {
    params
        .iter()
        .filter(|param| !param.values.is_empty())
        .filter_map(|param| {
            let attribute = attributes.iter().find(|attribute| attribute.slug == param.key);
            if attribute.is_none() {
                warn!("Catalogue filter attribute {} not found, skipping.", param.key);
            }
            attribute.map(|attribute| TitleAttribute {
                attribute,
                values: param
                    .values
                    .iter()
                    .map(|value| match attribute.options_group_id {
                        Some(group_id) => options
                            .iter()
                            .find(|option| option.options_group_id == group_id && option.slug == *value)
                            .map(TitleValue::Option)
                            .unwrap_or(TitleValue::Missing),
                        None => TitleValue::Text(value.clone()),
                    }).collect(),
            })
        }).collect()
}

/// Rubric, filtering attributes and selected options of a catalogue view
pub fn catalogue_counter_keys(rubric_id: i32, attributes: &[TitleAttribute]) -> Vec<CounterKey> {
    let mut keys = vec![CounterKey::rubric(rubric_id)];
    for attribute in attributes {
        keys.push(CounterKey::attribute(attribute.attribute.id, rubric_id));
        for value in &attribute.values {
            if let TitleValue::Option(option) = *value {
                keys.push(CounterKey::option(option.id, rubric_id, attribute.attribute.id));
            }
        }
    }
    keys
}

fn error_chain(e: &FailureError) -> String {
    e.iter_chain().map(|cause| cause.to_string()).collect::<Vec<String>>().join(": ")
}
