//! Products Services, presents product card lookups
use diesel::connection::AnsiTransactionManager;
use diesel::pg::Pg;
use diesel::Connection;
use failure::Error as FailureError;
use futures::Future;
use r2d2::ManageConnection;

use super::types::ServiceFuture;
use super::view_counters::{is_staff, ViewCountersService};
use models::{get_translation, CounterKey, ProductCard, ProductOffers};
use repos::ReposFactory;
use services::Service;

pub trait ProductsService {
    /// Returns product card by slug, registering the view
    fn get_product_card(&self, product_slug: String) -> ServiceFuture<Option<ProductCard>>;
}

impl<
        T: Connection<Backend = Pg, TransactionManager = AnsiTransactionManager> + 'static,
        M: ManageConnection<Connection = T>,
        F: ReposFactory<T>,
    > ProductsService for Service<T, M, F>
{
    fn get_product_card(&self, product_slug: String) -> ServiceFuture<Option<ProductCard>> {
        let repo_factory = self.static_context.repo_factory.clone();
        let user_id = self.dynamic_context.user_id;
        let lang = self.dynamic_context.lang;
        let default_lang = self.static_context.config.catalogue.default_lang;
        let service = self.clone();

        Box::new(
            self.spawn_on_pool(move |conn| {
                let products_repo = repo_factory.create_products_repo(&*conn);
                let user_roles_repo = repo_factory.create_user_roles_repo(&*conn);

                let product = match products_repo.find_by_slug(product_slug)? {
                    Some(product) => product,
                    None => return Ok((None, true)),
                };
                let attributes = products_repo.find_attributes(product.id)?;
                let offers = products_repo.find_offers(product.id)?;
                let staff = match user_id {
                    Some(user_id) => is_staff(&user_roles_repo.list_for_user(user_id)?),
                    None => false,
                };

                let name = product.card_name.as_ref().unwrap_or(&product.name);
                let card = ProductCard {
                    id: product.id,
                    slug: product.slug.clone(),
                    name: get_translation(name, lang, default_lang),
                    description: product
                        .description
                        .as_ref()
                        .map(|description| get_translation(description, lang, default_lang)),
                    rubric_ids: product.rubric_ids.clone(),
                    attributes,
                    offers: ProductOffers::from_shop_products(&offers),
                };
                Ok((Some(card), staff))
            }).map(move |(card, staff)| {
                if let Some(ref card) = card {
                    if !staff {
                        service.spawn_view_counters_update(vec![CounterKey::product(card.id)]);
                    }
                }
                card
            }).map_err(|e: FailureError| e.context("Service products, get_product_card endpoint error occured.").into()),
        )
    }
}

#[cfg(test)]
pub mod tests {
    use tokio_core::reactor::Core;

    use models::*;
    use repos::repo_factory::tests::*;
    use services::products::ProductsService;

    #[test]
    fn test_product_card() {
        let mut core = Core::new().unwrap();
        let service = create_service(None);
        let card = core.run(service.get_product_card("red-bordeaux".to_string())).unwrap().unwrap();
        assert_eq!(card.id, 1);
        assert_eq!(card.name, "red-bordeaux");
        assert_eq!(card.description, Some("Описание".to_string()));
        assert_eq!(card.attributes.len(), 2);
        assert_eq!(card.offers.min_price, Some(80.0));
        assert_eq!(card.offers.max_price, Some(95.0));
        assert_eq!(card.offers.shops_count, 2);
    }

    #[test]
    fn test_inactive_product_is_not_found() {
        let mut core = Core::new().unwrap();
        let service = create_service(None);
        assert_eq!(core.run(service.get_product_card("inactive".to_string())).unwrap(), None);
    }

    #[test]
    fn test_product_view_is_counted() {
        let mut core = Core::new().unwrap();
        let factory = ReposFactoryMock::default();
        let service = create_service_with_factory(Some(MOCK_USER_ID), Language::Ru, factory.clone());
        core.run(service.get_product_card("white-chablis".to_string())).unwrap();
        core.run(service.get_product_card("white-chablis".to_string())).unwrap();
        core.run(service.spawn_on_pool(|_| Ok(()))).unwrap();

        assert_eq!(factory.counter(CounterKey::product(2), MOCK_CITY), Some(DEFAULT_PRIORITY + 1));
    }

    #[test]
    fn test_product_view_of_staff_is_not_counted() {
        let mut core = Core::new().unwrap();
        let factory = ReposFactoryMock::default();
        let service = create_service_with_factory(Some(MOCK_MODERATOR_ID), Language::Ru, factory.clone());
        core.run(service.get_product_card("white-chablis".to_string())).unwrap();
        core.run(service.spawn_on_pool(|_| Ok(()))).unwrap();

        assert_eq!(factory.counters_count(), 0);
    }
}
