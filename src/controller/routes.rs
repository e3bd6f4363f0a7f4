use regex::Regex;

/// List of all routes with params for the app
#[derive(Clone, Debug, PartialEq)]
pub enum Route {
    Healthcheck,
    Catalogue,
    RubricSubtree(i32),
    ProductBySlug(String),
}

type ParamsConverter<T> = Fn(Vec<&str>) -> Option<T> + Send + Sync;

/// Matches request paths against regexes, capture groups are passed to the route constructor
pub struct RouteParser<T> {
    regex_and_converters: Vec<(Regex, Box<ParamsConverter<T>>)>,
}

impl<T> Default for RouteParser<T> {
    fn default() -> Self {
        Self {
            regex_and_converters: Vec::new(),
        }
    }
}

impl<T> RouteParser<T> {
    /// Adds a route without params
    pub fn add_route<F>(&mut self, regex_pattern: &str, f: F) -> &Self
    where
        F: Fn() -> T + Send + Sync + 'static,
    {
        self.add_route_with_params(regex_pattern, move |_| Some(f()))
    }

    /// Adds a route with params taken from regex captures
    pub fn add_route_with_params<F>(&mut self, regex_pattern: &str, converter: F) -> &Self
    where
        F: Fn(Vec<&str>) -> Option<T> + Send + Sync + 'static,
    {
        match Regex::new(regex_pattern) {
            Ok(regex) => self.regex_and_converters.push((regex, Box::new(converter))),
            Err(e) => error!("Invalid route pattern {}: {}", regex_pattern, e),
        }
        self
    }

    /// Tests the path against all routes, the first match wins
    pub fn test(&self, route: &str) -> Option<T> {
        self.regex_and_converters.iter().filter_map(|(regex, converter)| {
            regex.captures(route).and_then(|captures| {
                let params = captures.iter().skip(1).filter_map(|capture| capture.map(|m| m.as_str())).collect();
                converter(params)
            })
        }).next()
    }
}

pub fn create_route_parser() -> RouteParser<Route> {
    let mut router = RouteParser::default();

    // Healthcheck
    router.add_route(r"^/healthcheck$", || Route::Healthcheck);

    // Catalogue route
    router.add_route(r"^/catalogue$", || Route::Catalogue);

    // Rubrics/:id/subtree route
    router.add_route_with_params(r"^/rubrics/(\d+)/subtree$", |params| {
        params
            .get(0)
            .and_then(|string_id| string_id.parse::<i32>().ok())
            .map(Route::RubricSubtree)
    });

    // Products/by_slug/:slug route
    router.add_route_with_params(r"^/products/by_slug/([\w-]+)$", |params| {
        params.get(0).map(|slug| Route::ProductBySlug(slug.to_string()))
    });

    router
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_routes() {
        let router = create_route_parser();
        assert_eq!(router.test("/healthcheck"), Some(Route::Healthcheck));
        assert_eq!(router.test("/catalogue"), Some(Route::Catalogue));
    }

    #[test]
    fn test_routes_with_params() {
        let router = create_route_parser();
        assert_eq!(router.test("/rubrics/12/subtree"), Some(Route::RubricSubtree(12)));
        assert_eq!(
            router.test("/products/by_slug/red-bordeaux"),
            Some(Route::ProductBySlug("red-bordeaux".to_string()))
        );
    }

    #[test]
    fn test_unknown_routes() {
        let router = create_route_parser();
        assert_eq!(router.test("/rubrics/abc/subtree"), None);
        assert_eq!(router.test("/catalogue/1"), None);
        assert_eq!(router.test("/"), None);
    }

    #[test]
    fn test_route_overflowing_id() {
        let router = create_route_parser();
        assert_eq!(router.test("/rubrics/99999999999/subtree"), None);
    }
}
