//! `Controller` is a top layer that handles all http-related
//! stuff like reading bodies, parsing params, forming a response.
//! Basically it provides inputs to `Service` layer and converts outputs
//! of `Service` layer to http responses

pub mod context;
pub mod routes;
pub mod utils;

use std::sync::Arc;

use diesel::connection::AnsiTransactionManager;
use diesel::pg::Pg;
use diesel::Connection;
use failure::Error as FailureError;
use futures::future;
use futures::{Future, IntoFuture};
use hyper;
use hyper::header::{ContentLength, ContentType};
use hyper::server::{Request, Response, Service as HyperService};
use hyper::{Get, Headers, Post, StatusCode};
use r2d2::ManageConnection;
use serde::Serialize;
use serde_json;
use validator::Validate;

use self::context::{DynamicContext, StaticContext};
use self::routes::{create_route_parser, Route, RouteParser};
use self::utils::{header_value, parse_body};
use errors::{error_message, status_code, Error};
use models::CatalogueInput;
use repos::repo_factory::*;
use services::catalogue::CatalogueService;
use services::products::ProductsService;
use services::rubrics::RubricsService;
use services::system::{SystemService, SystemServiceImpl};
use services::Service;

pub type ControllerFuture = Box<Future<Item = String, Error = FailureError>>;

/// Serializes a successful service result into json
fn serialize_future<T, E, F>(f: F) -> ControllerFuture
where
    T: Serialize + 'static,
    E: Into<FailureError> + 'static,
    F: IntoFuture<Item = T, Error = E> + 'static,
{
    Box::new(
        f.into_future()
            .map_err(|e| e.into())
            .and_then(|resp| serde_json::to_string(&resp).map_err(|e| e.into())),
    )
}

/// Controller handles route parsing and calling `Service` layer
pub struct ControllerImpl<T, M, F>
where
    T: Connection<Backend = Pg, TransactionManager = AnsiTransactionManager> + 'static,
    M: ManageConnection<Connection = T>,
    F: ReposFactory<T>,
{
    pub static_context: StaticContext<T, M, F>,
    pub route_parser: Arc<RouteParser<Route>>,
}

impl<
        T: Connection<Backend = Pg, TransactionManager = AnsiTransactionManager> + 'static,
        M: ManageConnection<Connection = T>,
        F: ReposFactory<T>,
    > ControllerImpl<T, M, F>
{
    /// Create a new controller based on services
    pub fn new(static_context: StaticContext<T, M, F>) -> Self {
        let route_parser = Arc::new(create_route_parser());
        Self {
            static_context,
            route_parser,
        }
    }

    /// Request context from gateway headers, config defaults fill the gaps
    pub fn dynamic_context(&self, headers: &Headers) -> DynamicContext {
        let user_id = header_value(headers, "Authorization").and_then(|value| value.parse::<i32>().ok());
        let city = header_value(headers, "X-City")
            .map(|value| value.to_string())
            .unwrap_or_else(|| self.static_context.config.catalogue.default_city.clone());
        let lang = header_value(headers, "X-Language")
            .and_then(|value| value.parse().ok())
            .unwrap_or(self.static_context.config.catalogue.default_lang);

        DynamicContext::new(user_id, city, lang)
    }

    /// Handle a request and get future response
    pub fn call(&self, req: Request) -> ControllerFuture {
        let (method, uri, _, headers, body) = req.deconstruct();
        let dynamic_context = self.dynamic_context(&headers);
        let service = Service::new(self.static_context.clone(), dynamic_context);
        let path = uri.path().to_string();

        match (&method, self.route_parser.test(&path)) {
            // GET /healthcheck
            (&Get, Some(Route::Healthcheck)) => serialize_future(SystemServiceImpl::default().healthcheck()),

            // POST /catalogue
            (&Post, Some(Route::Catalogue)) => serialize_future(
                parse_body::<CatalogueInput>(body)
                    .and_then(|input| {
                        input
                            .validate()
                            .map(|_| input)
                            .map_err(|e| format_err!("Validation of CatalogueInput failed").context(Error::Validate(e)).into())
                    }).and_then(move |input| service.get_catalogue_data(input)),
            ),

            // GET /rubrics/<rubric_id>/subtree
            (&Get, Some(Route::RubricSubtree(rubric_id))) => serialize_future(service.get_rubric_subtree(rubric_id)),

            // GET /products/by_slug/<slug>
            (&Get, Some(Route::ProductBySlug(slug))) => serialize_future(service.get_product_card(slug)),

            // Fallback
            (m, _) => Box::new(future::err(
                format_err!("Request to non existing endpoint in catalogue microservice! {:?} {:?}", m, path)
                    .context(Error::NotFound)
                    .into(),
            )),
        }
    }
}

/// Hyper service wrapping the controller
pub struct Application<T, M, F>
where
    T: Connection<Backend = Pg, TransactionManager = AnsiTransactionManager> + 'static,
    M: ManageConnection<Connection = T>,
    F: ReposFactory<T>,
{
    pub controller: ControllerImpl<T, M, F>,
}

impl<
        T: Connection<Backend = Pg, TransactionManager = AnsiTransactionManager> + 'static,
        M: ManageConnection<Connection = T>,
        F: ReposFactory<T>,
    > Application<T, M, F>
{
    pub fn new(controller: ControllerImpl<T, M, F>) -> Self {
        Self { controller }
    }
}

impl<
        T: Connection<Backend = Pg, TransactionManager = AnsiTransactionManager> + 'static,
        M: ManageConnection<Connection = T>,
        F: ReposFactory<T>,
    > HyperService for Application<T, M, F>
{
    type Request = Request;
    type Response = Response;
    type Error = hyper::Error;
    type Future = Box<Future<Item = Response, Error = hyper::Error>>;

    fn call(&self, req: Request) -> Self::Future {
        debug!("Received request: {} {}", req.method(), req.path());

        Box::new(self.controller.call(req).then(|result| match result {
            Ok(body) => Ok(response_with_json(StatusCode::Ok, body)),
            Err(e) => {
                let status = status_code(&e);
                if status == StatusCode::InternalServerError {
                    error!("Request failed: {}", e);
                } else {
                    debug!("Request rejected with {}: {}", status, e);
                }
                let body = serde_json::to_string(&error_message(&e)).unwrap_or_default();
                Ok(response_with_json(status, body))
            }
        }))
    }
}

fn response_with_json(status: StatusCode, body: String) -> Response {
    Response::new()
        .with_status(status)
        .with_header(ContentLength(body.len() as u64))
        .with_header(ContentType::json())
        .with_body(body)
}
