//! Catalogue is a microservice resolving storefront catalogue pages.
//! This create is for running the service from `catalogue_lib`. See `catalogue_lib` for details.

extern crate catalogue_lib;
extern crate pretty_env_logger;

fn main() {
    let config = catalogue_lib::config::Config::new().expect("Can't load app config!");

    // Prepare logger
    pretty_env_logger::init();

    // Prepare sentry integration
    let _sentry = catalogue_lib::sentry_integration::init(config.sentry.as_ref());

    catalogue_lib::start_server(config, &None, || ());
}
