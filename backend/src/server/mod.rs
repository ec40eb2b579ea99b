//! Server construction and middleware wiring.

mod config;
mod settings;
mod state_builders;

pub use config::ServerConfig;
pub use settings::ServerSettings;

use state_builders::build_http_state;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use url::Url;

use socialbuddy::Trace;
#[cfg(debug_assertions)]
use socialbuddy::doc::ApiDoc;
use socialbuddy::inbound::http::configure_api;
use socialbuddy::inbound::http::health::{HealthState, live, ready};
use socialbuddy::inbound::http::state::HttpState;
use socialbuddy::outbound::viacep::{DEFAULT_VIACEP_BASE_URL, ViaCepAddressLookup};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use std::time::Duration;

const DEFAULT_LOOKUP_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
    } = deps;

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .service(web::scope("/api/v1").configure(configure_api))
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    #[cfg(not(debug_assertions))]
    let app = app;

    app
}

fn default_address_lookup() -> std::io::Result<ViaCepAddressLookup> {
    let base_url = Url::parse(DEFAULT_VIACEP_BASE_URL)
        .map_err(|e| std::io::Error::other(format!("invalid postal directory URL: {e}")))?;
    ViaCepAddressLookup::new(base_url, DEFAULT_LOOKUP_TIMEOUT)
        .map_err(|e| std::io::Error::other(format!("postal directory client failed: {e}")))
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// # Errors
/// Propagates [`std::io::Error`] when building the postal directory client,
/// binding the socket or starting the server fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let ServerConfig {
        bind_addr,
        db_pool,
        address_lookup,
    } = config;
    let address_lookup = match address_lookup {
        Some(lookup) => lookup,
        None => default_address_lookup()?,
    };
    let http_state = build_http_state(db_pool.as_ref(), address_lookup);

    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
        })
    })
    .bind(bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}
