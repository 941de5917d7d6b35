#![recursion_limit = "256"]

use anyhow::Context as _;
use axum::http::{header, HeaderValue};
use leptos::prelude::*;
use tower_http::set_header::SetResponseHeaderLayer;

use app::catalog::CATALOG;

mod export;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use leptos_axum::{generate_route_list, LeptosRoutes};

    env_logger::init();

    let conf = get_configuration(None).context("Could not load the Leptos configuration")?;
    let addr = conf.leptos_options.site_addr;
    let leptos_options = conf.leptos_options;

    CATALOG
        .validate()
        .context("Refusing to serve an invalid navigation catalog")?;
    log::info!("serving {} navigation entries", CATALOG.len());

    let ctx = app::context::Context {
        leptos_options: leptos_options.clone(),
        catalog: &CATALOG,
    };
    // Generate the list of routes in your Leptos App
    let routes = generate_route_list(app::App);
    let app_fn = {
        let ctx = ctx.clone();
        move || app::shell(ctx.leptos_options.clone())
    };

    // Opened tabs don't get a referrer, keep the page itself from sending one too.
    let headers = tower::ServiceBuilder::new()
        .layer(SetResponseHeaderLayer::if_not_present(
            header::REFERRER_POLICY,
            HeaderValue::from_static("no-referrer"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ));

    let export_method_router = axum::routing::get(export::handler);
    let app = axum::Router::new()
        .route(export::URL_PATH, export_method_router)
        .leptos_routes(&ctx, routes, app_fn)
        .fallback(leptos_axum::file_and_error_handler::<app::context::Context, _>(app::shell))
        .layer(headers)
        .with_state(ctx);

    log::info!("listening in {:?} on http://{}", &leptos_options.env, &addr);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Could not bind {addr}"))?;
    axum::serve(listener, app.into_make_service())
        .await
        .context("The HTTP server stopped unexpectedly")?;
    Ok(())
}
