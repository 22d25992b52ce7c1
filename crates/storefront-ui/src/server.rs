//! SSR server assembly for the storefront page.

use axum::Router;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use storefront_core::CatalogConfig;

use crate::app::{App, shell};

pub const DEFAULT_LOG_FILTER: &str = "storefront_ui=info,storefront_core=info";

/// Router serving the listing page, with static assets and the not-found
/// page behind the fallback.
pub fn app_router(leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(App);

    Router::new()
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptos_options)
}

/// Binds the configured site address and serves until the process stops.
pub async fn serve(leptos_options: LeptosOptions) -> std::io::Result<()> {
    let addr = leptos_options.site_addr;
    let catalog = CatalogConfig::demo();
    let app = app_router(leptos_options);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(
        catalog = %catalog.url,
        delay_ms = catalog.delay_millis(),
        "Storefront UI listening on http://{}",
        addr
    );
    axum::serve(listener, app.into_make_service()).await
}
