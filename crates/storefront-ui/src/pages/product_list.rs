use leptos::prelude::*;
use storefront_core::{LISTING_HEADING, ListingSink, ListingState, ListingView, Liveness, Product};

use crate::components::{ErrorBanner, ProductCard, SkeletonCard};

/// Listing sink writing into the page's reactive signals.
#[derive(Clone, Copy)]
pub struct SignalSink {
    pub loading: WriteSignal<bool>,
    pub error: WriteSignal<Option<String>>,
    pub items: WriteSignal<Vec<Product>>,
}

impl ListingSink for SignalSink {
    fn set_items(&self, items: Vec<Product>) {
        self.items.set(items);
    }

    fn set_error(&self, message: String) {
        self.error.set(Some(message));
    }

    fn set_loading(&self, loading: bool) {
        self.loading.set(loading);
    }
}

#[component]
pub fn ProductList() -> impl IntoView {
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);
    let (items, set_items) = signal(Vec::<Product>::new());

    // Torn down with the component; the pending fetch checks it before
    // touching any signal.
    let liveness = Liveness::new();
    on_cleanup({
        let liveness = liveness.clone();
        move || liveness.unmount()
    });

    let sink = SignalSink {
        loading: set_loading,
        error: set_error,
        items: set_items,
    };

    #[cfg(feature = "hydrate")]
    {
        use leptos::task::spawn_local;
        use storefront_core::{CatalogConfig, HttpCatalog, load_listing_after};

        // Fixed latency before the request so the skeletons are on screen
        // long enough to see.
        let config = CatalogConfig::demo();
        let delay_ms = config.delay_millis();
        let catalog = HttpCatalog::new(config.url);

        spawn_local(async move {
            let delay = gloo_timers::future::TimeoutFuture::new(delay_ms);
            load_listing_after(delay, &catalog, &liveness, &sink).await;
        });
    }

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (liveness, sink);
    }

    view! {
        <main class="container py-5">
            {move || {
                let state = ListingState {
                    loading: loading.get(),
                    error: error.get(),
                    items: items.get(),
                };
                match state.view() {
                    ListingView::ErrorBanner(message) => {
                        view! { <ErrorBanner message=message.to_string()/> }.into_any()
                    }
                    ListingView::Skeletons(count) => {
                        view! {
                            <h1 class="text-center mb-5 fw-bold text-primary">{LISTING_HEADING}</h1>
                            <div class="row g-4">
                                {(0..count).map(|_| view! { <SkeletonCard/> }).collect_view()}
                            </div>
                        }
                        .into_any()
                    }
                    ListingView::Grid(products) => {
                        let cards = products
                            .iter()
                            .cloned()
                            .map(|product| view! { <ProductCard product=product/> })
                            .collect_view();
                        view! {
                            <h1 class="text-center mb-5 fw-bold text-primary">{LISTING_HEADING}</h1>
                            <div class="row g-4">{cards}</div>
                        }
                        .into_any()
                    }
                }
            }}
        </main>
    }
}
