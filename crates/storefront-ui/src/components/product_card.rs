use leptos::prelude::*;
use storefront_core::{ADD_LABEL, PLACEHOLDER_IMAGE, Product};

use crate::components::RatingStars;

#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    // Swapped to the placeholder if the image fails to load.
    let (image_src, set_image_src) = signal(product.image_src().to_string());
    let stars = product.stars();
    let reviews = product.review_label();
    let price = product.price_label();
    let title = product.title.clone();
    let alt = product.title;

    view! {
        <div class="col-12 col-sm-6 col-md-4 col-lg-3">
            <div class="card h-100 shadow-sm">
                <div
                    class="card-img-top bg-light d-flex align-items-center justify-content-center"
                    style="height: 200px;"
                >
                    <img
                        src=move || image_src.get()
                        alt=alt
                        class="img-fluid p-3"
                        style="max-height: 100%; max-width: 100%;"
                        on:error=move |_| set_image_src.set(PLACEHOLDER_IMAGE.to_string())
                    />
                </div>

                <div class="card-body d-flex flex-column">
                    <h5 class="card-title">{title}</h5>

                    <div class="mb-3">
                        <RatingStars rating=stars/>
                        <small class="text-muted">{reviews}</small>
                    </div>

                    <div class="mt-auto d-flex justify-content-between align-items-center">
                        <span class="h5 text-success mb-0">{price}</span>
                        <button class="btn btn-primary btn-sm">
                            <i class="bi bi-cart-plus"></i>
                            " "
                            {ADD_LABEL}
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
