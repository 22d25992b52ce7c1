use leptos::prelude::*;
use storefront_core::StarRating;

#[component]
pub fn RatingStars(rating: StarRating) -> impl IntoView {
    view! {
        <div class="text-warning">
            {rating
                .units()
                .map(|star| view! { <i class=star.icon_class()></i> })
                .collect_view()}
        </div>
    }
}
