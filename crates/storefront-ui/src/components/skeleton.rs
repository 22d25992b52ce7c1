use leptos::prelude::*;

/// Placeholder card shown while the listing loads.
#[component]
pub fn SkeletonCard() -> impl IntoView {
    view! {
        <div class="col-12 col-sm-6 col-md-4 col-lg-3">
            <div class="card h-100 placeholder-glow" aria-hidden="true">
                <div class="placeholder w-100" style="height: 200px;"></div>
                <div class="card-body">
                    <span class="placeholder col-10 mb-2"></span>
                    <span class="placeholder col-7"></span>
                    <div class="mt-3">
                        <span class="placeholder" style="width: 100px; height: 30px;"></span>
                    </div>
                </div>
            </div>
        </div>
    }
}
