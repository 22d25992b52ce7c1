use leptos::prelude::*;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="d-flex flex-column align-items-center justify-content-center py-5">
            <h1 class="display-1 fw-bold text-secondary">"404"</h1>
            <p class="mt-3 fs-4 text-muted">"صفحه پیدا نشد"</p>
            <a href="/" class="btn btn-primary mt-3">
                "بازگشت به محصولات"
            </a>
        </div>
    }
}
