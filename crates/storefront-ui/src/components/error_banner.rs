use leptos::prelude::*;

#[component]
pub fn ErrorBanner(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="alert alert-danger text-center my-5" role="alert">
            {message}
        </div>
    }
}
