use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <Title text="Page Not Found - Dealscope" />
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center gap-6 p-4">
            <div class="text-5xl font-bold text-gray-400">"404"</div>
            <p class="text-lg text-gray-300">"There is no analysis at this address."</p>
            <A href="/" attr:class="btn btn-primary px-8 py-3">
                "Back to the analysis"
            </A>
        </div>
    }
}
