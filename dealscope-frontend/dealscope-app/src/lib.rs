#![recursion_limit = "256"]

pub mod analysis;
pub mod components;
pub mod error;
pub mod payload;
pub mod routes;

use std::sync::Arc;

use dealscope_api_types::AnalysisResponse;
use leptos::prelude::*;
use leptos_meta::{provide_meta_context, MetaTags, Stylesheet, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    StaticSegment,
};

use crate::payload::{AnalysisPayload, ANALYSIS_ELEMENT_ID};
use crate::routes::{analysis_view::AnalysisView, not_found::NotFound};

/// The html document the server renders around [`App`].
pub fn shell(options: LeptosOptions, payload: AnalysisPayload) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
                <script
                    id=ANALYSIS_ELEMENT_ID
                    type="application/json"
                    inner_html=payload.json.to_string()
                ></script>
            </head>
            <body class="bg-gray-950 text-gray-200">
                <App analysis=payload.analysis />
            </body>
        </html>
    }
}

#[component]
pub fn App(analysis: Arc<AnalysisResponse>) -> impl IntoView {
    provide_meta_context();
    provide_context(analysis);

    view! {
        <Stylesheet id="leptos" href="/pkg/dealscope.css" />
        <Title text="Dealscope" />
        <Router>
            <main class="container mx-auto px-4 py-8">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=StaticSegment("") view=AnalysisView />
                </Routes>
            </main>
        </Router>
    }
}
