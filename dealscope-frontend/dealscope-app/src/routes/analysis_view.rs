use std::sync::Arc;

use dealscope_api_types::AnalysisResponse;
use leptos::{either::Either, prelude::*};
use leptos_meta::Title;

use super::not_found::NotFound;
use crate::components::analyzed_deals_list::AnalyzedDealsList;

/// Shows the analysis provided to [`crate::App`].
#[component]
pub fn AnalysisView() -> impl IntoView {
    match use_context::<Arc<AnalysisResponse>>() {
        Some(analysis) => Either::Left(view! {
            <Title text=format!("Deals for {} - Dealscope", analysis.query) />
            <AnalyzedDealsList analysis />
        }),
        None => Either::Right(view! { <NotFound /> }),
    }
}
