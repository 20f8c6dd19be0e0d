use std::sync::Arc;

use anyhow::{anyhow, Result};
use dealscope_api_types::AnalysisResponse;
use dealscope_app::{
    payload::{AnalysisPayload, ANALYSIS_ELEMENT_ID},
    App,
};
use leptos::prelude::*;
use wasm_bindgen::prelude::wasm_bindgen;

/// Reads the analysis the server embedded in the page so hydration sees the same input.
fn read_embedded_analysis() -> Result<Arc<AnalysisResponse>> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| anyhow!("no document to hydrate"))?;
    let element = document
        .get_element_by_id(ANALYSIS_ELEMENT_ID)
        .ok_or_else(|| anyhow!("page is missing #{ANALYSIS_ELEMENT_ID}"))?;
    let json = element.text_content().unwrap_or_default();
    Ok(AnalysisPayload::parse(&json)?)
}

#[wasm_bindgen]
pub fn hydrate() {
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();
    // the app crate logs through tracing
    _ = tracing_wasm::try_set_as_global_default();

    log::info!("hydrate mode - hydrating");

    match read_embedded_analysis() {
        Ok(analysis) => {
            leptos::mount::hydrate_body(move || view! { <App analysis /> });
        }
        Err(e) => log::error!("unable to hydrate the analysis page {e:?}"),
    }
}
