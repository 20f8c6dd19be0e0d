mod config;
mod error;
mod leptos;

use anyhow::Result;
use dealscope_app::payload::AnalysisPayload;
use tracing::info;

use crate::config::{load_analysis, SiteConfig};
use crate::error::SiteError;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let SiteConfig {
        leptos_options,
        analysis_path,
    } = SiteConfig::from_env()?;
    let analysis = load_analysis(&analysis_path).await?;
    let payload = AnalysisPayload::new(analysis).map_err(SiteError::from)?;

    let addr = leptos_options.site_addr;
    let app = leptos::create_leptos_app(leptos_options, payload);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(SiteError::from)?;
    info!("listening on {}", addr);
    axum::serve(listener, app.into_make_service())
        .await
        .map_err(SiteError::from)?;
    Ok(())
}
