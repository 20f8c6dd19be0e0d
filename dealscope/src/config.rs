use std::path::{Path, PathBuf};

use dealscope_api_types::AnalysisResponse;
use leptos::prelude::{get_configuration, LeptosOptions};
use tracing::{info, instrument, warn};

use crate::error::SiteError;

/// Path of the analysis document to serve
pub(crate) const ANALYSIS_ENV: &str = "DEALSCOPE_ANALYSIS";

pub(crate) struct SiteConfig {
    pub(crate) leptos_options: LeptosOptions,
    pub(crate) analysis_path: PathBuf,
}

impl SiteConfig {
    /// Leptos options come from the workspace's `[workspace.metadata.leptos]` table (or the
    /// `LEPTOS_*` variables cargo-leptos sets), `PORT` and `DEALSCOPE_ANALYSIS` from the environment.
    pub(crate) fn from_env() -> Result<Self, SiteError> {
        let conf = get_configuration(None).map_err(|e| SiteError::Configuration(e.to_string()))?;
        let mut leptos_options = conf.leptos_options;
        if let Some(port) = parse_port(std::env::var("PORT").ok().as_deref())? {
            leptos_options.site_addr.set_port(port);
        }
        let analysis_path = std::env::var_os(ANALYSIS_ENV)
            .map(PathBuf::from)
            .ok_or(SiteError::MissingAnalysisPath)?;
        Ok(Self {
            leptos_options,
            analysis_path,
        })
    }
}

fn parse_port(port: Option<&str>) -> Result<Option<u16>, SiteError> {
    match port.map(str::trim) {
        None | Some("") => Ok(None),
        Some(port) => Ok(Some(port.parse::<u16>()?)),
    }
}

pub(crate) fn parse_analysis(path: &Path, json: &str) -> Result<AnalysisResponse, SiteError> {
    let analysis: AnalysisResponse =
        serde_json::from_str(json).map_err(|source| SiteError::ParseAnalysis {
            path: path.to_path_buf(),
            source,
        })?;
    if analysis.total_results == 0 && analysis.relevant_results > 0 {
        warn!(
            relevant = analysis.relevant_results,
            "analysis reports relevant results out of zero total results"
        );
    }
    Ok(analysis)
}

#[instrument(skip_all, fields(path = %path.display()))]
pub(crate) async fn load_analysis(path: &Path) -> Result<AnalysisResponse, SiteError> {
    let json = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| SiteError::ReadAnalysis {
            path: path.to_path_buf(),
            source,
        })?;
    let analysis = parse_analysis(path, &json)?;
    info!(
        query = %analysis.query,
        country = %analysis.country,
        deals = analysis.deals.len(),
        "loaded analysis"
    );
    Ok(analysis)
}
