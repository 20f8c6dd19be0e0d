use serde::{Deserialize, Serialize};

/// Ordinal classification of how good a deal is.
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DealQuality {
    Excellent,
    Good,
    Average,
    Poor,
}

impl DealQuality {
    pub const ALL: [DealQuality; 4] = [
        DealQuality::Excellent,
        DealQuality::Good,
        DealQuality::Average,
        DealQuality::Poor,
    ];

    /// excellent(4) > good(3) > average(2) > poor(1)
    pub fn rank(self) -> u8 {
        match self {
            DealQuality::Excellent => 4,
            DealQuality::Good => 3,
            DealQuality::Average => 2,
            DealQuality::Poor => 1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DealQuality::Excellent => "excellent",
            DealQuality::Good => "good",
            DealQuality::Average => "average",
            DealQuality::Poor => "poor",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DealQuality::Excellent => "Excellent",
            DealQuality::Good => "Good",
            DealQuality::Average => "Average",
            DealQuality::Poor => "Poor",
        }
    }
}

/// One analyzed shopping result.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deal {
    pub url: String,
    /// Free form price text as scraped, e.g. `"$1,299.99"` or `"N/A"`
    #[serde(default)]
    pub price: Option<String>,
    pub relevance_score: f64,
    pub deal_quality: DealQuality,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub retailer: Option<String>,
    #[serde(default)]
    pub reasoning: Option<String>,
}

/// Output of the upstream analysis pipeline for a single search.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResponse {
    pub query: String,
    /// ISO 3166-1 alpha-2 code of the market that was searched
    pub country: String,
    pub total_results: u32,
    pub relevant_results: u32,
    pub summary: String,
    pub search_engine_used: String,
    pub deals: Vec<Deal>,
}
