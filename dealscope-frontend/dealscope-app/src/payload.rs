use std::sync::Arc;

use dealscope_api_types::AnalysisResponse;

use crate::error::AppResult;

/// Id of the `<script type="application/json">` element the server writes the analysis into.
pub const ANALYSIS_ELEMENT_ID: &str = "analysis-data";

/// An analysis along with the JSON used to hand it from the server render to the hydrating client.
#[derive(Clone, Debug)]
pub struct AnalysisPayload {
    pub analysis: Arc<AnalysisResponse>,
    pub json: Arc<str>,
}

impl AnalysisPayload {
    pub fn new(analysis: AnalysisResponse) -> AppResult<Self> {
        // `<` only ever shows up inside JSON strings, so the unicode escape keeps
        // the document valid and stops a `</script>` in the data from closing the tag
        let json = serde_json::to_string(&analysis)?.replace('<', "\\u003c");
        Ok(Self {
            analysis: Arc::new(analysis),
            json: json.into(),
        })
    }

    /// Reads the contents of the embedded element back into an analysis.
    pub fn parse(json: &str) -> AppResult<Arc<AnalysisResponse>> {
        Ok(Arc::new(serde_json::from_str(json)?))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use dealscope_api_types::{Deal, DealQuality};

    fn analysis(summary: &str) -> AnalysisResponse {
        AnalysisResponse {
            query: "oled tv".to_string(),
            country: "GB".to_string(),
            total_results: 4,
            relevant_results: 1,
            summary: summary.to_string(),
            search_engine_used: "Bing".to_string(),
            deals: vec![Deal {
                url: "https://www.currys.co.uk/tv".to_string(),
                price: Some("£899".to_string()),
                relevance_score: 0.8,
                deal_quality: DealQuality::Good,
                title: Some("55\" OLED".to_string()),
                retailer: None,
                reasoning: None,
            }],
        }
    }

    #[test]
    fn script_tags_are_escaped() {
        let payload = AnalysisPayload::new(analysis("</script><script>alert(1)</script>")).unwrap();
        assert!(!payload.json.contains('<'));
        assert!(payload.json.contains("\\u003c/script>"));
        let parsed = AnalysisPayload::parse(&payload.json).unwrap();
        assert_eq!(parsed.summary, "</script><script>alert(1)</script>");
        assert_eq!(parsed, payload.analysis);
    }

    #[test]
    fn bad_json_is_an_error() {
        assert!(AnalysisPayload::parse("{\"query\": 1}").is_err());
    }
}
