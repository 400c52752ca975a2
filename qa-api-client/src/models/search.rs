use serde::{Deserialize, Serialize};

/// One retrieval hit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub text: String,
    pub document_name: String,
    /// Normalized score in `0.0..=1.0`.
    pub relevance_score: f64,
}

impl SearchResult {
    /// Relevance as a whole percentage, the way it is displayed.
    pub fn relevance_percent(&self) -> i64 {
        (self.relevance_score * 100.0).round() as i64
    }
}

/// Response payload of `GET /api/search?q=...`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub query: String,
    #[serde(default)]
    pub results: Vec<SearchResult>,
    #[serde(default)]
    pub total_results: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_rounds_half_up() {
        let hit = SearchResult {
            text: "t".into(),
            document_name: "a.txt".into(),
            relevance_score: 0.875,
        };
        assert_eq!(hit.relevance_percent(), 88);
    }

    #[test]
    fn decodes_backend_payload() {
        let json = r#"{
            "query": "rust",
            "results": [{"text": "Rust is fast", "document_name": "a.txt", "relevance_score": 0.912}],
            "total_results": 1
        }"#;
        let resp: SearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.results[0].document_name, "a.txt");
        assert_eq!(resp.results[0].relevance_percent(), 91);
        assert_eq!(resp.total_results, 1);
    }
}
