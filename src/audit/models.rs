use serde::{Deserialize, Serialize};

/// Payload submitted to the audit service
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AuditRequest {
    pub url: String,
    pub target_keyword: String,
}

/// One entry in the competitor comparison. The service attaches more
/// fields per competitor; only the URL is kept.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Competitor {
    pub url: String,
}

/// Parsed outcome of a completed audit
#[derive(Debug, Clone, PartialEq)]
pub struct AuditResult {
    pub seo_score: serde_json::Number,
    pub meta_tags: serde_json::Map<String, serde_json::Value>,
    pub competitor_comparison: Vec<Competitor>,
}
