use serde::{Deserialize, Serialize};

// Request payload for channel analysis.
// `scrapedData` stays optional so the handler owns the 400 contract for it.
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(rename = "scrapedData")]
    pub scraped_data: Option<ScrapedData>,
}

// Scraped payload as produced by the scraper pipeline.
#[derive(Debug, Deserialize, Default)]
pub struct ScrapedData {
    #[serde(default)]
    pub channel: ScrapedChannel,
    #[serde(default)]
    pub videos: Vec<ScrapedVideo>,
}

#[derive(Debug, Deserialize, Default)]
pub struct ScrapedChannel {
    pub name: Option<String>,
    pub subscribers: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ScrapedVideo {
    pub title: Option<String>,
    pub views: Option<String>,
}

// Response payload for a successful analysis.
#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub success: bool,
    pub suggestions: String,
}

// Error envelope reported to clients.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

// Response payload for the health probe.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub model: String,
}
