// Scraped channel snapshot consumed by the analysis workflow.
#[derive(Debug, Clone)]
pub struct ChannelSnapshot {
    pub name: Option<String>,
    pub subscribers: Option<String>,
    pub videos: Vec<VideoSample>,
}

// One scraped video row; the scraper reports views as display text ("1.2M").
#[derive(Debug, Clone)]
pub struct VideoSample {
    pub title: Option<String>,
    pub views: Option<String>,
}

// Parse scraper view strings like "1.2M", "300K" or "1,234" into counts.
pub fn parse_view_count(raw: &str) -> u64 {
    let cleaned = raw.trim().replace(',', "").to_ascii_uppercase();

    let (number, scale) = if let Some(prefix) = cleaned.strip_suffix('K') {
        (prefix, 1_000.0)
    } else if let Some(prefix) = cleaned.strip_suffix('M') {
        (prefix, 1_000_000.0)
    } else if let Some(prefix) = cleaned.strip_suffix('B') {
        (prefix, 1_000_000_000.0)
    } else {
        (cleaned.as_str(), 1.0)
    };

    match number.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => (value * scale).round() as u64,
        _ => 0,
    }
}

// Sum of parsed view counts; rows without a views field count as zero.
pub fn total_views(videos: &[VideoSample]) -> u64 {
    videos
        .iter()
        .map(|video| video.views.as_deref().map(parse_view_count).unwrap_or(0))
        .sum()
}

// Average parsed views per video; zero for an empty list.
pub fn average_views(videos: &[VideoSample]) -> u64 {
    if videos.is_empty() {
        return 0;
    }
    total_views(videos) / videos.len() as u64
}
