use crate::domain::{ChannelCategory, ChannelSnapshot};

// The scraper already caps its output; the prompt enforces the same bound.
pub const MAX_PROMPT_VIDEOS: usize = 15;

// Build the analysis prompt from a channel snapshot and derived signals.
pub fn build_analysis_prompt(
    snapshot: &ChannelSnapshot,
    category: ChannelCategory,
    average_views: u64,
) -> String {
    let mut prompt = String::new();

    match category {
        ChannelCategory::General => {
            prompt.push_str("You are a YouTube content strategy expert.");
        }
        _ => {
            prompt.push_str(&format!(
                "You are a YouTube content strategy expert specializing in {} channels.",
                category.label()
            ));
        }
    }
    prompt.push_str(
        " Analyze this channel data and provide 5 specific, actionable content strategy recommendations.\n\n",
    );

    prompt.push_str("Channel Information:\n");
    prompt.push_str(&format!(
        "- Name: {}\n",
        snapshot.name.as_deref().unwrap_or("Unknown")
    ));
    prompt.push_str(&format!(
        "- Subscribers: {}\n",
        snapshot.subscribers.as_deref().unwrap_or("Unknown")
    ));

    prompt.push_str("\nRecent Videos (with view counts):\n");
    if snapshot.videos.is_empty() {
        prompt.push_str("(no recent videos were captured)\n");
    }
    for (idx, video) in snapshot.videos.iter().take(MAX_PROMPT_VIDEOS).enumerate() {
        prompt.push_str(&format!(
            "{}. {} - {} views\n",
            idx + 1,
            video.title.as_deref().unwrap_or("Unknown"),
            video.views.as_deref().unwrap_or("Unknown")
        ));
    }

    if average_views > 0 {
        prompt.push_str(&format!(
            "\nAverage views per video: {average_views}\n"
        ));
    }

    prompt.push_str(
        "\nBased on this data, provide exactly 5 numbered recommendations covering:\n\
         1. Content themes and topics that are working\n\
         2. Title optimization strategies\n\
         3. Upload frequency and timing suggestions\n\
         4. Engagement tactics based on successful videos\n\
         5. Growth opportunities and content gaps\n\n\
         Format your response as a numbered list (1-5) with clear, actionable advice for each point.",
    );

    prompt
}
