use crate::domain::channel::ChannelSnapshot;

// Broad content category inferred from channel naming and video titles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelCategory {
    Gaming,
    Technology,
    Education,
    Cooking,
    Fitness,
    Music,
    Finance,
    General,
}

impl ChannelCategory {
    pub fn label(&self) -> &'static str {
        match self {
            ChannelCategory::Gaming => "gaming",
            ChannelCategory::Technology => "technology",
            ChannelCategory::Education => "education",
            ChannelCategory::Cooking => "cooking",
            ChannelCategory::Fitness => "fitness",
            ChannelCategory::Music => "music",
            ChannelCategory::Finance => "finance",
            ChannelCategory::General => "general",
        }
    }
}

// Keyword lookup over the channel name and titles; first match wins.
// Deliberately naive: substring checks on lowercased text, fixed priority.
pub fn classify_channel(snapshot: &ChannelSnapshot) -> ChannelCategory {
    let mut haystack = snapshot.name.as_deref().unwrap_or("").to_lowercase();
    for video in &snapshot.videos {
        if let Some(title) = &video.title {
            haystack.push('\n');
            haystack.push_str(&title.to_lowercase());
        }
    }

    let matches_any =
        |keywords: &[&str]| keywords.iter().any(|keyword| haystack.contains(keyword));

    if matches_any(&[
        "gaming",
        "gameplay",
        "playthrough",
        "esports",
        "speedrun",
        "minecraft",
        "fortnite",
    ]) {
        return ChannelCategory::Gaming;
    }
    if matches_any(&["tech", "gadget", "unboxing", "programming", "coding", "software"]) {
        return ChannelCategory::Technology;
    }
    if matches_any(&["tutorial", "how to", "explained", "lesson", "course", "study"]) {
        return ChannelCategory::Education;
    }
    if matches_any(&["recipe", "cooking", "baking", "kitchen", "street food"]) {
        return ChannelCategory::Cooking;
    }
    if matches_any(&["workout", "fitness", "gym", "yoga", "exercise"]) {
        return ChannelCategory::Fitness;
    }
    if matches_any(&["music", "song", "remix", "official video", "album"]) {
        return ChannelCategory::Music;
    }
    if matches_any(&["invest", "stock", "crypto", "finance", "budget"]) {
        return ChannelCategory::Finance;
    }

    ChannelCategory::General
}
