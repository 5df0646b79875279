pub mod category;
pub mod channel;
pub mod errors;
pub mod ports;

// Re-export the domain boundary types and ports.
pub use category::{classify_channel, ChannelCategory};
pub use channel::{average_views, parse_view_count, total_views, ChannelSnapshot, VideoSample};
pub use errors::AnalysisError;
pub use ports::{BoxError, SuggestionProvider};
