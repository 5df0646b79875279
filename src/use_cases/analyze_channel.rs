use crate::domain::{
    average_views, classify_channel, total_views, AnalysisError, ChannelCategory,
    ChannelSnapshot, SuggestionProvider,
};
use crate::use_cases::postprocess::tidy_suggestions;
use crate::use_cases::prompt::build_analysis_prompt;

// Result returned by the channel analysis use case.
pub struct AnalyzeOutcome {
    pub suggestions: String,
    pub category: ChannelCategory,
    pub total_views: u64,
    pub average_views: u64,
}

// Channel analysis use case with the model backend injected.
pub struct AnalyzeChannelUseCase<'a> {
    pub provider: &'a dyn SuggestionProvider,
}

impl AnalyzeChannelUseCase<'_> {
    pub async fn execute(&self, snapshot: ChannelSnapshot) -> Result<AnalyzeOutcome, AnalysisError> {
        let category = classify_channel(&snapshot);
        let total = total_views(&snapshot.videos);
        let average = average_views(&snapshot.videos);

        let prompt = build_analysis_prompt(&snapshot, category, average);

        let raw = self
            .provider
            .generate(&prompt)
            .await
            .map_err(AnalysisError::Backend)?;

        let suggestions = tidy_suggestions(&raw);
        if suggestions.is_empty() {
            return Err(AnalysisError::EmptyCompletion);
        }

        Ok(AnalyzeOutcome {
            suggestions,
            category,
            total_views: total,
            average_views: average,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BoxError, VideoSample};
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    // Canned backend that records every prompt it receives.
    struct RecordingProvider {
        prompts: Arc<Mutex<Vec<String>>>,
        reply: String,
    }

    #[async_trait]
    impl SuggestionProvider for RecordingProvider {
        async fn generate(&self, prompt: &str) -> Result<String, BoxError> {
            let mut guard = self.prompts.lock().expect("prompts mutex poisoned");
            guard.push(prompt.to_string());
            Ok(self.reply.clone())
        }
    }

    // Backend stub used by negative-path tests to simulate model failure.
    struct FailingProvider;

    #[async_trait]
    impl SuggestionProvider for FailingProvider {
        async fn generate(&self, _prompt: &str) -> Result<String, BoxError> {
            Err("model unavailable".into())
        }
    }

    fn gaming_snapshot() -> ChannelSnapshot {
        ChannelSnapshot {
            name: Some("Retro Arcade Lab".to_string()),
            subscribers: Some("12.5K subscribers".to_string()),
            videos: vec![
                VideoSample {
                    title: Some("Speedrun world record attempt".to_string()),
                    views: Some("1.2M".to_string()),
                },
                VideoSample {
                    title: Some("Cabinet restoration".to_string()),
                    views: Some("300K".to_string()),
                },
            ],
        }
    }

    #[tokio::test]
    async fn when_provider_succeeds_then_outcome_carries_tidied_suggestions() {
        let provider = RecordingProvider {
            prompts: Arc::new(Mutex::new(Vec::new())),
            reply: "  1. Double down on speedruns.\n\n\n\n2. Shorten titles.  ".to_string(),
        };
        let use_case = AnalyzeChannelUseCase {
            provider: &provider,
        };

        let outcome = use_case
            .execute(gaming_snapshot())
            .await
            .expect("expected analysis to succeed");

        assert_eq!(
            outcome.suggestions,
            "1. Double down on speedruns.\n\n2. Shorten titles."
        );
        assert_eq!(outcome.category, ChannelCategory::Gaming);
        assert_eq!(outcome.total_views, 1_500_000);
        assert_eq!(outcome.average_views, 750_000);
    }

    #[tokio::test]
    async fn when_use_case_runs_then_prompt_carries_channel_and_metrics() {
        let prompts = Arc::new(Mutex::new(Vec::new()));
        let provider = RecordingProvider {
            prompts: prompts.clone(),
            reply: "1. Keep going.".to_string(),
        };
        let use_case = AnalyzeChannelUseCase {
            provider: &provider,
        };

        use_case
            .execute(gaming_snapshot())
            .await
            .expect("expected analysis to succeed");

        let sent = prompts.lock().expect("prompts mutex poisoned");
        let prompt = sent.first().expect("expected one prompt to be sent");
        assert!(prompt.contains("Retro Arcade Lab"));
        assert!(prompt.contains("specializing in gaming channels"));
        assert!(prompt.contains("1. Speedrun world record attempt - 1.2M views"));
        assert!(prompt.contains("Average views per video: 750000"));
    }

    #[tokio::test]
    async fn when_provider_fails_then_returns_backend_error() {
        let use_case = AnalyzeChannelUseCase {
            provider: &FailingProvider,
        };

        let result = use_case.execute(gaming_snapshot()).await;

        assert!(matches!(result, Err(AnalysisError::Backend(_))));
    }

    #[tokio::test]
    async fn when_reply_is_only_whitespace_then_returns_empty_completion() {
        let provider = RecordingProvider {
            prompts: Arc::new(Mutex::new(Vec::new())),
            reply: "   \n\n ".to_string(),
        };
        let use_case = AnalyzeChannelUseCase {
            provider: &provider,
        };

        let result = use_case.execute(gaming_snapshot()).await;

        assert!(matches!(result, Err(AnalysisError::EmptyCompletion)));
    }

    #[tokio::test]
    async fn when_snapshot_is_bare_then_analysis_still_succeeds() {
        let provider = RecordingProvider {
            prompts: Arc::new(Mutex::new(Vec::new())),
            reply: "1. Start uploading regularly.".to_string(),
        };
        let use_case = AnalyzeChannelUseCase {
            provider: &provider,
        };

        let outcome = use_case
            .execute(ChannelSnapshot {
                name: None,
                subscribers: None,
                videos: Vec::new(),
            })
            .await
            .expect("expected bare snapshot to be analyzable");

        assert_eq!(outcome.category, ChannelCategory::General);
        assert_eq!(outcome.total_views, 0);
        assert_eq!(outcome.average_views, 0);
    }
}
