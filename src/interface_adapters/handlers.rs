use crate::domain::{ChannelSnapshot, VideoSample};
use crate::interface_adapters::protocol::{
    AnalyzeRequest, AnalyzeResponse, ErrorResponse, HealthResponse,
};
use crate::interface_adapters::state::AppState;
use crate::use_cases::analyze_channel::AnalyzeChannelUseCase;
use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

// Service identity reported by the health probe.
pub const SERVICE_NAME: &str = "analysis_server";

// Handler for the liveness probe.
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: SERVICE_NAME,
        model: state.model.clone(),
    })
}

// Handler for channel analysis requests.
#[tracing::instrument(name = "analyze_channel", skip_all)]
pub async fn analyze(
    State(state): State<Arc<AppState>>,
    Json(body): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, (StatusCode, Json<ErrorResponse>)> {
    let Some(scraped) = body.scraped_data else {
        return Err(error_response(
            StatusCode::BAD_REQUEST,
            "Missing scrapedData in request",
        ));
    };

    // Map the wire payload into the domain snapshot.
    let snapshot = ChannelSnapshot {
        name: scraped.channel.name,
        subscribers: scraped.channel.subscribers,
        videos: scraped
            .videos
            .into_iter()
            .map(|video| VideoSample {
                title: video.title,
                views: video.views,
            })
            .collect(),
    };

    tracing::info!(
        channel = snapshot.name.as_deref().unwrap_or("unknown"),
        video_count = snapshot.videos.len(),
        "analysis requested."
    );

    let use_case = AnalyzeChannelUseCase {
        provider: state.provider.as_ref(),
    };

    let outcome = use_case.execute(snapshot).await.map_err(|err| {
        tracing::error!(error = %err, "channel analysis failed.");
        error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("AI model error: {err}"),
        )
    })?;

    tracing::info!(
        category = outcome.category.label(),
        total_views = outcome.total_views,
        average_views = outcome.average_views,
        "channel analysis complete."
    );

    Ok(Json(AnalyzeResponse {
        success: true,
        suggestions: outcome.suggestions,
    }))
}

// Helper to build a JSON error envelope.
fn error_response(
    status: StatusCode,
    message: impl Into<String>,
) -> (StatusCode, Json<ErrorResponse>) {
    (
        status,
        Json(ErrorResponse {
            success: false,
            error: message.into(),
        }),
    )
}
