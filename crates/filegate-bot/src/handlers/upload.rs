//! `/upload` command and media upload handlers.

use filegate_core::types::MediaArtifact;
use filegate_service::{RequestContext, UploadOutcome};

use crate::state::AppState;

/// `/upload`
pub async fn handle_upload_command(state: &AppState, ctx: &RequestContext) {
    state.admin.upload_command(ctx).await;
}

/// Document, photo or video message
pub async fn handle_media(
    state: &AppState,
    ctx: &RequestContext,
    artifact: Option<MediaArtifact>,
) -> UploadOutcome {
    let outcome = state.admin.upload(ctx, artifact).await;
    if let UploadOutcome::Created(link) = &outcome {
        tracing::info!(
            token = %link.token,
            media_kind = %link.media_kind,
            "Admin uploaded media"
        );
    }
    outcome
}
