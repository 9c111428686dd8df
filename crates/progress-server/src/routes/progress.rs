use axum::extract::State;
use axum::Json;
use progress_core::types::ProgressPayload;

use crate::error::AppError;
use crate::state::AppState;

/// GET /api/progress — the project's progress data file as JSON.
pub async fn get_progress(State(app): State<AppState>) -> Result<Json<ProgressPayload>, AppError> {
    let path = app.config.progress_file_path(&app.root);
    let payload = tokio::task::spawn_blocking(move || progress_core::data::load_payload(&path))
        .await
        .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;
    Ok(Json(payload))
}

/// GET /api/progress/demo — the fixed fallback payload.
pub async fn get_demo_progress() -> Json<ProgressPayload> {
    Json(progress_core::fallback::demo_payload())
}
