use axum::extract::{Path, State};
use axum::http::header;
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use progress_core::screenshots::{self, Screenshot};

use crate::error::AppError;
use crate::state::AppState;

async fn read_screenshots(app: &AppState) -> Result<Vec<Screenshot>, AppError> {
    let dir = app.config.screenshots_path(&app.root);
    let prefix = app.config.public_prefix();
    let shots = tokio::task::spawn_blocking(move || screenshots::list_screenshots(&dir, &prefix))
        .await
        .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;
    Ok(shots)
}

/// GET /screenshots — gallery page. An unreadable directory renders as an
/// empty gallery.
pub async fn gallery_page(State(app): State<AppState>) -> Result<Html<String>, AppError> {
    let shots = match read_screenshots(&app).await {
        Ok(shots) => shots,
        Err(e) => {
            tracing::warn!(error = %e.0, "screenshot directory unreadable");
            Vec::new()
        }
    };
    Ok(Html(app.renderer.gallery_page(&shots)?))
}

/// GET /api/screenshots — list of `{ name, src, alt }`.
pub async fn list_screenshots(
    State(app): State<AppState>,
) -> Result<Json<Vec<Screenshot>>, AppError> {
    Ok(Json(read_screenshots(&app).await?))
}

/// GET /screenshots/{file} — serve one image from the screenshot directory.
pub async fn screenshot_file(
    State(app): State<AppState>,
    Path(file): Path<String>,
) -> Result<Response, AppError> {
    if file.contains('/') || file.contains('\\') || file.starts_with('.') {
        return Err(AppError::bad_request(format!("invalid file name '{file}'")));
    }
    if !screenshots::is_image_name(&file) {
        return Err(AppError::not_found(format!("screenshot '{file}' not found")));
    }

    let path = app.config.screenshots_path(&app.root).join(&file);
    let data = match tokio::fs::read(&path).await {
        Ok(data) => data,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(AppError::not_found(format!("screenshot '{file}' not found")));
        }
        Err(e) => return Err(e.into()),
    };

    let mime = mime_guess::from_path(&path).first_or_octet_stream();
    Ok(([(header::CONTENT_TYPE, mime.as_ref().to_string())], data).into_response())
}
