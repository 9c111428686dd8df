use axum::extract::State;
use axum::response::Html;
use progress_core::view::DashboardView;

use crate::error::AppError;
use crate::state::AppState;

/// GET / — activate a fresh dashboard view and render it once it resolves.
///
/// The view performs its single load (live data or the demo fallback) before
/// the page is sent, so the response always carries the resolved dashboard.
pub async fn dashboard_page(State(app): State<AppState>) -> Result<Html<String>, AppError> {
    let mut view = DashboardView::new();
    view.activate(&app.loader).await;
    Ok(Html(app.renderer.dashboard_page(&view)?))
}
