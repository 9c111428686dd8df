pub mod embed;
pub mod error;
pub mod routes;
pub mod state;

use axum::routing::get;
use axum::Router;
use progress_core::config::Config;
use std::path::PathBuf;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use state::AppState;

/// Build the axum Router with all page and API routes.
/// Used by `serve_on()` and available for integration testing.
pub fn build_router(app_state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let gallery_path = app_state.config.public_prefix();
    let file_path = format!("{gallery_path}/{{file}}");

    Router::new()
        // Pages
        .route("/", get(routes::dashboard::dashboard_page))
        .route(&gallery_path, get(routes::screenshots::gallery_page))
        .route(&file_path, get(routes::screenshots::screenshot_file))
        // API
        .route("/api/progress", get(routes::progress::get_progress))
        .route("/api/progress/demo", get(routes::progress::get_demo_progress))
        .route("/api/screenshots", get(routes::screenshots::list_screenshots))
        // Stylesheet
        .route("/assets/{*path}", get(embed::asset_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

/// Start the dashboard server on a pre-bound listener.
///
/// The caller can read the actual port before starting (useful when
/// `port = 0` and the OS picks a free port). Without a configured
/// `progress_url` the dashboard loads from this server's own `/api/progress`.
pub async fn serve_on(
    root: PathBuf,
    config: Config,
    listener: tokio::net::TcpListener,
    open_browser: bool,
) -> anyhow::Result<()> {
    let actual_port = listener.local_addr()?.port();
    let progress_url = config.progress_url_for_port(actual_port);
    let app = build_router(AppState::new(root, config, progress_url)?);

    tracing::info!("progress dashboard listening on http://localhost:{actual_port}");

    if open_browser {
        let url = format!("http://localhost:{actual_port}");
        let _ = open::that(&url);
    }

    axum::serve(listener, app).await?;
    Ok(())
}
