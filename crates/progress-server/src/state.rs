use progress_core::config::Config;
use progress_core::loader::ProgressLoader;
use progress_core::render::Renderer;
use std::path::PathBuf;
use std::sync::Arc;

/// Shared application state passed to all route handlers.
///
/// Nothing here is mutated after startup; each dashboard request builds its
/// own view.
#[derive(Clone)]
pub struct AppState {
    pub root: PathBuf,
    pub config: Arc<Config>,
    pub renderer: Arc<Renderer>,
    pub loader: ProgressLoader,
}

impl AppState {
    pub fn new(root: PathBuf, config: Config, progress_url: String) -> anyhow::Result<Self> {
        config.validate()?;
        let renderer = Renderer::new(config.project.clone(), config.public_prefix())?;
        let loader = ProgressLoader::new(progress_url, config.fetch_timeout())?;
        tracing::info!(url = %loader.url(), "dashboard progress source");
        Ok(Self {
            root,
            config: Arc::new(config),
            renderer: Arc::new(renderer),
            loader,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_stores_root_and_url() {
        let state = AppState::new(
            PathBuf::from("/tmp/test"),
            Config::default(),
            "http://127.0.0.1:1/api/progress".into(),
        )
        .unwrap();
        assert_eq!(state.root, PathBuf::from("/tmp/test"));
        assert_eq!(state.loader.url(), "http://127.0.0.1:1/api/progress");
    }

    #[test]
    fn colliding_screenshot_prefix_is_an_error() {
        let config = Config {
            screenshots_prefix: "/api/progress".into(),
            ..Config::default()
        };
        let result = AppState::new(PathBuf::from("/tmp/test"), config, "http://x".into());
        assert!(result.is_err());
    }
}
