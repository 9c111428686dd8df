use crate::loader::{LoadOutcome, ProgressLoader};
use crate::types::ProgressPayload;

#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<T> {
    Loading,
    Ready(T),
}

impl<T> ViewState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            ViewState::Loading => None,
            ViewState::Ready(value) => Some(value),
        }
    }
}

/// Transient state of one dashboard activation.
///
/// Starts in `Loading` and resolves at most once; later resolutions are
/// ignored, so the payload shown never changes for the life of the view.
#[derive(Debug, Clone)]
pub struct DashboardView {
    state: ViewState<LoadOutcome>,
}

impl Default for DashboardView {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardView {
    pub fn new() -> Self {
        Self {
            state: ViewState::Loading,
        }
    }

    pub fn state(&self) -> &ViewState<LoadOutcome> {
        &self.state
    }

    pub fn payload(&self) -> Option<&ProgressPayload> {
        self.state.ready().map(|o| &o.payload)
    }

    /// Store the first outcome. Returns false if the view was already resolved.
    pub fn resolve(&mut self, outcome: LoadOutcome) -> bool {
        if !self.state.is_loading() {
            return false;
        }
        self.state = ViewState::Ready(outcome);
        true
    }

    /// Run the single load for this activation. A resolved view issues no
    /// further requests.
    pub async fn activate(&mut self, loader: &ProgressLoader) {
        if self.state.is_loading() {
            let outcome = loader.load().await;
            self.resolve(outcome);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fallback::demo_payload;
    use crate::loader::DataSource;
    use chrono::Utc;
    use std::time::Duration;

    fn outcome(overall: f64) -> LoadOutcome {
        let mut payload = demo_payload();
        payload.overall = overall;
        LoadOutcome {
            payload,
            source: DataSource::Live,
            loaded_at: Utc::now(),
        }
    }

    #[test]
    fn starts_loading() {
        let view = DashboardView::new();
        assert!(view.state().is_loading());
        assert!(view.payload().is_none());
    }

    #[test]
    fn resolves_only_once() {
        let mut view = DashboardView::new();
        assert!(view.resolve(outcome(0.3)));
        assert!(!view.resolve(outcome(0.9)));
        assert_eq!(view.payload().unwrap().overall, 0.3);
    }

    #[tokio::test]
    async fn activate_fetches_once() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/progress")
            .with_status(200)
            .with_body(r#"{"overall":0.42,"milestones":[],"features":[]}"#)
            .expect(1)
            .create_async()
            .await;
        let loader = ProgressLoader::new(
            format!("{}/api/progress", server.url()),
            Duration::from_secs(5),
        )
        .unwrap();

        let mut view = DashboardView::new();
        view.activate(&loader).await;
        view.activate(&loader).await;

        mock.assert_async().await;
        assert_eq!(view.payload().unwrap().overall, 0.42);
    }
}
