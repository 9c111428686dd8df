use handlebars::Handlebars;
use serde::Serialize;

use crate::error::Result;
use crate::loader::{DataSource, LoadOutcome};
use crate::screenshots::Screenshot;
use crate::status::StatusBadge;
use crate::types::{Feature, Milestone, ProgressPayload};
use crate::view::{DashboardView, ViewState};

const LAYOUT: &str = include_str!("../templates/layout.hbs");
const LOADING: &str = include_str!("../templates/loading.hbs");
const DASHBOARD: &str = include_str!("../templates/dashboard.hbs");
const GALLERY: &str = include_str!("../templates/gallery.hbs");

/// Format a fraction as a whole percentage, e.g. `0.65` -> `"65%"`.
pub fn format_percent(fraction: f64) -> String {
    format!("{}%", percent_value(fraction))
}

/// `round(fraction * 100)`. No clamping.
pub fn percent_value(fraction: f64) -> i64 {
    (fraction * 100.0).round() as i64
}

// ---------------------------------------------------------------------------
// Template contexts
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct LayoutContext<'a> {
    title: String,
    body: &'a str,
}

#[derive(Serialize)]
struct MilestoneRow<'a> {
    id: u32,
    title: &'a str,
    status: &'static str,
    bullet_class: &'static str,
    percent_value: i64,
    percent_label: String,
}

impl<'a> From<&'a Milestone> for MilestoneRow<'a> {
    fn from(m: &'a Milestone) -> Self {
        Self {
            id: m.id,
            title: &m.title,
            status: m.status.as_str(),
            bullet_class: m.status.bullet_class(),
            percent_value: percent_value(m.percent),
            percent_label: format_percent(m.percent),
        }
    }
}

#[derive(Serialize)]
struct FeatureCard<'a> {
    id: &'a str,
    title: &'a str,
    status: &'static str,
    badge: StatusBadge,
    icon: &'static str,
    icon_name: &'static str,
}

impl<'a> From<&'a Feature> for FeatureCard<'a> {
    fn from(f: &'a Feature) -> Self {
        let badge = f.status.badge();
        Self {
            id: &f.id,
            title: &f.title,
            status: f.status.as_str(),
            icon: badge.icon.symbol(),
            icon_name: badge.icon.as_str(),
            badge,
        }
    }
}

#[derive(Serialize)]
struct DashboardContext<'a> {
    source: &'static str,
    overall_label: String,
    overall_value: i64,
    milestones: Vec<MilestoneRow<'a>>,
    features: Vec<FeatureCard<'a>>,
    screenshots_href: &'a str,
}

#[derive(Serialize)]
struct GalleryContext<'a> {
    screenshots: &'a [Screenshot],
}

// ---------------------------------------------------------------------------
// Renderer
// ---------------------------------------------------------------------------

/// Produces the HTML for the dashboard and gallery pages.
pub struct Renderer {
    hbs: Handlebars<'static>,
    project: String,
    screenshots_href: String,
}

impl Renderer {
    pub fn new(project: impl Into<String>, screenshots_href: impl Into<String>) -> Result<Self> {
        let mut hbs = Handlebars::new();
        hbs.set_strict_mode(true);
        hbs.register_template_string("layout", LAYOUT)?;
        hbs.register_template_string("loading", LOADING)?;
        hbs.register_template_string("dashboard", DASHBOARD)?;
        hbs.register_template_string("gallery", GALLERY)?;
        Ok(Self {
            hbs,
            project: project.into(),
            screenshots_href: screenshots_href.into(),
        })
    }

    /// Body markup for the current view state: only the loading indicator
    /// until the view resolves.
    pub fn dashboard_body(&self, view: &DashboardView) -> Result<String> {
        match view.state() {
            ViewState::Loading => Ok(self.hbs.render("loading", &())?),
            ViewState::Ready(outcome) => self.payload_body(outcome),
        }
    }

    pub fn dashboard_page(&self, view: &DashboardView) -> Result<String> {
        let body = self.dashboard_body(view)?;
        self.page(&format!("{} · Progress", self.project), &body)
    }

    pub fn gallery_page(&self, screenshots: &[Screenshot]) -> Result<String> {
        let body = self.hbs.render("gallery", &GalleryContext { screenshots })?;
        self.page(&format!("{} · Screenshots", self.project), &body)
    }

    fn payload_body(&self, outcome: &LoadOutcome) -> Result<String> {
        let ProgressPayload {
            overall,
            milestones,
            features,
        } = &outcome.payload;
        let ctx = DashboardContext {
            source: match outcome.source {
                DataSource::Live => "live",
                DataSource::Fallback { .. } => "fallback",
            },
            overall_label: format_percent(*overall),
            overall_value: percent_value(*overall),
            milestones: milestones.iter().map(MilestoneRow::from).collect(),
            features: features.iter().map(FeatureCard::from).collect(),
            screenshots_href: &self.screenshots_href,
        };
        Ok(self.hbs.render("dashboard", &ctx)?)
    }

    fn page(&self, title: &str, body: &str) -> Result<String> {
        let ctx = LayoutContext {
            title: title.to_string(),
            body,
        };
        Ok(self.hbs.render("layout", &ctx)?)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
