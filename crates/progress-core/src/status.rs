use serde::Serialize;

use crate::error::Result;
use crate::types::Status;

// ---------------------------------------------------------------------------
// Glyph
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Glyph {
    CheckCircle,
    Clock,
    Circle,
}

impl Glyph {
    pub fn as_str(self) -> &'static str {
        match self {
            Glyph::CheckCircle => "check_circle",
            Glyph::Clock => "clock",
            Glyph::Circle => "circle",
        }
    }

    /// Text rendition used by both the HTML badge and the terminal table.
    pub fn symbol(self) -> &'static str {
        match self {
            Glyph::CheckCircle => "\u{2713}",
            Glyph::Clock => "\u{25F7}",
            Glyph::Circle => "\u{25CB}",
        }
    }
}

// ---------------------------------------------------------------------------
// StatusBadge
// ---------------------------------------------------------------------------

/// Presentation triple for a status: what the feature grid shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusBadge {
    pub label: &'static str,
    pub icon: Glyph,
    pub color: &'static str,
}

impl Status {
    pub fn badge(self) -> StatusBadge {
        match self {
            Status::Done => StatusBadge {
                label: "Done",
                icon: Glyph::CheckCircle,
                color: "bg-green-100 text-green-700",
            },
            Status::InProgress => StatusBadge {
                label: "In progress",
                icon: Glyph::Clock,
                color: "bg-yellow-100 text-yellow-700",
            },
            Status::Todo => StatusBadge {
                label: "To-do",
                icon: Glyph::Circle,
                color: "bg-gray-100 text-gray-600",
            },
        }
    }

    /// Bullet color for the milestone stepper.
    pub fn bullet_class(self) -> &'static str {
        match self {
            Status::Done => "bg-green-600",
            Status::InProgress => "bg-yellow-500",
            Status::Todo => "bg-gray-400",
        }
    }
}

/// Classify a raw status string. Unrecognized values are an error.
pub fn classify(raw: &str) -> Result<StatusBadge> {
    Ok(raw.parse::<Status>()?.badge())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProgressError;
    use std::collections::HashSet;

    #[test]
    fn fixed_labels() {
        assert_eq!(Status::Done.badge().label, "Done");
        assert_eq!(Status::InProgress.badge().label, "In progress");
        assert_eq!(Status::Todo.badge().label, "To-do");
    }

    #[test]
    fn glyphs_per_status() {
        assert_eq!(Status::Done.badge().icon, Glyph::CheckCircle);
        assert_eq!(Status::InProgress.badge().icon, Glyph::Clock);
        assert_eq!(Status::Todo.badge().icon, Glyph::Circle);
    }

    #[test]
    fn style_classes_are_distinct() {
        let badges: HashSet<_> = Status::all().iter().map(|s| s.badge().color).collect();
        assert_eq!(badges.len(), 3);
        let bullets: HashSet<_> = Status::all().iter().map(|s| s.bullet_class()).collect();
        assert_eq!(bullets.len(), 3);
    }

    #[test]
    fn color_tones() {
        assert!(Status::Done.badge().color.contains("green"));
        assert!(Status::InProgress.badge().color.contains("yellow"));
        assert!(Status::Todo.badge().color.contains("gray"));
    }

    #[test]
    fn classify_raw_strings() {
        assert_eq!(classify("inprogress").unwrap().label, "In progress");
        assert!(matches!(
            classify("Done"),
            Err(ProgressError::UnknownStatus(_))
        ));
    }
}
