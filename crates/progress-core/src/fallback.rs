use crate::types::{Feature, Milestone, ProgressPayload, Status};

/// The fixed payload shown whenever live progress data can't be retrieved.
pub fn demo_payload() -> ProgressPayload {
    let milestone = |id, title: &str, status, percent| Milestone {
        id,
        title: title.to_string(),
        status,
        percent,
    };
    let feature = |id: &str, title: &str, status| Feature {
        id: id.to_string(),
        title: title.to_string(),
        status,
    };

    ProgressPayload {
        overall: 0.65,
        milestones: vec![
            milestone(1, "Ideation", Status::Done, 1.0),
            milestone(2, "Prototype", Status::InProgress, 0.8),
            milestone(3, "Pilot", Status::InProgress, 0.6),
            milestone(4, "Clinical Test", Status::Todo, 0.1),
            milestone(5, "Deployment", Status::Todo, 0.1),
        ],
        features: vec![
            feature("fall", "Fall Detection", Status::Done),
            feature("memory", "Memory Stimulation", Status::Done),
            feature("reminder", "Daily Reminder & Health", Status::Done),
            feature("hazard", "Hazard Tip", Status::InProgress),
            feature("family", "Family Reminder", Status::Done),
            feature("wandering", "Wandering Tracking", Status::InProgress),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_payload_shape() {
        let p = demo_payload();
        assert_eq!(p.overall, 0.65);
        assert_eq!(p.milestones.len(), 5);
        assert_eq!(p.features.len(), 6);
        assert_eq!(p.milestones[0].title, "Ideation");
        assert_eq!(p.milestones[4].title, "Deployment");
    }

    #[test]
    fn demo_payload_is_valid() {
        demo_payload().validate().unwrap();
    }
}
