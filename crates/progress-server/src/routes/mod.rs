pub mod dashboard;
pub mod progress;
pub mod screenshots;
