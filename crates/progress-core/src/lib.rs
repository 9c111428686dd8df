pub mod config;
pub mod data;
pub mod error;
pub mod fallback;
pub mod io;
pub mod loader;
pub mod paths;
pub mod render;
pub mod screenshots;
pub mod status;
pub mod types;
pub mod view;

pub use error::{ProgressError, Result};
