use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProgressError {
    #[error("unknown status '{0}': expected one of done, inprogress, todo")]
    UnknownStatus(String),

    #[error("invalid progress payload: {0}")]
    InvalidPayload(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("progress data file not found: {0}")]
    DataFileNotFound(String),

    #[error("progress endpoint returned HTTP {status}")]
    HttpStatus { status: u16 },

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Template(#[from] handlebars::RenderError),

    #[error(transparent)]
    TemplateSyntax(#[from] handlebars::TemplateError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ProgressError>;
