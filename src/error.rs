use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipshimError {
    #[error("Failed to render configuration: {0}")]
    ConfigRender(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
