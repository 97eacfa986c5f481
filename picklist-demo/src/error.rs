use std::io;

use picklist::{ConfigurationError, RenderError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DemoError {
    #[error("terminal error: {0}")]
    Io(#[from] io::Error),
    #[error("invalid settings file: {0}")]
    Settings(#[from] serde_json::Error),
    #[error("invalid settings file: {0}")]
    Configuration(#[from] ConfigurationError),
    #[error(transparent)]
    Render(#[from] RenderError),
}
