use thiserror::Error;

/// The attribute bag handed to the list is malformed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("unknown attribute `{0}`")]
    UnknownAttribute(String),
    #[error("missing required attribute `{0}`")]
    MissingAttribute(&'static str),
}

/// Failure while a host drives render passes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("invalid list configuration: {0}")]
    Configuration(#[from] ConfigurationError),
    #[error("selection model still changing after {passes} render passes")]
    Diverged { passes: usize },
    #[error("no item at index {0}")]
    NoSuchItem(usize),
}
