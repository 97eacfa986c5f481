//! A selection list for `picklist-dom` element trees.
//!
//! The caller owns the selection; the list renders a checkbox (multi-select)
//! or radio (single-select) row per choice and proposes new selections
//! through `on_change`.

pub mod choice;
pub mod config;
pub mod error;
pub mod handlers;
pub mod host;
pub mod list;
pub mod renderer;
pub mod selection;
pub mod state;
pub mod validation;
pub mod widgets;

pub use choice::{Choice, SelectionSet, choices, selection};
pub use config::{Attrs, LabelFn, OnChange, ResolvedConfig, Value, configure};
pub use error::{ConfigurationError, RenderError};
pub use handlers::{Handler, HandlerRegistry, ON_ACTIVATE};
pub use host::ListHost;
pub use list::{render, selection_list};
pub use renderer::{CheckboxItem, ItemRenderer, RadioItem, renderer_fn};
pub use selection::{check_clicked, effective_selection, radio_clicked};
pub use state::State;
pub use validation::{validate, validate_keys};

pub mod prelude {
    pub use crate::choice::{Choice, SelectionSet, choices, selection};
    pub use crate::config::Attrs;
    pub use crate::error::{ConfigurationError, RenderError};
    pub use crate::handlers::HandlerRegistry;
    pub use crate::host::ListHost;
    pub use crate::list::selection_list;
    pub use crate::renderer::{ItemRenderer, renderer_fn};
    pub use crate::state::State;
}
