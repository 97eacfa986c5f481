//! Primitive widgets the selection list is assembled from.
//!
//! Each widget is a builder that produces a `picklist_dom::Element`.
//! Interactive widgets register their activation handler in the
//! [`HandlerRegistry`](crate::HandlerRegistry) under the element's id, so the
//! element tree itself stays plain data.

pub mod bordered;
pub mod checkbox;
pub mod label;
pub mod radio;

pub use bordered::Bordered;
pub use checkbox::Checkbox;
pub use label::Label;
pub use radio::RadioButton;
