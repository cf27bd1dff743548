//! Rendering module for converting document trees to output formats.
//!
//! Text and HTML are rendered per node ([`NodeRef::to_text`],
//! [`NodeRef::to_html`]) or per document; JSON and the debug outline
//! cover the whole tree.
//!
//! [`NodeRef::to_text`]: crate::NodeRef::to_text
//! [`NodeRef::to_html`]: crate::NodeRef::to_html

pub mod context;
pub mod html;
mod json;
mod outline;
pub mod text;

pub use json::{to_json, JsonFormat, MAX_JSON_DEPTH};
pub use outline::to_outline;
