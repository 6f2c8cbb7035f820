//! HTML renderer for markup trees
//!
//! This module walks a [`Node`](crate::Node) tree and produces an HTML
//! string, flattening attributes and self-closing void elements.

pub mod attributes;
pub mod config;
pub mod escape;
pub mod html;
pub mod void;

pub use config::RenderConfig;
pub use escape::{escape_html, maybe_escape};
pub use html::{render_html, HtmlWriter};
pub use void::is_void;
