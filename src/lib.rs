//! Hiccdown - render data-only markup trees to HTML
//!
//! A markup tree describes HTML with plain data instead of template syntax:
//! elements with a tag, optional attributes and children, sibling fragments,
//! scalar text, trusted markup and empty slots. This crate turns such a tree
//! into an HTML string, flattening nested attribute maps, joining list-valued
//! attributes, self-closing void elements and escaping untrusted text.
//!
//! # Example
//!
//! ```rust
//! use hiccdown::{attrs, render, Element};
//!
//! let page = Element::new("p")
//!     .attrs(attrs! { "class" => "foo" })
//!     .child("bar");
//!
//! assert_eq!(render(&page.into()).unwrap(), r#"<p class="foo">bar</p>"#);
//! ```

#[macro_use]
pub mod macros;

pub mod error;
pub mod host;
pub mod markup;
pub mod renderer;
pub mod settings;

pub use error::ParseError;
pub use markup::{AttrValue, Attributes, Element, Node, SafeString, Scalar, Shape};
pub use renderer::{render_html, RenderConfig};
pub use settings::Settings;

use thiserror::Error;

/// Errors that can occur while classifying or rendering a markup tree
#[derive(Debug, Error)]
pub enum RenderError {
    /// A node that cannot be rendered
    ///
    /// Raised for a tag that is not a scalar, for an empty tag (`""` would
    /// produce `<>`), for an attribute map outside an element in JSON input,
    /// and for an attribute name that would break out of the tag.
    #[error("malformed node at {path}: {reason}")]
    MalformedNode { path: String, reason: String },

    /// The tree is nested deeper than the configured limit
    #[error("markup tree exceeds the maximum depth of {limit}")]
    DepthExceeded { limit: usize },

    /// Untyped input is not valid JSON
    #[error("{0}")]
    Json(#[from] ParseError),
}

impl From<serde_json::Error> for RenderError {
    fn from(err: serde_json::Error) -> Self {
        RenderError::Json(ParseError::from(err))
    }
}

impl RenderError {
    pub(crate) fn malformed(path: &[usize], reason: impl Into<String>) -> Self {
        RenderError::MalformedNode {
            path: format_path(path),
            reason: reason.into(),
        }
    }
}

/// Index path such as `/0/2`, or `/` for the root
fn format_path(path: &[usize]) -> String {
    if path.is_empty() {
        return "/".to_string();
    }
    path.iter().map(|idx| format!("/{}", idx)).collect()
}

/// Render a markup tree to HTML with escaping enabled
///
/// # Example
///
/// ```rust
/// use hiccdown::{render, Element, Node};
///
/// let list = Node::fragment([
///     Element::new("div").child("foo"),
///     Element::new("strong").child("bar"),
/// ]);
///
/// assert_eq!(render(&list).unwrap(), "<div>foo</div><strong>bar</strong>");
/// ```
pub fn render(node: &Node) -> Result<String, RenderError> {
    render_with_config(node, &RenderConfig::default())
}

/// Render a markup tree to HTML with custom configuration
///
/// # Example
///
/// ```rust
/// use hiccdown::{render_with_config, Node, RenderConfig};
///
/// let config = RenderConfig::new().with_escape(false);
/// let html = render_with_config(&Node::text("<br>"), &config).unwrap();
/// assert_eq!(html, "<br>");
/// ```
pub fn render_with_config(node: &Node, config: &RenderConfig) -> Result<String, RenderError> {
    render_html(node, config)
}

/// Parse a JSON markup tree and render it with escaping enabled
///
/// # Example
///
/// ```rust
/// use hiccdown::render_json;
///
/// let html = render_json(r#"["p", {"class": "foo"}, "bar"]"#).unwrap();
/// assert_eq!(html, r#"<p class="foo">bar</p>"#);
/// ```
pub fn render_json(source: &str) -> Result<String, RenderError> {
    render_json_with_config(source, &RenderConfig::default())
}

/// Parse a JSON markup tree and render it with custom configuration
pub fn render_json_with_config(source: &str, config: &RenderConfig) -> Result<String, RenderError> {
    let node = Node::from_json_str(source)?;
    render_html(&node, config)
}
