//! Adapter between a host templating layer and the renderer
//!
//! A host that builds output from blocks (layouts, partials, captured
//! content) hands each produced fragment to [`adapt`]. Fragments that are
//! markup trees come back rendered as trusted HTML; everything else passes
//! through untouched, so host blocks can return markup trees transparently.

use tracing::debug;

use crate::markup::{Node, SafeString};
use crate::renderer::{escape::maybe_escape, render_html, RenderConfig};
use crate::RenderError;

/// One fragment of host output
#[derive(Debug, Clone, PartialEq)]
pub enum Output {
    /// Untrusted text, escaped when joined
    Text(String),
    /// Markup the host has already marked safe
    Html(SafeString),
    /// A markup tree still to be rendered
    Markup(Node),
}

impl Output {
    /// Whether the host's trust system marked this fragment safe
    pub fn is_safe(&self) -> bool {
        matches!(self, Output::Html(_))
    }

    /// Turn this fragment into trusted HTML
    ///
    /// Markup trees are rendered; text is escaped per `config` unless the
    /// host marked it safe.
    pub fn into_html(self, config: &RenderConfig) -> Result<SafeString, RenderError> {
        let is_safe = self.is_safe();
        let text = match self {
            Output::Markup(node) => return render_html(&node, config).map(SafeString::new),
            Output::Text(text) => text,
            Output::Html(safe) => safe.into_string(),
        };
        Ok(SafeString::new(
            maybe_escape(&text, config.escape, is_safe).into_owned(),
        ))
    }
}

impl From<String> for Output {
    fn from(value: String) -> Self {
        Output::Text(value)
    }
}

impl From<&str> for Output {
    fn from(value: &str) -> Self {
        Output::Text(value.to_string())
    }
}

impl From<SafeString> for Output {
    fn from(value: SafeString) -> Self {
        Output::Html(value)
    }
}

impl From<Node> for Output {
    fn from(value: Node) -> Self {
        Output::Markup(value)
    }
}

impl From<crate::markup::Element> for Output {
    fn from(value: crate::markup::Element) -> Self {
        Output::Markup(value.into())
    }
}

/// Render `output` if it is a markup tree, otherwise return it unchanged
pub fn adapt(output: Output, config: &RenderConfig) -> Result<Output, RenderError> {
    match output {
        Output::Markup(node) => {
            let html = render_html(&node, config)?;
            Ok(Output::Html(SafeString::new(html)))
        }
        other => Ok(other),
    }
}

/// Adapt every fragment of a host output sequence, keeping order
pub fn adapt_all<I>(outputs: I, config: &RenderConfig) -> Result<Vec<Output>, RenderError>
where
    I: IntoIterator<Item = Output>,
{
    let adapted = outputs
        .into_iter()
        .map(|output| adapt(output, config))
        .collect::<Result<Vec<_>, _>>()?;
    debug!(fragments = adapted.len(), "adapted host output");
    Ok(adapted)
}

/// Adapt and concatenate host output into one trusted string
///
/// Untrusted text is escaped according to `config`.
pub fn join<I>(outputs: I, config: &RenderConfig) -> Result<SafeString, RenderError>
where
    I: IntoIterator<Item = Output>,
{
    let mut html = String::new();
    let mut fragments = 0;
    for output in outputs {
        html.push_str(output.into_html(config)?.as_str());
        fragments += 1;
    }
    debug!(fragments, "joined host output");
    Ok(SafeString::new(html))
}

/// Run a host block and adapt whatever it returns
pub fn capture<F, T>(block: F, config: &RenderConfig) -> Result<Output, RenderError>
where
    F: FnOnce() -> T,
    T: Into<Output>,
{
    adapt(block().into(), config)
}
