//! HTML generation from markup trees

use tracing::{debug, trace, warn};

use crate::markup::{Node, Scalar, Shape};
use crate::RenderError;

use super::attributes;
use super::escape::maybe_escape;
use super::void::is_void;
use super::RenderConfig;

/// Write HTML for markup nodes into one buffer
pub struct HtmlWriter<'c> {
    config: &'c RenderConfig,
    out: String,
    /// Child index path to the node being written
    path: Vec<usize>,
}

impl<'c> HtmlWriter<'c> {
    /// Create a new writer
    pub fn new(config: &'c RenderConfig) -> Self {
        Self {
            config,
            out: String::new(),
            path: vec![],
        }
    }

    /// Append the HTML for `node`
    pub fn write_node(&mut self, node: &Node) -> Result<(), RenderError> {
        match node.shape() {
            Shape::Empty => {}
            Shape::Text(scalar) => self.write_text(scalar),
            Shape::Safe(safe) => self.out.push_str(safe.as_str()),
            Shape::Fragment(nodes) => self.write_children(nodes)?,
            Shape::Element {
                tag,
                attributes,
                children,
            } => {
                if tag.is_empty() {
                    return Err(RenderError::malformed(&self.path, "element has an empty tag"));
                }
                trace!(tag, children = children.len(), "writing element");

                self.out.push('<');
                self.out.push_str(tag);
                if let Some(attrs) = attributes {
                    let tokens = attributes::serialize(attrs, self.config.escape)
                        .map_err(|err| RenderError::malformed(&self.path, err.to_string()))?;
                    if !tokens.is_empty() {
                        self.out.push(' ');
                        self.out.push_str(&tokens.join(" "));
                    }
                }

                if is_void(tag) {
                    if children.iter().any(|c| c.shape() != Shape::Empty) {
                        warn!(tag, "dropping children of void element");
                    }
                    self.out.push_str("/>");
                    return Ok(());
                }

                self.out.push('>');
                self.write_children(children)?;
                self.out.push_str("</");
                self.out.push_str(tag);
                self.out.push('>');
            }
        }
        Ok(())
    }

    /// Consume the writer and return the HTML
    pub fn finish(self) -> String {
        self.out
    }

    fn write_text(&mut self, scalar: &Scalar) {
        let escape = self.config.escape;
        match scalar {
            Scalar::Str(text) => self.out.push_str(&maybe_escape(text, escape, false)),
            other => self.out.push_str(&maybe_escape(&other.to_string(), escape, false)),
        }
    }

    fn write_children(&mut self, children: &[Node]) -> Result<(), RenderError> {
        if let Some(limit) = self.config.max_depth {
            if self.path.len() >= limit {
                return Err(RenderError::DepthExceeded { limit });
            }
        }

        for (idx, child) in children.iter().enumerate() {
            self.path.push(idx);
            let result = self.write_node(child);
            self.path.pop();
            result?;
        }
        Ok(())
    }
}

/// Render a markup tree to an HTML string
pub fn render_html(node: &Node, config: &RenderConfig) -> Result<String, RenderError> {
    debug!(
        kind = node.kind(),
        escape = config.escape,
        "rendering markup tree"
    );
    let mut writer = HtmlWriter::new(config);
    writer.write_node(node)?;
    Ok(writer.finish())
}
