//! Markup tree model
//!
//! A markup tree is plain data: elements with a tag, optional attributes and
//! children, sibling fragments, scalar text, trusted markup and empty slots.
//! Trees are built with the constructors and `From` conversions below, with
//! the [`attrs!`](crate::attrs) macro, or classified from untyped JSON via
//! [`classify::from_json`].

pub mod classify;
pub mod safe;

use std::fmt;

use indexmap::IndexMap;

pub use classify::Shape;
pub use safe::SafeString;

/// Attribute name to value, in insertion order
pub type Attributes = IndexMap<String, AttrValue>;

/// A scalar rendered through its natural string form
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Scalar::Str(value) => f.write_str(value),
            Scalar::Int(value) => write!(f, "{}", value),
            Scalar::Float(value) => write!(f, "{}", value),
            Scalar::Bool(value) => write!(f, "{}", value),
        }
    }
}

/// Value side of an attribute map
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    /// Absent value, stringifies to ""
    Null,
    Scalar(Scalar),
    /// Trusted value, never escaped
    Safe(SafeString),
    /// Nested map, flattened into dash-joined names
    Map(Attributes),
    /// Space-joined list, blank entries dropped
    List(Vec<AttrValue>),
}

/// A tag with optional attributes and ordered children
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: String,
    pub attributes: Option<Attributes>,
    pub children: Vec<Node>,
}

impl Element {
    /// Create an element with no attributes and no children
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: None,
            children: vec![],
        }
    }

    /// Set one attribute, replacing an existing value under the same name
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attributes
            .get_or_insert_with(Attributes::new)
            .insert(key.into(), value.into());
        self
    }

    /// Merge an attribute map into this element
    pub fn attrs(mut self, attrs: Attributes) -> Self {
        match &mut self.attributes {
            Some(existing) => existing.extend(attrs),
            None => self.attributes = Some(attrs),
        }
        self
    }

    /// Append one child
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Append several children in order
    pub fn children<I, T>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Node>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }
}

/// One node of a markup tree
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Node {
    /// Siblings with no wrapping tag
    Fragment(Vec<Node>),
    Element(Element),
    Text(Scalar),
    Safe(SafeString),
    /// Contributes nothing to the output
    #[default]
    Empty,
}

impl Node {
    pub fn fragment<I, T>(nodes: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Node>,
    {
        Node::Fragment(nodes.into_iter().map(Into::into).collect())
    }

    pub fn element<I, T>(tag: impl Into<String>, attributes: Attributes, children: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Node>,
    {
        Node::Element(Element::new(tag).attrs(attributes).children(children))
    }

    pub fn text(value: impl Into<Scalar>) -> Self {
        Node::Text(value.into())
    }

    pub fn safe(html: impl Into<String>) -> Self {
        Node::Safe(SafeString::new(html))
    }

    /// Short name of the variant, used in diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Fragment(_) => "fragment",
            Node::Element(_) => "element",
            Node::Text(_) => "text",
            Node::Safe(_) => "safe",
            Node::Empty => "empty",
        }
    }

    /// Render this tree with escaping enabled
    pub fn to_html(&self) -> Result<String, crate::RenderError> {
        crate::render(self)
    }
}

macro_rules! scalar_from {
    ($($ty:ty => $variant:ident as $target:ty),+ $(,)?) => {
        $(
            impl From<$ty> for Scalar {
                fn from(value: $ty) -> Scalar {
                    Scalar::$variant(value as $target)
                }
            }

            impl From<$ty> for Node {
                fn from(value: $ty) -> Node {
                    Node::Text(value.into())
                }
            }

            impl From<$ty> for AttrValue {
                fn from(value: $ty) -> AttrValue {
                    AttrValue::Scalar(value.into())
                }
            }
        )+
    };
}

scalar_from! {
    i32 => Int as i64,
    i64 => Int as i64,
    u8 => Int as i64,
    u16 => Int as i64,
    u32 => Int as i64,
    f64 => Float as f64,
}

impl From<f32> for Scalar {
    fn from(value: f32) -> Scalar {
        // widen through the f32's shortest decimal form so 0.1f32 stays 0.1
        Scalar::Float(value.to_string().parse().unwrap_or(value as f64))
    }
}

impl From<f32> for Node {
    fn from(value: f32) -> Node {
        Node::Text(value.into())
    }
}

impl From<f32> for AttrValue {
    fn from(value: f32) -> AttrValue {
        AttrValue::Scalar(value.into())
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Scalar {
        Scalar::Str(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Scalar {
        Scalar::Str(value)
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Scalar {
        Scalar::Bool(value)
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Node {
        Node::Text(value.into())
    }
}

impl From<String> for Node {
    fn from(value: String) -> Node {
        Node::Text(value.into())
    }
}

impl From<bool> for Node {
    fn from(value: bool) -> Node {
        Node::Text(value.into())
    }
}

impl From<Scalar> for Node {
    fn from(value: Scalar) -> Node {
        Node::Text(value)
    }
}

impl From<SafeString> for Node {
    fn from(value: SafeString) -> Node {
        Node::Safe(value)
    }
}

impl From<Element> for Node {
    fn from(value: Element) -> Node {
        Node::Element(value)
    }
}

impl From<Vec<Node>> for Node {
    fn from(value: Vec<Node>) -> Node {
        Node::Fragment(value)
    }
}

impl<T: Into<Node>> From<Option<T>> for Node {
    fn from(value: Option<T>) -> Node {
        value.map(Into::into).unwrap_or(Node::Empty)
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> AttrValue {
        AttrValue::Scalar(value.into())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> AttrValue {
        AttrValue::Scalar(value.into())
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> AttrValue {
        AttrValue::Scalar(value.into())
    }
}

impl From<Scalar> for AttrValue {
    fn from(value: Scalar) -> AttrValue {
        AttrValue::Scalar(value)
    }
}

impl From<SafeString> for AttrValue {
    fn from(value: SafeString) -> AttrValue {
        AttrValue::Safe(value)
    }
}

impl From<Attributes> for AttrValue {
    fn from(value: Attributes) -> AttrValue {
        AttrValue::Map(value)
    }
}

impl<T: Into<AttrValue>> From<Vec<T>> for AttrValue {
    fn from(value: Vec<T>) -> AttrValue {
        AttrValue::List(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<AttrValue>> From<Option<T>> for AttrValue {
    fn from(value: Option<T>) -> AttrValue {
        value.map(Into::into).unwrap_or(AttrValue::Null)
    }
}
