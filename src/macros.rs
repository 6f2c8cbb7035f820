/// Build an [`Attributes`](crate::markup::Attributes) map in insertion order
///
/// ```rust
/// use hiccdown::{attrs, AttrValue};
///
/// let attrs = attrs! {
///     "class" => vec!["btn", "primary"],
///     "data" => attrs! { "id" => 7 },
/// };
/// assert_eq!(attrs["data"], AttrValue::Map(attrs! { "id" => 7 }));
/// ```
#[macro_export]
macro_rules! attrs {
    () => {
        $crate::markup::Attributes::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut attrs = $crate::markup::Attributes::new();
        $(
            attrs.insert(
                ::std::string::String::from($key),
                $crate::markup::AttrValue::from($value),
            );
        )+
        attrs
    }};
}
