//! Input component for text fields.

use crate::ui::class_names::compose;
use crate::ui::dom::{Attrs, Callback, Element, Event, EventKind, Node};
use crate::ui::icons::{Glyph, IconAdapter};

use super::icon::{IconProps, icon};

/// Pass-through key that switches the native input to controlled mode.
const VALUE: &str = "value";
/// Pass-through key for the initial value of an uncontrolled input.
const DEFAULT_VALUE: &str = "defaultValue";
/// Keys owned by the wrapper; never forwarded to the native input.
const STRUCTURAL_KEYS: &[&str] = &["disabled", "size", "style"];

/// Input size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSize {
    /// Large input.
    Lg,
    /// Small input.
    Sm,
}

impl InputSize {
    /// Get the wrapper CSS class for this size.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Lg => "input-size-lg",
            Self::Sm => "input-size-sm",
        }
    }
}

/// Input props.
///
/// Structural fields shape the wrapper; everything in [`attrs`](Self::attrs)
/// is forwarded verbatim to the native `<input>`.
#[derive(Debug, Clone, Default)]
pub struct InputProps {
    /// Whether the input is disabled.
    pub disabled: bool,
    /// Input size, none for the default size.
    pub size: Option<InputSize>,
    /// Glyph floated inside the field as a hint.
    pub icon: Option<Glyph>,
    /// Fixed content before the field.
    pub prefix: Option<Node>,
    /// Fixed content after the field.
    pub suffix: Option<Node>,
    /// Inline style for the wrapper.
    pub style: Option<String>,
    /// Change handler attached to the native input.
    pub on_change: Option<Callback>,
    /// Native input attributes.
    pub attrs: Attrs,
}

impl InputProps {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    #[must_use]
    pub fn size(mut self, size: InputSize) -> Self {
        self.size = Some(size);
        self
    }

    #[must_use]
    pub fn icon(mut self, glyph: impl Into<Glyph>) -> Self {
        self.icon = Some(glyph.into());
        self
    }

    #[must_use]
    pub fn prefix(mut self, prefix: impl Into<Node>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    #[must_use]
    pub fn suffix(mut self, suffix: impl Into<Node>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }

    #[must_use]
    pub fn style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    #[must_use]
    pub fn on_change(mut self, handler: impl Fn(&Event) + Send + Sync + 'static) -> Self {
        self.on_change = Some(Callback::new(handler));
        self
    }

    /// Forward a native attribute.
    #[must_use]
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.set(key, value);
        self
    }

    /// Forward a native attribute whose value may be unset.
    #[must_use]
    pub fn attr_opt(mut self, key: impl Into<String>, value: Option<String>) -> Self {
        self.attrs.insert(key, value);
        self
    }

    /// Bind the value, making the input controlled.
    #[must_use]
    pub fn value(self, value: impl Into<String>) -> Self {
        self.attr(VALUE, value)
    }

    /// Bind a value that may be unset; the input is still controlled.
    #[must_use]
    pub fn value_opt(self, value: Option<String>) -> Self {
        self.attr_opt(VALUE, value)
    }

    /// Initial value for an uncontrolled input.
    #[must_use]
    pub fn default_value(self, value: impl Into<String>) -> Self {
        self.attr(DEFAULT_VALUE, value)
    }

    #[must_use]
    pub fn placeholder(self, placeholder: impl Into<String>) -> Self {
        self.attr("placeholder", placeholder)
    }

    /// Input type (text, email, password, etc.).
    #[must_use]
    pub fn input_type(self, input_type: impl Into<String>) -> Self {
        self.attr("type", input_type)
    }

    #[must_use]
    pub fn name(self, name: impl Into<String>) -> Self {
        self.attr("name", name)
    }

    /// Wrapper classes derived from the structural fields.
    pub fn wrapper_classes(&self) -> String {
        let has_prefix = self.prefix.is_some();
        let has_suffix = self.suffix.is_some();
        compose(
            "axtlive-input-wrapper",
            &[
                (self.size.map_or("", InputSize::class), self.size.is_some()),
                ("is-disabled", self.disabled),
                ("input-group", has_prefix || has_suffix),
                ("input-group-prefix", has_prefix),
                ("input-group-suffix", has_suffix),
            ],
        )
    }

    /// Attributes forwarded to the native input.
    ///
    /// Structural keys (`disabled`, `size`, `style`) are dropped; use the
    /// typed fields for those. Once a `value` key is present the input stays
    /// controlled: any `defaultValue` is dropped and an unset value becomes
    /// `""`. The props themselves are left untouched.
    pub fn native_attrs(&self) -> Attrs {
        let mut attrs = self.attrs.clone();
        for key in STRUCTURAL_KEYS {
            attrs.remove(key);
        }
        if attrs.contains_key(VALUE) {
            attrs.remove(DEFAULT_VALUE);
            let value = attrs.get(VALUE).unwrap_or_default().to_string();
            attrs.set(VALUE, value);
        }
        attrs
    }
}

/// Text input with optional size, icon, prefix and suffix.
///
/// # Example
///
/// ```rust
/// use axtlive_ui::ui::components::{InputProps, InputSize, input};
/// use axtlive_ui::ui::icons::SvgIconSet;
///
/// let el = input(
///     &InputProps::new().size(InputSize::Lg).prefix("https://").placeholder("site"),
///     &SvgIconSet,
/// );
/// assert!(el.has_class("input-group-prefix"));
/// ```
pub fn input(props: &InputProps, icons: &dyn IconAdapter) -> Element {
    let prefix = props.prefix.clone().map(|prefix| {
        Element::new("div")
            .class("input-group-prefix-wrapper")
            .child(prefix)
    });

    let icon_wrapper = props.icon.as_ref().map(|glyph| {
        Element::new("div").class("icon-wrapper").child(icon(
            &IconProps::new(glyph.clone()).title(glyph.title()),
            icons,
        ))
    });

    let native = Element::new("input")
        .class("input-inner")
        .flag("disabled", props.disabled)
        .attrs(&props.native_attrs())
        .on_opt(EventKind::Change, props.on_change.as_ref());

    let suffix = props.suffix.clone().map(|suffix| {
        Element::new("div")
            .class("input-group-suffix-wrapper")
            .child(suffix)
    });

    Element::new("div")
        .class(props.wrapper_classes())
        .attr_opt("style", props.style.as_deref())
        .child_opt(prefix)
        .child_opt(icon_wrapper)
        .child(native)
        .child_opt(suffix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::icons::SvgIconSet;
    use std::sync::{Arc, Mutex};

    fn native(el: &Element) -> &Element {
        el.find_by_tag("input").expect("native input")
    }

    #[test]
    fn test_default_input_is_bare_wrapper() {
        let el = input(&InputProps::new(), &SvgIconSet);
        assert_eq!(el.tag(), "div");
        assert_eq!(el.get_attr("class"), Some("axtlive-input-wrapper"));
        assert_eq!(el.child_elements().count(), 1);
        assert_eq!(native(&el).get_attr("class"), Some("input-inner"));
        assert!(!native(&el).has_attr("disabled"));
    }

    #[test]
    fn test_size_unset_has_no_size_token() {
        let el = input(&InputProps::new().disabled(true), &SvgIconSet);
        assert!(!el.classes().any(|c| c.starts_with("input-size-")));
    }

    #[test]
    fn test_large_disabled_has_no_group_tokens() {
        let el = input(
            &InputProps::new().size(InputSize::Lg).disabled(true),
            &SvgIconSet,
        );
        assert!(el.has_class("input-size-lg"));
        assert!(el.has_class("is-disabled"));
        assert!(!el.classes().any(|c| c.starts_with("input-group")));
        assert!(native(&el).has_attr("disabled"));
    }

    #[test]
    fn test_prefix_and_suffix_add_all_group_tokens() {
        let el = input(
            &InputProps::new().prefix("https://").suffix(".com"),
            &SvgIconSet,
        );
        for token in ["input-group", "input-group-prefix", "input-group-suffix"] {
            assert!(el.has_class(token), "missing {token}");
        }

        let tags: Vec<_> = el
            .child_elements()
            .map(|c| c.get_attr("class").unwrap_or(c.tag()))
            .collect();
        assert_eq!(
            tags,
            [
                "input-group-prefix-wrapper",
                "input-inner",
                "input-group-suffix-wrapper"
            ]
        );
        assert_eq!(el.text_content(), "https://.com");
    }

    #[test]
    fn test_prefix_only() {
        let el = input(&InputProps::new().prefix("@"), &SvgIconSet);
        assert!(el.has_class("input-group"));
        assert!(el.has_class("input-group-prefix"));
        assert!(!el.has_class("input-group-suffix"));
    }

    #[test]
    fn test_unset_value_becomes_empty_and_drops_default() {
        let props = InputProps::new().default_value("x").value_opt(None);
        let el = input(&props, &SvgIconSet);
        let inner = native(&el);
        assert_eq!(inner.get_attr("value"), Some(""));
        assert!(!inner.has_attr("defaultValue"));

        // Normalization works on a copy.
        assert!(props.attrs.contains_key("defaultValue"));
        assert_eq!(props.attrs.get("value"), None);
    }

    #[test]
    fn test_default_value_kept_without_value_key() {
        let el = input(&InputProps::new().default_value("x"), &SvgIconSet);
        let inner = native(&el);
        assert_eq!(inner.get_attr("defaultValue"), Some("x"));
        assert!(!inner.has_attr("value"));
    }

    #[test]
    fn test_value_is_forwarded() {
        let el = input(&InputProps::new().value("hello"), &SvgIconSet);
        assert_eq!(native(&el).get_attr("value"), Some("hello"));
        assert!(el.to_html().contains(r#"value="hello""#));
    }

    #[test]
    fn test_pass_through_attributes() {
        let el = input(
            &InputProps::new()
                .input_type("email")
                .name("email")
                .placeholder("you@example.com")
                .attr("data-test", "x"),
            &SvgIconSet,
        );
        let inner = native(&el);
        assert_eq!(inner.get_attr("type"), Some("email"));
        assert_eq!(inner.get_attr("name"), Some("email"));
        assert_eq!(inner.get_attr("placeholder"), Some("you@example.com"));
        assert_eq!(inner.get_attr("data-test"), Some("x"));
    }

    #[test]
    fn test_icon_wrapper_uses_glyph_title() {
        let el = input(&InputProps::new().icon("search"), &SvgIconSet);
        let wrapper = el.find_by_class("icon-wrapper").expect("icon wrapper");
        let svg = wrapper.find_by_tag("svg").expect("svg");
        assert!(svg.has_class("axtlive-icon"));
        assert_eq!(
            svg.find_by_tag("title").map(Element::text_content).as_deref(),
            Some("title-search")
        );
        // Icon does not make the input a group.
        assert!(!el.has_class("input-group"));
    }

    #[test]
    fn test_style_on_wrapper() {
        let el = input(&InputProps::new().style("width: 300px"), &SvgIconSet);
        assert_eq!(el.get_attr("style"), Some("width: 300px"));
        assert!(!native(&el).has_attr("style"));
    }

    #[test]
    fn test_structural_keys_are_not_forwarded() {
        let el = input(
            &InputProps::new()
                .attr("disabled", "")
                .attr("style", "color:red")
                .attr("size", "40")
                .placeholder("p"),
            &SvgIconSet,
        );
        let inner = native(&el);
        assert!(!inner.has_attr("disabled"));
        assert!(!inner.has_attr("style"));
        assert!(!inner.has_attr("size"));
        assert_eq!(inner.get_attr("placeholder"), Some("p"));
        assert!(!el.has_class("is-disabled"));
        assert!(!el.has_attr("style"));
        assert_eq!(
            el.to_html(),
            r#"<div class="axtlive-input-wrapper"><input class="input-inner" placeholder="p"></div>"#
        );

        // The typed field still disables both wrapper and input.
        let el = input(&InputProps::new().attr("disabled", "").disabled(true), &SvgIconSet);
        assert!(el.has_class("is-disabled"));
        assert!(native(&el).has_attr("disabled"));
    }

    #[test]
    fn test_change_handler_receives_value() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let el = input(
            &InputProps::new().on_change(move |e| {
                sink.lock().unwrap().push(e.value.clone().unwrap_or_default());
            }),
            &SvgIconSet,
        );

        assert_eq!(native(&el).dispatch(&Event::change("abc")), 1);
        assert_eq!(*seen.lock().unwrap(), ["abc"]);
    }

    #[test]
    fn test_render_is_idempotent() {
        let props = InputProps::new()
            .size(InputSize::Sm)
            .icon("envelope")
            .suffix("@example.com")
            .value_opt(None);
        assert_eq!(
            input(&props, &SvgIconSet).to_html(),
            input(&props, &SvgIconSet).to_html()
        );
    }
}
