//! Presentation element tree.
//!
//! Components return [`Element`] trees instead of markup. A tree can be
//! inspected (tests, adapters), have events dispatched to it, and be
//! serialized to HTML with [`Element::to_html`] for server-side rendering.

use std::fmt;
use std::sync::Arc;

/// HTML elements that never have children or a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Attributes rendered without a value when present.
const BOOLEAN_ATTRIBUTES: &[&str] = &[
    "autofocus",
    "checked",
    "disabled",
    "hidden",
    "multiple",
    "readonly",
    "required",
    "selected",
];

// ─────────────────────────────────────────────────────────────────────────────
// Events
// ─────────────────────────────────────────────────────────────────────────────

/// Kind of user interaction delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Pointer or keyboard activation.
    Click,
    /// Edit of a form control's value.
    Change,
}

/// Event dispatched to an element's listeners.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    /// What happened.
    pub kind: EventKind,
    /// Current value of the target control, for change events.
    pub value: Option<String>,
}

impl Event {
    /// A click event.
    #[must_use]
    pub fn click() -> Self {
        Self {
            kind: EventKind::Click,
            value: None,
        }
    }

    /// A change event carrying the control's new value.
    #[must_use]
    pub fn change(value: impl Into<String>) -> Self {
        Self {
            kind: EventKind::Change,
            value: Some(value.into()),
        }
    }
}

/// Shared event handler.
#[derive(Clone)]
pub struct Callback(Arc<dyn Fn(&Event) + Send + Sync>);

impl Callback {
    /// Wrap a closure.
    pub fn new(f: impl Fn(&Event) + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    /// Invoke the handler.
    pub fn call(&self, event: &Event) {
        (self.0)(event);
    }
}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Callback(..)")
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Attributes
// ─────────────────────────────────────────────────────────────────────────────

/// Ordered attribute map.
///
/// A `None` value is a key that is present but unset; it is kept so callers
/// can tell "not given" from "given as null", and is omitted from HTML.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attrs {
    entries: Vec<(String, Option<String>)>,
}

impl Attrs {
    /// Empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace `key`, keeping its original position on replace.
    pub fn insert(&mut self, key: impl Into<String>, value: Option<String>) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Insert a present value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.insert(key, Some(value.into()));
    }

    /// Insert a boolean attribute when `on`, remove it otherwise.
    pub fn flag(&mut self, key: &str, on: bool) {
        if on {
            self.set(key, "");
        } else {
            self.remove(key);
        }
    }

    /// Remove `key`, returning its entry if it was present.
    pub fn remove(&mut self, key: &str) -> Option<Option<String>> {
        let pos = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(pos).1)
    }

    /// Whether `key` is present, even with a `None` value.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Value of `key` when present and set.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .and_then(|(_, v)| v.as_deref())
    }

    /// Copy every entry of `other` over this map.
    pub fn merge(&mut self, other: &Attrs) {
        for (key, value) in &other.entries {
            self.insert(key.clone(), value.clone());
        }
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_deref()))
    }

}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attrs {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Self::new();
        for (k, v) in iter {
            attrs.set(k, v);
        }
        attrs
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tree
// ─────────────────────────────────────────────────────────────────────────────

/// A node of the presentation tree.
#[derive(Debug, Clone)]
pub enum Node {
    /// Plain text, escaped on output.
    Text(String),
    /// Nested element.
    Element(Element),
}

impl Node {
    /// Serialize to HTML.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    /// Concatenated text of this node and its descendants.
    #[must_use]
    pub fn text_content(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Element(el) => el.text_content(),
        }
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Self::Text(text) => escape_into(out, text, false),
            Self::Element(el) => el.write_html(out),
        }
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Self::Element(el)
    }
}

/// An element with attributes, listeners and children.
#[derive(Debug, Clone)]
pub struct Element {
    tag: String,
    attrs: Attrs,
    listeners: Vec<(EventKind, Callback)>,
    children: Vec<Node>,
}

impl Element {
    /// New element with no attributes or children.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Attrs::new(),
            listeners: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Set an attribute.
    #[must_use]
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.set(key, value);
        self
    }

    /// Set an attribute when `value` is `Some`.
    #[must_use]
    pub fn attr_opt(mut self, key: &str, value: Option<&str>) -> Self {
        if let Some(value) = value {
            self.attrs.set(key, value);
        }
        self
    }

    /// Set or clear a boolean attribute.
    #[must_use]
    pub fn flag(mut self, key: &str, on: bool) -> Self {
        self.attrs.flag(key, on);
        self
    }

    /// Overlay a whole attribute map; its entries win over existing ones.
    #[must_use]
    pub fn attrs(mut self, attrs: &Attrs) -> Self {
        self.attrs.merge(attrs);
        self
    }

    /// Set the `class` attribute, skipping empty class strings.
    #[must_use]
    pub fn class(self, classes: impl Into<String>) -> Self {
        let classes = classes.into();
        if classes.is_empty() {
            self
        } else {
            self.attr("class", classes)
        }
    }

    /// Register a listener.
    #[must_use]
    pub fn on(mut self, kind: EventKind, handler: Callback) -> Self {
        self.listeners.push((kind, handler));
        self
    }

    /// Register a listener when one is given.
    #[must_use]
    pub fn on_opt(self, kind: EventKind, handler: Option<&Callback>) -> Self {
        match handler {
            Some(handler) => self.on(kind, handler.clone()),
            None => self,
        }
    }

    /// Append a child.
    #[must_use]
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Append a child when one is given.
    #[must_use]
    pub fn child_opt(self, child: Option<impl Into<Node>>) -> Self {
        match child {
            Some(child) => self.child(child),
            None => self,
        }
    }

    /// Append several children.
    #[must_use]
    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    /// Tag name.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Value of an attribute when present and set.
    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attrs.get(key)
    }

    /// Whether an attribute key is present.
    pub fn has_attr(&self, key: &str) -> bool {
        self.attrs.contains_key(key)
    }

    /// Class tokens of this element.
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.get_attr("class").unwrap_or_default().split_whitespace()
    }

    /// Whether this element carries `token` in its class list.
    pub fn has_class(&self, token: &str) -> bool {
        self.classes().any(|c| c == token)
    }

    /// Child elements, skipping text.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|n| match n {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        })
    }

    /// First element in depth-first order (self included) matching `pred`.
    pub fn find(&self, pred: &dyn Fn(&Element) -> bool) -> Option<&Element> {
        if pred(self) {
            return Some(self);
        }
        self.child_elements().find_map(|el| el.find(pred))
    }

    /// Every element in depth-first order (self included) matching `pred`.
    pub fn find_all(&self, pred: &dyn Fn(&Element) -> bool) -> Vec<&Element> {
        let mut found = Vec::new();
        self.collect(pred, &mut found);
        found
    }

    /// First element with the given tag.
    pub fn find_by_tag(&self, tag: &str) -> Option<&Element> {
        self.find(&|el: &Element| el.tag == tag)
    }

    /// First element carrying the class token.
    pub fn find_by_class(&self, token: &str) -> Option<&Element> {
        self.find(&|el: &Element| el.has_class(token))
    }

    /// Invoke the listeners registered for `event.kind`, in order.
    ///
    /// Returns how many handlers ran.
    pub fn dispatch(&self, event: &Event) -> usize {
        let mut ran = 0;
        for (kind, handler) in &self.listeners {
            if *kind == event.kind {
                handler.call(event);
                ran += 1;
            }
        }
        ran
    }

    /// Number of listeners for `kind`.
    pub fn listener_count(&self, kind: EventKind) -> usize {
        self.listeners.iter().filter(|(k, _)| *k == kind).count()
    }

    /// Concatenated descendant text.
    #[must_use]
    pub fn text_content(&self) -> String {
        self.children.iter().map(Node::text_content).collect()
    }

    /// Serialize to HTML.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn collect<'a>(&'a self, pred: &dyn Fn(&Element) -> bool, found: &mut Vec<&'a Element>) {
        if pred(self) {
            found.push(self);
        }
        for el in self.child_elements() {
            el.collect(pred, found);
        }
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        for (key, value) in self.attrs.iter() {
            let Some(value) = value else { continue };
            if !is_valid_attr_name(key) {
                tracing::warn!(
                    name: "dom.attr.invalid",
                    tag = %self.tag,
                    attr = key,
                    "Skipping attribute with invalid name"
                );
                continue;
            }
            // Uncontrolled inputs carry their initial value as `value` in markup.
            let name = if key == "defaultValue" { "value" } else { key };
            out.push(' ');
            out.push_str(name);
            if value.is_empty() && BOOLEAN_ATTRIBUTES.contains(&name) {
                continue;
            }
            out.push_str("=\"");
            escape_into(out, value, true);
            out.push('"');
        }
        out.push('>');

        if VOID_ELEMENTS.contains(&self.tag.as_str()) {
            return;
        }
        for child in &self.children {
            child.write_html(out);
        }
        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
    }
}

/// Whether `name` can be written as an attribute name without changing the
/// surrounding markup.
fn is_valid_attr_name(name: &str) -> bool {
    !name.is_empty()
        && !name.chars().any(|c| {
            c.is_whitespace() || c.is_control() || matches!(c, '"' | '\'' | '>' | '<' | '/' | '=')
        })
}

/// Append `text` to `out` with HTML escaping.
fn escape_into(out: &mut String, text: &str, attribute: bool) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if attribute => out.push_str("&quot;"),
            '\'' if attribute => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
}

/// Escape text for inclusion in HTML built outside the tree.
#[must_use]
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    escape_into(&mut out, text, true);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_html_serialization() {
        let el = Element::new("div")
            .class("a b")
            .child(Element::new("input").attr("name", "q").flag("disabled", true))
            .child("x < y");
        assert_eq!(
            el.to_html(),
            r#"<div class="a b"><input name="q" disabled>x &lt; y</div>"#
        );
    }

    #[test]
    fn test_unset_attributes_are_omitted() {
        let mut attrs = Attrs::new();
        attrs.insert("value", None);
        attrs.set("placeholder", "say \"hi\"");
        let html = Element::new("input").attrs(&attrs).to_html();
        assert_eq!(html, r#"<input placeholder="say &quot;hi&quot;">"#);
    }

    #[test]
    fn test_empty_non_boolean_attribute_keeps_value() {
        let html = Element::new("input").attr("value", "").to_html();
        assert_eq!(html, r#"<input value="">"#);
    }

    #[test]
    fn test_default_value_serializes_as_value() {
        let html = Element::new("input").attr("defaultValue", "x").to_html();
        assert_eq!(html, r#"<input value="x">"#);
    }

    #[test]
    fn test_attrs_insert_replaces_in_place() {
        let mut attrs: Attrs = [("a", "1"), ("b", "2")].into_iter().collect();
        attrs.set("a", "3");
        let keys: Vec<_> = attrs.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["a", "b"]);
        assert_eq!(attrs.get("a"), Some("3"));
        assert_eq!(attrs.remove("b"), Some(Some("2".to_string())));
        assert!(!attrs.contains_key("b"));
    }

    #[test]
    fn test_dispatch_runs_matching_listeners_only() {
        let clicks = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&clicks);
        let el = Element::new("button").on(
            EventKind::Click,
            Callback::new(move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
            }),
        );

        assert_eq!(el.listener_count(EventKind::Click), 1);
        assert_eq!(el.listener_count(EventKind::Change), 0);
        assert_eq!(el.dispatch(&Event::click()), 1);
        assert_eq!(el.dispatch(&Event::change("v")), 0);
        assert_eq!(clicks.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_attribute_values_escape_both_quotes() {
        let html = Element::new("input").attr("title", r#"it's "x""#).to_html();
        assert_eq!(html, r#"<input title="it&#x27;s &quot;x&quot;">"#);
        assert_eq!(escape("<a href='x'>"), "&lt;a href=&#x27;x&#x27;&gt;");
    }

    #[test]
    fn test_invalid_attribute_names_are_skipped() {
        let html = Element::new("input")
            .attr("x onfocus=\"alert(1)\" y", "v")
            .attr("a/b", "1")
            .attr("", "2")
            .attr("data-ok", "3")
            .to_html();
        assert_eq!(html, r#"<input data-ok="3">"#);
        assert!(is_valid_attr_name("aria-label"));
        assert!(is_valid_attr_name("defaultValue"));
        assert!(!is_valid_attr_name("x y"));
    }

    #[test]
    fn test_find_helpers() {
        let el = Element::new("div")
            .child(Element::new("span").class("a"))
            .child(Element::new("span").class("b"));
        assert_eq!(el.find_by_class("b").map(Element::tag), Some("span"));
        assert_eq!(el.find_all(&|e: &Element| e.tag() == "span").len(), 2);
        assert!(el.find_by_tag("input").is_none());
    }
}
