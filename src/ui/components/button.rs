//! Button component with variants and sizes.

use crate::ui::class_names::ClassNames;
use crate::ui::dom::{Callback, Element, Event, EventKind, Node};
use crate::ui::icons::{Glyph, IconAdapter};

use super::icon::{IconProps, icon};

/// Button visual variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Primary action button.
    Primary,
    /// Destructive action button.
    Danger,
    /// Link-style button.
    Link,
    /// Neutral button.
    #[default]
    Default,
}

impl ButtonVariant {
    /// Get the CSS class for this variant.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Primary => "btn-primary",
            Self::Danger => "btn-danger",
            Self::Link => "btn-link",
            Self::Default => "btn-default",
        }
    }
}

/// Button size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonSize {
    /// Large button.
    Lg,
    /// Small button.
    Sm,
}

impl ButtonSize {
    /// Get the CSS class for this size.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Lg => "btn-lg",
            Self::Sm => "btn-sm",
        }
    }
}

/// Button props.
#[derive(Debug, Clone, Default)]
pub struct ButtonProps {
    /// Button variant.
    pub variant: ButtonVariant,
    /// Button size, none for the default size.
    pub size: Option<ButtonSize>,
    /// Whether the button is disabled.
    pub disabled: bool,
    /// Glyph shown before the content.
    pub icon: Option<Glyph>,
    /// Link target; renders an anchor instead of a button.
    pub href: Option<String>,
    /// Anchor `target` attribute.
    pub target: Option<String>,
    /// Additional CSS classes.
    pub class: Option<String>,
    /// Click handler.
    pub on_click: Option<Callback>,
    /// Button content.
    pub children: Vec<Node>,
}

impl ButtonProps {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    #[must_use]
    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = Some(size);
        self
    }

    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    #[must_use]
    pub fn icon(mut self, glyph: impl Into<Glyph>) -> Self {
        self.icon = Some(glyph.into());
        self
    }

    #[must_use]
    pub fn href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    #[must_use]
    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    #[must_use]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    #[must_use]
    pub fn on_click(mut self, handler: impl Fn(&Event) + Send + Sync + 'static) -> Self {
        self.on_click = Some(Callback::new(handler));
        self
    }

    #[must_use]
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Whether this renders as an anchor.
    pub fn is_link(&self) -> bool {
        self.href.is_some()
    }

    /// Classes derived from variant, size and state.
    pub fn classes(&self) -> String {
        ClassNames::new("axtlive-btn")
            .add(self.variant.class())
            .add_opt(self.size.map(ButtonSize::class))
            // Anchors have no native disabled flag.
            .add_if("disabled", self.is_link() && self.disabled)
            .add_opt(self.class.as_deref())
            .build()
    }
}

/// Button, or anchor when `href` is set.
///
/// # Example
///
/// ```rust
/// use axtlive_ui::ui::components::{ButtonProps, ButtonVariant, button};
/// use axtlive_ui::ui::icons::SvgIconSet;
///
/// let el = button(
///     &ButtonProps::new().variant(ButtonVariant::Primary).child("Click me"),
///     &SvgIconSet,
/// );
/// assert_eq!(el.tag(), "button");
/// ```
pub fn button(props: &ButtonProps, icons: &dyn IconAdapter) -> Element {
    let click = if props.disabled {
        None
    } else {
        props.on_click.as_ref()
    };

    let el = match &props.href {
        Some(href) => Element::new("a")
            .class(props.classes())
            .attr("href", href.as_str())
            .attr_opt("target", props.target.as_deref()),
        None => Element::new("button")
            .attr("type", "button")
            .class(props.classes())
            .flag("disabled", props.disabled),
    };

    let glyph = props.icon.as_ref().map(|glyph| {
        Element::new("span")
            .class("btn-icon")
            .child(icon(&IconProps::new(glyph.clone()), icons))
    });

    el.on_opt(EventKind::Click, click)
        .child_opt(glyph)
        .children(props.children.iter().cloned())
}
