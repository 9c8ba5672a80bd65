//! Icon component with theme colors.

use crate::ui::class_names::ClassNames;
use crate::ui::dom::Element;
use crate::ui::icons::{Glyph, IconAdapter};

/// Icon color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconTheme {
    Primary,
    Secondary,
    Success,
    Info,
    Warning,
    Danger,
    Light,
    Dark,
}

impl IconTheme {
    /// Get the CSS class for this theme.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Primary => "icon-primary",
            Self::Secondary => "icon-secondary",
            Self::Success => "icon-success",
            Self::Info => "icon-info",
            Self::Warning => "icon-warning",
            Self::Danger => "icon-danger",
            Self::Light => "icon-light",
            Self::Dark => "icon-dark",
        }
    }
}

/// Icon props.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconProps {
    /// Glyph to draw.
    pub glyph: Glyph,
    /// Optional color theme.
    pub theme: Option<IconTheme>,
    /// Accessible title, `title-<glyph>` when unset.
    pub title: Option<String>,
    /// Additional CSS classes.
    pub class: Option<String>,
}

impl IconProps {
    pub fn new(glyph: impl Into<Glyph>) -> Self {
        Self {
            glyph: glyph.into(),
            theme: None,
            title: None,
            class: None,
        }
    }

    #[must_use]
    pub fn theme(mut self, theme: IconTheme) -> Self {
        self.theme = Some(theme);
        self
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }
}

/// Render an icon through `icons`, adding `axtlive-icon` and theme classes
/// to whatever the adapter produced.
///
/// # Example
///
/// ```rust
/// use axtlive_ui::ui::components::{IconProps, IconTheme, icon};
/// use axtlive_ui::ui::icons::SvgIconSet;
///
/// let el = icon(&IconProps::new("check").theme(IconTheme::Success), &SvgIconSet);
/// assert!(el.has_class("icon-success"));
/// ```
pub fn icon(props: &IconProps, icons: &dyn IconAdapter) -> Element {
    let title = props
        .title
        .clone()
        .unwrap_or_else(|| props.glyph.title());
    let el = icons.render(&props.glyph, &title);

    let classes = ClassNames::new("axtlive-icon")
        .add_opt(el.get_attr("class"))
        .add_opt(props.class.as_deref())
        .add_opt(props.theme.map(IconTheme::class))
        .build();

    el.class(classes)
}
