//! Icon glyphs and the adapter that renders them.
//!
//! Components never draw glyphs themselves; they hand a [`Glyph`] and a
//! title to an [`IconAdapter`]. [`SvgIconSet`] is the built-in adapter and
//! renders inline SVG for optimal performance and styling flexibility.

use std::fmt;

use super::dom::{Element, Node};

/// Common icon size class.
const ICON_SIZE: &str = "h-4 w-4";

/// Opaque icon identifier, resolved by an [`IconAdapter`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Glyph(String);

impl Glyph {
    /// Wrap a glyph name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The glyph name.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Accessible title used by components, `title-<glyph>`.
    #[must_use]
    pub fn title(&self) -> String {
        format!("title-{}", self.0)
    }
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Glyph {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Glyph {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// Renders a glyph into a presentation element.
///
/// Unknown glyphs are the adapter's concern; components pass references
/// through untouched.
pub trait IconAdapter: Send + Sync {
    /// Render `glyph` with an accessible `title`.
    fn render(&self, glyph: &Glyph, title: &str) -> Element;
}

/// One SVG primitive: tag plus attributes.
type Shape = (&'static str, &'static [(&'static str, &'static str)]);

/// Built-in glyphs, 24x24 stroke icons.
const GLYPHS: &[(&str, &[Shape])] = &[
    (
        "search",
        &[
            ("circle", &[("cx", "11"), ("cy", "11"), ("r", "8")]),
            ("line", &[("x1", "21"), ("y1", "21"), ("x2", "16.65"), ("y2", "16.65")]),
        ],
    ),
    (
        "send",
        &[
            ("line", &[("x1", "22"), ("y1", "2"), ("x2", "11"), ("y2", "13")]),
            ("polygon", &[("points", "22 2 15 22 11 13 2 9 22 2")]),
        ],
    ),
    ("spinner", &[("path", &[("d", "M21 12a9 9 0 1 1-6.219-8.56")])]),
    (
        "copy",
        &[
            (
                "rect",
                &[("x", "9"), ("y", "9"), ("width", "13"), ("height", "13"), ("rx", "2"), ("ry", "2")],
            ),
            ("path", &[("d", "M5 15H4a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2h9a2 2 0 0 1 2 2v1")]),
        ],
    ),
    ("check", &[("polyline", &[("points", "20 6 9 17 4 12")])]),
    (
        "times",
        &[
            ("line", &[("x1", "18"), ("y1", "6"), ("x2", "6"), ("y2", "18")]),
            ("line", &[("x1", "6"), ("y1", "6"), ("x2", "18"), ("y2", "18")]),
        ],
    ),
    (
        "bars",
        &[
            ("line", &[("x1", "3"), ("y1", "12"), ("x2", "21"), ("y2", "12")]),
            ("line", &[("x1", "3"), ("y1", "6"), ("x2", "21"), ("y2", "6")]),
            ("line", &[("x1", "3"), ("y1", "18"), ("x2", "21"), ("y2", "18")]),
        ],
    ),
    (
        "user",
        &[
            ("path", &[("d", "M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2")]),
            ("circle", &[("cx", "12"), ("cy", "7"), ("r", "4")]),
        ],
    ),
    ("angle-down", &[("polyline", &[("points", "6 9 12 15 18 9")])]),
    (
        "envelope",
        &[
            ("rect", &[("x", "2"), ("y", "4"), ("width", "20"), ("height", "16"), ("rx", "2")]),
            ("path", &[("d", "m22 7-10 5L2 7")]),
        ],
    ),
];

/// Inline SVG implementation of [`IconAdapter`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SvgIconSet;

impl SvgIconSet {
    /// Whether the set has a drawing for `glyph`.
    pub fn contains(&self, glyph: &Glyph) -> bool {
        Self::shapes(glyph).is_some()
    }

    /// Names of every built-in glyph.
    pub fn glyph_names(&self) -> impl Iterator<Item = &'static str> {
        GLYPHS.iter().map(|(name, _)| *name)
    }

    fn shapes(glyph: &Glyph) -> Option<&'static [Shape]> {
        GLYPHS
            .iter()
            .find(|(name, _)| *name == glyph.as_str())
            .map(|(_, shapes)| *shapes)
    }
}

impl IconAdapter for SvgIconSet {
    fn render(&self, glyph: &Glyph, title: &str) -> Element {
        let svg = Element::new("svg")
            .attr("xmlns", "http://www.w3.org/2000/svg")
            .attr("viewBox", "0 0 24 24")
            .attr("fill", "none")
            .attr("stroke", "currentColor")
            .attr("stroke-width", "2")
            .attr("stroke-linecap", "round")
            .attr("stroke-linejoin", "round")
            .attr("role", "img")
            .attr("data-icon", glyph.as_str())
            .class(ICON_SIZE)
            .child(Element::new("title").child(title));

        let Some(shapes) = Self::shapes(glyph) else {
            tracing::warn!(
                name: "icon.glyph.unknown",
                glyph = %glyph,
                "Unknown icon glyph; rendering empty SVG"
            );
            return svg;
        };

        svg.children(shapes.iter().map(|(tag, attrs)| {
            Node::from(
                attrs
                    .iter()
                    .fold(Element::new(*tag), |el, (k, v)| el.attr(*k, *v)),
            )
        }))
    }
}
