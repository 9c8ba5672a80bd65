//! Presentational components.
//!
//! Each component is a plain function from props to an [`Element`] tree.
//! Glyphs are drawn through the [`IconAdapter`] passed in by the caller.
//!
//! # Components
//!
//! - [`button()`]: Button or link with variants and sizes
//! - [`input()`]: Text input with size, icon, prefix and suffix
//! - [`icon()`]: Themed icon wrapper
//!
//! [`Element`]: crate::ui::dom::Element
//! [`IconAdapter`]: crate::ui::icons::IconAdapter

mod button;
mod icon;
mod input;

pub use button::{ButtonProps, ButtonSize, ButtonVariant, button};
pub use icon::{IconProps, IconTheme, icon};
pub use input::{InputProps, InputSize, input};
