//! UI components and the presentation tree they render into.
//!
//! # Structure
//!
//! - [`class_names`]: Conditional CSS class composition
//! - [`dom`]: Presentation element tree, events and HTML serialization
//! - [`icons`]: Glyph references and the icon adapter
//! - [`components`]: Button, Input and Icon components

pub mod class_names;
pub mod components;
pub mod dom;
pub mod icons;
