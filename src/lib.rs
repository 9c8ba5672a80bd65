//! axtlive-ui
//!
//! Presentational Button, Input and Icon components that render into a
//! plain element tree, plus a story catalog served over HTTP.
//!
//! # Architecture
//!
//! - **Components**: Pure functions from props to an element tree
//! - **Icons**: Glyphs resolved through a pluggable adapter, inline SVG by default
//! - **Catalog**: Named example invocations grouped per component
//! - **Server**: Axum service rendering catalog pages as HTML
//!
//! # Modules
//!
//! - [`ui`]: Class composition, element tree, icons and components
//! - [`catalog`]: Story registry and catalog pages
//! - [`config`]: Layered CLI, file and environment configuration
//! - [`server`]: HTTP routes for the catalog
//! - [`error`]: Error types

// Allow pedantic clippy warnings that don't add value for this codebase
#![allow(clippy::missing_fields_in_debug)]
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]

pub mod catalog;
pub mod config;
pub mod error;
pub mod server;
pub mod ui;
