//! SVG renderer for generating output from a scene
//!
//! This module takes a `Scene` and produces a self-contained SVG string
//! with prefixed CSS classes on every element.

pub mod config;
pub mod svg;

pub use config::SvgConfig;
pub use svg::{render_svg, SvgBuilder};
