//! Scene construction for styled QR codes
//!
//! This module takes a finished module grid and a render configuration and
//! computes an ordered list of typed primitives in pixel space. Turning the
//! primitives into markup is the renderer's job.

pub mod engine;
pub mod geometry;
pub mod types;

pub use engine::{build_scene, truncate_brand};
pub use geometry::Geometry;
pub use types::*;
