//! Builds the ordered primitive list for a module grid
//!
//! Paint order is fixed: background, the three finder patterns, the data
//! dots in row-major order, then at most one overlay.

use crate::config::{Overlay, RenderConfig, MAX_BRAND_CHARS};
use crate::matrix::ModuleGrid;

use super::geometry::{
    Geometry, BRAND_FONT_SIZE, DOT_RADIUS, FINDER_DOT_RADIUS, FINDER_INNER_OFFSET,
    FINDER_INNER_SIZE, FINDER_RING_RADIUS, FINDER_SIZE, OVERLAY_MODULES,
};
use super::types::{BoundingBox, Paint, Primitive, Scene};

/// Compute the full scene for `grid` styled by `config`
pub fn build_scene(grid: &ModuleGrid, config: &RenderConfig) -> Scene {
    let geometry = Geometry::new(grid.size(), config.size, config.overlay.is_some());
    tracing::debug!(
        grid_size = grid.size(),
        module_size = geometry.module_size(),
        overlay = config.overlay.is_some(),
        "computed QR geometry"
    );

    let mut primitives = Vec::with_capacity(grid.size() * grid.size() / 2 + 8);
    primitives.push(background(config));
    push_finder_patterns(&geometry, config, &mut primitives);
    push_dots(grid, &geometry, config, &mut primitives);
    if let Some(overlay) = overlay_primitive(&geometry, config) {
        primitives.push(overlay);
    }

    tracing::trace!(primitives = primitives.len(), "built QR scene");

    Scene {
        geometry,
        size: config.size,
        primitives,
    }
}

fn background(config: &RenderConfig) -> Primitive {
    let size = config.size as f64;
    Primitive::Rect {
        bounds: BoundingBox::new(0.0, 0.0, size, size),
        fill: config.background.clone(),
    }
}

/// Ring + dot for each finder; the ring stroke is centered on the 7x7 border
fn push_finder_patterns(geometry: &Geometry, config: &RenderConfig, out: &mut Vec<Primitive>) {
    let m = geometry.module_size();
    let outer = FINDER_SIZE as f64 * m;
    let inner = FINDER_INNER_SIZE as f64 * m;

    for (x_pos, y_pos) in geometry.finder_origins() {
        let x = geometry.to_pixel(x_pos);
        let y = geometry.to_pixel(y_pos);

        out.push(Primitive::RoundedRect {
            bounds: BoundingBox::new(x, y, outer, outer).inflate(-m / 2.0),
            radius: outer * FINDER_RING_RADIUS,
            paint: Paint::Stroke {
                color: config.foreground.clone(),
                width: m,
            },
        });

        let offset = FINDER_INNER_OFFSET as f64 * m;
        out.push(Primitive::RoundedRect {
            bounds: BoundingBox::new(x + offset, y + offset, inner, inner),
            radius: inner * FINDER_DOT_RADIUS,
            paint: Paint::Fill(config.foreground.clone()),
        });
    }
}

fn push_dots(
    grid: &ModuleGrid,
    geometry: &Geometry,
    config: &RenderConfig,
    out: &mut Vec<Primitive>,
) {
    let radius = geometry.module_size() * DOT_RADIUS;
    let n = grid.size();

    for row in 0..n {
        for col in 0..n {
            if !grid.is_dark(row as i64, col as i64)
                || geometry.is_finder_pattern(row, col)
                || geometry.is_center_cutout(row, col)
            {
                continue;
            }
            out.push(Primitive::Circle {
                center: geometry.module_center(row, col),
                radius,
                fill: config.foreground.clone(),
            });
        }
    }
}

fn overlay_primitive(geometry: &Geometry, config: &RenderConfig) -> Option<Primitive> {
    match &config.overlay {
        Overlay::None => None,
        Overlay::Logo(href) => Some(Primitive::Image {
            bounds: geometry.overlay_box(),
            href: href.clone(),
        }),
        Overlay::Text(name) => {
            let space = OVERLAY_MODULES * geometry.module_size();
            Some(Primitive::Text {
                anchor: geometry.canvas_center(),
                content: truncate_brand(name),
                font_size: space * BRAND_FONT_SIZE,
                fill: config.foreground.clone(),
            })
        }
    }
}

/// First `MAX_BRAND_CHARS` characters of `name`, with no ellipsis
pub fn truncate_brand(name: &str) -> String {
    match name.char_indices().nth(MAX_BRAND_CHARS) {
        Some((cut, _)) => {
            tracing::warn!(
                chars = name.chars().count(),
                max = MAX_BRAND_CHARS,
                "brand name truncated"
            );
            name[..cut].to_string()
        }
        None => name.to_string(),
    }
}
