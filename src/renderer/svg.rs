//! SVG generation from a scene

use crate::scene::{BoundingBox, Paint, Point, Primitive, Scene};

use super::SvgConfig;

/// Build SVG elements incrementally
pub struct SvgBuilder {
    config: SvgConfig,
    elements: Vec<String>,
}

impl SvgBuilder {
    /// Create a new SVG builder
    pub fn new(config: SvgConfig) -> Self {
        Self {
            config,
            elements: vec![],
        }
    }

    fn class(&self, name: &str) -> String {
        format!("{}{}", self.config.class_prefix, name)
    }

    fn indent_str(&self) -> &str {
        if self.config.pretty_print {
            "  "
        } else {
            ""
        }
    }

    fn newline(&self) -> &str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    /// Add a plain filled rectangle
    pub fn add_rect(&mut self, class: &str, bounds: &BoundingBox, fill: &str) {
        self.elements.push(format!(
            r#"{}<rect class="{}" x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
            self.indent_str(),
            self.class(class),
            bounds.x,
            bounds.y,
            bounds.width,
            bounds.height,
            escape_xml(fill)
        ));
    }

    /// Add a rounded rectangle, filled or stroked
    pub fn add_rounded_rect(
        &mut self,
        class: &str,
        bounds: &BoundingBox,
        radius: f64,
        paint: &Paint,
    ) {
        let paint_attrs = match paint {
            Paint::Fill(color) => format!(r#" fill="{}""#, escape_xml(color)),
            Paint::Stroke { color, width } => format!(
                r#" fill="none" stroke="{}" stroke-width="{}""#,
                escape_xml(color),
                width
            ),
        };

        self.elements.push(format!(
            r#"{}<rect class="{}" x="{}" y="{}" width="{}" height="{}" rx="{}"{}/>"#,
            self.indent_str(),
            self.class(class),
            bounds.x,
            bounds.y,
            bounds.width,
            bounds.height,
            radius,
            paint_attrs
        ));
    }

    /// Add a circle element
    pub fn add_circle(&mut self, class: &str, center: Point, r: f64, fill: &str) {
        self.elements.push(format!(
            r#"{}<circle class="{}" cx="{}" cy="{}" r="{}" fill="{}"/>"#,
            self.indent_str(),
            self.class(class),
            center.x,
            center.y,
            r,
            escape_xml(fill)
        ));
    }

    /// Add an embedded image, cropped to cover its box
    pub fn add_image(&mut self, class: &str, bounds: &BoundingBox, href: &str) {
        self.elements.push(format!(
            r#"{}<image class="{}" href="{}" x="{}" y="{}" width="{}" height="{}" preserveAspectRatio="xMidYMid slice"/>"#,
            self.indent_str(),
            self.class(class),
            escape_xml(href),
            bounds.x,
            bounds.y,
            bounds.width,
            bounds.height
        ));
    }

    /// Add bold sans-serif text centered on `anchor`
    pub fn add_text(
        &mut self,
        class: &str,
        anchor: Point,
        text: &str,
        font_size: f64,
        fill: &str,
    ) {
        self.elements.push(format!(
            r#"{}<text class="{}" x="{}" y="{}" font-family="sans-serif" font-weight="bold" font-size="{}px" fill="{}" text-anchor="middle" dominant-baseline="central">{}</text>"#,
            self.indent_str(),
            self.class(class),
            anchor.x,
            anchor.y,
            font_size,
            escape_xml(fill),
            escape_xml(text)
        ));
    }

    /// Build the final SVG string for a `size` x `size` canvas
    pub fn build(self, size: u32) -> String {
        let nl = self.newline();

        let mut svg = String::new();

        if self.config.standalone {
            svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
            svg.push_str(nl);
        }

        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {size} {size}" width="{size}" height="{size}">"#
        ));
        svg.push_str(nl);

        for elem in &self.elements {
            svg.push_str(elem);
            svg.push_str(nl);
        }

        svg.push_str("</svg>");

        svg
    }
}

/// Render a scene to an SVG string
pub fn render_svg(scene: &Scene, config: &SvgConfig) -> String {
    let mut builder = SvgBuilder::new(config.clone());

    for primitive in scene.primitives() {
        render_primitive(primitive, &mut builder);
    }

    builder.build(scene.size())
}

fn render_primitive(primitive: &Primitive, builder: &mut SvgBuilder) {
    match primitive {
        Primitive::Rect { bounds, fill } => builder.add_rect("background", bounds, fill),
        Primitive::RoundedRect {
            bounds,
            radius,
            paint,
        } => {
            let class = match paint {
                Paint::Stroke { .. } => "finder-ring",
                Paint::Fill(_) => "finder-dot",
            };
            builder.add_rounded_rect(class, bounds, *radius, paint);
        }
        Primitive::Circle {
            center,
            radius,
            fill,
        } => builder.add_circle("dot", *center, *radius, fill),
        Primitive::Image { bounds, href } => builder.add_image("logo", bounds, href),
        Primitive::Text {
            anchor,
            content,
            font_size,
            fill,
        } => builder.add_text("brand", *anchor, content, *font_size, fill),
    }
}

/// Escape special XML characters
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
