//! Core types for the scene: points, boxes, and drawable primitives

use super::geometry::Geometry;

/// A 2D point in pixel space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned box in pixel space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Square of edge `edge` centered on `center`
    pub fn centered_square(center: Point, edge: f64) -> Self {
        Self::new(center.x - edge / 2.0, center.y - edge / 2.0, edge, edge)
    }

    /// Right edge x-coordinate
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge y-coordinate
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Center point of the bounding box
    pub fn center(&self) -> Point {
        Point {
            x: self.x + self.width / 2.0,
            y: self.y + self.height / 2.0,
        }
    }

    /// Check if this bounding box contains a point
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.right()
            && point.y >= self.y
            && point.y <= self.bottom()
    }

    /// Grow (or shrink, for negative `by`) on every side
    pub fn inflate(&self, by: f64) -> BoundingBox {
        BoundingBox::new(
            self.x - by,
            self.y - by,
            self.width + 2.0 * by,
            self.height + 2.0 * by,
        )
    }
}

/// How a closed shape is painted
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Fill(String),
    /// Unfilled outline centered on the shape's border
    Stroke { color: String, width: f64 },
}

/// One drawable element, in paint order
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// Plain rectangle; only used for the canvas background
    Rect { bounds: BoundingBox, fill: String },
    /// Rounded rectangle; finder rings and finder dots
    RoundedRect {
        bounds: BoundingBox,
        radius: f64,
        paint: Paint,
    },
    /// Data module dot
    Circle {
        center: Point,
        radius: f64,
        fill: String,
    },
    /// Embedded logo, cropped to fill its box
    Image { bounds: BoundingBox, href: String },
    /// Bold brand text centered on `anchor`
    Text {
        anchor: Point,
        content: String,
        font_size: f64,
        fill: String,
    },
}

impl Primitive {
    /// Painted extent. Stroke width is included; text reports its anchor only.
    pub fn extent(&self) -> BoundingBox {
        match self {
            Primitive::Rect { bounds, .. } | Primitive::Image { bounds, .. } => *bounds,
            Primitive::RoundedRect { bounds, paint, .. } => match paint {
                Paint::Fill(_) => *bounds,
                Paint::Stroke { width, .. } => bounds.inflate(width / 2.0),
            },
            Primitive::Circle { center, radius, .. } => {
                BoundingBox::centered_square(*center, radius * 2.0)
            }
            Primitive::Text { anchor, .. } => BoundingBox::new(anchor.x, anchor.y, 0.0, 0.0),
        }
    }

    pub fn is_dot(&self) -> bool {
        matches!(self, Primitive::Circle { .. })
    }

    pub fn is_overlay(&self) -> bool {
        matches!(self, Primitive::Image { .. } | Primitive::Text { .. })
    }
}

/// Ordered primitives for one QR image: background, finders, dots, overlay
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub geometry: Geometry,
    pub size: u32,
    pub primitives: Vec<Primitive>,
}

impl Scene {
    /// Output edge length in pixels
    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    /// Number of data dots emitted
    pub fn count_dots(&self) -> usize {
        self.primitives.iter().filter(|p| p.is_dot()).count()
    }

    /// The overlay primitive, if one was drawn
    pub fn overlay(&self) -> Option<&Primitive> {
        self.primitives.iter().find(|p| p.is_overlay())
    }
}
