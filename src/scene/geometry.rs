//! Pixel geometry and grid predicates
//!
//! All coordinates in module space are `(row, col)` into the unshifted grid.
//! Pixel positions add the quiet zone before scaling by the module size.

use super::types::{BoundingBox, Point};

/// Blank modules on each side of the symbol
pub const QUIET_ZONE: usize = 4;

/// Finder pattern edge, in modules
pub const FINDER_SIZE: usize = 7;

/// Finder inner dot edge, in modules
pub const FINDER_INNER_SIZE: usize = 3;

/// Offset of the finder inner dot from the pattern origin, in modules
pub const FINDER_INNER_OFFSET: usize = 2;

/// Outer ring corner radius as a fraction of the ring edge
pub const FINDER_RING_RADIUS: f64 = 0.25;

/// Inner dot corner radius as a fraction of the dot edge
pub const FINDER_DOT_RADIUS: f64 = 0.5;

/// Data dot radius as a fraction of the module size
pub const DOT_RADIUS: f64 = 0.45;

/// Edge of the box reserved for the overlay, in modules
pub const OVERLAY_MODULES: f64 = 8.0;

/// Brand text font size as a fraction of the overlay box edge
pub const BRAND_FONT_SIZE: f64 = 0.35;

/// Derived layout of one grid on one canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    grid_size: usize,
    module_size: f64,
    has_cutout: bool,
}

impl Geometry {
    /// Derive geometry for an `grid_size`-module symbol on an `image_size` pixel canvas.
    ///
    /// `has_cutout` is true when an overlay is configured.
    pub fn new(grid_size: usize, image_size: u32, has_cutout: bool) -> Self {
        let module_size = image_size as f64 / (grid_size + 2 * QUIET_ZONE) as f64;
        Self {
            grid_size,
            module_size,
            has_cutout,
        }
    }

    /// Pixel edge of one module
    pub fn module_size(&self) -> f64 {
        self.module_size
    }

    /// Pixel coordinate of a module index's leading edge, quiet zone included
    pub fn to_pixel(&self, module: usize) -> f64 {
        (module + QUIET_ZONE) as f64 * self.module_size
    }

    /// Pixel center of a module
    pub fn module_center(&self, row: usize, col: usize) -> Point {
        let half = self.module_size / 2.0;
        Point::new(self.to_pixel(col) + half, self.to_pixel(row) + half)
    }

    /// True inside any of the three 7x7 corner finder regions
    pub fn is_finder_pattern(&self, row: usize, col: usize) -> bool {
        let n = self.grid_size;
        let near_start = |v: usize| v < FINDER_SIZE;
        let near_end = |v: usize| v + FINDER_SIZE >= n;
        (near_start(row) && near_start(col))
            || (near_start(row) && near_end(col))
            || (near_end(row) && near_start(col))
    }

    /// Inclusive module range of the center cutout along either axis
    pub fn cutout_range(&self) -> (i64, i64) {
        let mid = (self.grid_size / 2) as i64;
        (mid - 4, mid + 3)
    }

    /// True inside the centered cutout, and only when an overlay is configured
    pub fn is_center_cutout(&self, row: usize, col: usize) -> bool {
        if !self.has_cutout {
            return false;
        }
        let (start, end) = self.cutout_range();
        let (row, col) = (row as i64, col as i64);
        (start..=end).contains(&row) && (start..=end).contains(&col)
    }

    /// Module-space origins `(x, y)` of the top-left, top-right and bottom-left finders
    pub fn finder_origins(&self) -> [(usize, usize); 3] {
        let far = self.grid_size.saturating_sub(FINDER_SIZE);
        [(0, 0), (far, 0), (0, far)]
    }

    /// Center of the full quiet-zoned canvas
    pub fn canvas_center(&self) -> Point {
        let c = (self.grid_size + 2 * QUIET_ZONE) as f64 * self.module_size / 2.0;
        Point::new(c, c)
    }

    /// Box reserved for the logo or brand text
    pub fn overlay_box(&self) -> BoundingBox {
        BoundingBox::centered_square(self.canvas_center(), OVERLAY_MODULES * self.module_size)
    }

    /// Pixel box covered by the symbol itself, quiet zone excluded
    pub fn symbol_box(&self) -> BoundingBox {
        let origin = self.to_pixel(0);
        let edge = self.grid_size as f64 * self.module_size;
        BoundingBox::new(origin, origin, edge, edge)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_size_reserves_quiet_zone() {
        let g = Geometry::new(21, 290, false);
        assert_eq!(g.module_size(), 10.0);
        assert_eq!(g.to_pixel(0), 40.0);
        assert_eq!(g.module_center(0, 1), Point::new(55.0, 45.0));
    }

    #[test]
    fn test_finder_regions() {
        let g = Geometry::new(21, 290, false);
        assert!(g.is_finder_pattern(0, 0));
        assert!(g.is_finder_pattern(6, 6));
        assert!(!g.is_finder_pattern(7, 0));
        assert!(!g.is_finder_pattern(0, 7));

        assert!(g.is_finder_pattern(0, 14));
        assert!(g.is_finder_pattern(6, 20));
        assert!(!g.is_finder_pattern(0, 13));

        assert!(g.is_finder_pattern(14, 0));
        assert!(g.is_finder_pattern(20, 6));
        assert!(!g.is_finder_pattern(13, 0));

        // No finder in the bottom-right corner
        assert!(!g.is_finder_pattern(20, 20));
        assert!(!g.is_finder_pattern(14, 14));
    }

    #[test]
    fn test_finder_cell_count() {
        for n in [21, 25, 29, 57, 177] {
            let g = Geometry::new(n, 1024, false);
            let count = (0..n)
                .flat_map(|r| (0..n).map(move |c| (r, c)))
                .filter(|&(r, c)| g.is_finder_pattern(r, c))
                .count();
            assert_eq!(count, 49 * 3, "grid size {}", n);
        }
    }

    #[test]
    fn test_cutout_requires_overlay() {
        let g = Geometry::new(21, 290, false);
        assert!(!g.is_center_cutout(10, 10));

        let g = Geometry::new(21, 290, true);
        assert_eq!(g.cutout_range(), (6, 13));
        assert!(g.is_center_cutout(10, 10));
        assert!(g.is_center_cutout(6, 13));
        assert!(!g.is_center_cutout(5, 10));
        assert!(!g.is_center_cutout(10, 14));
    }

    #[test]
    fn test_cutout_disjoint_from_finders() {
        for n in (25..=177).step_by(4) {
            let g = Geometry::new(n, 1024, true);
            for r in 0..n {
                for c in 0..n {
                    assert!(
                        !(g.is_center_cutout(r, c) && g.is_finder_pattern(r, c)),
                        "overlap at ({}, {}) for n={}",
                        r,
                        c,
                        n
                    );
                }
            }
        }
    }

    #[test]
    fn test_version_one_cutout_touches_finder_corner() {
        // Only the inner corner module of the top-left finder is shared
        let g = Geometry::new(21, 1024, true);
        let shared: Vec<_> = (0..21)
            .flat_map(|r| (0..21).map(move |c| (r, c)))
            .filter(|&(r, c)| g.is_center_cutout(r, c) && g.is_finder_pattern(r, c))
            .collect();
        assert_eq!(shared, vec![(6, 6)]);
    }

    #[test]
    fn test_finder_origins() {
        let g = Geometry::new(25, 1024, false);
        assert_eq!(g.finder_origins(), [(0, 0), (18, 0), (0, 18)]);
    }

    #[test]
    fn test_overlay_box_is_centered() {
        let g = Geometry::new(21, 290, true);
        assert_eq!(g.canvas_center(), Point::new(145.0, 145.0));
        assert_eq!(g.overlay_box(), BoundingBox::new(105.0, 105.0, 80.0, 80.0));
    }
}
