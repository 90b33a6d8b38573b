//! Rasterization of finished SVG markup

use resvg::{tiny_skia, usvg};

use crate::error::QrError;

/// Converts SVG markup to encoded image bytes
pub trait Rasterizer {
    fn rasterize(&self, svg: &str) -> Result<Vec<u8>, QrError>;
}

/// PNG rasterizer backed by `resvg`
#[derive(Debug, Clone, Copy)]
pub struct ResvgRasterizer {
    /// Load system fonts so brand text renders
    pub system_fonts: bool,
}

impl Default for ResvgRasterizer {
    fn default() -> Self {
        Self { system_fonts: true }
    }
}

impl ResvgRasterizer {
    fn options(&self) -> usvg::Options<'static> {
        let mut options = usvg::Options::default();
        if self.system_fonts {
            options.fontdb_mut().load_system_fonts();
        }
        options
    }
}

impl Rasterizer for ResvgRasterizer {
    fn rasterize(&self, svg: &str) -> Result<Vec<u8>, QrError> {
        let tree = usvg::Tree::from_str(svg, &self.options()).map_err(QrError::render)?;
        check_overlay_survived(svg, &tree)?;

        let size = tree.size().to_int_size();
        tracing::debug!(
            width = size.width(),
            height = size.height(),
            "rasterizing QR markup"
        );

        let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height()).ok_or_else(|| {
            QrError::render(format!(
                "cannot allocate {}x{} pixmap",
                size.width(),
                size.height()
            ))
        })?;
        resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

        pixmap.encode_png().map_err(QrError::render)
    }
}

/// Drawable overlay nodes found in a parsed tree
#[derive(Debug, Default)]
struct OverlayNodes {
    image: bool,
    text: bool,
}

impl OverlayNodes {
    fn collect(group: &usvg::Group, found: &mut Self) {
        for node in group.children() {
            match node {
                usvg::Node::Group(group) => Self::collect(group, found),
                usvg::Node::Image(_) => found.image = true,
                usvg::Node::Text(text) => {
                    if !text.flattened().children().is_empty() {
                        found.text = true;
                    }
                }
                usvg::Node::Path(_) => {}
            }
        }
    }
}

/// `usvg` drops images it cannot decode and text it has no font for.
/// Either loss would leave a blank cutout, so it fails the render instead.
fn check_overlay_survived(svg: &str, tree: &usvg::Tree) -> Result<(), QrError> {
    let mut found = OverlayNodes::default();
    OverlayNodes::collect(tree.root(), &mut found);

    if svg.contains("<image") && !found.image {
        tracing::warn!("logo image dropped during rasterization");
        return Err(QrError::render("logo could not be decoded"));
    }
    if svg.contains("<text") && !found.text {
        tracing::warn!("brand text dropped during rasterization");
        return Err(QrError::render("no font available for brand text"));
    }
    Ok(())
}
