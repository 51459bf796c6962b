//! Rendering pipeline: layout -> display list -> canvas -> PNG

pub mod layout;
pub mod paint;
pub mod raster;

use image::RgbaImage;
use log::{debug, warn};

use crate::{Error, Result};
use layout::BookLayout;

/// One rendered icon, kept both as pixels and as encoded PNG bytes.
#[derive(Debug, Clone)]
pub struct RenderedIcon {
    pub size: u32,
    pub canvas: RgbaImage,
    pub png_data: Vec<u8>,
}

impl RenderedIcon {
    /// Hex SHA-256 of the raw canvas pixels
    pub fn digest(&self) -> String {
        raster::pixel_digest(&self.canvas)
    }
}

/// Draw the book glyph at `size` and encode it, without touching disk.
pub fn render_book(size: u32) -> Result<RenderedIcon> {
    if size == 0 {
        return Err(Error::InvalidSize(size));
    }
    if size < 8 {
        warn!("icon size {} has a zero margin; geometry may overlap", size);
    }

    let layout = BookLayout::new(size);
    debug!("layout for {}px: {:?}", size, layout);

    let canvas = raster::rasterize(size, &paint::paint_book(&layout));
    let png_data = raster::encode_png(&canvas)?;
    let icon = RenderedIcon { size, canvas, png_data };
    debug!("rendered {}px icon, digest {}", size, icon.digest());
    Ok(icon)
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::paint::{COVER_BLUE, SPINE_BLUE, TRANSPARENT, WHITE};

    #[test]
    fn zero_size_is_rejected() {
        assert!(matches!(render_book(0), Err(Error::InvalidSize(0))));
    }

    #[test]
    fn pixels_match_regions() {
        for size in [16, 48, 128] {
            let icon = render_book(size).expect("render");
            let layout = BookLayout::new(size);
            for (px, py, p) in icon.canvas.enumerate_pixels() {
                if layout.spine.contains(px, py) {
                    assert_eq!(*p, SPINE_BLUE, "spine pixel ({}, {}) at {}", px, py, size);
                } else if layout.page_edge.contains(px, py)
                    || layout.title_bars.iter().any(|r| r.contains(px, py))
                {
                    assert_eq!(*p, WHITE, "accent pixel ({}, {}) at {}", px, py, size);
                } else if layout.is_bare_cover(px, py) {
                    assert_eq!(*p, COVER_BLUE, "cover pixel ({}, {}) at {}", px, py, size);
                } else {
                    assert_eq!(*p, TRANSPARENT, "background pixel ({}, {}) at {}", px, py, size);
                }
            }
        }
    }

    #[test]
    fn rendering_is_deterministic() {
        let a = render_book(48).expect("render");
        let b = render_book(48).expect("render");
        assert_eq!(a.png_data, b.png_data);
        assert_eq!(a.digest(), b.digest());
    }

    #[test]
    fn tiny_sizes_still_render() {
        for size in 1..8 {
            let icon = render_book(size).expect("render");
            assert_eq!(icon.canvas.dimensions(), (size, size));
        }
    }
}
